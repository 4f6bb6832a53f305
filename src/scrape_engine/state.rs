use std::path::PathBuf;

use serde::Serialize;

use crate::document::{Document, Package, SkippedClass, assemble};
use crate::extractor::JavadocFormat;

/// Accumulated results of one run
///
/// Packages are appended in navigation order once all their classes have
/// been attempted. Packages left without any extracted class are dropped.
#[derive(Debug, Default)]
pub struct ScrapeState {
    packages: Vec<Package>,
    skipped: Vec<SkippedClass>,
}

impl ScrapeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_package(&mut self, package: Package) {
        if package.classes.is_empty() {
            log::debug!("Dropping package {} without extracted classes", package.name);
            return;
        }
        self.packages.push(package);
    }

    pub fn add_skip(&mut self, skipped: SkippedClass) {
        self.skipped.push(skipped);
    }

    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedClass] {
        &self.skipped
    }

    /// Assemble the final document from everything collected
    #[must_use]
    pub fn into_document(self, title: &str, source_url: Option<String>) -> Document {
        assemble(title, source_url, self.packages, self.skipped)
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    pub format: JavadocFormat,
    pub output_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub packages: usize,
    pub classes: usize,
    pub skipped: Vec<SkippedClass>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ClassDoc, ClassKind};

    #[test]
    fn empty_packages_are_dropped() {
        let mut state = ScrapeState::new();
        state.add_package(Package::new("empty"));

        let mut full = Package::new("full");
        full.classes.push(ClassDoc::new("A", ClassKind::Class, "full"));
        state.add_package(full);

        assert_eq!(state.packages().len(), 1);
        assert_eq!(state.packages()[0].name, "full");
    }

    #[test]
    fn skips_reach_the_document() {
        let mut state = ScrapeState::new();
        state.add_skip(SkippedClass {
            package: "p".into(),
            class: "Broken".into(),
            url: "https://example.org/p/Broken.html".into(),
            reason: "no header".into(),
        });
        let doc = state.into_document("T", None);
        assert_eq!(doc.skipped().len(), 1);
        assert_eq!(doc.class_count(), 0);
    }
}
