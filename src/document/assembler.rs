//! Builds the final [`Document`] and its table of contents.

use log::debug;

use super::anchors::AnchorRegistry;
use super::model::{Document, Package, SkippedClass, TableOfContents, TocEntry};

/// Heading text of a package section
#[must_use]
pub fn package_heading(package: &Package) -> String {
    format!("Package {}", package.name)
}

/// Combine extracted packages into a document.
///
/// Package and class order is kept exactly as given. Anchors are claimed
/// per package first, then for each of its classes, so the same input
/// always yields the same anchors. A class anchor is derived from its
/// qualified name, which keeps equally named classes in different
/// packages apart before any suffix is needed.
#[must_use]
pub fn assemble(
    title: impl Into<String>,
    source_url: Option<String>,
    packages: Vec<Package>,
    skipped: Vec<SkippedClass>,
) -> Document {
    let mut anchors = AnchorRegistry::new();

    let entries = packages
        .iter()
        .map(|package| {
            let anchor = anchors.claim(&package_heading(package));
            let children = package
                .classes
                .iter()
                .map(|class| TocEntry {
                    text: class.name.clone(),
                    anchor: anchors.claim(&format!("{}-{}", package.name, class.name)),
                    children: Vec::new(),
                })
                .collect();

            TocEntry {
                text: package.name.clone(),
                anchor,
                children,
            }
        })
        .collect();

    let document = Document {
        title: title.into(),
        source_url,
        packages,
        toc: TableOfContents { entries },
        skipped,
    };

    debug!(
        "Assembled document: {} packages, {} classes, {} skipped",
        document.packages.len(),
        document.class_count(),
        document.skipped.len()
    );
    document
}
