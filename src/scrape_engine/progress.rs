//! Progress reporting abstraction for scrape runs
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting and
//! provides a no-op implementation plus one that logs each step.

use crate::document::SkippedClass;
use crate::extractor::JavadocFormat;

/// Trait for reporting scrape progress at key lifecycle events
pub trait ProgressReporter: Send + Sync {
    /// The index page was loaded and classified
    fn report_index_loaded(&self, url: &str, format: JavadocFormat, packages: usize);

    /// Class pages of a package are about to be fetched
    fn report_package_started(&self, package: &str, classes: usize);

    /// A class page was extracted
    fn report_class_extracted(&self, package: &str, class: &str);

    /// A class page was skipped
    fn report_class_skipped(&self, skipped: &SkippedClass);

    /// The document was written
    fn report_completed(&self, classes: usize, skipped: usize);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_index_loaded(&self, _url: &str, _format: JavadocFormat, _packages: usize) {}

    #[inline(always)]
    fn report_package_started(&self, _package: &str, _classes: usize) {}

    #[inline(always)]
    fn report_class_extracted(&self, _package: &str, _class: &str) {}

    #[inline(always)]
    fn report_class_skipped(&self, _skipped: &SkippedClass) {}

    #[inline(always)]
    fn report_completed(&self, _classes: usize, _skipped: usize) {}
}

/// Progress reporter backed by the `log` facade
#[derive(Debug, Clone, Copy)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report_index_loaded(&self, url: &str, format: JavadocFormat, packages: usize) {
        log::info!("Index {url}: {format} layout, {packages} packages");
    }

    fn report_package_started(&self, package: &str, classes: usize) {
        log::info!("Package {package}: {classes} classes");
    }

    fn report_class_extracted(&self, package: &str, class: &str) {
        log::debug!("Extracted {package}.{class}");
    }

    fn report_class_skipped(&self, skipped: &SkippedClass) {
        log::warn!(
            "Skipping {}.{} ({}): {}",
            skipped.package,
            skipped.class,
            skipped.url,
            skipped.reason
        );
    }

    fn report_completed(&self, classes: usize, skipped: usize) {
        log::info!("Extracted {classes} classes, skipped {skipped}");
    }
}
