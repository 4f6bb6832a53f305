//! Scrape Engine Module
//!
//! Drives one run from the resolved source to the written document.

pub mod execution;
pub mod progress;
pub mod state;

pub use execution::{run, run_http, scrape_document};
pub use progress::{LogProgress, NoOpProgress, ProgressReporter};
pub use state::{ScrapeReport, ScrapeState};
