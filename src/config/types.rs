//! Core configuration types for Javadoc scraping
//!
//! This module contains the main `ScrapeConfig` struct that defines the
//! parameters of a single scrape run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::ResolvedTarget;

/// Main configuration struct for a scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Resolved source: base URL, index page and output filename.
    ///
    /// **INVARIANT:** Resolved once in the builder; an invalid source never
    /// produces a config.
    pub(crate) target: ResolvedTarget,

    /// Directory the Markdown file is written to
    ///
    /// Default: the invocation directory (`.`)
    pub(crate) output_dir: PathBuf,

    /// Title line of the generated document
    pub(crate) title: String,

    /// Timeout in seconds for each HTTP request
    ///
    /// A request exceeding this ceiling fails as a transient fetch error.
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout_secs: u64,

    /// Maximum attempts per page, first attempt included
    ///
    /// Only transient failures (transport errors, 429, 5xx) are retried.
    ///
    /// Default: 3
    pub(crate) max_attempts: u32,

    /// Delay before the second attempt, doubled for each further attempt
    ///
    /// Default: 500 ms
    pub(crate) retry_backoff_ms: u64,

    pub(crate) user_agent: String,

    /// Also write the extracted document tree as JSON next to the Markdown
    pub(crate) save_json: bool,
}
