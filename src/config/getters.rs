//! Getter methods for `ScrapeConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `ScrapeConfig` instance.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::ScrapeConfig;
use crate::fetcher::RetryPolicy;
use crate::utils::ResolvedTarget;

impl ScrapeConfig {
    #[must_use]
    pub fn target(&self) -> &ResolvedTarget {
        &self.target
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of the Markdown file this run writes
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.target.output_file)
    }

    /// Path of the JSON dump, the Markdown path with a `.json` extension
    #[must_use]
    pub fn json_output_path(&self) -> PathBuf {
        self.output_path().with_extension("json")
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            initial_backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn save_json(&self) -> bool {
        self.save_json
    }
}
