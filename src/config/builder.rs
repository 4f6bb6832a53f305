//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that the source is set before building a `ScrapeConfig`.

use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::ScrapeConfig;
use crate::errors::{ScrapeError, ScrapeResult};
use crate::utils::{
    DEFAULT_DOCUMENT_TITLE, DEFAULT_MAX_ATTEMPTS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_RETRY_BACKOFF_MS, USER_AGENT, resolve_target,
};

// Type states for the builder
pub struct WithSource;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) source: Option<String>,
    pub(crate) output_dir: PathBuf,
    pub(crate) title: String,
    pub(crate) request_timeout_secs: u64,
    pub(crate) max_attempts: u32,
    pub(crate) retry_backoff_ms: u64,
    pub(crate) user_agent: String,
    pub(crate) save_json: bool,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            source: None,
            output_dir: PathBuf::from("."),
            title: DEFAULT_DOCUMENT_TITLE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
            user_agent: USER_AGENT.to_string(),
            save_json: false,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    /// Set the Javadoc source: a full URL or `<module>/<version>` shorthand
    pub fn source(self, source: impl Into<String>) -> ScrapeConfigBuilder<WithSource> {
        ScrapeConfigBuilder {
            source: Some(source.into()),
            output_dir: self.output_dir,
            title: self.title,
            request_timeout_secs: self.request_timeout_secs,
            max_attempts: self.max_attempts,
            retry_backoff_ms: self.retry_backoff_ms,
            user_agent: self.user_agent,
            save_json: self.save_json,
            _phantom: PhantomData,
        }
    }
}

// Optional settings are available in every state
impl<State> ScrapeConfigBuilder<State> {
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    #[must_use]
    pub fn retry_backoff_ms(mut self, millis: u64) -> Self {
        self.retry_backoff_ms = millis;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    #[must_use]
    pub fn save_json(mut self, enabled: bool) -> Self {
        self.save_json = enabled;
        self
    }
}

// Build method only available when the source is set
impl ScrapeConfigBuilder<WithSource> {
    /// Resolve the source and validate the numeric settings.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidInput`] for an unresolvable source, a
    /// zero timeout or zero attempts.
    pub fn build(self) -> ScrapeResult<ScrapeConfig> {
        let source = self.source.unwrap_or_default();
        let target = resolve_target(&source)?;

        if self.request_timeout_secs == 0 {
            return Err(ScrapeError::invalid_input(
                &source,
                "request timeout must be at least one second",
            ));
        }
        if self.max_attempts == 0 {
            return Err(ScrapeError::invalid_input(
                &source,
                "at least one fetch attempt is required",
            ));
        }

        let title = if self.title.trim().is_empty() {
            DEFAULT_DOCUMENT_TITLE.to_string()
        } else {
            self.title
        };

        Ok(ScrapeConfig {
            target,
            output_dir: self.output_dir,
            title,
            request_timeout_secs: self.request_timeout_secs,
            max_attempts: self.max_attempts,
            retry_backoff_ms: self.retry_backoff_ms,
            user_agent: self.user_agent,
            save_json: self.save_json,
        })
    }
}
