//! Error types for scrape operations
//!
//! Every stage of the pipeline reports failures through [`ScrapeError`].
//! Whether an error aborts the run depends on where it happens: a failed
//! class page is recorded and skipped, everything else is fatal.

use thiserror::Error;

/// Result type alias for scrape operations
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Error types for scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The command-line source is neither a URL nor a known shorthand
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Network, TLS, or HTTP status failure
    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        url: String,
        /// HTTP status when the server answered, `None` for transport failures
        status: Option<u16>,
        message: String,
    },

    /// The index page matches none of the known Javadoc layouts
    #[error("Unsupported Javadoc format: {0}")]
    UnsupportedFormat(String),

    /// A class page is missing required structure
    #[error("Failed to parse class page for {class}: {reason}")]
    ClassParse { class: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn class_parse(class: &str, reason: impl Into<String>) -> Self {
        Self::ClassParse {
            class: class.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if error is transient and the request should be retried
    ///
    /// Transport failures, rate limiting and server errors are retried.
    /// Client errors such as 404 are permanent.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Fetch { status: None, .. } => true,
            Self::Fetch {
                status: Some(code), ..
            } => *code == 429 || (500..600).contains(code),
            _ => false,
        }
    }
}

impl From<tempfile::PersistError> for ScrapeError {
    fn from(error: tempfile::PersistError) -> Self {
        Self::Io(error.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_error(status: Option<u16>) -> ScrapeError {
        ScrapeError::Fetch {
            url: "https://example.com/".to_string(),
            status,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn transport_and_server_errors_are_transient() {
        assert!(fetch_error(None).is_transient());
        assert!(fetch_error(Some(503)).is_transient());
        assert!(fetch_error(Some(429)).is_transient());
    }

    #[test]
    fn client_errors_are_permanent() {
        assert!(!fetch_error(Some(404)).is_transient());
        assert!(!fetch_error(Some(403)).is_transient());
        assert!(!ScrapeError::UnsupportedFormat("x".into()).is_transient());
    }
}
