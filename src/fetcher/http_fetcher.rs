//! reqwest-backed page fetcher
//!
//! TLS goes through rustls with the bundled web PKI root set, so certificate
//! validation does not depend on the host's trust store.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use url::Url;

use super::PageFetcher;
use crate::config::ScrapeConfig;
use crate::errors::{ScrapeError, ScrapeResult};

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";

/// HTTP(S) fetcher with a fixed per-request timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher with the given request timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Fetch`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration, user_agent: &str) -> ScrapeResult<Self> {
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScrapeError::Fetch {
                url: String::new(),
                status: None,
                message: format!("failed to build HTTP client: {}", describe(&e)),
            })?;

        Ok(Self { client, timeout })
    }

    /// Build a fetcher from the run configuration
    pub fn from_config(config: &ScrapeConfig) -> ScrapeResult<Self> {
        Self::new(config.request_timeout(), config.user_agent())
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> ScrapeResult<String> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, HTML_ACCEPT)
            .send()
            .await
            .map_err(|e| self.transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Fetch {
                url: url.to_string(),
                status: Some(status.as_u16()),
                message: format!("server answered with status {status}"),
            });
        }

        response
            .text()
            .await
            .map_err(|e| self.transport_error(url, &e))
    }
}

impl HttpFetcher {
    fn transport_error(&self, url: &Url, error: &reqwest::Error) -> ScrapeError {
        let message = if error.is_timeout() {
            format!("request timed out after {:?}", self.timeout)
        } else {
            describe(error)
        };

        ScrapeError::Fetch {
            url: url.to_string(),
            status: error.status().map(|s| s.as_u16()),
            message,
        }
    }
}

/// Flatten an error and its sources into one line.
///
/// reqwest hides the interesting part (DNS, refused connection, certificate
/// problem) in the source chain.
fn describe(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
