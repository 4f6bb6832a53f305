//! Page fetching for Javadoc trees.
//!
//! The pipeline only depends on the [`PageFetcher`] trait: given a URL it
//! returns the page HTML or a [`ScrapeError::Fetch`](crate::ScrapeError::Fetch).
//! [`HttpFetcher`] is the reqwest-backed implementation used by the binary,
//! and [`fetch_with_retry`] adds the bounded retry policy on top of any
//! fetcher.

pub mod http_fetcher;
pub mod retry;

use std::future::Future;

use url::Url;

use crate::errors::ScrapeResult;

pub use http_fetcher::HttpFetcher;
pub use retry::{RetryPolicy, fetch_with_retry};

/// Retrieves raw HTML for a page
pub trait PageFetcher {
    /// Fetch `url` and return its body as text.
    fn fetch(&self, url: &Url) -> impl Future<Output = ScrapeResult<String>> + Send;
}
