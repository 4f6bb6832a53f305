//! Bounded retry for transient fetch failures

use std::time::Duration;

use url::Url;

use super::PageFetcher;
use crate::errors::ScrapeResult;
use crate::utils::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_BACKOFF_MS};

/// Upper bound for a single backoff sleep
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// How often and how patiently a page is re-requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per page, first attempt included. Zero behaves like one.
    pub max_attempts: u32,
    /// Sleep after the first failed attempt; doubled after each further one
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
        }
    }
}

impl RetryPolicy {
    /// Sleep before attempt `failed_attempt + 1`
    #[must_use]
    pub fn backoff_after(&self, failed_attempt: u32) -> Duration {
        let exponent = failed_attempt.saturating_sub(1).min(16);
        self.initial_backoff
            .saturating_mul(1 << exponent)
            .min(MAX_BACKOFF)
    }
}

/// Fetch `url`, retrying transient failures according to `policy`.
///
/// Permanent failures (4xx other than 429) are returned immediately. When the
/// attempts run out the last error is returned.
pub async fn fetch_with_retry<F: PageFetcher>(
    fetcher: &F,
    url: &Url,
    policy: &RetryPolicy,
) -> ScrapeResult<String> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match fetcher.fetch(url).await {
            Ok(body) => return Ok(body),
            Err(e) if e.is_transient() && attempt < max_attempts => {
                let backoff = policy.backoff_after(attempt);
                log::warn!(
                    "Fetch of {url} failed (attempt {attempt}/{max_attempts}): {e}; retrying in {:.1}s",
                    backoff.as_secs_f64()
                );
                tokio::time::sleep(backoff).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScrapeError;
    use std::sync::Mutex;

    /// Answers with the queued results in order
    struct ScriptedFetcher {
        script: Mutex<Vec<ScrapeResult<String>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedFetcher {
        fn new(mut script: Vec<ScrapeResult<String>>) -> Self {
            script.reverse();
            Self {
                script: Mutex::new(script),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    impl PageFetcher for ScriptedFetcher {
        async fn fetch(&self, _url: &Url) -> ScrapeResult<String> {
            *self.calls.lock().unwrap() += 1;
            self.script
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    fn failure(status: Option<u16>) -> ScrapeResult<String> {
        Err(ScrapeError::Fetch {
            url: "http://test/".into(),
            status,
            message: "scripted".into(),
        })
    }

    fn quick_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            initial_backoff: Duration::from_millis(1),
        }
    }

    fn url() -> Url {
        Url::parse("http://test/index.html").unwrap()
    }

    #[tokio::test]
    async fn transient_failure_is_retried_until_success() {
        let fetcher = ScriptedFetcher::new(vec![failure(None), failure(Some(503)), Ok("ok".into())]);
        let body = fetch_with_retry(&fetcher, &url(), &quick_policy(3)).await.unwrap();
        assert_eq!(body, "ok");
        assert_eq!(fetcher.calls(), 3);
    }

    #[tokio::test]
    async fn attempts_are_bounded() {
        let fetcher = ScriptedFetcher::new(vec![failure(None), failure(None), failure(None), Ok("late".into())]);
        let err = fetch_with_retry(&fetcher, &url(), &quick_policy(2)).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch { status: None, .. }));
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn permanent_failure_is_not_retried() {
        let fetcher = ScriptedFetcher::new(vec![failure(Some(404)), Ok("never".into())]);
        let err = fetch_with_retry(&fetcher, &url(), &quick_policy(3)).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch { status: Some(404), .. }));
        assert_eq!(fetcher.calls(), 1);
    }

    #[test]
    fn backoff_doubles_and_is_capped() {
        let policy = RetryPolicy {
            max_attempts: 10,
            initial_backoff: Duration::from_millis(500),
        };
        assert_eq!(policy.backoff_after(1), Duration::from_millis(500));
        assert_eq!(policy.backoff_after(2), Duration::from_millis(1000));
        assert_eq!(policy.backoff_after(3), Duration::from_millis(2000));
        assert_eq!(policy.backoff_after(12), MAX_BACKOFF);
    }
}
