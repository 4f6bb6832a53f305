//! Shared configuration constants for the Javadoc scraper
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Root of the vendor's hosted Javadoc trees
///
/// Shorthand sources (`ix/23`) are resolved relative to this URL.
pub const VENDOR_JAVADOC_BASE_URL: &str = "https://forum.elo.com/javadoc/";

/// API module codes accepted in `<module>/<version>` shorthand
///
/// - `ix`: Indexserver API
/// - `jc`: Java Client API
/// - `as`: Automation Services API
pub const KNOWN_MODULES: &[&str] = &["ix", "jc", "as"];

/// Title line written at the top of every generated document
pub const DEFAULT_DOCUMENT_TITLE: &str = "ELO Javadoc Documentation";

/// Per-request timeout: 30 seconds
///
/// A fetch that has not completed within this window is treated as a
/// transient fetch failure and retried.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum attempts per page, first attempt included
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Initial delay between attempts, doubled after each failure
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;

/// Prefix of generated output files (`javadoc.<module>.<version>.md`)
pub const OUTPUT_FILE_PREFIX: &str = "javadoc";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("kodegen-javadoc/", env!("CARGO_PKG_VERSION"));
