//! Source resolution for the command-line input.
//!
//! The scraper accepts either a full Javadoc URL or the `<module>/<version>`
//! shorthand for the vendor's hosted documentation. Both forms resolve to a
//! [`ResolvedTarget`] carrying the canonical base URL, the index page to
//! start navigation from, and the output filename.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use super::constants::{KNOWN_MODULES, OUTPUT_FILE_PREFIX, VENDOR_JAVADOC_BASE_URL};
use crate::errors::{ScrapeError, ScrapeResult};

static SHORTHAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<module>[A-Za-z]+)/(?P<version>\d+(?:\.\d+)*)/?$")
        .expect("BUG: hardcoded shorthand regex is invalid")
});

/// A normalized scrape source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTarget {
    /// Directory URL all relative Javadoc links resolve against (ends in `/`)
    pub base_url: Url,
    /// Page that lists the packages
    pub index_url: Url,
    /// API module code when the source names one of the vendor modules
    pub module: Option<String>,
    /// Documentation version when the source names one
    pub version: Option<String>,
    /// Output filename, `javadoc.<module>.<version>.md` for vendor sources
    pub output_file: String,
}

/// Resolve a full URL or `<module>/<version>` shorthand.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidInput`] when the input is neither an
/// `http(s)` URL with a host nor a shorthand naming a known module.
///
/// # Examples
/// ```
/// # use kodegen_tools_javadoc::utils::resolve_target;
/// let target = resolve_target("ix/23").unwrap();
/// assert_eq!(target.base_url.as_str(), "https://forum.elo.com/javadoc/ix/23/");
/// assert_eq!(target.output_file, "javadoc.ix.23.md");
/// ```
pub fn resolve_target(input: &str) -> ScrapeResult<ResolvedTarget> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScrapeError::invalid_input(input, "source is empty"));
    }

    let lowered = input.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        return resolve_url(input);
    }

    if let Some(caps) = SHORTHAND_PATTERN.captures(input) {
        let module = caps["module"].to_ascii_lowercase();
        let version = caps["version"].to_string();
        if !KNOWN_MODULES.contains(&module.as_str()) {
            return Err(ScrapeError::invalid_input(
                input,
                format!(
                    "unknown module '{module}', expected one of {}",
                    KNOWN_MODULES.join(", ")
                ),
            ));
        }
        return resolve_shorthand(input, module, version);
    }

    Err(ScrapeError::invalid_input(
        input,
        "expected a Javadoc URL or <module>/<version> (e.g. ix/23)",
    ))
}

fn resolve_shorthand(input: &str, module: String, version: String) -> ScrapeResult<ResolvedTarget> {
    let base_url = Url::parse(VENDOR_JAVADOC_BASE_URL)
        .and_then(|root| root.join(&format!("{module}/{version}/")))
        .map_err(|e| ScrapeError::invalid_input(input, format!("cannot build vendor URL: {e}")))?;

    Ok(ResolvedTarget {
        index_url: base_url.clone(),
        output_file: output_file_name(&[module.as_str(), version.as_str()], "javadoc"),
        base_url,
        module: Some(module),
        version: Some(version),
    })
}

fn resolve_url(input: &str) -> ScrapeResult<ResolvedTarget> {
    let mut url = Url::parse(input)
        .map_err(|e| ScrapeError::invalid_input(input, format!("malformed URL: {e}")))?;
    let host = url
        .host_str()
        .ok_or_else(|| ScrapeError::invalid_input(input, "URL has no host"))?
        .to_string();
    url.set_query(None);
    url.set_fragment(None);

    let mut segments: Vec<String> = url
        .path_segments()
        .map(|parts| parts.filter(|p| !p.is_empty()).map(str::to_string).collect())
        .unwrap_or_default();

    let index_file = match segments.last() {
        Some(last) if is_html_file(last) => segments.pop(),
        _ => None,
    };

    let mut base_url = url.clone();
    if segments.is_empty() {
        base_url.set_path("/");
    } else {
        base_url.set_path(&format!("/{}/", segments.join("/")));
    }

    let index_url = match &index_file {
        Some(file) => base_url
            .join(file)
            .map_err(|e| ScrapeError::invalid_input(input, format!("bad index page: {e}")))?,
        None => base_url.clone(),
    };

    // Segments below a `javadoc` directory name the module and version.
    let naming: Vec<&str> = match segments.iter().position(|s| s.eq_ignore_ascii_case("javadoc")) {
        Some(pos) => segments[pos + 1..].iter().map(String::as_str).collect(),
        None => segments.iter().map(String::as_str).collect(),
    };

    let (module, version) = match naming.as_slice() {
        [module, version] if KNOWN_MODULES.contains(&module.to_ascii_lowercase().as_str()) => {
            (Some(module.to_ascii_lowercase()), Some((*version).to_string()))
        }
        _ => (None, None),
    };

    Ok(ResolvedTarget {
        base_url,
        index_url,
        module,
        version,
        output_file: output_file_name(&naming, &host),
    })
}

fn is_html_file(segment: &str) -> bool {
    let lowered = segment.to_ascii_lowercase();
    lowered.ends_with(".html") || lowered.ends_with(".htm")
}

/// Build `javadoc.<part>.<part>.md`, falling back to `fallback` when no
/// usable part remains after sanitizing.
fn output_file_name(parts: &[&str], fallback: &str) -> String {
    let mut cleaned: Vec<String> = parts
        .iter()
        .map(|part| sanitize_filename::sanitize(part))
        .filter(|part| !part.is_empty())
        .collect();

    if cleaned.is_empty() {
        cleaned.push(sanitize_filename::sanitize(fallback));
    }

    format!("{OUTPUT_FILE_PREFIX}.{}.md", cleaned.join("."))
}
