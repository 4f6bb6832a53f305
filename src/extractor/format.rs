//! Javadoc layout detection.

use std::sync::LazyLock;

use log::debug;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

use super::layouts::{JavadocLayout, LegacyLayout, ModernLayout};
use crate::errors::{ScrapeError, ScrapeResult};

/// Markers emitted by the HTML5 doclet of JDK 16 and later
static MODERN_MARKERS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.table-tabs, div.summary-table, div#all-packages-table")
        .expect("BUG: hardcoded CSS selector for modern markers is invalid")
});

/// Markers emitted by the table-based doclets of JDK 7 through 15
static LEGACY_MARKERS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "table.summary-table, table.overviewSummary, table.overview-summary, \
         div.overviewSummary, table.typeSummary, table.packageSummary, div.contentContainer",
    )
    .expect("BUG: hardcoded CSS selector for legacy markers is invalid")
});

static FRAME: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("frame[src]").expect("BUG: hardcoded CSS selector for frames is invalid")
});

/// Page layout family of a Javadoc tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JavadocFormat {
    Modern,
    Legacy,
}

static MODERN: ModernLayout = ModernLayout;
static LEGACY: LegacyLayout = LegacyLayout;

impl JavadocFormat {
    /// Extraction strategy for this layout
    #[must_use]
    pub fn layout(self) -> &'static dyn JavadocLayout {
        match self {
            Self::Modern => &MODERN,
            Self::Legacy => &LEGACY,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        }
    }
}

impl std::fmt::Display for JavadocFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify an index page.
///
/// Modern markers are checked first: some JDK 16+ pages also carry a
/// table styled `summary-table`.
///
/// # Errors
///
/// Returns [`ScrapeError::UnsupportedFormat`] when neither marker set is
/// present.
pub fn detect_format(document: &Html) -> ScrapeResult<JavadocFormat> {
    let format = if document.select(&MODERN_MARKERS).next().is_some() {
        JavadocFormat::Modern
    } else if document.select(&LEGACY_MARKERS).next().is_some() {
        JavadocFormat::Legacy
    } else {
        return Err(ScrapeError::UnsupportedFormat(
            "index page carries neither modern nor legacy Javadoc markers".to_string(),
        ));
    };

    debug!("Detected {format} Javadoc layout");
    Ok(format)
}

/// Content frame of a frameset index page, if the page is one
///
/// Prefers `overview-summary.html`, then the frame named `classFrame`,
/// then the last frame.
#[must_use]
pub fn frame_target(document: &Html, page_url: &Url) -> Option<Url> {
    let frames: Vec<_> = document.select(&FRAME).collect();
    let chosen = frames
        .iter()
        .find(|f| f.attr("src").is_some_and(|s| s.contains("overview-summary")))
        .or_else(|| frames.iter().find(|f| f.attr("name") == Some("classFrame")))
        .or_else(|| frames.last())?;

    chosen.attr("src").and_then(|src| page_url.join(src).ok())
}
