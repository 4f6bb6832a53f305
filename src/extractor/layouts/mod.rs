//! Layout-specific extraction strategies
//!
//! Each Javadoc generation arranges navigation tables and class pages
//! differently. A [`JavadocLayout`] hides those differences behind three
//! operations; the engine picks one per run from the detected format.

pub mod legacy;
pub mod modern;

use scraper::{ElementRef, Html};
use url::Url;

pub use legacy::LegacyLayout;
pub use modern::ModernLayout;

use super::format::JavadocFormat;
use super::navigation::{ClassLink, PackageLink};
use super::text::plain_text;
use crate::document::{ClassDoc, ClassKind};
use crate::errors::{ScrapeError, ScrapeResult};

pub trait JavadocLayout: Sync {
    fn format(&self) -> JavadocFormat;

    /// Packages listed on the index page, in page order
    fn package_links(&self, index: &Html, index_url: &Url) -> Vec<PackageLink>;

    /// Classes listed on a package page, in page order
    fn class_links(&self, page: &Html, package: &PackageLink) -> Vec<ClassLink>;

    /// Extract one class page.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::ClassParse`] when the page has no class
    /// header. Missing member sections are not an error.
    fn extract_class_page(&self, page: &Html, link: &ClassLink) -> ScrapeResult<ClassDoc>;
}

/// Start a [`ClassDoc`] from the page title and the link that led to it
///
/// The title decides kind and name when it has a recognized prefix;
/// otherwise the link's kind hint applies and the title is the name.
pub(crate) fn class_from_header(
    header: Option<ElementRef<'_>>,
    package: Option<String>,
    link: &ClassLink,
) -> ScrapeResult<ClassDoc> {
    let title = header
        .map(plain_text)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ScrapeError::class_parse(&link.name, "class page has no title header"))?;

    let (kind, name) = ClassKind::parse_title(&title)
        .unwrap_or_else(|| (link.kind_hint.unwrap_or(ClassKind::Class), title.clone()));

    let package = package
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| link.package.clone());

    let mut class = ClassDoc::new(name, kind, package);
    class.source_url = link.url.to_string();
    Ok(class)
}

/// `"Package com.example"` → `"com.example"`
pub(crate) fn strip_package_label(text: &str) -> String {
    text.trim()
        .strip_prefix("Package")
        .unwrap_or(text)
        .trim()
        .to_string()
}

/// Text of an inheritance node without its nested descendants
///
/// Both layouts nest each subtype inside its parent's element; only the
/// node's own link or text names the type at that level.
pub(crate) fn own_label(node: ElementRef<'_>) -> Option<String> {
    let mut label = String::new();
    for child in node.children() {
        if let Some(text) = child.value().as_text() {
            label.push_str(text);
            continue;
        }
        let Some(el) = ElementRef::wrap(child) else {
            continue;
        };
        match el.value().name() {
            "div" | "ul" | "li" => break,
            _ => label.push_str(&plain_text(el)),
        }
    }
    let label = crate::utils::normalize_whitespace(&label);
    (!label.is_empty()).then_some(label)
}
