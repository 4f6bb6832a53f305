//! Package and class link collection shared by both layouts.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use url::Url;

use super::text::plain_text;
use crate::document::ClassKind;

const PACKAGE_SUMMARY_PAGE: &str = "package-summary.html";

/// Pages linked from summary tables that are not class pages
const NON_CLASS_PAGES: &[&str] = &[
    "package-summary.html",
    "package-tree.html",
    "package-use.html",
    "overview-summary.html",
    "index.html",
];

static ANY_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("BUG: hardcoded CSS selector for links is invalid")
});

/// A package found on the index page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageLink {
    pub name: String,
    pub url: Url,
}

/// A class found on a package page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassLink {
    pub name: String,
    /// Name of the package page the link was found on
    pub package: String,
    pub url: Url,
    /// Kind stated by the link's `title` attribute
    pub kind_hint: Option<ClassKind>,
}

/// Resolve `href` against the page URL, dropping the fragment
pub(crate) fn resolve_href(page_url: &Url, href: &str) -> Option<Url> {
    let mut url = page_url.join(href.trim()).ok()?;
    url.set_fragment(None);
    Some(url)
}

/// Package name from an href such as `../de/elo/ix/client/package-summary.html`
#[must_use]
pub fn package_name_from_href(href: &str) -> Option<String> {
    let path = href.split(['#', '?']).next()?;
    let dir = path.strip_suffix(PACKAGE_SUMMARY_PAGE)?;
    let name = dir
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != "." && *seg != "..")
        .collect::<Vec<_>>()
        .join(".");
    (!name.is_empty()).then_some(name)
}

fn is_package_href(href: &str) -> bool {
    href.split(['#', '?'])
        .next()
        .is_some_and(|path| path.ends_with(PACKAGE_SUMMARY_PAGE))
}

fn is_class_href(href: &str) -> bool {
    let Some(path) = href.split(['#', '?']).next() else {
        return false;
    };
    let file = path.rsplit('/').next().unwrap_or(path);
    let lowered = path.to_ascii_lowercase();
    lowered.ends_with(".html")
        && !lowered.starts_with("http:")
        && !lowered.starts_with("https:")
        && !path.contains("class-use/")
        && !path.contains("doc-files/")
        && !NON_CLASS_PAGES.contains(&file)
}

/// Package links matched by `selector`, falling back to every
/// `package-summary.html` anchor on the page when the selector finds none.
///
/// Links keep document order and are deduplicated by resolved URL.
pub(crate) fn collect_package_links(
    document: &Html,
    selector: &Selector,
    page_url: &Url,
) -> Vec<PackageLink> {
    let primary = package_links_from(document.select(selector), page_url);
    if !primary.is_empty() {
        return primary;
    }
    package_links_from(document.select(&ANY_LINK), page_url)
}

fn package_links_from<'a>(
    anchors: impl Iterator<Item = ElementRef<'a>>,
    page_url: &Url,
) -> Vec<PackageLink> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in anchors {
        let Some(href) = anchor.attr("href") else {
            continue;
        };
        if !is_package_href(href) {
            continue;
        }
        let Some(url) = resolve_href(page_url, href) else {
            continue;
        };
        if !seen.insert(url.clone()) {
            continue;
        }

        let text = plain_text(anchor);
        let name = if text.is_empty() || text.contains(' ') {
            package_name_from_href(href).unwrap_or(text)
        } else {
            text
        };
        if !name.is_empty() {
            links.push(PackageLink { name, url });
        }
    }
    links
}

/// Class links matched by `selector` on the page of `package`
///
/// When the selector finds nothing, anchors whose `title` names a type
/// kind (`"class in com.example"`) are used instead.
pub(crate) fn collect_class_links(
    document: &Html,
    selector: &Selector,
    package: &PackageLink,
) -> Vec<ClassLink> {
    let primary = class_links_from(document.select(selector), package, false);
    if !primary.is_empty() {
        return primary;
    }
    class_links_from(document.select(&ANY_LINK), package, true)
}

fn class_links_from<'a>(
    anchors: impl Iterator<Item = ElementRef<'a>>,
    package: &PackageLink,
    require_kind_title: bool,
) -> Vec<ClassLink> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in anchors {
        let Some(href) = anchor.attr("href") else {
            continue;
        };
        if !is_class_href(href) {
            continue;
        }
        let kind_hint = anchor.attr("title").and_then(ClassKind::from_link_title);
        if require_kind_title && kind_hint.is_none() {
            continue;
        }
        let Some(url) = resolve_href(&package.url, href) else {
            continue;
        };
        if !seen.insert(url.clone()) {
            continue;
        }

        let name = plain_text(anchor);
        if name.is_empty() {
            continue;
        }
        links.push(ClassLink {
            name,
            package: package.name.clone(),
            url,
            kind_hint,
        });
    }
    links
}
