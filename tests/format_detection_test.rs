//! Layout detection across doclet generations

use kodegen_tools_javadoc::{JavadocFormat, JavadocLayout, ScrapeError, detect_format};
use scraper::Html;

mod common;

use common::{create_test_html, legacy_index, legacy_package, modern_index, plain_page};

#[test]
fn modern_overview_is_modern() {
    let page = Html::parse_document(&modern_index(&["com.example"]));
    assert_eq!(detect_format(&page).unwrap(), JavadocFormat::Modern);
}

#[test]
fn legacy_overview_is_legacy() {
    let page = Html::parse_document(&legacy_index(&["com.example"]));
    assert_eq!(detect_format(&page).unwrap(), JavadocFormat::Legacy);
}

#[test]
fn legacy_package_page_is_legacy() {
    let page = Html::parse_document(&legacy_package("com.example", &[("Foo", "class")]));
    assert_eq!(detect_format(&page).unwrap(), JavadocFormat::Legacy);
}

#[test]
fn jdk11_summary_table_is_legacy() {
    let page = Html::parse_document(&create_test_html(
        "Overview",
        r#"<main role="main"><table class="summary-table"><tr><th class="col-first"><a href="p/package-summary.html">p</a></th></tr></table></main>"#,
    ));
    assert_eq!(detect_format(&page).unwrap(), JavadocFormat::Legacy);
}

#[test]
fn marker_free_page_is_unsupported() {
    let page = Html::parse_document(&plain_page());
    let err = detect_format(&page).unwrap_err();
    assert!(matches!(err, ScrapeError::UnsupportedFormat(_)));
}

#[test]
fn each_format_selects_its_own_layout() {
    for format in [JavadocFormat::Modern, JavadocFormat::Legacy] {
        assert_eq!(format.layout().format(), format);
    }
}
