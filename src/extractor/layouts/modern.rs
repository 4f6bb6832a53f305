//! Pages produced by the HTML5 doclet of JDK 16 and later.
//!
//! Summary tables are CSS grids (`div.summary-table` with `div.col-first`
//! cells) and every member detail sits in its own `section.detail`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{JavadocLayout, class_from_header, own_label, strip_package_label};
use crate::document::{ClassDoc, MemberKind};
use crate::errors::ScrapeResult;
use crate::extractor::format::JavadocFormat;
use crate::extractor::members::{description, extract_field, extract_member};
use crate::extractor::navigation::{
    ClassLink, PackageLink, collect_class_links, collect_package_links,
};
use crate::extractor::text::plain_text;

static PACKAGE_CELLS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "#all-packages-table .col-first a[href], div.summary-table .col-first a[href]",
    )
    .expect("BUG: hardcoded CSS selector for package cells is invalid")
});

static CLASS_CELLS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "#class-summary .col-first a[href], #interface-summary .col-first a[href], \
         #enum-summary .col-first a[href], #exception-summary .col-first a[href], \
         #error-summary .col-first a[href], #annotation-interface-summary .col-first a[href], \
         #record-summary .col-first a[href], div.summary-table .col-first a[href]",
    )
    .expect("BUG: hardcoded CSS selector for class cells is invalid")
});

static TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.header h1.title, div.header h1, main h1.title")
        .expect("BUG: hardcoded CSS selector for class title is invalid")
});

static SUB_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.header div.sub-title")
        .expect("BUG: hardcoded CSS selector for sub-title is invalid")
});

static LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a").expect("BUG: hardcoded CSS selector for anchors is invalid")
});

static INHERITANCE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.inheritance")
        .expect("BUG: hardcoded CSS selector for inheritance is invalid")
});

static CLASS_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("section.class-description, section#class-description")
        .expect("BUG: hardcoded CSS selector for class description is invalid")
});

static FIELD_DETAILS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "section.field-details section.detail, section#field-detail section.detail, \
         section.constant-details section.detail, section#enum-constant-detail section.detail",
    )
    .expect("BUG: hardcoded CSS selector for field details is invalid")
});

static CONSTRUCTOR_DETAILS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "section.constructor-details section.detail, section#constructor-detail section.detail",
    )
    .expect("BUG: hardcoded CSS selector for constructor details is invalid")
});

static METHOD_DETAILS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "section.method-details section.detail, section#method-detail section.detail, \
         section.member-details section.detail",
    )
    .expect("BUG: hardcoded CSS selector for method details is invalid")
});

static DETAIL_HEADING: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h3, h4").expect("BUG: hardcoded CSS selector for detail heading is invalid")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct ModernLayout;

impl ModernLayout {
    fn package_name(page: &Html) -> Option<String> {
        // module-aware pages print a "Module" sub-title too; only the
        // "Package" one names the package
        let chosen = page
            .select(&SUB_TITLE)
            .find(|s| plain_text(*s).starts_with("Package"))?;

        let name = match chosen.select(&LINK).next() {
            Some(link) => plain_text(link),
            None => strip_package_label(&plain_text(chosen)),
        };
        Some(name)
    }

    fn heading(detail: ElementRef<'_>) -> String {
        detail
            .select(&DETAIL_HEADING)
            .next()
            .map(plain_text)
            .unwrap_or_default()
    }
}

impl JavadocLayout for ModernLayout {
    fn format(&self) -> JavadocFormat {
        JavadocFormat::Modern
    }

    fn package_links(&self, index: &Html, index_url: &Url) -> Vec<PackageLink> {
        collect_package_links(index, &PACKAGE_CELLS, index_url)
    }

    fn class_links(&self, page: &Html, package: &PackageLink) -> Vec<ClassLink> {
        collect_class_links(page, &CLASS_CELLS, package)
    }

    fn extract_class_page(&self, page: &Html, link: &ClassLink) -> ScrapeResult<ClassDoc> {
        let mut class = class_from_header(page.select(&TITLE).next(), Self::package_name(page), link)?;

        class.inheritance = page.select(&INHERITANCE).filter_map(own_label).collect();
        class.description = page.select(&CLASS_DESCRIPTION).next().and_then(description);

        class.fields = page
            .select(&FIELD_DETAILS)
            .map(|detail| extract_field(detail, &Self::heading(detail)))
            .collect();
        class.constructors = page
            .select(&CONSTRUCTOR_DETAILS)
            .map(|detail| extract_member(MemberKind::Constructor, detail, &Self::heading(detail)))
            .collect();
        class.methods = page
            .select(&METHOD_DETAILS)
            .map(|detail| extract_member(MemberKind::Method, detail, &Self::heading(detail)))
            .collect();

        Ok(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ClassKind;

    const CLASS_PAGE: &str = r##"<!DOCTYPE html><html><body><main role="main">
      <div class="header">
        <div class="sub-title"><span class="module-label-in-type">Module</span>&nbsp;<a href="#">app</a></div>
        <div class="sub-title"><span class="package-label-in-type">Package</span>&nbsp;<a href="package-summary.html">com.example</a></div>
        <h1 title="Class Foo" class="title">Class Foo&lt;T&gt;</h1>
      </div>
      <div class="inheritance" title="Inheritance Tree"><a href="#">java.lang.Object</a>
        <div class="inheritance">com.example.Foo&lt;T&gt;</div></div>
      <section class="class-description" id="class-description">
        <div class="type-signature">public class Foo&lt;T&gt;</div>
        <div class="block">A <code>Foo</code> holds things.</div>
      </section>
      <section class="details"><ul class="details-list">
        <li><section class="field-details" id="field-detail"><h2>Field Details</h2>
          <ul class="member-list"><li><section class="detail" id="LIMIT"><h3>LIMIT</h3>
            <div class="member-signature"><span class="modifiers">public static final</span>&nbsp;<span class="return-type">int</span>&nbsp;<span class="element-name">LIMIT</span></div>
          </section></li></ul></section></li>
        <li><section class="constructor-details" id="constructor-detail"><h2>Constructor Details</h2>
          <ul class="member-list"><li><section class="detail" id="&lt;init&gt;()"><h3>Foo</h3>
            <div class="member-signature"><span class="modifiers">public</span>&nbsp;<span class="element-name">Foo</span>()</div>
          </section></li></ul></section></li>
        <li><section class="method-details" id="method-detail"><h2>Method Details</h2>
          <ul class="member-list">
            <li><section class="detail" id="size()"><h3>size</h3>
              <div class="member-signature"><span class="modifiers">public</span>&nbsp;<span class="return-type">int</span>&nbsp;<span class="element-name">size</span>()</div>
              <div class="block">Number of things.</div></section></li>
            <li><section class="detail" id="toString()"><h3>toString</h3>
              <div class="member-signature"><span class="modifiers">public</span>&nbsp;<span class="return-type"><a href="#">String</a></span>&nbsp;<span class="element-name">toString</span>()</div>
              <dl class="notes"><dt>Overrides:</dt><dd><code><a href="#">toString</a></code>&nbsp;in class&nbsp;<code><a href="#">Object</a></code></dd></dl>
            </section></li>
          </ul></section></li>
      </ul></section>
    </main></body></html>"##;

    fn link() -> ClassLink {
        ClassLink {
            name: "Foo".into(),
            package: "fallback.pkg".into(),
            url: Url::parse("https://example.org/com/example/Foo.html").unwrap(),
            kind_hint: None,
        }
    }

    #[test]
    fn class_page_is_fully_extracted() {
        let page = Html::parse_document(CLASS_PAGE);
        let class = ModernLayout.extract_class_page(&page, &link()).unwrap();

        assert_eq!(class.name, "Foo");
        assert_eq!(class.kind, ClassKind::Class);
        assert_eq!(class.package, "com.example");
        assert_eq!(class.inheritance, ["java.lang.Object", "com.example.Foo<T>"]);
        assert_eq!(class.description.as_deref(), Some("A `Foo` holds things."));

        assert_eq!(class.fields.len(), 1);
        assert_eq!(class.fields[0].type_name.as_deref(), Some("int"));

        assert_eq!(class.constructors.len(), 1);
        assert_eq!(class.constructors[0].signature, "public Foo()");

        let names: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["size", "toString"]);
        assert_eq!(class.methods[1].return_type.as_deref(), Some("String"));
        let overrides = class.methods[1].overrides.as_ref().unwrap();
        assert_eq!(overrides.owner.as_deref(), Some("Object"));
    }

    #[test]
    fn module_sub_title_is_never_taken_as_package() {
        let page = Html::parse_document(
            r##"<html><body><div class="header">
              <div class="sub-title"><span class="module-label-in-type">Module</span>&nbsp;<a href="#">app</a></div>
              <h1 class="title">Class Foo</h1>
            </div></body></html>"##,
        );
        let class = ModernLayout.extract_class_page(&page, &link()).unwrap();
        assert_eq!(class.package, "fallback.pkg");
    }

    #[test]
    fn missing_title_fails() {
        let page = Html::parse_document("<html><body><div class=\"header\"></div></body></html>");
        assert!(ModernLayout.extract_class_page(&page, &link()).is_err());
    }

    #[test]
    fn package_and_class_tables() {
        let index = Html::parse_document(
            r#"<html><body><div id="all-packages-table"><div class="summary-table two-column-summary">
              <div class="col-first even-row-color"><a href="com/example/package-summary.html">com.example</a></div>
              <div class="col-last even-row-color">Example</div>
              <div class="col-first odd-row-color"><a href="com/other/package-summary.html">com.other</a></div>
            </div></div></body></html>"#,
        );
        let base = Url::parse("https://example.org/api/").unwrap();
        let packages = ModernLayout.package_links(&index, &base);
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].name, "com.other");

        let page = Html::parse_document(
            r#"<html><body><div id="class-summary"><div class="summary-table">
              <div class="col-first"><a href="Foo.html" title="class in com.example">Foo</a></div>
              <div class="col-first"><a href="Bar.html" title="interface in com.example">Bar</a></div>
            </div></div></body></html>"#,
        );
        let classes = ModernLayout.class_links(&page, &packages[0]);
        let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Foo", "Bar"]);
        assert_eq!(
            classes[0].url.as_str(),
            "https://example.org/api/com/example/Foo.html"
        );
    }
}
