//! Pages produced by the table-based doclets of JDK 7 through 15.
//!
//! Navigation uses `table.overviewSummary` / `table.typeSummary` rows.
//! Member details are `ul.blockList` entries under an `h3` such as
//! "Method Detail", each member introduced by an `h4`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{JavadocLayout, class_from_header, own_label, strip_package_label};
use crate::document::{ClassDoc, FieldDoc, MemberDoc, MemberKind};
use crate::errors::ScrapeResult;
use crate::extractor::format::JavadocFormat;
use crate::extractor::members::{description, extract_field, extract_member};
use crate::extractor::navigation::{
    ClassLink, PackageLink, collect_class_links, collect_package_links,
};
use crate::extractor::text::plain_text;

static PACKAGE_CELLS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "table.overviewSummary .colFirst a[href], table.overview-summary .colFirst a[href], \
         div.overviewSummary .colFirst a[href], table.summary-table .col-first a[href], \
         table.summary-table .colFirst a[href], table.packageSummary .colFirst a[href]",
    )
    .expect("BUG: hardcoded CSS selector for package cells is invalid")
});

static CLASS_CELLS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "table.typeSummary .colFirst a[href], div.typeSummary .colFirst a[href], \
         table.summary-table .col-first a[href], table.summary-table .colFirst a[href], \
         table.typeSummary .col-first a[href]",
    )
    .expect("BUG: hardcoded CSS selector for class cells is invalid")
});

static TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.header h2.title, div.header h1.title, div.header h2, div.header h1")
        .expect("BUG: hardcoded CSS selector for class title is invalid")
});

static SUB_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.header div.subTitle")
        .expect("BUG: hardcoded CSS selector for sub-title is invalid")
});

static LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a").expect("BUG: hardcoded CSS selector for anchors is invalid")
});

/// First item of each nested inheritance list
static INHERITANCE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("ul.inheritance > li:first-child")
        .expect("BUG: hardcoded CSS selector for inheritance is invalid")
});

static CLASS_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.description, section.description")
        .expect("BUG: hardcoded CSS selector for class description is invalid")
});

static SECTION_HEADING: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h3").expect("BUG: hardcoded CSS selector for section heading is invalid")
});

static MEMBER_HEADING: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h4").expect("BUG: hardcoded CSS selector for member heading is invalid")
});

/// Detail section kinds, matched against the `h3` text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailSection {
    Fields,
    Constructors,
    Methods,
}

impl DetailSection {
    fn from_heading(text: &str) -> Option<Self> {
        let text = text.trim();
        if !(text.ends_with("Detail") || text.ends_with("Details")) {
            return None;
        }
        if text.starts_with("Field") || text.starts_with("Enum Constant") {
            Some(Self::Fields)
        } else if text.starts_with("Constructor") {
            Some(Self::Constructors)
        } else if text.starts_with("Method") || text.starts_with("Element") {
            Some(Self::Methods)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyLayout;

impl LegacyLayout {
    fn package_name(page: &Html) -> Option<String> {
        let sub_titles: Vec<ElementRef<'_>> = page.select(&SUB_TITLE).collect();
        // JDK 11 prints the module first; JDK 8 prints the bare package name
        let chosen = sub_titles
            .iter()
            .find(|s| plain_text(**s).starts_with("Package"))
            .or_else(|| sub_titles.iter().find(|s| !plain_text(**s).starts_with("Module")))?;

        let name = match chosen.select(&LINK).next() {
            Some(link) => plain_text(link),
            None => strip_package_label(&plain_text(*chosen)),
        };
        Some(name)
    }

    /// Members of one detail section, in page order
    ///
    /// Each `h4` below the section heading's container starts a member;
    /// the heading's parent holds signature, prose and notes.
    fn section_members<'a>(
        container: ElementRef<'a>,
    ) -> impl Iterator<Item = (ElementRef<'a>, String)> + 'a {
        container.select(&MEMBER_HEADING).filter_map(|h4| {
            let scope = h4.parent().and_then(ElementRef::wrap)?;
            Some((scope, plain_text(h4)))
        })
    }
}

impl JavadocLayout for LegacyLayout {
    fn format(&self) -> JavadocFormat {
        JavadocFormat::Legacy
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

        let mut fields: Vec<FieldDoc> = Vec::new();
        let mut constructors: Vec<MemberDoc> = Vec::new();
        let mut methods: Vec<MemberDoc> = Vec::new();

        for heading in page.select(&SECTION_HEADING) {
            let Some(section) = DetailSection::from_heading(&plain_text(heading)) else {
                continue;
            };
            let Some(container) = heading.parent().and_then(ElementRef::wrap) else {
                continue;
            };

            for (scope, name) in Self::section_members(container) {
                match section {
                    DetailSection::Fields => fields.push(extract_field(scope, &name)),
                    DetailSection::Constructors => {
                        constructors.push(extract_member(MemberKind::Constructor, scope, &name));
                    }
                    DetailSection::Methods => {
                        methods.push(extract_member(MemberKind::Method, scope, &name));
                    }
                }
            }
        }

        class.fields = fields;
        class.constructors = constructors;
        class.methods = methods;
        Ok(class)
    }
}
