//! Member-level extraction shared by both layouts.
//!
//! A layout locates the element holding one member's detail block and
//! its heading name; everything inside that block (signature, prose and
//! the `dl` notes) uses the same markup in every doclet generation.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use super::signature::{parse_field_type, parse_member_signature};
use super::text::{inline_text, plain_text};
use crate::document::{FieldDoc, MemberDoc, MemberKind, MemberRef, Parameter};

static SIGNATURE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.member-signature, div.memberSignature, pre.methodSignature, pre")
        .expect("BUG: hardcoded CSS selector for member signatures is invalid")
});

static RETURN_TYPE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.return-type, span.returnType")
        .expect("BUG: hardcoded CSS selector for return types is invalid")
});

static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.block").expect("BUG: hardcoded CSS selector for description is invalid")
});

/// "Description copied from class: ..." label preceding inherited prose
static INHERITED_LABEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.description-from-type-label, span.descfrmTypeLabel")
        .expect("BUG: hardcoded CSS selector for inherited description label is invalid")
});

static NOTES: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("dl").expect("BUG: hardcoded CSS selector for notes is invalid")
});

static CODE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("code, a").expect("BUG: hardcoded CSS selector for code is invalid")
});

static OVERRIDE_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<member>.+?)\s+in\s+(?:class|interface|enum|record)\s+(?P<owner>\S+)")
        .expect("BUG: hardcoded override regex is invalid")
});

/// One `dt`/`dd` pair of a notes list
struct Note<'a> {
    label: String,
    body: ElementRef<'a>,
}

impl Note<'_> {
    fn is(&self, label: &str) -> bool {
        self.label.eq_ignore_ascii_case(label)
    }
}

/// First description block of a member or class section
///
/// Inherited docs print a block holding only the "copied from" label
/// before the block with the prose; label-only blocks are skipped.
pub(crate) fn description(scope: ElementRef<'_>) -> Option<String> {
    scope
        .select(&DESCRIPTION)
        .filter(|block| !is_label_only(*block))
        .find_map(inline_text)
}

fn is_label_only(block: ElementRef<'_>) -> bool {
    block
        .select(&INHERITED_LABEL)
        .next()
        .is_some_and(|label| plain_text(label) == plain_text(block))
}

fn signature_text(scope: ElementRef<'_>) -> Option<String> {
    scope
        .select(&SIGNATURE)
        .next()
        .map(plain_text)
        .filter(|s| !s.is_empty())
}

fn is_inside_block(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().classes().any(|c| c == "block"))
}

fn notes(scope: ElementRef<'_>) -> Vec<Note<'_>> {
    let mut out = Vec::new();
    for list in scope.select(&NOTES).filter(|dl| !is_inside_block(*dl)) {
        let mut label = String::new();
        for child in list.children().filter_map(ElementRef::wrap) {
            match child.value().name() {
                "dt" => {
                    label = plain_text(child).trim_end_matches(':').trim().to_string();
                }
                "dd" if !label.is_empty() => out.push(Note {
                    label: label.clone(),
                    body: child,
                }),
                _ => {}
            }
        }
    }
    out
}

/// Split a `name - description` note body
fn named_note(body: ElementRef<'_>) -> (String, Option<String>) {
    let plain = plain_text(body);
    let name = plain
        .split(" - ")
        .next()
        .unwrap_or(&plain)
        .trim()
        .to_string();
    let description = inline_text(body).and_then(|text| {
        text.split_once(" - ")
            .map(|(_, rest)| rest.trim().to_string())
            .filter(|rest| !rest.is_empty())
    });
    (name, description)
}

fn override_ref(body: ElementRef<'_>, own_name: &str) -> MemberRef {
    let plain = plain_text(body);
    if let Some(caps) = OVERRIDE_TARGET.captures(&plain) {
        return MemberRef {
            member: caps["member"].trim_end_matches("()").to_string(),
            owner: Some(caps["owner"].to_string()),
        };
    }

    let member = body
        .select(&CODE)
        .next()
        .map(plain_text)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| own_name.to_string());
    MemberRef {
        member,
        owner: None,
    }
}

/// Build a constructor or method from its detail block
pub(crate) fn extract_member(kind: MemberKind, scope: ElementRef<'_>, heading: &str) -> MemberDoc {
    let heading = heading.trim();
    let signature = signature_text(scope).unwrap_or_else(|| format!("{heading}()"));
    let parsed = parse_member_signature(&signature, heading).unwrap_or_default();
    let notes = notes(scope);

    let name = if heading.is_empty() {
        parsed.name.clone()
    } else {
        heading.to_string()
    };

    let param_notes: Vec<(String, Option<String>)> = notes
        .iter()
        .filter(|n| n.is("Parameters"))
        .map(|n| named_note(n.body))
        .collect();

    let parameters = parsed
        .parameters
        .into_iter()
        .map(|(type_name, param_name)| {
            let description = param_notes
                .iter()
                .find(|(noted, _)| *noted == param_name)
                .and_then(|(_, d)| d.clone());
            Parameter {
                name: param_name,
                type_name,
                description,
            }
        })
        .collect();

    let return_type = match kind {
        MemberKind::Constructor => None,
        MemberKind::Method => scope
            .select(&RETURN_TYPE)
            .next()
            .map(plain_text)
            .filter(|t| !t.is_empty())
            .or(parsed.return_type),
    };

    let returns = notes
        .iter()
        .find(|n| n.is("Returns"))
        .and_then(|n| inline_text(n.body));

    let mut throws = parsed.throws;
    if throws.is_empty() {
        throws = notes
            .iter()
            .filter(|n| n.is("Throws"))
            .map(|n| named_note(n.body).0)
            .filter(|t| !t.is_empty())
            .collect();
    }

    let overrides = notes
        .iter()
        .find(|n| n.is("Overrides"))
        .map(|n| override_ref(n.body, &name));

    MemberDoc {
        kind,
        name,
        signature,
        parameters,
        return_type,
        returns,
        throws,
        description: description(scope),
        overrides,
    }
}

/// Build a field or enum constant from its detail block
pub(crate) fn extract_field(scope: ElementRef<'_>, heading: &str) -> FieldDoc {
    let name = heading.trim().to_string();
    let signature = signature_text(scope).unwrap_or_else(|| name.clone());
    let type_name = scope
        .select(&RETURN_TYPE)
        .next()
        .map(plain_text)
        .filter(|t| !t.is_empty())
        .or_else(|| parse_field_type(&signature, &name));

    FieldDoc {
        name,
        type_name,
        signature,
        description: description(scope),
    }
}
