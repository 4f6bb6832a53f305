//! Markdown rendering of an assembled [`Document`].
//!
//! Rendering is a pure function of the document: the same document always
//! renders to the same bytes. Prose coming from the pages may contain
//! backtick code spans; everything outside them is HTML-escaped so that
//! generic type names such as `List<String>` survive Markdown processing.

use crate::document::{
    ClassDoc, Document, FieldDoc, MemberDoc, Package, SkippedClass, TOC_ANCHOR, TableOfContents,
    TocEntry, package_heading,
};
use crate::extractor::text::code_span;

const RULE: &str = "---";

/// Render the whole document
#[must_use]
pub fn render(document: &Document) -> String {
    let mut out = MarkdownBuffer::default();

    out.line(&format!("# {}", escape_text(document.title())));
    out.blank();
    if let Some(url) = document.source_url() {
        out.line(&format!("Source: <{url}>"));
        out.blank();
    }

    render_toc(&mut out, document.toc());
    out.line(RULE);
    out.blank();

    for (package, entry) in document.packages().iter().zip(&document.toc().entries) {
        render_package(&mut out, package, entry);
    }

    if !document.skipped().is_empty() {
        render_skipped(&mut out, document.skipped());
    }

    out.finish()
}

/// Escape `&`, `<` and `>` in text that is not inside a code span
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('`') {
        escaped.push_str(&html_escape::encode_text(&rest[..start]));
        let fence_len = rest[start..].chars().take_while(|c| *c == '`').count();
        let fence = &rest[start..start + fence_len];
        let after_fence = &rest[start + fence_len..];

        match after_fence.find(fence) {
            Some(end) => {
                let span_end = start + fence_len + end + fence_len;
                escaped.push_str(&rest[start..span_end]);
                rest = &rest[span_end..];
            }
            None => {
                // Unbalanced fence; keep it literal
                escaped.push_str(fence);
                rest = after_fence;
            }
        }
    }
    escaped.push_str(&html_escape::encode_text(rest));
    escaped
}

/// Escaped text that is also safe inside a table cell
fn escape_cell(text: &str) -> String {
    escape_text(text).replace('|', "\\|")
}

#[derive(Default)]
struct MarkdownBuffer {
    text: String,
}

impl MarkdownBuffer {
    fn line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    fn blank(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with("\n\n") {
            self.text.push('\n');
        }
    }

    fn anchor(&mut self, id: &str) {
        self.line(&format!("<a id=\"{id}\"></a>"));
    }

    fn code_block(&mut self, indent: &str, code: &str) {
        self.line(&format!("{indent}```java"));
        for line in code.lines() {
            self.line(&format!("{indent}{line}"));
        }
        self.line(&format!("{indent}```"));
    }

    fn finish(mut self) -> String {
        while self.text.ends_with("\n\n") {
            self.text.pop();
        }
        self.text
    }
}

fn render_toc(out: &mut MarkdownBuffer, toc: &TableOfContents) {
    out.anchor(TOC_ANCHOR);
    out.line("## Table of Contents");
    out.blank();
    for entry in &toc.entries {
        render_toc_entry(out, entry, 0);
    }
    out.blank();
}

fn render_toc_entry(out: &mut MarkdownBuffer, entry: &TocEntry, depth: usize) {
    out.line(&format!(
        "{}- [{}](#{})",
        "  ".repeat(depth),
        escape_text(&entry.text),
        entry.anchor
    ));
    for child in &entry.children {
        render_toc_entry(out, child, depth + 1);
    }
}

fn render_package(out: &mut MarkdownBuffer, package: &Package, entry: &TocEntry) {
    out.anchor(&entry.anchor);
    out.line(&format!("# {}", escape_text(&package_heading(package))));
    out.blank();

    for (class, class_entry) in package.classes.iter().zip(&entry.children) {
        render_class(out, class, &class_entry.anchor);
    }
}

fn render_class(out: &mut MarkdownBuffer, class: &ClassDoc, anchor: &str) {
    out.anchor(anchor);
    out.line(&format!(
        "## {} {}",
        class.kind.label(),
        escape_text(&class.name)
    ));
    out.blank();

    if let Some(description) = &class.description {
        out.line(&escape_text(description));
        out.blank();
    }

    if !class.inheritance.is_empty() {
        let chain: Vec<String> = class.inheritance.iter().map(|t| code_span(t)).collect();
        out.line(&format!("**Inheritance:** {}", chain.join(" → ")));
        out.blank();
    }

    if !class.fields.is_empty() {
        out.line("### Fields");
        out.blank();
        for field in &class.fields {
            render_field(out, field);
        }
        out.blank();
    }

    if !class.constructors.is_empty() {
        out.line("### Constructors");
        out.blank();
        for member in &class.constructors {
            render_member(out, member);
        }
    }

    if !class.methods.is_empty() {
        out.line("### Methods");
        out.blank();
        for member in &class.methods {
            render_member(out, member);
        }
    }
}

fn render_field(out: &mut MarkdownBuffer, field: &FieldDoc) {
    let mut item = format!("- **{}**", code_span(&field.name));
    if let Some(type_name) = &field.type_name {
        item.push_str(&format!(" — {}", code_span(type_name)));
    }
    out.line(&item);
    out.code_block("  ", &field.signature);
    if let Some(description) = &field.description {
        out.line(&format!("  {}", escape_text(description)));
    }
}

fn render_member(out: &mut MarkdownBuffer, member: &MemberDoc) {
    out.line(&format!("#### {}", code_span(&member.display_name())));
    out.blank();
    out.code_block("", &member.signature);
    out.blank();

    if let Some(description) = &member.description {
        out.line(&escape_text(description));
        out.blank();
    }

    if !member.parameters.is_empty() {
        out.line("| Parameter | Type | Description |");
        out.line("|---|---|---|");
        for param in &member.parameters {
            out.line(&format!(
                "| {} | {} | {} |",
                code_span(&param.name),
                code_span(&param.type_name),
                param.description.as_deref().map(escape_cell).unwrap_or_default()
            ));
        }
        out.blank();
    }

    let return_type = member
        .return_type
        .as_deref()
        .filter(|t| *t != "void");
    match (return_type, member.returns.as_deref()) {
        (Some(ty), Some(description)) => {
            out.line(&format!(
                "**Returns:** {} — {}",
                code_span(ty),
                escape_text(description)
            ));
            out.blank();
        }
        (Some(ty), None) => {
            out.line(&format!("**Returns:** {}", code_span(ty)));
            out.blank();
        }
        (None, Some(description)) => {
            out.line(&format!("**Returns:** {}", escape_text(description)));
            out.blank();
        }
        (None, None) => {}
    }

    if !member.throws.is_empty() {
        let throws: Vec<String> = member.throws.iter().map(|t| code_span(t)).collect();
        out.line(&format!("**Throws:** {}", throws.join(", ")));
        out.blank();
    }

    if let Some(overrides) = &member.overrides {
        match &overrides.owner {
            Some(owner) => out.line(&format!(
                "**Overrides:** {} in {}",
                code_span(&overrides.member),
                code_span(owner)
            )),
            None => out.line(&format!("**Overrides:** {}", code_span(&overrides.member))),
        }
        out.blank();
    }

    out.line(RULE);
    out.blank();
}

fn render_skipped(out: &mut MarkdownBuffer, skipped: &[SkippedClass]) {
    out.line("## Skipped Classes");
    out.blank();
    for skip in skipped {
        out.line(&format!(
            "- {} (<{}>): {}",
            code_span(&format!("{}.{}", skip.package, skip.class)),
            skip.url,
            escape_text(&skip.reason)
        ));
    }
    out.blank();
}
