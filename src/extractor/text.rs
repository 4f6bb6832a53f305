//! Text extraction from Javadoc HTML fragments.
//!
//! Two flavours: [`plain_text`] for names and signatures, and
//! [`inline_text`] for prose, which keeps `code`-like elements as Markdown
//! code spans so they survive into the rendered document.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

use crate::utils::normalize_whitespace;

/// Elements whose content is rendered as a code span
const CODE_ELEMENTS: &[&str] = &["code", "tt", "pre", "kbd", "samp"];

/// Elements that separate words even without surrounding whitespace
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "dl", "dt", "dd", "table", "tr", "td", "th", "h1", "h2", "h3",
    "h4", "h5", "h6", "blockquote", "section",
];

const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// All text below `element`, whitespace-normalized
#[must_use]
pub fn plain_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_plain(*element, &mut raw);
    normalize_whitespace(&raw)
}

/// Prose text below `element` with code elements as backtick spans
///
/// Returns `None` when the element holds no visible text.
#[must_use]
pub fn inline_text(element: ElementRef<'_>) -> Option<String> {
    let mut raw = String::new();
    collect_inline(*element, &mut raw);
    let text = normalize_whitespace(&raw);
    (!text.is_empty()).then_some(text)
}

/// Wrap `code` as a Markdown code span, widening the fence when the code
/// itself contains backticks.
#[must_use]
pub fn code_span(code: &str) -> String {
    if !code.contains('`') {
        return format!("`{code}`");
    }
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    format!("{fence} {code} {fence}")
}

fn collect_plain(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push(' ');
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    out.push(' ');
                }
                collect_plain(child, out);
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

fn collect_inline(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push(' ');
                    continue;
                }
                if CODE_ELEMENTS.contains(&name) {
                    let mut code = String::new();
                    collect_plain(child, &mut code);
                    let code = normalize_whitespace(&code);
                    if !code.is_empty() {
                        out.push_str(&code_span(&code));
                    }
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    out.push(' ');
                }
                collect_inline(child, out);
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}
