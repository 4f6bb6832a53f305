//! Text normalization helpers shared by extraction and rendering

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// Non-breaking spaces (`&nbsp;`, which Javadoc uses heavily between
/// modifiers and types) count as whitespace.
///
/// # Examples
/// ```
/// # use kodegen_tools_javadoc::utils::string_utils::normalize_whitespace;
/// assert_eq!(normalize_whitespace("  public\u{a0}int\n\t size()  "), "public int size()");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(|c: char| c.is_whitespace()).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Turn heading text into an anchor identifier.
///
/// Lowercases, replaces every run of non-alphanumeric characters with a
/// single hyphen, and trims hyphens from both ends. Text without any
/// alphanumeric character yields `"section"` so anchors are never empty.
///
/// # Examples
/// ```
/// # use kodegen_tools_javadoc::utils::string_utils::slugify;
/// assert_eq!(slugify("de.elo.ix.client"), "de-elo-ix-client");
/// assert_eq!(slugify("Foo_Bar"), "foo-bar");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}
