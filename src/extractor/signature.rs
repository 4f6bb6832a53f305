//! Parsing of Java declaration lines as printed by the Javadoc tool.
//!
//! The input is the whitespace-normalized text of a signature block, for
//! example `@Deprecated public static <T> List<T> copy(Collection<? extends T> src, int limit) throws IOException`.

/// Keywords that never belong to a type
const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "synchronized",
    "native",
    "default",
    "strictfp",
    "transient",
    "volatile",
    "sealed",
    "non-sealed",
];

/// Components of a constructor or method declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSignature {
    pub name: String,
    /// `None` for constructors, or when nothing precedes the name
    pub return_type: Option<String>,
    /// `(type, name)` pairs in declaration order
    pub parameters: Vec<(String, String)>,
    pub throws: Vec<String>,
}

/// Parse a member declaration.
///
/// `expected_name` is the member name from the detail heading; it is used
/// to find the parameter list when annotations with arguments precede the
/// name. Annotation interface elements (`public abstract String value`)
/// have no parameter list and parse with empty parameters. Returns `None`
/// when neither form matches.
#[must_use]
pub fn parse_member_signature(signature: &str, expected_name: &str) -> Option<ParsedSignature> {
    let signature = strip_annotations(signature.trim());
    if !signature.contains('(') {
        return parse_element(signature, expected_name);
    }
    let (name_start, open) = locate_name(signature, expected_name)?;
    let close = matching_close(signature, open)?;

    let name = signature[name_start..open].trim().to_string();
    let return_type = type_from_prefix(&signature[..name_start]);

    let parameters = split_top_level(&signature[open + 1..close], ',')
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| parse_parameter(raw, index))
        .collect();

    let throws = signature[close + 1..]
        .trim()
        .strip_prefix("throws")
        .map(|list| {
            split_top_level(list, ',')
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Some(ParsedSignature {
        name,
        return_type,
        parameters,
        throws,
    })
}

/// Annotation element: the type is whatever precedes the name
fn parse_element(signature: &str, expected_name: &str) -> Option<ParsedSignature> {
    let signature = signature.split(" default ").next().unwrap_or(signature);
    let tokens = split_top_level(signature, ' ');
    let expected = expected_name.trim();
    let name_at = tokens
        .iter()
        .rposition(|t| *t == expected)
        .or_else(|| tokens.len().checked_sub(1))?;
    let return_type = type_from_prefix(&tokens[..name_at].join(" "))?;

    Some(ParsedSignature {
        name: tokens[name_at].to_string(),
        return_type: Some(return_type),
        parameters: Vec::new(),
        throws: Vec::new(),
    })
}

/// Type of a field declaration such as `public static final int MAX`
#[must_use]
pub fn parse_field_type(declaration: &str, name: &str) -> Option<String> {
    let declaration = strip_annotations(declaration.trim());
    let declaration = declaration.split(" = ").next().unwrap_or(declaration);
    let tokens = split_top_level(declaration, ' ');
    let name_at = tokens
        .iter()
        .rposition(|t| *t == name)
        .unwrap_or(tokens.len().saturating_sub(1));
    let ty = tokens[..name_at]
        .iter()
        .filter(|t| !is_modifier(t) && !t.starts_with('@'))
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    (!ty.is_empty()).then_some(ty)
}

fn is_modifier(token: &str) -> bool {
    MODIFIERS.contains(&token)
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Drop leading `@Annotation` and `@Annotation(args)` tokens
fn strip_annotations(mut text: &str) -> &str {
    while let Some(rest) = text.strip_prefix('@') {
        let ident_len = rest
            .find(|c: char| !(is_identifier_char(c) || c == '.'))
            .unwrap_or(rest.len());
        let mut remainder = &rest[ident_len..];
        if remainder.starts_with('(') {
            match matching_close(remainder, 0) {
                Some(close) => remainder = &remainder[close + 1..],
                None => return text,
            }
        }
        text = remainder.trim_start();
    }
    text
}

/// Byte offsets of the member name and of its opening parenthesis
fn locate_name(signature: &str, expected_name: &str) -> Option<(usize, usize)> {
    let expected = expected_name.trim();
    if !expected.is_empty() {
        let needle = format!("{expected}(");
        let mut from = 0;
        while let Some(found) = signature[from..].find(&needle) {
            let start = from + found;
            let boundary = signature[..start]
                .chars()
                .next_back()
                .is_none_or(|c| !is_identifier_char(c));
            if boundary {
                return Some((start, start + expected.len()));
            }
            from = start + needle.len();
        }
    }

    let open = signature.find('(')?;
    let before = signature[..open].trim_end();
    let name_start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_identifier_char(*c))
        .last()
        .map_or(before.len(), |(i, _)| i);
    Some((name_start, open))
}

/// Index of the bracket closing the one at `open`
fn matching_close(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split at `separator` outside of `<>`, `()` and `[]`
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth -= 1,
            c if c == separator && depth <= 0 => {
                parts.push(text[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

fn type_from_prefix(prefix: &str) -> Option<String> {
    let ty = split_top_level(prefix, ' ')
        .into_iter()
        .filter(|t| !is_modifier(t) && !t.starts_with('@') && !t.starts_with('<'))
        .collect::<Vec<_>>()
        .join(" ");
    (!ty.is_empty()).then_some(ty)
}

fn parse_parameter(raw: &str, index: usize) -> Option<(String, String)> {
    let raw = strip_annotations(raw.trim());
    let raw = raw.strip_prefix("final ").unwrap_or(raw).trim();
    if raw.is_empty() {
        return None;
    }

    let tokens = split_top_level(raw, ' ');
    match tokens.split_last() {
        Some((name, ty)) if !ty.is_empty() => Some((ty.join(" "), (*name).to_string())),
        _ => Some((raw.to_string(), format!("arg{index}"))),
    }
}
