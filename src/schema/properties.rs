//! Auto-property extraction from class bodies.

use serde::{Deserialize, Serialize};

use super::lexer::Tokens;

const ACCESS_MODIFIERS: &[&str] = &["public", "private", "protected", "internal"];

const PROPERTY_MODIFIERS: &[&str] = &[
    "static", "virtual", "override", "abstract", "sealed", "new", "readonly", "required",
];

/// Attributes whose first string argument renames the serialized property
const SERIALIZATION_ATTRIBUTES: &[&str] =
    &["JsonProperty", "JsonPropertyAttribute", "JsonPropertyName", "JsonPropertyNameAttribute"];

/// A single auto-property declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Name used in serialized configuration (defaults to `field_name`)
    pub serialized_name: String,
    /// Declared property name
    pub field_name: String,
    /// Type text exactly as written, e.g. `Dictionary<string, WidgetConfig>`
    pub declared_type: String,
}

/// Extracts auto-properties from a class body in declaration order.
///
/// Only `{ get; set; }` style accessors are recognized. Properties with
/// accessor bodies, fields and methods are skipped.
pub fn extract_properties(body: &str) -> Vec<PropertyDescriptor> {
    let tokens = Tokens::new(body);
    let mut properties = Vec::new();

    for i in 0..tokens.len() {
        if !at_statement_start(&tokens, i) {
            continue;
        }
        if let Some(property) = parse_property(&tokens, i) {
            properties.push(property);
        }
    }

    properties
}

fn at_statement_start(tokens: &Tokens<'_>, i: usize) -> bool {
    i == 0 || tokens.is_punct(i - 1, ';') || tokens.is_punct(i - 1, '{') || tokens.is_punct(i - 1, '}')
}

fn parse_property(tokens: &Tokens<'_>, start: usize) -> Option<PropertyDescriptor> {
    let mut j = start;
    let mut serialized_name = None;

    while tokens.is_punct(j, '[') {
        let end = tokens.skip_balanced(j, '[', ']')?;
        if serialized_name.is_none() {
            serialized_name = serialization_name(tokens, j + 1, end - 1);
        }
        j = end;
    }

    if !ACCESS_MODIFIERS.contains(&tokens.text(j)) || !tokens.is_ident(j) {
        return None;
    }
    j += 1;
    while tokens.is_ident(j)
        && (ACCESS_MODIFIERS.contains(&tokens.text(j)) || PROPERTY_MODIFIERS.contains(&tokens.text(j)))
    {
        j += 1;
    }

    let type_start = j;
    let type_end = skip_type(tokens, type_start)?;
    let name = type_end;
    if !tokens.is_ident(name) {
        return None;
    }
    skip_auto_accessors(tokens, name + 1)?;

    let field_name = tokens.text(name).to_string();
    Some(PropertyDescriptor {
        serialized_name: serialized_name.unwrap_or_else(|| field_name.clone()),
        field_name,
        declared_type: tokens.span_text(type_start, type_end - 1).to_string(),
    })
}

/// Skips `Name(.Name)*<...>?` followed by nullable and array markers
fn skip_type(tokens: &Tokens<'_>, mut j: usize) -> Option<usize> {
    if !tokens.is_ident(j) {
        return None;
    }
    j += 1;
    while tokens.is_punct(j, '.') && tokens.is_ident(j + 1) {
        j += 2;
    }
    if tokens.is_punct(j, '<') {
        j = tokens.skip_balanced(j, '<', '>')?;
    }
    if tokens.is_punct(j, '?') {
        j += 1;
    }
    while tokens.is_punct(j, '[') {
        let mut k = j + 1;
        while tokens.is_punct(k, ',') {
            k += 1;
        }
        if !tokens.is_punct(k, ']') {
            break;
        }
        j = k + 1;
    }
    if tokens.is_punct(j, '?') {
        j += 1;
    }
    Some(j)
}

/// Accepts `{ get; set; }`, `{ get; private set; }`, `{ get; init; }` and similar
fn skip_auto_accessors(tokens: &Tokens<'_>, mut j: usize) -> Option<usize> {
    if !tokens.is_punct(j, '{') {
        return None;
    }
    j += 1;

    let mut accessors = 0;
    loop {
        if tokens.is_punct(j, '}') {
            return (accessors > 0).then_some(j + 1);
        }
        if accessors == 2 {
            return None;
        }
        while tokens.is_ident(j) && ACCESS_MODIFIERS.contains(&tokens.text(j)) {
            j += 1;
        }
        if !matches!(tokens.text(j), "get" | "set" | "init") || !tokens.is_punct(j + 1, ';') {
            return None;
        }
        j += 2;
        accessors += 1;
    }
}

/// First string argument of a serialization attribute within `[first..last)`
fn serialization_name(tokens: &Tokens<'_>, first: usize, last: usize) -> Option<String> {
    (first..last)
        .filter(|&k| {
            tokens.is_ident(k)
                && SERIALIZATION_ATTRIBUTES.contains(&tokens.text(k))
                && tokens.is_punct(k + 1, '(')
        })
        .find_map(|k| {
            let close = tokens.skip_balanced(k + 1, '(', ')')?;
            (k + 2..close).find_map(|s| tokens.string_value(s))
        })
        .map(str::to_string)
}
