//! PHP signature fragments for `@method` tags.
//!
//! Turns [`ParamDef`]s into the `type $name = default` pieces of a method
//! tag and pulls return types out of raw doc comments.

use crate::registry::{DefaultValue, ParamDef};

// ── Parameters ──────────────────────────────────────────────────────────────

/// Render one parameter, e.g. `int $x = 1` or `...string $parts`.
pub fn format_parameter(param: &ParamDef) -> String {
    let type_hint = param.type_hint.as_deref().unwrap_or("");

    let mut out = format!("{type_hint} ${}", param.name).trim().to_string();

    // The ellipsis goes in front of the whole `type $name` text, and
    // variadics never carry defaults, whatever the manifest says.
    if param.variadic {
        out.insert_str(0, "...");
    } else if param.optional {
        let literal = if is_array_hint(type_hint) {
            String::from("[]")
        } else {
            match &param.default {
                Some(value) => default_literal(value),
                None => String::from("null"),
            }
        };
        out.push_str(" = ");
        out.push_str(&normalize_whitespace(&literal));
    }

    out
}

/// Render a comma-joined parameter list.
pub fn parameter_list(params: &[ParamDef]) -> String {
    params
        .iter()
        .map(format_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_array_hint(type_hint: &str) -> bool {
    let bare = type_hint.strip_prefix('?').unwrap_or(type_hint);
    bare.eq_ignore_ascii_case("array")
}

// ── Default values ──────────────────────────────────────────────────────────

/// Render a default as PHP source.
pub fn default_literal(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Null => String::from("null"),
        DefaultValue::Bool(true) => String::from("true"),
        DefaultValue::Bool(false) => String::from("false"),
        DefaultValue::Int(i) => i.to_string(),
        // Keep whole floats recognisable as floats: `1.0`, not `1`.
        DefaultValue::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.1}"),
        DefaultValue::Float(f) => f.to_string(),
        DefaultValue::Str(s) => {
            let mut quoted = String::with_capacity(s.len() + 2);
            quoted.push('\'');
            for c in s.chars() {
                match c {
                    '\\' => quoted.push_str("\\\\"),
                    '\'' => quoted.push_str("\\'"),
                    _ => quoted.push(c),
                }
            }
            quoted.push('\'');
            quoted
        }
        DefaultValue::EmptyArray => String::from("[]"),
    }
}

/// Collapse whitespace runs to single spaces so defaults stay on one line.
pub fn normalize_whitespace(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut in_run = false;
    for c in literal.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

// ── Return types ────────────────────────────────────────────────────────────

/// Extract the return type from a raw doc comment.
///
/// Looks for `@return ` followed immediately by a type token (letters,
/// `[`, `]`, `|` and `\`). The first occurrence with a non-empty token wins;
/// anything else yields an empty string, which renders as a typeless
/// `@method` tag.
pub fn return_type_from_doc(doc: &str) -> &str {
    const MARKER: &str = "@return ";

    for (pos, _) in doc.match_indices(MARKER) {
        let rest = &doc[pos + MARKER.len()..];
        let end = rest
            .find(|c: char| !is_type_char(c))
            .unwrap_or(rest.len());
        if end > 0 {
            return &rest[..end];
        }
    }
    ""
}

fn is_type_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '[' | ']' | '|' | '\\')
}
