//! A `nom`-based parser for brace-notation references.
//!
//! Whitespace runs and dots are interchangeable separators, so
//! `{ brand themes light palettes neutral .100 }` and
//! `{brand.palettes.neutral.100}` parse to the same reference.
use crate::ast::{ParsedReference, ReferenceKind, is_mode_segment};
use crate::error::ReferenceError;
use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    combinator::{all_consuming, opt},
    multi::separated_list1,
    sequence::delimited,
};
use recursica_types::Mode;
use serde_json::Value;

// --- Main Public Parsers ---

/// Parses a reference, returning `None` for anything that is not one.
pub fn parse_reference(value: &Value, mode: Mode) -> Option<ParsedReference> {
    parse_reference_strict(value, mode).ok()
}

/// String form of [`parse_reference`].
pub fn parse_reference_str(input: &str, mode: Mode) -> Option<ParsedReference> {
    parse_braced(input, mode).ok()
}

/// Like [`parse_reference`] but reports why a value is not a reference.
pub fn parse_reference_strict(value: &Value, mode: Mode) -> Result<ParsedReference, ReferenceError> {
    let raw = unwrap_value(value).ok_or(ReferenceError::NotAString)?;
    parse_braced(raw, mode)
}

/// True when the trimmed text is wrapped in `{...}`.
pub fn is_brace_notation(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.len() >= 2 && trimmed.starts_with('{') && trimmed.ends_with('}')
}

fn unwrap_value(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map.get("$value").and_then(Value::as_str),
        _ => None,
    }
}

fn parse_braced(input: &str, mode: Mode) -> Result<ParsedReference, ReferenceError> {
    let trimmed = input.trim();
    if !is_brace_notation(trimmed) {
        return Err(ReferenceError::NotDelimited(input.to_string()));
    }
    let interior = &trimmed[1..trimmed.len() - 1];
    if interior.trim_matches(is_separator_char).is_empty() {
        return Err(ReferenceError::Empty(input.to_string()));
    }

    match all_consuming(segments).parse(interior) {
        Ok((_, parts)) => Ok(classify(&parts, mode)),
        Err(e) => Err(ReferenceError::Parse(input.to_string(), e.to_string())),
    }
}

// --- Combinators ---

fn is_separator_char(c: char) -> bool {
    c.is_whitespace() || c == '.'
}

fn is_segment_char(c: char) -> bool {
    !is_separator_char(c) && c != '{' && c != '}'
}

fn separator(input: &str) -> IResult<&str, &str> {
    take_while1(is_separator_char).parse(input)
}

fn segment(input: &str) -> IResult<&str, &str> {
    take_while1(is_segment_char).parse(input)
}

/// Segments with any run of whitespace/dots between them collapsed, and
/// leading or trailing separators dropped.
fn segments(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(
        opt(separator),
        separated_list1(separator, segment),
        opt(separator),
    )
    .parse(input)
}

// --- Namespace Dispatch ---

fn owned(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// `ui-kit3` is the malformed form of `ui-kit.3`.
fn malformed_ui_kit_index(head: &str) -> Option<&str> {
    let lower_prefix = head.get(..6)?;
    let index = head.get(6..)?;
    (lower_prefix.eq_ignore_ascii_case("ui-kit")
        && !index.is_empty()
        && index.chars().all(|c| c.is_ascii_digit()))
    .then_some(index)
}

/// Strips an embedded `themes.{mode}` or `{mode}` qualifier.
fn strip_theme_qualifier<'p, 'a>(rest: &'p [&'a str]) -> &'p [&'a str] {
    match rest {
        [themes, mode, tail @ ..] if themes.eq_ignore_ascii_case("themes") && is_mode_segment(mode) => {
            tail
        }
        [mode, tail @ ..] if is_mode_segment(mode) => tail,
        _ => rest,
    }
}

fn classify(parts: &[&str], mode: Mode) -> ParsedReference {
    let unknown = || ParsedReference::new(ReferenceKind::Unknown, owned(parts), None);
    let Some((head, rest)) = parts.split_first() else {
        return unknown();
    };
    let head_lower = head.to_ascii_lowercase();

    match head_lower.as_str() {
        "tokens" | "token" if !rest.is_empty() => {
            ParsedReference::new(ReferenceKind::Token, owned(rest), None)
        }
        "ui-kit" if !rest.is_empty() => ParsedReference::new(ReferenceKind::UiKit, owned(rest), None),
        "brand" | "theme" => {
            let path = strip_theme_qualifier(rest);
            if path.is_empty() {
                return unknown();
            }
            ParsedReference::new(ReferenceKind::Brand, owned(path), Some(mode))
        }
        _ => match malformed_ui_kit_index(head) {
            Some(index) => {
                let mut path = vec![index.to_string()];
                path.extend(owned(rest));
                ParsedReference::new(ReferenceKind::UiKit, path, None)
            }
            None => unknown(),
        },
    }
}
