//! `var(...)` extraction from property values.

use regex::Regex;
use std::sync::LazyLock;

static VAR_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bvar\(\s*(--[A-Za-z0-9_-]+)?").expect("BUG: invalid VAR_CALL_RE regex literal")
});

static FALLBACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bvar\(\s*(--[A-Za-z0-9_-]+)\s*,\s*var\(\s*(--[A-Za-z0-9_-]+)")
        .expect("BUG: invalid FALLBACK_RE regex literal")
});

/// Variables referenced by `value` whose names start with `prefix`, in order.
pub fn referenced_vars<'v>(value: &'v str, prefix: &str) -> Vec<&'v str> {
    VAR_CALL_RE
        .captures_iter(value)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| name.starts_with(prefix))
        .collect()
}

/// True when some `var(` in `value` has no parseable variable name.
pub fn has_malformed_var(value: &str) -> bool {
    VAR_CALL_RE.captures_iter(value).any(|caps| caps.get(1).is_none())
}

/// `(first, fallback)` pairs of `var(--first, var(--fallback ...))` forms.
pub fn fallback_pairs(value: &str) -> Vec<(&str, &str)> {
    FALLBACK_RE
        .captures_iter(value)
        .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .collect()
}

/// True when the trimmed value is an unresolved `{...}` reference.
pub fn is_brace_notation(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.len() >= 2 && trimmed.starts_with('{') && trimmed.ends_with('}')
}
