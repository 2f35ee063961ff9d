//! The typed form of a parsed reference.
use recursica_types::Mode;
use serde::Serialize;

/// The namespace a reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    /// Primitive token document (`tokens.` / `token.`).
    Token,
    /// Mode-qualified brand document (`brand.` / `theme.`).
    Brand,
    /// Component kit document (`ui-kit.`).
    UiKit,
    /// Anything else. Not resolvable, but not invalid either.
    Unknown,
}

impl ReferenceKind {
    pub fn namespace(&self) -> Option<&'static str> {
        match self {
            ReferenceKind::Token => Some("tokens"),
            ReferenceKind::Brand => Some("brand"),
            ReferenceKind::UiKit => Some("ui-kit"),
            ReferenceKind::Unknown => None,
        }
    }
}

/// A reference with its namespace split off.
///
/// `path` never contains the namespace segment. `mode` is only set for brand
/// references, where `normalized_path` is `brand.themes.{mode}.{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReference {
    pub kind: ReferenceKind,
    pub path: Vec<String>,
    pub mode: Option<Mode>,
    pub normalized_path: String,
}

impl ParsedReference {
    pub(crate) fn new(kind: ReferenceKind, path: Vec<String>, mode: Option<Mode>) -> Self {
        let joined = path.join(".");
        let normalized_path = match (kind, mode) {
            (ReferenceKind::Brand, Some(mode)) => format!("brand.themes.{}.{}", mode, joined),
            _ => match kind.namespace() {
                Some(ns) => format!("{}.{}", ns, joined),
                None => joined,
            },
        };
        Self {
            kind,
            path,
            mode,
            normalized_path,
        }
    }

    /// The dotted path without namespace.
    pub fn joined_path(&self) -> String {
        self.path.join(".")
    }

    /// Canonical brace form. Brand references are rendered theme-agnostic,
    /// unless the path itself starts like a theme qualifier; then one is
    /// emitted so that re-parsing strips it instead of the path's own segments.
    pub fn to_reference_string(&self) -> String {
        match (self.kind, self.mode) {
            (ReferenceKind::Brand, Some(mode)) if starts_with_theme_qualifier(&self.path) => {
                format!("{{brand.themes.{}.{}}}", mode, self.joined_path())
            }
            _ => match self.kind.namespace() {
                Some(ns) => format!("{{{}.{}}}", ns, self.joined_path()),
                None => format!("{{{}}}", self.joined_path()),
            },
        }
    }
}

pub(crate) fn is_mode_segment(s: &str) -> bool {
    s.eq_ignore_ascii_case("light") || s.eq_ignore_ascii_case("dark")
}

/// `light.…`, `dark.…`, or `themes.{light|dark}.…`.
fn starts_with_theme_qualifier(path: &[String]) -> bool {
    match path {
        [first, ..] if is_mode_segment(first) => true,
        [themes, mode, ..] => themes.eq_ignore_ascii_case("themes") && is_mode_segment(mode),
        _ => false,
    }
}
