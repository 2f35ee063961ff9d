//! The three JSON documents a resolution pass reads from.

use recursica_types::{Mode, OpacityToken};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// An immutable snapshot of the token, theme, and UI-kit documents.
///
/// Each document is optional; references into a missing document do not resolve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSet {
    pub tokens: Option<Value>,
    pub theme: Option<Value>,
    pub ui_kit: Option<Value>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(mut self, tokens: Value) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn with_theme(mut self, theme: Value) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_ui_kit(mut self, ui_kit: Value) -> Self {
        self.ui_kit = Some(ui_kit);
        self
    }

    /// The theme document below an optional top-level `brand` wrapper.
    pub fn theme_root(&self) -> Option<&Value> {
        let theme = self.theme.as_ref()?;
        Some(theme.get("brand").unwrap_or(theme))
    }

    /// `themes.{mode}` of the theme document.
    pub fn theme_mode(&self, mode: Mode) -> Option<&Value> {
        self.theme_root()?.get("themes")?.get(mode.as_str())
    }

    /// Mutable `themes.{mode}`, for write-back on a copied snapshot.
    pub fn theme_mode_mut(&mut self, mode: Mode) -> Option<&mut Value> {
        let theme = self.theme.as_mut()?;
        let root = if theme.get("brand").is_some() {
            theme.get_mut("brand")?
        } else {
            theme
        };
        root.get_mut("themes")?.get_mut(mode.as_str())
    }

    /// The UI-kit document below an optional top-level `ui-kit` wrapper.
    pub fn ui_kit_root(&self) -> Option<&Value> {
        let kit = self.ui_kit.as_ref()?;
        Some(kit.get("ui-kit").unwrap_or(kit))
    }
}

/// Flattened `dotted.path → $value` view of the token document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenIndex {
    entries: BTreeMap<String, Value>,
}

impl TokenIndex {
    /// Indexes every `$value` leaf. A top-level `tokens` wrapper is skipped.
    pub fn from_document(document: &Value) -> Self {
        let mut index = Self::default();
        let root = document.get("tokens").unwrap_or(document);
        if let Value::Object(map) = root {
            index.collect(map, &mut Vec::new());
        }
        index
    }

    fn collect<'a>(&mut self, map: &'a Map<String, Value>, prefix: &mut Vec<&'a str>) {
        for (key, child) in map {
            if key.starts_with('$') {
                continue;
            }
            prefix.push(key);
            if let Some(value) = child.get("$value") {
                self.entries.insert(prefix.join("."), value.clone());
            } else if let Value::Object(inner) = child {
                self.collect(inner, prefix);
            }
            prefix.pop();
        }
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numeric tokens under `opacity.*` within `(0, 1]`. Numeric strings are accepted.
    pub fn opacity_tokens(&self) -> Vec<OpacityToken> {
        self.entries
            .range("opacity.".to_string()..)
            .take_while(|(key, _)| key.starts_with("opacity."))
            .filter_map(|(key, value)| {
                let number = match value {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse::<f64>().ok(),
                    _ => None,
                }?;
                (number > 0.0 && number <= 1.0).then(|| OpacityToken {
                    name: key.trim_start_matches("opacity.").to_string(),
                    value: number,
                })
            })
            .collect()
    }
}
