use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Where a property was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    RootInline,
    RootComputed,
    ElementInline,
    ElementComputed,
    Stylesheet,
}

impl Location {
    pub fn is_inline(&self) -> bool {
        matches!(self, Location::RootInline | Location::ElementInline)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::RootInline => "root-inline",
            Location::RootComputed => "root-computed",
            Location::ElementInline => "element-inline",
            Location::ElementComputed => "element-computed",
            Location::Stylesheet => "stylesheet",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A custom property definition as materialized in the environment.
///
/// When both inline and computed sources define a name, the inline value wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub name: String,
    pub value: String,
    pub locations: BTreeSet<Location>,
}

impl Binding {
    pub fn has_inline(&self) -> bool {
        self.locations.iter().any(Location::is_inline)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrokenReason {
    /// The referenced variable is defined nowhere.
    NotDefined,
    /// Following the reference leads back to a variable already on the chain.
    Circular,
    /// `var(` without a parseable variable name.
    InvalidSyntax,
    /// A `{...}` reference that was never resolved.
    BraceNotation,
}

impl BrokenReason {
    pub const ALL: [BrokenReason; 4] = [
        BrokenReason::NotDefined,
        BrokenReason::Circular,
        BrokenReason::InvalidSyntax,
        BrokenReason::BraceNotation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrokenReason::NotDefined => "not-defined",
            BrokenReason::Circular => "circular",
            BrokenReason::InvalidSyntax => "invalid-syntax",
            BrokenReason::BraceNotation => "brace-notation",
        }
    }
}

impl fmt::Display for BrokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenReference {
    /// The property whose value holds the faulty reference.
    pub variable: String,
    pub value: String,
    pub referenced_var: Option<String>,
    pub reason: BrokenReason,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}
