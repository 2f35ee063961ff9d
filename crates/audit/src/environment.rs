//! The style environment the auditor inspects.
//!
//! This abstraction lets the auditor run against a live renderer, a captured
//! snapshot, or a test fixture. Scopes expose their custom properties as
//! `name → value` listings; stylesheets may individually fail to load.

use crate::error::{AuditError, EnvironmentError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Property listing of one scope, keyed by property name.
pub type Properties = BTreeMap<String, String>;

/// Inline and computed properties of the document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootScope {
    pub inline: Properties,
    pub computed: Properties,
}

/// An element with its inline and computed properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementScope {
    /// Human-readable element description used in reports.
    pub selector: String,
    pub inline: Properties,
    pub computed: Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRule {
    pub selector: String,
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSheet {
    pub href: Option<String>,
    pub rules: Vec<StyleRule>,
    /// Rules of a cross-origin sheet cannot be listed.
    pub cross_origin: bool,
}

/// A source of scopes and stylesheets to audit.
pub trait StyleEnvironment: Debug {
    /// `false` when there is nothing to inspect (e.g. no renderer attached).
    fn is_available(&self) -> bool {
        true
    }

    fn root(&self) -> &RootScope;

    fn elements(&self) -> &[ElementScope];

    /// Every stylesheet, or the reason its rules are not readable.
    fn stylesheets(&self) -> Vec<Result<&StyleSheet, EnvironmentError>>;

    /// Live value of a custom property on the root or any element.
    fn lookup(&self, name: &str) -> Option<String> {
        let root = self.root();
        root.inline
            .get(name)
            .or_else(|| root.computed.get(name))
            .or_else(|| {
                self.elements()
                    .iter()
                    .find_map(|el| el.inline.get(name).or_else(|| el.computed.get(name)))
            })
            .cloned()
    }

    /// Returns a human-readable name for this environment (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An environment captured as plain data, e.g. exported from a browser session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotEnvironment {
    pub root: RootScope,
    pub elements: Vec<ElementScope>,
    pub stylesheets: Vec<StyleSheet>,
}

impl SnapshotEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(source: &str) -> Result<Self, AuditError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_root_inline(mut self, name: &str, value: &str) -> Self {
        self.root.inline.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_root_computed(mut self, name: &str, value: &str) -> Self {
        self.root.computed.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_element(mut self, element: ElementScope) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_stylesheet(mut self, sheet: StyleSheet) -> Self {
        self.stylesheets.push(sheet);
        self
    }
}

impl StyleEnvironment for SnapshotEnvironment {
    fn root(&self) -> &RootScope {
        &self.root
    }

    fn elements(&self) -> &[ElementScope] {
        &self.elements
    }

    fn stylesheets(&self) -> Vec<Result<&StyleSheet, EnvironmentError>> {
        self.stylesheets
            .iter()
            .map(|sheet| {
                if sheet.cross_origin {
                    Err(EnvironmentError::CrossOrigin(
                        sheet.href.clone().unwrap_or_else(|| "<inline>".to_string()),
                    ))
                } else {
                    Ok(sheet)
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "snapshot"
    }
}

/// Stand-in for a headless context: nothing to inspect.
#[derive(Debug, Default)]
pub struct UnavailableEnvironment {
    root: RootScope,
    elements: Vec<ElementScope>,
}

impl StyleEnvironment for UnavailableEnvironment {
    fn is_available(&self) -> bool {
        false
    }

    fn root(&self) -> &RootScope {
        &self.root
    }

    fn elements(&self) -> &[ElementScope] {
        &self.elements
    }

    fn stylesheets(&self) -> Vec<Result<&StyleSheet, EnvironmentError>> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}
