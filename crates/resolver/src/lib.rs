//! Reference resolution against a loaded [`DocumentSet`].
//!
//! Two independent outputs come from the same parsed reference:
//!
//! - a CSS custom property name ([`resolve_token_reference_to_css_var`]), a pure
//!   function of the reference that never reads a document;
//! - a concrete value ([`resolve_token_reference_to_value`]), found by walking
//!   the token index, the mode-qualified theme, or the UI-kit document and
//!   following reference chains until a plain value is reached.

pub mod config;
pub mod documents;
pub mod error;
pub mod naming;
pub mod value;

pub use config::{DEFAULT_MAX_DEPTH, ResolverConfig};
pub use documents::{DocumentSet, TokenIndex};
pub use error::ResolveError;
pub use naming::{BrandShape, CSS_VAR_PREFIX, ToneRole, brand_css_var, resolve_token_reference_to_css_var};
pub use value::{ResolutionContext, resolve_token_reference_to_value, try_resolve_value};

use recursica_reference::{Mode, parse_reference_str};
use serde_json::Value;
use std::sync::Arc;

/// A resolver bound to one document snapshot.
#[derive(Debug, Clone)]
pub struct Resolver {
    documents: Arc<DocumentSet>,
    index: Option<TokenIndex>,
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(documents: Arc<DocumentSet>, config: ResolverConfig) -> Self {
        let index = documents.tokens.as_ref().map(TokenIndex::from_document);
        Self {
            documents,
            index,
            config,
        }
    }

    pub fn documents(&self) -> &Arc<DocumentSet> {
        &self.documents
    }

    pub fn token_index(&self) -> Option<&TokenIndex> {
        self.index.as_ref()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn context(&self) -> ResolutionContext<'_> {
        ResolutionContext::new(&self.documents, self.index.as_ref(), self.config.max_depth)
    }

    /// Parses `reference` under `mode` and names it.
    pub fn css_var(&self, reference: &str, mode: Mode) -> Option<String> {
        parse_reference_str(reference, mode)
            .as_ref()
            .and_then(resolve_token_reference_to_css_var)
    }

    pub fn value(&self, value: &Value, mode: Mode) -> Option<Value> {
        resolve_token_reference_to_value(value, &self.context(), mode)
    }

    pub fn try_value(&self, value: &Value, mode: Mode) -> Result<Value, ResolveError> {
        try_resolve_value(value, &self.context(), mode)
    }

    /// Resolves to a string, for color and dimension lookups.
    pub fn value_str(&self, reference: &str, mode: Mode) -> Option<String> {
        match self.value(&Value::String(reference.to_string()), mode)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
