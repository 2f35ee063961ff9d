// src/engine/builder.rs
use super::Recursica;
use super::config::RecursicaConfig;
use crate::error::RecursicaError;
use recursica_audit::AuditConfig;
use recursica_resolver::{DocumentSet, ResolverConfig};
use recursica_types::Mode;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

fn read_json(path: &Path, what: &str) -> Result<Value, RecursicaError> {
    let source = fs::read_to_string(path).map_err(|e| {
        RecursicaError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read {} from '{}': {}", what, path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&source)?)
}

/// A builder for creating a [`Recursica`] engine.
#[derive(Debug, Default)]
pub struct RecursicaBuilder {
    documents: DocumentSet,
    mode: Option<Mode>,
    config: RecursicaConfig,
}

impl RecursicaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the token document from a JSON file.
    pub fn with_tokens_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, RecursicaError> {
        self.documents.tokens = Some(read_json(path.as_ref(), "tokens")?);
        Ok(self)
    }

    pub fn with_tokens_source(mut self, source: &str) -> Result<Self, RecursicaError> {
        self.documents.tokens = Some(serde_json::from_str(source)?);
        Ok(self)
    }

    pub fn with_tokens(mut self, tokens: Value) -> Self {
        self.documents.tokens = Some(tokens);
        self
    }

    /// Loads the theme (brand) document from a JSON file.
    pub fn with_theme_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, RecursicaError> {
        self.documents.theme = Some(read_json(path.as_ref(), "theme")?);
        Ok(self)
    }

    pub fn with_theme_source(mut self, source: &str) -> Result<Self, RecursicaError> {
        self.documents.theme = Some(serde_json::from_str(source)?);
        Ok(self)
    }

    pub fn with_theme(mut self, theme: Value) -> Self {
        self.documents.theme = Some(theme);
        self
    }

    /// Loads the UI-kit document from a JSON file.
    pub fn with_ui_kit_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, RecursicaError> {
        self.documents.ui_kit = Some(read_json(path.as_ref(), "ui-kit")?);
        Ok(self)
    }

    pub fn with_ui_kit_source(mut self, source: &str) -> Result<Self, RecursicaError> {
        self.documents.ui_kit = Some(serde_json::from_str(source)?);
        Ok(self)
    }

    pub fn with_ui_kit(mut self, ui_kit: Value) -> Self {
        self.documents.ui_kit = Some(ui_kit);
        self
    }

    /// Loads resolver and audit settings from a JSON config file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, RecursicaError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        self.config = RecursicaConfig::from_json(&source)
            .map_err(|e| RecursicaError::Config(format!("Invalid config '{}': {}", path.display(), e)))?;
        Ok(self)
    }

    /// The mode brand references resolve under. Defaults to the resolver config's `default_mode`.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_resolver_config(mut self, config: ResolverConfig) -> Self {
        self.config.resolver = config;
        self
    }

    pub fn with_audit_config(mut self, config: AuditConfig) -> Self {
        self.config.audit = config;
        self
    }

    /// Consumes the builder and creates the engine.
    pub fn build(self) -> Result<Recursica, RecursicaError> {
        let docs = &self.documents;
        if docs.tokens.is_none() && docs.theme.is_none() && docs.ui_kit.is_none() {
            return Err(RecursicaError::Config(
                "No documents have been configured. Use `with_tokens_file`, `with_theme_file`, or `with_ui_kit_file`."
                    .to_string(),
            ));
        }
        if self.config.resolver.max_depth == 0 {
            return Err(RecursicaError::Config("Resolver max depth must be at least 1".to_string()));
        }
        let mode = self.mode.unwrap_or(self.config.resolver.default_mode);
        log::debug!(
            "Building engine (mode={}, tokens={}, theme={}, ui-kit={})",
            mode,
            docs.tokens.is_some(),
            docs.theme.is_some(),
            docs.ui_kit.is_some()
        );
        Ok(Recursica::new(self.documents, mode, self.config))
    }
}
