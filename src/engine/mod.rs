//! The engine facade tying documents, resolution, audit, and recheck together.
//!
//! - [`RecursicaBuilder`]: loads documents and configuration
//! - [`DocumentStore`] / [`BindingStore`]: published documents and live CSS bindings
//! - [`EventBus`]: `on_bindings_changed` / `on_family_changed` subscriptions
//!
//! # Example
//!
//! ```ignore
//! use recursica::{RecursicaBuilder, RecheckTrigger};
//!
//! let engine = RecursicaBuilder::new()
//!     .with_tokens_file("tokens.json")?
//!     .with_theme_file("brand.json")?
//!     .build()?;
//!
//! let name = engine.css_var("{brand.palettes.neutral.500.color.tone}");
//! let report = engine.recheck(&RecheckTrigger::FamilyChanged("neutral".into()))?;
//! ```

mod builder;
pub mod config;
pub mod events;
pub mod recheck;
pub mod store;

pub use builder::RecursicaBuilder;

use crate::error::RecursicaError;
use config::RecursicaConfig;
use events::{EventBus, ThemeEvent};
use recheck::{
    RecheckInputs, RecheckReport, RecheckTrigger, affected_families, evaluate_family, on_tone_binding,
    write_on_tone,
};
use recursica_audit::{AuditReport, Auditor, StyleEnvironment};
use recursica_resolver::{DocumentSet, ResolveError, Resolver};
use recursica_types::Mode;
use serde_json::Value;
use std::sync::Arc;
use store::{BindingStore, DocumentStore};

#[derive(Debug)]
pub struct Recursica {
    documents: DocumentStore,
    bindings: BindingStore,
    events: EventBus,
    mode: Mode,
    config: RecursicaConfig,
}

impl Recursica {
    pub(crate) fn new(documents: DocumentSet, mode: Mode, config: RecursicaConfig) -> Self {
        Self {
            documents: DocumentStore::new(documents),
            bindings: BindingStore::new(),
            events: EventBus::new(),
            mode,
            config,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &RecursicaConfig {
        &self.config
    }

    pub fn documents(&self) -> Arc<DocumentSet> {
        self.documents.snapshot()
    }

    pub fn document_store(&self) -> &DocumentStore {
        &self.documents
    }

    pub fn bindings(&self) -> &BindingStore {
        &self.bindings
    }

    pub fn on_bindings_changed(&self) -> async_channel::Receiver<ThemeEvent> {
        self.events.on_bindings_changed()
    }

    pub fn on_family_changed(&self) -> async_channel::Receiver<ThemeEvent> {
        self.events.on_family_changed()
    }

    /// A resolver over the currently published documents.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.documents.snapshot(), self.config.resolver.clone())
    }

    pub fn css_var(&self, reference: &str) -> Option<String> {
        self.resolver().css_var(reference, self.mode)
    }

    pub fn resolve_value(&self, value: &Value) -> Option<Value> {
        self.resolver().value(value, self.mode)
    }

    pub fn try_resolve_value(&self, value: &Value) -> Result<Value, ResolveError> {
        self.resolver().try_value(value, self.mode)
    }

    pub fn resolve_str(&self, reference: &str) -> Option<String> {
        self.resolver().value_str(reference, self.mode)
    }

    pub fn audit(&self, env: &dyn StyleEnvironment) -> AuditReport {
        Auditor::new(self.config.audit.clone()).audit(env)
    }

    /// Recomputes on-tones for the palette levels affected by `trigger`.
    ///
    /// The chosen on-tone references are written into a copy of the theme that
    /// is then published, the matching CSS bindings are updated, and
    /// subscribers are notified.
    pub fn recheck(&self, trigger: &RecheckTrigger) -> Result<RecheckReport, RecursicaError> {
        let mode = self.mode;
        let resolver = self.resolver();
        let theme_mode = resolver.documents().theme_mode(mode).ok_or_else(|| {
            RecursicaError::Config(format!("Theme document has no 'themes.{}' section", mode))
        })?;

        let inputs = RecheckInputs::read(&resolver, theme_mode, mode);
        let levels: Vec<_> = affected_families(theme_mode, trigger)
            .iter()
            .flat_map(|family| evaluate_family(&resolver, theme_mode, family, &inputs, mode))
            .collect();
        log::debug!("Recheck {:?} evaluated {} levels", trigger, levels.len());

        self.documents.update(|docs| {
            if let Some(theme_mode) = docs.theme_mode_mut(mode) {
                for l in &levels {
                    write_on_tone(theme_mode, &l.level.family, &l.key, l.level.on_tone);
                }
            }
        });

        let mut changed_bindings = Vec::new();
        for l in &levels {
            let (name, value) = on_tone_binding(&l.level.family, l.level.level, l.level.on_tone, mode);
            if self.bindings.set(&name, &value) {
                changed_bindings.push((name, value));
            }
        }

        if !changed_bindings.is_empty() {
            let names = changed_bindings.iter().map(|(name, _)| name.clone()).collect();
            self.events.publish(ThemeEvent::BindingsChanged { names });
        }
        if let Some(family) = trigger.family() {
            self.events.publish(ThemeEvent::FamilyChanged {
                family: family.to_string(),
                mode,
            });
        }

        Ok(RecheckReport {
            mode,
            levels,
            changed_bindings,
        })
    }
}
