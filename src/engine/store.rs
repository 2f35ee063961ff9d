//! Snapshot-and-publish storage for documents and live CSS bindings.
//!
//! Readers hold an `Arc<DocumentSet>` that never changes underneath them.
//! Writers copy the current snapshot, transform the copy, and swap it in.

use recursica_resolver::DocumentSet;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct DocumentStore {
    current: RwLock<Arc<DocumentSet>>,
}

impl DocumentStore {
    pub fn new(documents: DocumentSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(documents)),
        }
    }

    /// The currently published documents.
    pub fn snapshot(&self) -> Arc<DocumentSet> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Applies `transform` to a copy of the current documents and publishes the copy.
    pub fn update<R>(&self, transform: impl FnOnce(&mut DocumentSet) -> R) -> R {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = DocumentSet::clone(&guard);
        let result = transform(&mut next);
        *guard = Arc::new(next);
        result
    }
}

/// Live `--name → value` custom property bindings.
#[derive(Debug, Default)]
pub struct BindingStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl BindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a binding. Returns `true` when the stored value changed.
    pub fn set(&self, name: &str, value: &str) -> bool {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        if values.get(name).map(String::as_str) == Some(value) {
            return false;
        }
        values.insert(name.to_string(), value.to_string());
        true
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.values.read().unwrap_or_else(PoisonError::into_inner).get(name).cloned()
    }

    pub fn remove(&self, name: &str) -> Option<String> {
        self.values.write().unwrap_or_else(PoisonError::into_inner).remove(name)
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn readers_keep_their_snapshot_across_updates() {
        let store = DocumentStore::new(DocumentSet::new().with_tokens(json!({ "a": { "$value": 1 } })));
        let before = store.snapshot();
        store.update(|docs| docs.tokens = Some(json!({ "a": { "$value": 2 } })));
        assert_eq!(before.tokens, Some(json!({ "a": { "$value": 1 } })));
        assert_eq!(store.snapshot().tokens, Some(json!({ "a": { "$value": 2 } })));
    }

    #[test]
    fn update_returns_transform_result() {
        let store = DocumentStore::default();
        let touched = store.update(|docs| {
            docs.theme = Some(json!({}));
            true
        });
        assert!(touched);
        assert!(store.snapshot().theme.is_some());
    }

    #[test]
    fn binding_set_reports_changes() {
        let bindings = BindingStore::new();
        assert!(bindings.set("--recursica-x", "1px"));
        assert!(!bindings.set("--recursica-x", "1px"));
        assert!(bindings.set("--recursica-x", "2px"));
        assert_eq!(bindings.get("--recursica-x").as_deref(), Some("2px"));
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.remove("--recursica-x").as_deref(), Some("2px"));
        assert!(bindings.is_empty());
    }
}
