use recursica_audit::AuditConfig;
use recursica_resolver::ResolverConfig;
use serde::Deserialize;

/// File-level configuration, e.g. `recursica.json`:
///
/// ```json
/// { "resolver": { "maxDepth": 10, "defaultMode": "dark" },
///   "audit": { "componentPrefixes": ["--button-"] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecursicaConfig {
    pub resolver: ResolverConfig,
    pub audit: AuditConfig,
}

impl RecursicaConfig {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}
