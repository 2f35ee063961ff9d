use recursica_types::Mode;
use serde::Deserialize;

/// Maximum reference hops followed before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    pub max_depth: usize,
    pub default_mode: Mode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            default_mode: Mode::Light,
        }
    }
}
