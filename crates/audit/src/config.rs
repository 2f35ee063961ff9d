use serde::Deserialize;

/// Variables computed per component instance; they never live on the root.
pub const DEFAULT_INSTANCE_VARIABLES: &[&str] = &[
    "--recursica-instance-width",
    "--recursica-instance-height",
    "--recursica-slider-fill-percent",
    "--recursica-tooltip-arrow-offset",
    "--recursica-toast-offset",
];

/// Component variable prefixes allowed to fall back to undefined token variables.
pub const DEFAULT_COMPONENT_PREFIXES: &[&str] = &[
    "--accordion-",
    "--avatar-",
    "--badge-",
    "--button-",
    "--chip-",
    "--dropdown-",
    "--label-",
    "--menu-",
    "--slider-",
    "--switch-",
    "--tabs-",
    "--toast-",
    "--tooltip-",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditConfig {
    /// Only variables with this prefix are collected and checked.
    pub prefix: String,
    /// Maximum chain length followed by the circular check.
    pub max_depth: usize,
    pub instance_variables: Vec<String>,
    pub component_prefixes: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            prefix: "--recursica-".to_string(),
            max_depth: 10,
            instance_variables: DEFAULT_INSTANCE_VARIABLES.iter().map(|s| s.to_string()).collect(),
            component_prefixes: DEFAULT_COMPONENT_PREFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
