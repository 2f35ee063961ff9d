use thiserror::Error;

/// Failure to read one part of a style environment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    #[error("Stylesheet '{0}' is not readable (cross-origin)")]
    CrossOrigin(String),
}

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
