// src/error.rs
use recursica_audit::AuditError;
use recursica_resolver::ResolveError;
use thiserror::Error;

/// Errors surfaced by the engine facade and the CLI.
///
/// Malformed design data never lands here; resolution and audit degrade to
/// `None` or an empty report instead.
#[derive(Error, Debug)]
pub enum RecursicaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Audit failed: {0}")]
    Audit(#[from] AuditError),
}
