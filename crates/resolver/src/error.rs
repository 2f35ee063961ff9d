use thiserror::Error;

/// Why a reference did not resolve to a value.
///
/// The lenient resolver entry points collapse all of these into `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Reference '{0}' has an unrecognized namespace")]
    UnknownNamespace(String),

    #[error("No {0} document is loaded")]
    MissingDocument(&'static str),

    #[error("Reference '{0}' does not point at anything")]
    NotFound(String),

    #[error("Reference chain exceeded depth {depth} at '{path}'")]
    DepthExceeded { path: String, depth: usize },

    #[error("Reference '{0}' refers back to itself")]
    Cycle(String),
}
