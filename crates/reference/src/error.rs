use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReferenceError {
    #[error("Value is neither a string nor a {{\"$value\": string}} wrapper")]
    NotAString,

    #[error("'{0}' is not wrapped in braces")]
    NotDelimited(String),

    #[error("Reference '{0}' is empty after normalization")]
    Empty(String),

    #[error("Reference parse error in '{0}': {1}")]
    Parse(String, String),
}
