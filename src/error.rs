use thiserror::Error;

/// Errors that can occur during recipe import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// No block held a Recipe and the first malformed block is reported
    #[error("JSON-LD script block {block} is not valid JSON")]
    MalformedJson { block: usize },

    /// None of the JSON-LD blocks contained a schema.org Recipe node
    #[error("No schema.org Recipe found in any JSON-LD script on this page")]
    NoRecipeTypeFound,

    /// Input exceeded the configured size bound
    #[error("Input exceeds the {limit} byte limit")]
    InputTooLarge { limit: usize },

    /// Failed to read the input document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the extracted recipe
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
}
