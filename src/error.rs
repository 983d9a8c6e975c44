use thiserror::Error;

/// Errors that can occur while loading or scaling a recipe
#[derive(Error, Debug)]
pub enum ScaleError {
    /// Input text is not well-formed JSON
    #[error("Failed to parse recipe: {0}")]
    Parse(#[from] serde_json::Error),

    /// Required fields are missing or have the wrong type
    #[error("Recipe does not match the expected schema: {0}")]
    Schema(String),

    /// The recipe declares zero servings, so the scale factor is undefined
    #[error("Recipe servings must be non-zero to compute a scale factor")]
    InvalidServings,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
