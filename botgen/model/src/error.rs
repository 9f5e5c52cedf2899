//! Errors raised while building an [`ApiDescription`](crate::ApiDescription).

use thiserror::Error;

/// Errors during schema parsing and model construction.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The schema document is not valid JSON, or does not have the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two type entries share the same canonical name.
    #[error("Duplicate type name '{0}'")]
    DuplicateType(String),

    /// Two method entries share the same canonical name.
    #[error("Duplicate method name '{0}'")]
    DuplicateMethod(String),

    /// An entry's inner `name` disagrees with the key it is stored under.
    #[error("Entry stored under key '{key}' is named '{name}'")]
    NameMismatch {
        /// The key of the entry in the schema document.
        key: String,
        /// The name declared inside the entry.
        name: String,
    },
}
