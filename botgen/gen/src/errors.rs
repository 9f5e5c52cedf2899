//! Error types for the botgen generator.

use botgen_model::ModelError;
use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant that concerns a schema entry carries an `entity` path naming
/// it (e.g. `sendMessage > chat_id`), so the top-level message always points at
/// the offending type, method or field.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to read the schema document
    #[error("Failed to read schema '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the schema document
    #[error("Failed to parse schema: {0}")]
    ParseError(#[from] ModelError),

    /// A required top-level type or field convention is absent.
    #[error("Schema integrity error for '{entity}': {reason}")]
    SchemaIntegrity {
        /// The missing or malformed schema entry.
        entity: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A field has no usable preferred type, or an entity-identity field
    /// cannot be located during correlation.
    #[error("Type resolution failed for '{entity}': {reason}")]
    TypeResolution {
        /// Path of the field or type that failed to resolve.
        entity: String,
        /// Why resolution failed.
        reason: String,
    },

    /// Template substitution produced something that is not valid output.
    #[error("Render failed for '{entity}': {reason}")]
    Render {
        /// The declaration being rendered.
        entity: String,
        /// Why rendering failed.
        reason: String,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A generated file on disk differs from what the schema produces.
    #[error("Generated file '{path}' is out of date; re-run botgen")]
    OutOfDate { path: String },
}

impl GeneratorError {
    /// Creates a `SchemaIntegrity` error.
    pub fn integrity(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaIntegrity {
            entity: entity.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `TypeResolution` error.
    pub fn resolution(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TypeResolution {
            entity: entity.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `Render` error.
    pub fn render(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Render {
            entity: entity.into(),
            reason: reason.into(),
        }
    }

    /// Prefixes the entity path with an enclosing schema entry.
    ///
    /// Errors without an entity path are returned unchanged.
    ///
    /// ## Examples
    ///
    /// ```
    /// use botgen_gen::errors::GeneratorError;
    ///
    /// let err = GeneratorError::resolution("chat_id", "no candidate types").within("sendMessage");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Type resolution failed for 'sendMessage > chat_id': no candidate types"
    /// );
    /// ```
    pub fn within(self, outer: &str) -> Self {
        match self {
            Self::SchemaIntegrity { entity, reason } => Self::SchemaIntegrity {
                entity: format!("{outer} > {entity}"),
                reason,
            },
            Self::TypeResolution { entity, reason } => Self::TypeResolution {
                entity: format!("{outer} > {entity}"),
                reason,
            },
            Self::Render { entity, reason } => Self::Render {
                entity: format!("{outer} > {entity}"),
                reason,
            },
            other => other,
        }
    }

    /// Returns the entity path for errors that concern a schema entry.
    pub fn entity(&self) -> Option<&str> {
        match self {
            Self::SchemaIntegrity { entity, .. }
            | Self::TypeResolution { entity, .. }
            | Self::Render { entity, .. } => Some(entity),
            _ => None,
        }
    }
}
