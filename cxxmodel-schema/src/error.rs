//! Error types for schema model construction and validation.

use thiserror::Error;

/// Error type for schema model operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Name outside the fixed type-key vocabulary.
    #[error("unknown type key '{key}'")]
    UnknownTypeKey {
        /// Offending key.
        key: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (model, property).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Reference to a model missing from the catalog.
    #[error("model '{model}' property '{property}' references unknown model '{target}'")]
    DanglingReference {
        /// Model holding the property.
        model: String,
        /// Property name.
        property: String,
        /// Referenced model name.
        target: String,
    },

    /// Discriminator disagreement between a reference and its target.
    #[error(
        "model '{model}' property '{property}' disagrees with '{target}' about its discriminator"
    )]
    DiscriminatorMismatch {
        /// Model holding the property.
        model: String,
        /// Property name.
        property: String,
        /// Referenced model name.
        target: String,
    },

    /// Discriminator property not declared on its model.
    #[error("discriminator property '{property}' not declared on model '{model}'")]
    MissingDiscriminatorProperty {
        /// Model name.
        model: String,
        /// Discriminator property name.
        property: String,
    },
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
