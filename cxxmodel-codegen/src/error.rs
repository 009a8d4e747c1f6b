//! Error types for configuration and declaration parsing.
//!
//! Type resolution itself never fails; these cover the edges around it.

use thiserror::Error;

/// Error type for generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax or shape error.
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Package name that does not map to a C++ namespace.
    #[error("invalid package '{package}': {reason}")]
    InvalidPackage {
        /// Package as configured.
        package: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Override for a key outside the type-key vocabulary.
    #[error("unknown type key '{key}' in [type_mappings]")]
    UnknownTypeKey {
        /// Offending key.
        key: String,
    },

    /// Mapping with an empty key or target.
    #[error("empty entry in [{table}] for key '{key}'")]
    EmptyMapping {
        /// Table name.
        table: String,
        /// Key of the entry.
        key: String,
    },
}

impl ConfigError {
    /// Creates an invalid package error.
    pub fn invalid_package(package: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPackage {
            package: package.into(),
            reason: reason.into(),
        }
    }
}

/// Error type for reading a type declaration back into a tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeclParseError {
    /// Input ended inside a template argument list.
    #[error("unexpected end of declaration, expected '{expected}'")]
    UnexpectedEnd {
        /// What was expected.
        expected: char,
    },

    /// Character not valid at this position.
    #[error("unexpected '{found}' at byte {position}")]
    UnexpectedChar {
        /// Character found.
        found: char,
        /// Byte offset.
        position: usize,
    },

    /// Missing type name.
    #[error("expected a type name at byte {position}")]
    EmptyName {
        /// Byte offset.
        position: usize,
    },
}

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Schema model error.
    #[error("schema error: {0}")]
    Schema(#[from] cxxmodel_schema::SchemaError),
}
