//! # cxxmodel Schema
//!
//! In-memory schema model consumed by the C++ type resolver.
//!
//! This crate provides:
//! - Schema nodes for primitives, strings, arrays, maps and model references
//! - The fixed type-key vocabulary used by type mapping tables
//! - Model definitions and a catalog answering discriminator lookups
//! - Optional catalog validation
//!
//! Parsing OpenAPI documents is left to the host; it builds these values
//! directly.

pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use models::{DiscriminatorLookup, ModelCatalog, ModelDef, NoDiscriminators, PropertyDef};
pub use types::{ObjectRef, PrimitiveKind, SchemaNode, SchemaType, StringKind, TypeKey};
pub use validation::validate_catalog;
