//! # cxxmodel Codegen
//!
//! Schema-to-C++ type mapping for model code generation.
//!
//! This crate provides:
//! - Type and import mapping tables with C++ defaults
//! - Schema type resolution and container declarations
//! - Include directive computation for generated models
//! - Model naming and generator options for template rendering
//!
//! Rendering templates and writing files is the host's job; it calls into a
//! [`TypeResolver`] and consumes the strings it returns.

pub mod config;
pub mod decl;
pub mod error;
pub mod imports;
pub mod naming;
pub mod options;
pub mod resolver;

pub use config::{ImportTable, LanguagePrimitives, ResolverConfig, TypeMappingTable};
pub use decl::{DeclTree, TypeDecl};
pub use error::{CodegenError, ConfigError, DeclParseError};
pub use imports::{ModelImports, compute_imports};
pub use naming::{CppNaming, NameNormalizer};
pub use options::{GeneratorOptions, TemplateProperties};
pub use resolver::{ResolvedType, TypeResolver};

use cxxmodel_schema::{ModelCatalog, validate_catalog};

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypeResolver>();
    assert_send_sync::<TypeResolver<&'static ModelCatalog>>();
};

/// Builds a resolver from generator options.
///
/// # Arguments
/// * `options` - Validated or unvalidated generator options
///
/// # Returns
/// A resolver with default naming and no discriminator lookup.
///
/// # Errors
/// Returns `CodegenError` if the options are invalid.
pub fn resolver_from_options(options: &GeneratorOptions) -> Result<TypeResolver, CodegenError> {
    Ok(TypeResolver::new(options.resolver_config()?))
}

/// Validates a model catalog and builds a resolver that consults it for
/// discriminators.
///
/// # Arguments
/// * `catalog` - All models of the schema
/// * `options` - Generator options
///
/// # Errors
/// Returns `CodegenError` if the catalog or the options are invalid.
pub fn resolver_for_catalog<'a>(
    catalog: &'a ModelCatalog,
    options: &GeneratorOptions,
) -> Result<TypeResolver<&'a ModelCatalog>, CodegenError> {
    validate_catalog(catalog)?;
    Ok(resolver_from_options(options)?.with_discriminators(catalog))
}
