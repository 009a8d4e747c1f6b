//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use cxxmodel::prelude::*;
//! ```

// Schema types
pub use cxxmodel_schema::{
    DiscriminatorLookup, ModelCatalog, ModelDef, ObjectRef, PrimitiveKind, PropertyDef,
    SchemaNode, StringKind, TypeKey,
};

// Resolution
pub use cxxmodel_codegen::{
    CppNaming, DeclTree, ImportTable, ModelImports, NameNormalizer, ResolvedType,
    ResolverConfig, TypeDecl, TypeMappingTable, TypeResolver, compute_imports,
};

// Configuration
pub use cxxmodel_codegen::{CodegenError, ConfigError, GeneratorOptions, TemplateProperties};
pub use cxxmodel_codegen::{resolver_for_catalog, resolver_from_options};
