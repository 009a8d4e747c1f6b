//! # cxxmodel
//!
//! Schema-to-C++ type mapping for OpenAPI model generators.
//!
//! Given an in-memory schema tree, cxxmodel decides which C++ type each
//! construct maps to, how generated model files are named and namespaced,
//! and which `#include` directives each model needs.
//!
//! ## Features
//!
//! - **Table-driven mapping** - Schema keys to C++ types, with overrides from TOML
//! - **Container declarations** - `std::vector`, `std::set` for unique items, `std::map`
//! - **Polymorphism** - Discriminated models are held as `std::shared_ptr<T>`
//! - **Include computation** - Deduplicated, sorted directives per model
//!
//! ## Quick Start
//!
//! ```
//! use cxxmodel::prelude::*;
//!
//! let resolver = TypeResolver::default();
//! let node = SchemaNode::array(SchemaNode::map(SchemaNode::integer()));
//! assert_eq!(
//!     resolver.get_type_declaration(&node),
//!     "std::vector<std::map<std::string, int32_t>>"
//! );
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema nodes, type keys and the model catalog
//! - [`codegen`] - Type resolution, imports, naming and options

pub mod prelude;

/// Schema nodes, type keys and the model catalog.
pub mod schema {
    pub use cxxmodel_schema::*;
}

/// Type resolution, imports, naming and generator options.
pub mod codegen {
    pub use cxxmodel_codegen::*;
}

// Re-export commonly used items at the crate root
pub use cxxmodel_codegen::{
    GeneratorOptions, ResolvedType, ResolverConfig, TypeDecl, TypeResolver, compute_imports,
};
pub use cxxmodel_schema::{ModelCatalog, ModelDef, SchemaNode, TypeKey};
