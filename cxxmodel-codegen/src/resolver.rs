//! Schema type resolution.
//!
//! Maps each [`SchemaNode`] to the C++ type used for it in a generated
//! model, and builds fully parameterized declarations for containers.

use crate::config::{ResolverConfig, STRING_TYPE};
use crate::decl::TypeDecl;
use crate::naming::{CppNaming, NameNormalizer, escape_model_name, is_reserved_word};
use cxxmodel_schema::{DiscriminatorLookup, NoDiscriminators, SchemaNode, SchemaType, TypeKey};
use std::fmt;

/// Target type chosen for a single schema node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResolvedType {
    /// Built-in type such as `int32_t`; needs no include.
    Primitive(String),
    /// Type taken from the mapping table, e.g. `std::vector`.
    Named(String),
    /// Generated model type.
    Model(String),
    /// Ownership wrapper around a discriminated model.
    Shared {
        /// Wrapper template, e.g. `std::shared_ptr`.
        wrapper: String,
        /// Wrapped type.
        inner: Box<ResolvedType>,
    },
}

impl ResolvedType {
    /// Returns the outermost type name (the wrapper for shared types).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(name) | Self::Named(name) | Self::Model(name) => name,
            Self::Shared { wrapper, .. } => wrapper,
        }
    }

    /// Returns true for built-in types.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns true for ownership-wrapped types.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::Shared { .. })
    }

    /// Returns the wrapped type of a shared type.
    #[must_use]
    pub fn shared_inner(&self) -> Option<&ResolvedType> {
        match self {
            Self::Shared { inner, .. } => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(name) | Self::Named(name) | Self::Model(name) => f.write_str(name),
            Self::Shared { wrapper, inner } => write!(f, "{wrapper}<{inner}>"),
        }
    }
}

/// Resolves schema nodes to C++ types.
///
/// Holds its configuration by value; every method takes `&self` and has no
/// side effects beyond logging, so one resolver can serve many threads.
#[derive(Debug, Clone)]
pub struct TypeResolver<D = NoDiscriminators, N = CppNaming> {
    config: ResolverConfig,
    discriminators: D,
    naming: N,
}

impl TypeResolver {
    /// Creates a resolver with default naming and no discriminator lookup.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            discriminators: NoDiscriminators,
            naming: CppNaming,
        }
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl<D, N> TypeResolver<D, N>
where
    D: DiscriminatorLookup,
    N: NameNormalizer,
{
    /// Replaces the discriminator lookup.
    #[must_use]
    pub fn with_discriminators<D2: DiscriminatorLookup>(self, discriminators: D2) -> TypeResolver<D2, N> {
        TypeResolver {
            config: self.config,
            discriminators,
            naming: self.naming,
        }
    }

    /// Replaces the name normalizer.
    #[must_use]
    pub fn with_naming<N2: NameNormalizer>(self, naming: N2) -> TypeResolver<D, N2> {
        TypeResolver {
            config: self.config,
            discriminators: self.discriminators,
            naming,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns true if the unique-items container override applies to `node`.
    #[must_use]
    pub fn is_container_override_applicable(&self, node: &SchemaNode) -> bool {
        matches!(
            node,
            SchemaNode::Array {
                unique_items: true,
                ..
            }
        )
    }

    /// Resolves the type of a single node, without container parameters.
    ///
    /// # Arguments
    /// * `node` - Schema node to resolve
    ///
    /// # Returns
    /// The target type. Unknown keys fall back to the normalized raw name.
    #[must_use]
    pub fn resolve_schema_type(&self, node: &SchemaNode) -> ResolvedType {
        let key = node.type_key();

        let resolved = match self.lookup(key) {
            Some(mapped) if self.config.primitives.contains(mapped) => {
                return ResolvedType::Primitive(mapped.to_string());
            }
            Some(_) if self.is_container_override_applicable(node) => {
                ResolvedType::Named(self.config.set_container().to_string())
            }
            Some(mapped) => ResolvedType::Named(mapped.to_string()),
            None => self.passthrough(key),
        };

        match node.as_object_ref() {
            Some(reference)
                if reference.has_discriminator
                    || self.discriminators.has_discriminator(&reference.name) =>
            {
                tracing::trace!("wrapping discriminated model '{}'", reference.name);
                ResolvedType::Shared {
                    wrapper: self.config.shared_wrapper.clone(),
                    inner: Box::new(resolved),
                }
            }
            _ => resolved,
        }
    }

    /// Builds the fully parameterized declaration of a node.
    #[must_use]
    pub fn type_declaration(&self, node: &SchemaNode) -> TypeDecl {
        match node {
            SchemaNode::Array { items, .. } => TypeDecl::Generic {
                base: self.resolve_schema_type(node),
                args: vec![self.type_declaration(items)],
            },
            SchemaNode::Mapping { values } => TypeDecl::Generic {
                base: self.resolve_schema_type(node),
                args: vec![
                    TypeDecl::Leaf(ResolvedType::Named(STRING_TYPE.to_string())),
                    self.type_declaration(values),
                ],
            },
            // byte payloads are strings whatever the table says
            _ if node.is_bytes() => TypeDecl::Leaf(ResolvedType::Named(STRING_TYPE.to_string())),
            _ => TypeDecl::Leaf(self.resolve_schema_type(node)),
        }
    }

    /// Returns the declaration string of a node, e.g. `std::vector<int32_t>`.
    #[must_use]
    pub fn get_type_declaration(&self, node: &SchemaNode) -> String {
        self.type_declaration(node).to_string()
    }

    /// Returns the normalized model name for a schema name.
    ///
    /// A normalized name that collides with a built-in type or keyword is
    /// prefixed so that a schema literally named `int` stays a model.
    #[must_use]
    pub fn model_name(&self, name: &str) -> String {
        let normalized = self.naming.to_model_name(name);
        if self.config.primitives.contains(&normalized) || is_reserved_word(&normalized) {
            let escaped = escape_model_name(&normalized);
            tracing::debug!(
                "model name '{}' collides with a built-in, using '{}'",
                name,
                escaped
            );
            return escaped;
        }
        normalized
    }

    /// Looks a node key up in the mapping table.
    ///
    /// Model references never hit vocabulary entries, so a model named
    /// `integer` is not mistaken for the integer type.
    fn lookup(&self, key: SchemaType<'_>) -> Option<&str> {
        match key {
            SchemaType::Key(key) => self.config.type_mappings.get_key(key),
            SchemaType::Model(name) if TypeKey::from_name(name).is_some() => None,
            SchemaType::Model(name) => self.config.type_mappings.get(name),
        }
    }

    fn passthrough(&self, key: SchemaType<'_>) -> ResolvedType {
        if let SchemaType::Key(key) = key {
            tracing::debug!("no type mapping for '{}', passing name through", key);
        }
        ResolvedType::Model(self.model_name(key.as_str()))
    }
}
