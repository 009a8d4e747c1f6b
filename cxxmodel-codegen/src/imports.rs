//! Include directives for generated models.

use crate::config::{ImportTable, STRING_TYPE};
use crate::naming::NameNormalizer;
use crate::resolver::{ResolvedType, TypeResolver};
use cxxmodel_schema::{DiscriminatorLookup, ModelDef, SchemaNode};
use std::collections::BTreeSet;

/// Computes the deduplicated include directives for a set of types.
///
/// # Arguments
/// * `raw` - Types referenced by a model, duplicates allowed
/// * `imports` - Target type to include directive
///
/// # Returns
/// Sorted directives, never containing an empty string.
#[must_use]
pub fn compute_imports<'a, I>(raw: I, imports: &ImportTable) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a ResolvedType>,
{
    let mut directives = BTreeSet::new();
    for resolved in raw {
        push_directives(resolved, imports, &mut directives);
    }
    directives
}

fn push_directives(resolved: &ResolvedType, imports: &ImportTable, out: &mut BTreeSet<String>) {
    match resolved {
        ResolvedType::Primitive(_) => {}
        ResolvedType::Shared { wrapper, inner } => {
            push_directive(directive_for(wrapper, imports), out);
            push_directives(inner, imports, out);
        }
        ResolvedType::Named(name) | ResolvedType::Model(name) => {
            push_directive(directive_for(name, imports), out);
        }
    }
}

fn push_directive(directive: String, out: &mut BTreeSet<String>) {
    if !directive.is_empty() {
        out.insert(directive);
    }
}

/// Returns the include directive for a single type name.
///
/// Names missing from the table are assumed to be generated models and get
/// an include of their own header.
#[must_use]
pub fn directive_for(name: &str, imports: &ImportTable) -> String {
    match imports.get(name) {
        Some(directive) => directive.to_string(),
        None => {
            tracing::debug!("no import mapping for '{}', including its header", name);
            format!("#include \"{name}.h\"")
        }
    }
}

/// Types referenced by one model, and the includes they need.
#[derive(Debug, Clone, Default)]
pub struct ModelImports {
    /// Every type referenced by the model's properties and parent.
    pub types: BTreeSet<ResolvedType>,
    /// Include directives for those types.
    pub directives: BTreeSet<String>,
}

impl ModelImports {
    /// Collects the imports of a model.
    ///
    /// Walks every property schema, including container items and map
    /// values. The model's own header is never included.
    #[must_use]
    pub fn collect<D, N>(resolver: &TypeResolver<D, N>, model: &ModelDef) -> Self
    where
        D: DiscriminatorLookup,
        N: NameNormalizer,
    {
        let own_name = resolver.model_name(&model.name);
        let mut types = BTreeSet::new();

        if let Some(parent) = &model.parent {
            types.insert(ResolvedType::Model(resolver.model_name(parent)));
        }
        for property in &model.properties {
            collect_node(resolver, &property.schema, &mut types);
        }
        types.remove(&ResolvedType::Model(own_name.clone()));

        let import_mappings = &resolver.config().import_mappings;
        let mut directives = compute_imports(&types, import_mappings);
        // a shared self-reference still names the model inside its wrapper
        directives.remove(&directive_for(&own_name, import_mappings));
        Self { types, directives }
    }
}

fn collect_node<D, N>(resolver: &TypeResolver<D, N>, node: &SchemaNode, out: &mut BTreeSet<ResolvedType>)
where
    D: DiscriminatorLookup,
    N: NameNormalizer,
{
    if node.is_bytes() {
        out.insert(ResolvedType::Named(STRING_TYPE.to_string()));
        return;
    }
    out.insert(resolver.resolve_schema_type(node));
    match node {
        SchemaNode::Array { items, .. } => collect_node(resolver, items, out),
        SchemaNode::Mapping { values } => {
            out.insert(ResolvedType::Named(STRING_TYPE.to_string()));
            collect_node(resolver, values, out);
        }
        _ => {}
    }
}

impl<D, N> TypeResolver<D, N>
where
    D: DiscriminatorLookup,
    N: NameNormalizer,
{
    /// Computes include directives using this resolver's import table.
    #[must_use]
    pub fn compute_imports<'a, I>(&self, raw: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a ResolvedType>,
    {
        compute_imports(raw, &self.config().import_mappings)
    }

    /// Collects the imports of a model.
    #[must_use]
    pub fn model_imports(&self, model: &ModelDef) -> ModelImports {
        ModelImports::collect(self, model)
    }
}
