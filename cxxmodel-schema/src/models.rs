//! Model definitions.
//!
//! A model is a named object schema with an ordered property list. The
//! catalog of all models answers the one question the type resolver asks
//! about them: does a given model declare a discriminator?

use crate::error::SchemaError;
use crate::types::SchemaNode;
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashSet};

/// Answers whether a model is the base of a polymorphic family.
pub trait DiscriminatorLookup {
    /// Returns true if `model_name` declares a discriminator.
    fn has_discriminator(&self, model_name: &str) -> bool;
}

/// Lookup that knows of no discriminated models.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscriminators;

impl DiscriminatorLookup for NoDiscriminators {
    fn has_discriminator(&self, _model_name: &str) -> bool {
        false
    }
}

impl DiscriminatorLookup for HashSet<String> {
    fn has_discriminator(&self, model_name: &str) -> bool {
        self.contains(model_name)
    }
}

impl DiscriminatorLookup for BTreeSet<String> {
    fn has_discriminator(&self, model_name: &str) -> bool {
        self.contains(model_name)
    }
}

impl<T: DiscriminatorLookup + ?Sized> DiscriminatorLookup for &T {
    fn has_discriminator(&self, model_name: &str) -> bool {
        (**self).has_discriminator(model_name)
    }
}

/// Property of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    /// Property name as written in the schema.
    pub name: String,
    /// Property schema.
    pub schema: SchemaNode,
    /// Whether the property is listed under `required`.
    pub required: bool,
}

impl PropertyDef {
    /// Creates an optional property.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: SchemaNode) -> Self {
        Self {
            name: name.into(),
            schema,
            required: false,
        }
    }

    /// Marks the property as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Named object schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDef {
    /// Model name.
    pub name: String,
    /// Discriminator property name, when the model is polymorphic.
    pub discriminator: Option<String>,
    /// Parent model for `allOf` inheritance.
    pub parent: Option<String>,
    /// Properties in declaration order.
    pub properties: Vec<PropertyDef>,
}

impl ModelDef {
    /// Creates a new model without properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discriminator: None,
            parent: None,
            properties: Vec::new(),
        }
    }

    /// Sets the discriminator property name.
    #[must_use]
    pub fn with_discriminator(mut self, property: impl Into<String>) -> Self {
        self.discriminator = Some(property.into());
        self
    }

    /// Sets the parent model.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Appends a property.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns true if the model declares a discriminator.
    #[must_use]
    pub fn has_discriminator(&self) -> bool {
        self.discriminator.is_some()
    }
}

/// All models of a schema, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    models: IndexMap<String, ModelDef>,
}

impl ModelCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model to the catalog.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` if a model with the same
    /// name is already present.
    pub fn add_model(&mut self, model: ModelDef) -> Result<(), SchemaError> {
        if self.models.contains_key(&model.name) {
            return Err(SchemaError::duplicate("model", model.name));
        }
        self.models.insert(model.name.clone(), model);
        Ok(())
    }

    /// Looks up a model by name.
    #[must_use]
    pub fn get_model(&self, name: &str) -> Option<&ModelDef> {
        self.models.get(name)
    }

    /// Returns true if a model with the given name exists.
    #[must_use]
    pub fn has_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Iterates over the models in insertion order.
    pub fn models(&self) -> impl Iterator<Item = &ModelDef> {
        self.models.values()
    }

    /// Returns the number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if the catalog holds no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Returns the names of all discriminated models.
    #[must_use]
    pub fn discriminated_names(&self) -> BTreeSet<String> {
        self.models
            .values()
            .filter(|m| m.has_discriminator())
            .map(|m| m.name.clone())
            .collect()
    }
}

impl DiscriminatorLookup for ModelCatalog {
    fn has_discriminator(&self, model_name: &str) -> bool {
        self.models
            .get(model_name)
            .is_some_and(ModelDef::has_discriminator)
    }
}

impl FromIterator<ModelDef> for ModelCatalog {
    /// Collects models; later duplicates replace earlier ones.
    fn from_iter<I: IntoIterator<Item = ModelDef>>(iter: I) -> Self {
        Self {
            models: iter.into_iter().map(|m| (m.name.clone(), m)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> ModelCatalog {
        let mut catalog = ModelCatalog::new();
        catalog
            .add_model(
                ModelDef::new("Animal")
                    .with_discriminator("kind")
                    .with_property(PropertyDef::new("kind", SchemaNode::string()).required()),
            )
            .unwrap();
        catalog
            .add_model(ModelDef::new("Dog").with_parent("Animal"))
            .unwrap();
        catalog
    }

    #[test]
    fn test_catalog_discriminator_lookup() {
        let catalog = pets();
        assert!(catalog.has_discriminator("Animal"));
        assert!(!catalog.has_discriminator("Dog"));
        assert!(!catalog.has_discriminator("Missing"));
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let mut catalog = pets();
        let err = catalog.add_model(ModelDef::new("Dog")).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateDefinition { .. }));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog: ModelCatalog = ["Zebra", "Ant", "Moose"]
            .into_iter()
            .map(ModelDef::new)
            .collect();
        let names: Vec<_> = catalog.models().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Zebra", "Ant", "Moose"]);
    }

    #[test]
    fn test_set_lookups() {
        let hashed: HashSet<String> = ["Shape".to_string()].into_iter().collect();
        let sorted = pets().discriminated_names();
        assert!(hashed.has_discriminator("Shape"));
        assert!(sorted.has_discriminator("Animal"));
        assert!(!NoDiscriminators.has_discriminator("Animal"));
        assert!((&sorted).has_discriminator("Animal"));
    }

    #[test]
    fn test_model_property_lookup() {
        let catalog = pets();
        let animal = catalog.get_model("Animal").unwrap();
        assert!(animal.get_property("kind").unwrap().required);
        assert!(animal.get_property("name").is_none());
    }
}
