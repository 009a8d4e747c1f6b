//! Model catalog validation.
//!
//! Type resolution never fails; a host that prefers to reject inconsistent
//! schemas up front can run these checks before generating anything.

use crate::error::SchemaError;
use crate::models::{ModelCatalog, ModelDef};
use crate::types::SchemaNode;

/// Validates a model catalog for consistency.
///
/// # Arguments
/// * `catalog` - The catalog to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_catalog(catalog: &ModelCatalog) -> Result<(), SchemaError> {
    for model in catalog.models() {
        validate_model(catalog, model)?;
    }
    Ok(())
}

/// Validates a single model against the catalog.
fn validate_model(catalog: &ModelCatalog, model: &ModelDef) -> Result<(), SchemaError> {
    use std::collections::HashSet;

    let mut seen_names = HashSet::new();
    for property in &model.properties {
        if !seen_names.insert(&property.name) {
            return Err(SchemaError::duplicate(
                "property",
                format!("{}.{}", model.name, property.name),
            ));
        }
        validate_references(catalog, model, &property.name, &property.schema)?;
    }

    if let Some(discriminator) = &model.discriminator {
        if model.get_property(discriminator).is_none() {
            return Err(SchemaError::MissingDiscriminatorProperty {
                model: model.name.clone(),
                property: discriminator.clone(),
            });
        }
    }

    if let Some(parent) = &model.parent {
        if !catalog.has_model(parent) {
            return Err(SchemaError::DanglingReference {
                model: model.name.clone(),
                property: "allOf".to_string(),
                target: parent.clone(),
            });
        }
    }

    Ok(())
}

/// Validates every model reference reachable from a property schema.
fn validate_references(
    catalog: &ModelCatalog,
    model: &ModelDef,
    property: &str,
    node: &SchemaNode,
) -> Result<(), SchemaError> {
    match node {
        SchemaNode::ObjectRef(reference) => {
            let Some(target) = catalog.get_model(&reference.name) else {
                return Err(SchemaError::DanglingReference {
                    model: model.name.clone(),
                    property: property.to_string(),
                    target: reference.name.clone(),
                });
            };
            if reference.has_discriminator && !target.has_discriminator() {
                return Err(SchemaError::DiscriminatorMismatch {
                    model: model.name.clone(),
                    property: property.to_string(),
                    target: reference.name.clone(),
                });
            }
            Ok(())
        }
        SchemaNode::Array { items, .. } => validate_references(catalog, model, property, items),
        SchemaNode::Mapping { values } => validate_references(catalog, model, property, values),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyDef;

    fn catalog_with(models: Vec<ModelDef>) -> ModelCatalog {
        let mut catalog = ModelCatalog::new();
        for model in models {
            catalog.add_model(model).expect("unique model names");
        }
        catalog
    }

    #[test]
    fn test_validate_valid_catalog() {
        let catalog = catalog_with(vec![
            ModelDef::new("Shape")
                .with_discriminator("shapeType")
                .with_property(PropertyDef::new("shapeType", SchemaNode::string())),
            ModelDef::new("Drawing").with_property(PropertyDef::new(
                "shapes",
                SchemaNode::array(SchemaNode::discriminated_ref("Shape")),
            )),
        ]);
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_validate_dangling_reference_in_map() {
        let catalog = catalog_with(vec![ModelDef::new("Zoo").with_property(
            PropertyDef::new("pens", SchemaNode::map(SchemaNode::object_ref("Pen"))),
        )]);
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(
            matches!(err, SchemaError::DanglingReference { ref target, .. } if target == "Pen")
        );
    }

    #[test]
    fn test_validate_duplicate_property() {
        let catalog = catalog_with(vec![
            ModelDef::new("Pet")
                .with_property(PropertyDef::new("name", SchemaNode::string()))
                .with_property(PropertyDef::new("name", SchemaNode::integer())),
        ]);
        let result = validate_catalog(&catalog);
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateDefinition { .. })
        ));
    }

    #[test]
    fn test_validate_missing_discriminator_property() {
        let catalog = catalog_with(vec![ModelDef::new("Shape").with_discriminator("kind")]);
        assert!(matches!(
            validate_catalog(&catalog),
            Err(SchemaError::MissingDiscriminatorProperty { .. })
        ));
    }

    #[test]
    fn test_validate_discriminator_mismatch() {
        let catalog = catalog_with(vec![
            ModelDef::new("Leaf"),
            ModelDef::new("Tree").with_property(PropertyDef::new(
                "leaves",
                SchemaNode::set(SchemaNode::discriminated_ref("Leaf")),
            )),
        ]);
        assert!(matches!(
            validate_catalog(&catalog),
            Err(SchemaError::DiscriminatorMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_unknown_parent() {
        let catalog = catalog_with(vec![ModelDef::new("Cat").with_parent("Animal")]);
        assert!(validate_catalog(&catalog).is_err());
    }
}
