//! Synthetic schemas of controllable size.

use cxxmodel_schema::{ModelDef, PropertyDef, SchemaNode, StringKind};

/// Builds `depth` alternating arrays and maps around an integer.
#[must_use]
pub fn nested_node(depth: usize) -> SchemaNode {
    (0..depth).fold(SchemaNode::integer(), |inner, level| {
        if level % 2 == 0 {
            SchemaNode::array(inner)
        } else {
            SchemaNode::map(inner)
        }
    })
}

/// Builds a model with `properties` properties cycling through every
/// container shape and a discriminated reference.
#[must_use]
pub fn wide_model(properties: usize) -> ModelDef {
    (0..properties).fold(ModelDef::new("Order"), |model, i| {
        let schema = match i % 4 {
            0 => SchemaNode::StringLike(StringKind::DateTime),
            1 => SchemaNode::array(SchemaNode::object_ref(format!("Line{i}"))),
            2 => SchemaNode::map(SchemaNode::discriminated_ref("Discount")),
            _ => SchemaNode::set(SchemaNode::string()),
        };
        model.with_property(PropertyDef::new(format!("field{i}"), schema))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_node_depth() {
        assert_eq!(nested_node(0), SchemaNode::integer());
        let node = nested_node(5);
        let mut current = &node;
        let mut levels = 0;
        while let Some(inner) = current.inner() {
            current = inner;
            levels += 1;
        }
        assert_eq!(levels, 5);
    }

    #[test]
    fn test_wide_model_size() {
        let model = wide_model(10);
        assert_eq!(model.properties.len(), 10);
        assert!(model.get_property("field9").is_some());
    }
}
