//! Type and import mapping tables.
//!
//! Tables are assembled once into a [`ResolverConfig`] and then moved into a
//! resolver. Nothing mutates them afterwards.

use cxxmodel_schema::TypeKey;
use std::collections::{HashMap, HashSet};

/// Target string type. Also the fixed type of map keys and byte payloads.
pub const STRING_TYPE: &str = "std::string";

/// Default ownership wrapper for discriminated models.
pub const SHARED_PTR: &str = "std::shared_ptr";

/// Container used for arrays with unique items when the table has no `set`.
pub const SET_CONTAINER: &str = "std::set";

/// JSON value type used for untyped objects.
pub const JSON_TYPE: &str = "::nlohmann::json";

/// Built-in C++ types that need neither namespacing nor an include.
pub const LANGUAGE_PRIMITIVES: [&str; 8] = [
    "int", "char", "bool", "long", "float", "double", "int32_t", "int64_t",
];

/// Mapping from schema type keys to target type names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMappingTable {
    entries: HashMap<String, String>,
}

impl TypeMappingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the default C++ table.
    #[must_use]
    pub fn cpp() -> Self {
        let mut table = Self::empty();
        for key in [
            TypeKey::String,
            TypeKey::Date,
            TypeKey::DateTime,
            TypeKey::ByteArray,
            TypeKey::Binary,
            TypeKey::Uri,
            TypeKey::Uuid,
            TypeKey::File,
        ] {
            table.insert(key, STRING_TYPE);
        }
        // std::vector becomes std::set for arrays with unique items
        table.insert(TypeKey::Array, "std::vector");
        table.insert(TypeKey::Set, SET_CONTAINER);
        table.insert(TypeKey::Map, "std::map");
        table.insert(TypeKey::Boolean, "bool");
        table.insert(TypeKey::Integer, "int32_t");
        table.insert(TypeKey::Long, "int64_t");
        table.insert(TypeKey::Number, "double");
        table.insert(TypeKey::Object, JSON_TYPE);
        table
    }

    /// Maps a vocabulary key to a target type.
    pub fn insert(&mut self, key: TypeKey, target: impl Into<String>) {
        self.entries.insert(key.as_str().to_string(), target.into());
    }

    /// Maps a model name to an external target type.
    pub fn insert_model(&mut self, model: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(model.into(), target.into());
    }

    /// Looks up the target type for a raw key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Looks up the target type for a vocabulary key.
    #[must_use]
    pub fn get_key(&self, key: TypeKey) -> Option<&str> {
        self.get(key.as_str())
    }

    /// Returns the first vocabulary key mapped to `target`.
    #[must_use]
    pub fn key_for(&self, target: &str) -> Option<TypeKey> {
        TypeKey::ALL
            .into_iter()
            .find(|key| self.get_key(*key) == Some(target))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mapping from target type names to include directives.
///
/// An empty directive means the type is available without an include.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    entries: HashMap<String, String>,
}

impl ImportTable {
    /// Creates an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the default C++ table.
    #[must_use]
    pub fn cpp() -> Self {
        let mut table = Self::empty();
        table.insert("std::vector", "#include <vector>");
        table.insert("std::map", "#include <map>");
        table.insert(SET_CONTAINER, "#include <set>");
        table.insert(STRING_TYPE, "#include <string>");
        table.insert(SHARED_PTR, "#include <memory>");
        // pulled in by the serialization header already
        table.insert(JSON_TYPE, "");
        table
    }

    /// Sets the directive for a target type.
    pub fn insert(&mut self, type_name: impl Into<String>, directive: impl Into<String>) {
        self.entries.insert(type_name.into(), directive.into());
    }

    /// Looks up the directive for a target type.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&str> {
        self.entries.get(type_name).map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Set of built-in target types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePrimitives {
    names: HashSet<String>,
}

impl LanguagePrimitives {
    /// Creates a set from the given names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `name` is a built-in type.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for LanguagePrimitives {
    fn default() -> Self {
        Self::new(LANGUAGE_PRIMITIVES)
    }
}

/// Everything a resolver reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Schema key to target type.
    pub type_mappings: TypeMappingTable,
    /// Target type to include directive.
    pub import_mappings: ImportTable,
    /// Built-in target types.
    pub primitives: LanguagePrimitives,
    /// Ownership wrapper template for discriminated models.
    pub shared_wrapper: String,
}

impl ResolverConfig {
    /// Creates a configuration from explicit tables.
    #[must_use]
    pub fn new(type_mappings: TypeMappingTable, import_mappings: ImportTable) -> Self {
        Self {
            type_mappings,
            import_mappings,
            primitives: LanguagePrimitives::default(),
            shared_wrapper: SHARED_PTR.to_string(),
        }
    }

    /// Replaces the ownership wrapper template.
    #[must_use]
    pub fn with_shared_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.shared_wrapper = wrapper.into();
        self
    }

    /// Replaces the primitive set.
    #[must_use]
    pub fn with_primitives(mut self, primitives: LanguagePrimitives) -> Self {
        self.primitives = primitives;
        self
    }

    /// Returns the container used for arrays with unique items.
    #[must_use]
    pub fn set_container(&self) -> &str {
        self.type_mappings
            .get_key(TypeKey::Set)
            .unwrap_or(SET_CONTAINER)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(TypeMappingTable::cpp(), ImportTable::cpp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpp_table_covers_vocabulary() {
        let table = TypeMappingTable::cpp();
        for key in TypeKey::ALL {
            assert!(table.get_key(key).is_some(), "missing mapping for {key}");
        }
        assert_eq!(table.len(), TypeKey::ALL.len());
        assert_eq!(table.get_key(TypeKey::Integer), Some("int32_t"));
        assert_eq!(table.get_key(TypeKey::Object), Some(JSON_TYPE));
    }

    #[test]
    fn test_key_for_reverse_lookup() {
        let table = TypeMappingTable::cpp();
        assert_eq!(table.key_for("std::string"), Some(TypeKey::String));
        assert_eq!(table.key_for("int64_t"), Some(TypeKey::Long));
        assert_eq!(table.key_for("Pet"), None);
    }

    #[test]
    fn test_import_table_suppresses_json() {
        let imports = ImportTable::cpp();
        assert_eq!(imports.get(JSON_TYPE), Some(""));
        assert_eq!(imports.get(SHARED_PTR), Some("#include <memory>"));
        assert_eq!(imports.get("Pet"), None);
    }

    #[test]
    fn test_set_container_fallback() {
        let mut config = ResolverConfig::new(TypeMappingTable::empty(), ImportTable::empty());
        assert_eq!(config.set_container(), SET_CONTAINER);
        config
            .type_mappings
            .insert(TypeKey::Set, "std::unordered_set");
        assert_eq!(config.set_container(), "std::unordered_set");
    }

    #[test]
    fn test_primitives() {
        let primitives = LanguagePrimitives::default();
        assert!(primitives.contains("int32_t"));
        assert!(!primitives.contains("std::string"));
        let custom = LanguagePrimitives::new(["uint8_t"]);
        assert!(custom.contains("uint8_t"));
        assert!(!custom.contains("int"));
    }
}
