//! Schema node definitions.
//!
//! This module contains the in-memory representation of an OpenAPI schema
//! tree as seen by the type resolver: primitives, string-like formats,
//! arrays, maps, named model references and untyped JSON objects.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Schema-level type key.
///
/// This is the fixed vocabulary used as keys of the type mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeKey {
    /// `string`
    #[serde(rename = "string")]
    String,
    /// `array`
    #[serde(rename = "array")]
    Array,
    /// `set` (array with unique items)
    #[serde(rename = "set")]
    Set,
    /// `map`
    #[serde(rename = "map")]
    Map,
    /// `boolean`
    #[serde(rename = "boolean")]
    Boolean,
    /// `integer` (32 bit)
    #[serde(rename = "integer")]
    Integer,
    /// `long` (64 bit integer)
    #[serde(rename = "long")]
    Long,
    /// `number`
    #[serde(rename = "number")]
    Number,
    /// `object` (untyped JSON object)
    #[serde(rename = "object")]
    Object,
    /// `date`
    #[serde(rename = "date")]
    Date,
    /// `date-time`
    #[serde(rename = "date-time")]
    DateTime,
    /// `byte-array`
    #[serde(rename = "byte-array")]
    ByteArray,
    /// `binary`
    #[serde(rename = "binary")]
    Binary,
    /// `uri`
    #[serde(rename = "uri")]
    Uri,
    /// `uuid`
    #[serde(rename = "uuid")]
    Uuid,
    /// `file`
    #[serde(rename = "file")]
    File,
}

impl TypeKey {
    /// Every key of the vocabulary, in declaration order.
    pub const ALL: [TypeKey; 16] = [
        Self::String,
        Self::Array,
        Self::Set,
        Self::Map,
        Self::Boolean,
        Self::Integer,
        Self::Long,
        Self::Number,
        Self::Object,
        Self::Date,
        Self::DateTime,
        Self::ByteArray,
        Self::Binary,
        Self::Uri,
        Self::Uuid,
        Self::File,
    ];

    /// Returns the schema spelling of the key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Array => "array",
            Self::Set => "set",
            Self::Map => "map",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Number => "number",
            Self::Object => "object",
            Self::Date => "date",
            Self::DateTime => "date-time",
            Self::ByteArray => "byte-array",
            Self::Binary => "binary",
            Self::Uri => "uri",
            Self::Uuid => "uuid",
            Self::File => "file",
        }
    }

    /// Looks up a key by its schema spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Returns true for keys whose target type is a container template.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array | Self::Set | Self::Map)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeKey {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SchemaError::UnknownTypeKey { key: s.to_string() })
    }
}

/// Numeric and boolean schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `type: boolean`
    Boolean,
    /// `type: integer` (default / int32 format)
    Integer,
    /// `type: integer, format: int64`
    Long,
    /// `type: number`
    Number,
}

impl PrimitiveKind {
    /// Returns the type key used for table lookup.
    #[must_use]
    pub const fn type_key(&self) -> TypeKey {
        match self {
            Self::Boolean => TypeKey::Boolean,
            Self::Integer => TypeKey::Integer,
            Self::Long => TypeKey::Long,
            Self::Number => TypeKey::Number,
        }
    }
}

/// String schema formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
    /// Plain string.
    String,
    /// `format: date`
    Date,
    /// `format: date-time`
    DateTime,
    /// `format: byte` (base64 encoded)
    Byte,
    /// `format: binary`
    Binary,
    /// `format: uri`
    Uri,
    /// `format: uuid`
    Uuid,
    /// File upload.
    File,
}

impl StringKind {
    /// Returns the type key used for table lookup.
    #[must_use]
    pub const fn type_key(&self) -> TypeKey {
        match self {
            Self::String => TypeKey::String,
            Self::Date => TypeKey::Date,
            Self::DateTime => TypeKey::DateTime,
            Self::Byte => TypeKey::ByteArray,
            Self::Binary => TypeKey::Binary,
            Self::Uri => TypeKey::Uri,
            Self::Uuid => TypeKey::Uuid,
            Self::File => TypeKey::File,
        }
    }

    /// Returns true for raw byte payloads (`byte`, `binary`).
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, Self::Byte | Self::Binary)
    }
}

/// Reference to a named model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Referenced model name, as written in the schema.
    pub name: String,
    /// Whether the referenced model declares a discriminator.
    pub has_discriminator: bool,
}

impl ObjectRef {
    /// Creates a reference to a model without a discriminator.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_discriminator: false,
        }
    }

    /// Creates a reference to the base of a polymorphic family.
    #[must_use]
    pub fn discriminated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_discriminator: true,
        }
    }
}

/// One typed element of a schema tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaNode {
    /// Numeric or boolean value.
    Primitive(PrimitiveKind),
    /// String value with an optional format.
    StringLike(StringKind),
    /// Sequence of items.
    Array {
        /// Item schema.
        items: Box<SchemaNode>,
        /// `uniqueItems: true`.
        unique_items: bool,
    },
    /// `additionalProperties` map; keys are always strings.
    Mapping {
        /// Value schema.
        values: Box<SchemaNode>,
    },
    /// Named model reference.
    ObjectRef(ObjectRef),
    /// Arbitrary untyped JSON container.
    OpaqueObject,
}

/// Lookup key of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType<'a> {
    /// A key of the fixed vocabulary.
    Key(TypeKey),
    /// A model name.
    Model(&'a str),
}

impl SchemaType<'_> {
    /// Returns the string used to index the type mapping table.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Key(key) => key.as_str(),
            Self::Model(name) => name,
        }
    }
}

impl SchemaNode {
    /// Creates an array node.
    #[must_use]
    pub fn array(items: SchemaNode) -> Self {
        Self::Array {
            items: Box::new(items),
            unique_items: false,
        }
    }

    /// Creates an array node with `uniqueItems: true`.
    #[must_use]
    pub fn set(items: SchemaNode) -> Self {
        Self::Array {
            items: Box::new(items),
            unique_items: true,
        }
    }

    /// Creates a map node with string keys.
    #[must_use]
    pub fn map(values: SchemaNode) -> Self {
        Self::Mapping {
            values: Box::new(values),
        }
    }

    /// Creates a reference to a model without a discriminator.
    #[must_use]
    pub fn object_ref(name: impl Into<String>) -> Self {
        Self::ObjectRef(ObjectRef::new(name))
    }

    /// Creates a reference to a model declaring a discriminator.
    #[must_use]
    pub fn discriminated_ref(name: impl Into<String>) -> Self {
        Self::ObjectRef(ObjectRef::discriminated(name))
    }

    /// Shorthand for a plain string node.
    #[must_use]
    pub const fn string() -> Self {
        Self::StringLike(StringKind::String)
    }

    /// Shorthand for a 32 bit integer node.
    #[must_use]
    pub const fn integer() -> Self {
        Self::Primitive(PrimitiveKind::Integer)
    }

    /// Returns the leaf node described by a vocabulary key.
    ///
    /// Container keys have no leaf form and yield `None`.
    #[must_use]
    pub const fn from_type_key(key: TypeKey) -> Option<Self> {
        let node = match key {
            TypeKey::Boolean => Self::Primitive(PrimitiveKind::Boolean),
            TypeKey::Integer => Self::Primitive(PrimitiveKind::Integer),
            TypeKey::Long => Self::Primitive(PrimitiveKind::Long),
            TypeKey::Number => Self::Primitive(PrimitiveKind::Number),
            TypeKey::String => Self::StringLike(StringKind::String),
            TypeKey::Date => Self::StringLike(StringKind::Date),
            TypeKey::DateTime => Self::StringLike(StringKind::DateTime),
            TypeKey::ByteArray => Self::StringLike(StringKind::Byte),
            TypeKey::Binary => Self::StringLike(StringKind::Binary),
            TypeKey::Uri => Self::StringLike(StringKind::Uri),
            TypeKey::Uuid => Self::StringLike(StringKind::Uuid),
            TypeKey::File => Self::StringLike(StringKind::File),
            TypeKey::Object => Self::OpaqueObject,
            TypeKey::Array | TypeKey::Set | TypeKey::Map => return None,
        };
        Some(node)
    }

    /// Returns the key used to look this node up in the type mapping table.
    #[must_use]
    pub fn type_key(&self) -> SchemaType<'_> {
        match self {
            Self::Primitive(kind) => SchemaType::Key(kind.type_key()),
            Self::StringLike(kind) => SchemaType::Key(kind.type_key()),
            Self::Array { .. } => SchemaType::Key(TypeKey::Array),
            Self::Mapping { .. } => SchemaType::Key(TypeKey::Map),
            Self::ObjectRef(reference) => SchemaType::Model(&reference.name),
            Self::OpaqueObject => SchemaType::Key(TypeKey::Object),
        }
    }

    /// Returns the directly nested node of a container, if any.
    #[must_use]
    pub fn inner(&self) -> Option<&SchemaNode> {
        match self {
            Self::Array { items, .. } => Some(items),
            Self::Mapping { values } => Some(values),
            _ => None,
        }
    }

    /// Returns true for arrays and maps.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array { .. } | Self::Mapping { .. })
    }

    /// Returns true for `byte` and `binary` string formats.
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, Self::StringLike(kind) if kind.is_bytes())
    }

    /// Returns the referenced model, if this is a model reference.
    #[must_use]
    pub fn as_object_ref(&self) -> Option<&ObjectRef> {
        match self {
            Self::ObjectRef(reference) => Some(reference),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_key_round_trip_names() {
        for key in TypeKey::ALL {
            assert_eq!(TypeKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(TypeKey::from_name("DateTime"), None);
    }

    #[test]
    fn test_type_key_from_str_error() {
        let err = "widget".parse::<TypeKey>().unwrap_err();
        assert!(err.to_string().contains("widget"));
        assert_eq!("date-time".parse::<TypeKey>().unwrap(), TypeKey::DateTime);
    }

    #[test]
    fn test_type_key_serde_spelling() {
        let json = serde_json::to_string(&TypeKey::ByteArray).unwrap();
        assert_eq!(json, "\"byte-array\"");
        let key: TypeKey = serde_json::from_str("\"uuid\"").unwrap();
        assert_eq!(key, TypeKey::Uuid);
    }

    #[test]
    fn test_node_type_key() {
        assert_eq!(
            SchemaNode::integer().type_key(),
            SchemaType::Key(TypeKey::Integer)
        );
        assert_eq!(
            SchemaNode::set(SchemaNode::string()).type_key(),
            SchemaType::Key(TypeKey::Array)
        );
        assert_eq!(
            SchemaNode::StringLike(StringKind::Byte).type_key(),
            SchemaType::Key(TypeKey::ByteArray)
        );
        assert_eq!(
            SchemaNode::object_ref("Pet").type_key(),
            SchemaType::Model("Pet")
        );
        assert_eq!(SchemaNode::OpaqueObject.type_key().as_str(), "object");
    }

    #[test]
    fn test_node_inner() {
        let node = SchemaNode::array(SchemaNode::map(SchemaNode::array(SchemaNode::integer())));
        assert!(node.is_container());
        assert!(node.inner().is_some_and(SchemaNode::is_container));
        assert!(SchemaNode::integer().inner().is_none());
    }

    #[test]
    fn test_from_type_key_inverts_type_key() {
        for key in TypeKey::ALL {
            match SchemaNode::from_type_key(key) {
                Some(node) => assert_eq!(node.type_key(), SchemaType::Key(key)),
                None => assert!(key.is_container()),
            }
        }
    }

    #[test]
    fn test_is_bytes() {
        assert!(SchemaNode::StringLike(StringKind::Binary).is_bytes());
        assert!(SchemaNode::StringLike(StringKind::Byte).is_bytes());
        assert!(!SchemaNode::StringLike(StringKind::Uuid).is_bytes());
        assert!(!SchemaNode::OpaqueObject.is_bytes());
    }

    #[test]
    fn test_object_ref_constructors() {
        let plain = SchemaNode::object_ref("Pet");
        let poly = SchemaNode::discriminated_ref("Animal");
        assert!(!plain.as_object_ref().unwrap().has_discriminator);
        assert!(poly.as_object_ref().unwrap().has_discriminator);
        assert!(SchemaNode::OpaqueObject.as_object_ref().is_none());
    }
}
