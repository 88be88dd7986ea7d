//! Schema node definitions.
//!
//! This module contains the data structure representing one reduced
//! JSON-Schema-style field description, along with its JSON deserialization.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::Value;

use crate::error::ParseError;

/// One reduced JSON-Schema-style description of a single field.
///
/// Literal values (`enum_values` entries and `default`) are carried as raw
/// JSON values; interpreting them against the declared type is the
/// resolver's job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaNode {
    /// Declared type references, in source order.
    #[serde(rename = "type", deserialize_with = "type_ref_list")]
    pub type_refs: Vec<TypeRef>,
    /// Lower numeric bound.
    pub minimum: Option<f64>,
    /// Upper numeric bound.
    pub maximum: Option<f64>,
    /// Whether `minimum` is exclusive.
    pub exclusive_minimum: bool,
    /// Whether `maximum` is exclusive.
    pub exclusive_maximum: bool,
    /// Format hint (only `"uri"` carries meaning).
    pub format: Option<String>,
    /// Enumerated literal values (all strings or all integers).
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    /// Display names for integer enum values, positional.
    pub enum_names: Option<Vec<String>>,
    /// Declared default value.
    pub default: Option<Value>,
    /// Title naming a pre-existing user-defined type (objects only).
    pub title: Option<String>,
    /// Whether the field is required (uri conversion only).
    pub required: bool,
}

impl SchemaNode {
    /// Creates a new empty schema node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a single schema node from a JSON string.
    ///
    /// # Errors
    /// Returns `ParseError` if the JSON is malformed or does not describe
    /// a schema node.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a single schema node from an already-parsed JSON value.
    ///
    /// # Errors
    /// Returns `ParseError` if the value does not describe a schema node.
    pub fn from_json_value(value: Value) -> Result<Self, ParseError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns true if the node declares a default value.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// One entry of a node's `type` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A primitive type name (`"string"`, `"integer"`, ...).
    Name(String),
    /// A reference to another schema file (`{"$ref": ...}`).
    Reference(String),
}

impl TypeRef {
    /// Returns true if this entry is a schema reference.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RefVisitor;

        impl<'de> Visitor<'de> for RefVisitor {
            type Value = TypeRef;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a type name string or a {\"$ref\": ...} object")
            }

            fn visit_str<E>(self, value: &str) -> Result<TypeRef, E>
            where
                E: de::Error,
            {
                Ok(TypeRef::Name(value.to_string()))
            }

            fn visit_map<A>(self, mut map: A) -> Result<TypeRef, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut reference: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "$ref" {
                        reference = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                reference
                    .map(TypeRef::Reference)
                    .ok_or_else(|| de::Error::missing_field("$ref"))
            }
        }

        deserializer.deserialize_any(RefVisitor)
    }
}

/// Deserializes the `type` field, which may be a single entry or a list.
fn type_ref_list<'de, D>(deserializer: D) -> Result<Vec<TypeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ListVisitor;

    impl<'de> Visitor<'de> for ListVisitor {
        type Value = Vec<TypeRef>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a type entry or a list of type entries")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![TypeRef::Name(value.to_string())])
        }

        fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let entry = TypeRef::deserialize(de::value::MapAccessDeserializer::new(map))?;
            Ok(vec![entry])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut entries = Vec::new();
            while let Some(entry) = seq.next_element::<TypeRef>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(ListVisitor)
}
