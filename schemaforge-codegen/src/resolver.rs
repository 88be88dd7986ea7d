//! Field type resolution.
//!
//! [`resolve`] maps one schema node to the target type the field should be
//! emitted as, together with any validation/conversion metadata, a default
//! value, and a synthesized enum declaration where the schema enumerates.
//!
//! The rules are applied in a fixed priority order and each rule
//! short-circuits the rest:
//! 1. declared numeric bounds attach range-validation metadata,
//! 2. `format == "uri"` forces a byte-sequence type and discards any range
//!    metadata,
//! 3. a multi-entry type list collapses to an opaque object,
//! 4. a single type name dispatches to its own resolution rule.

use schemaforge_schema::{SchemaNode, TypeRef, parse_title};
use serde_json::Value;

use crate::error::ResolveError;
use crate::types::{
    DefaultValue, EnumDecl, EnumMember, NumberValidation, ResolvedType, TargetType, UriConversion,
};

/// Resolves one field's schema node.
///
/// Pure and deterministic: identical inputs produce structurally identical
/// results, with no I/O and no shared state.
///
/// # Arguments
/// * `field_name` - The field's proposed name (used to derive enum names)
/// * `node` - The schema node describing the field
///
/// # Errors
/// Returns `ResolveError` when the node has no resolution rule, is
/// self-contradictory, or declares a default outside its enumeration.
pub fn resolve(field_name: &str, node: &SchemaNode) -> Result<ResolvedType, ResolveError> {
    tracing::debug!(field = field_name, "resolving field type");

    let validation = if node.minimum.is_some() || node.maximum.is_some() {
        Some(NumberValidation::from_bounds(
            node.minimum,
            node.maximum,
            node.exclusive_minimum,
            node.exclusive_maximum,
        ))
    } else {
        None
    };

    // uri conversion replaces the declared type list and any range metadata.
    if node.format.as_deref() == Some("uri") {
        let mut resolved = ResolvedType::new(TargetType::Bytes);
        resolved.conversion = Some(UriConversion {
            required: node.required,
        });
        return Ok(resolved);
    }

    // A multi-entry type list collapses to an opaque object; enum and
    // default are never inspected.
    if node.type_refs.len() > 1 {
        let mut resolved = ResolvedType::new(TargetType::Object);
        resolved.validation = validation;
        return Ok(resolved);
    }

    let Some(type_ref) = node.type_refs.first() else {
        return Err(ResolveError::unsupported(
            field_name,
            "schema declares no type",
        ));
    };

    let type_name = match type_ref {
        TypeRef::Reference(target) => {
            return Err(ResolveError::unsupported(
                field_name,
                format!("cannot resolve schema reference '{target}'"),
            ));
        }
        TypeRef::Name(name) => name.as_str(),
    };

    let mut resolved = match type_name {
        "any" => resolve_any(field_name, node)?,
        "object" => resolve_object(field_name, node)?,
        "number" => resolve_number(field_name, node)?,
        "string" => resolve_string(field_name, node)?,
        "integer" => resolve_integer(field_name, node)?,
        "boolean" => resolve_boolean(field_name, node)?,
        other => {
            return Err(ResolveError::unsupported(
                field_name,
                format!("unknown type '{other}'"),
            ));
        }
    };

    resolved.validation = validation;
    Ok(resolved)
}

/// Resolves an unconstrained `any` node to an opaque object.
fn resolve_any(field_name: &str, node: &SchemaNode) -> Result<ResolvedType, ResolveError> {
    if node.enum_values.is_some() || node.has_default() {
        return Err(ResolveError::unsupported(
            field_name,
            "'any' cannot carry an enum or a default",
        ));
    }
    Ok(ResolvedType::new(TargetType::Object))
}

/// Resolves an `object` node to the user-defined type its title names.
fn resolve_object(field_name: &str, node: &SchemaNode) -> Result<ResolvedType, ResolveError> {
    if node.enum_values.is_some() || node.has_default() {
        return Err(ResolveError::unsupported(
            field_name,
            "'object' cannot carry an enum or a default",
        ));
    }
    match &node.title {
        Some(title) => Ok(ResolvedType::new(TargetType::Named(parse_title(title)))),
        None => Err(ResolveError::unsupported(
            field_name,
            "object schema without a title",
        )),
    }
}

/// Resolves a `number` node to a 32-bit float.
fn resolve_number(field_name: &str, node: &SchemaNode) -> Result<ResolvedType, ResolveError> {
    if node.enum_values.is_some() {
        return Err(ResolveError::unsupported(
            field_name,
            "'number' cannot enumerate",
        ));
    }

    let mut resolved = ResolvedType::new(TargetType::Float);
    if let Some(default) = &node.default {
        let value = default.as_f64().ok_or_else(|| {
            ResolveError::invalid_schema(field_name, "default value for a number must be numeric")
        })?;
        resolved.default = Some(DefaultValue::Float(value as f32));
    }
    Ok(resolved)
}

/// Resolves a `string` node, synthesizing an enum when one is declared.
fn resolve_string(field_name: &str, node: &SchemaNode) -> Result<ResolvedType, ResolveError> {
    let Some(values) = &node.enum_values else {
        let mut resolved = ResolvedType::new(TargetType::String);
        if let Some(default) = &node.default {
            let text = default.as_str().ok_or_else(|| {
                ResolveError::invalid_schema(field_name, "default value for a string must be a string")
            })?;
            resolved.default = Some(DefaultValue::Str(text.to_string()));
        }
        return Ok(resolved);
    };

    let decl = string_enum_decl(field_name, values)?;
    let mut resolved = ResolvedType::new(TargetType::Enum(decl.name.clone()));

    if let Some(default) = &node.default {
        let text = literal_text(default);
        let member = decl
            .member_named(&text)
            .ok_or_else(|| ResolveError::invalid_default(field_name, text))?;
        resolved.default = Some(DefaultValue::EnumMember {
            enum_name: decl.name.clone(),
            member: member.name.clone(),
        });
    }

    resolved.dependent_enum = Some(decl);
    Ok(resolved)
}

/// Resolves an `integer` node, synthesizing an enum when one is declared.
fn resolve_integer(field_name: &str, node: &SchemaNode) -> Result<ResolvedType, ResolveError> {
    let Some(values) = &node.enum_values else {
        let mut resolved = ResolvedType::new(TargetType::Int32);
        if let Some(default) = &node.default {
            let value = default.as_i64().ok_or_else(|| {
                ResolveError::invalid_schema(field_name, "default value for an integer must be an integer")
            })?;
            let value = i32::try_from(value).map_err(|_| {
                ResolveError::invalid_schema(field_name, "default value is out of range for a 32-bit integer")
            })?;
            resolved.default = Some(DefaultValue::Int(value));
        }
        return Ok(resolved);
    };

    let decl = int_enum_decl(field_name, values, node.enum_names.as_deref())?;
    let mut resolved = ResolvedType::new(TargetType::Enum(decl.name.clone()));

    if let Some(default) = &node.default {
        let member = default
            .as_i64()
            .and_then(|value| decl.member_for_value(value))
            .ok_or_else(|| ResolveError::invalid_default(field_name, literal_text(default)))?;
        resolved.default = Some(DefaultValue::EnumMember {
            enum_name: decl.name.clone(),
            member: member.name.clone(),
        });
    }

    resolved.dependent_enum = Some(decl);
    Ok(resolved)
}

/// Resolves a `boolean` node.
fn resolve_boolean(field_name: &str, node: &SchemaNode) -> Result<ResolvedType, ResolveError> {
    if node.enum_values.is_some() {
        return Err(ResolveError::unsupported(
            field_name,
            "booleans cannot enumerate",
        ));
    }

    let mut resolved = ResolvedType::new(TargetType::Bool);
    if let Some(default) = &node.default {
        let value = default.as_bool().ok_or_else(|| {
            ResolveError::invalid_schema(field_name, "default value for a boolean must be a boolean")
        })?;
        resolved.default = Some(DefaultValue::Bool(value));
    }
    Ok(resolved)
}

/// Derives the name of a synthesized enum from its field name.
fn enum_type_name(field_name: &str) -> String {
    format!("{field_name}Enum")
}

/// Builds a string enum declaration, one member per literal, in source order.
fn string_enum_decl(field_name: &str, values: &[Value]) -> Result<EnumDecl, ResolveError> {
    let mut decl = EnumDecl::new(enum_type_name(field_name));
    for value in values {
        let name = value.as_str().ok_or_else(|| {
            ResolveError::invalid_schema(field_name, "string enum values must all be strings")
        })?;
        decl.add_member(EnumMember::new(name));
    }
    Ok(decl)
}

/// Builds an integer enum declaration, pairing names with values positionally.
fn int_enum_decl(
    field_name: &str,
    values: &[Value],
    names: Option<&[String]>,
) -> Result<EnumDecl, ResolveError> {
    let Some(names) = names.filter(|names| names.len() == values.len()) else {
        return Err(ResolveError::invalid_schema(
            field_name,
            "enum names must be defined for each integer enum",
        ));
    };

    let mut decl = EnumDecl::new(enum_type_name(field_name));
    for (name, value) in names.iter().zip(values) {
        let value = value.as_i64().ok_or_else(|| {
            ResolveError::invalid_schema(field_name, "integer enum values must all be integers")
        })?;
        decl.add_member(EnumMember::with_value(name, value));
    }
    Ok(decl)
}

/// Renders a JSON literal the way it is compared against enum member names.
fn literal_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
