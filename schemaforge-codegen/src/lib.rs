//! # Schemaforge Codegen
//!
//! Field type resolution for schema-driven code generation.
//!
//! This crate provides:
//! - Resolution of one schema node into an abstract target type
//! - Validation and conversion metadata for the emitted field
//! - Enum synthesis for enumerated string and integer fields
//!
//! The resolver is pure and per-field; aggregating results across a schema
//! document (and keeping generated enum names unique within it) is the
//! surrounding generator's responsibility.

pub mod error;
pub mod resolver;
pub mod types;

pub use error::ResolveError;
pub use resolver::resolve;
pub use types::{
    DefaultValue, EnumDecl, EnumMember, NumberValidation, ResolvedType, TargetType, UriConversion,
};

/// Resolves a field's type from its schema node's raw JSON.
///
/// # Arguments
/// * `field_name` - The field's proposed name
/// * `json` - JSON content of the field's schema node
///
/// # Returns
/// The resolved type for the field.
///
/// # Errors
/// Returns `ResolveError` if parsing or resolution fails.
pub fn resolve_from_json(field_name: &str, json: &str) -> Result<ResolvedType, ResolveError> {
    let node = schemaforge_schema::SchemaNode::from_json(json)?;
    resolve(field_name, &node)
}
