//! # Schemaforge Schema
//!
//! Schema node model for schemaforge code generation.
//!
//! This crate provides:
//! - The reduced JSON-Schema-style node describing a single field
//! - JSON deserialization for individual nodes
//! - Title and name helpers for generated type names
//!
//! Walking a whole schema document into a tree of nodes is the job of the
//! surrounding generator; this crate only models one node at a time.

pub mod error;
pub mod names;
pub mod node;

pub use error::ParseError;
pub use names::{parse_title, to_pascal_case};
pub use node::{SchemaNode, TypeRef};
