//! Resolved type output model.
//!
//! These are the values the resolver hands to the emitter: an abstract
//! target type plus the metadata the emitted field must carry. Nothing here
//! references a concrete target language; lowering is the emitter's job.

/// Closed set of target types a field can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    /// 32-bit floating point.
    Float,
    /// 32-bit signed integer.
    Int32,
    /// Boolean.
    Bool,
    /// String.
    String,
    /// Raw byte sequence (uri-converted fields).
    Bytes,
    /// Untyped, opaque object.
    Object,
    /// A pre-existing user-defined type.
    Named(String),
    /// A synthesized enum type.
    Enum(String),
}

/// Numeric range check attached to a field for deserialization time.
///
/// The `has_*` flags are the authoritative presence signal; an absent
/// bound stores `0.0` as a placeholder value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberValidation {
    /// Lower bound (placeholder 0.0 when `has_min` is false).
    pub min: f64,
    /// Upper bound (placeholder 0.0 when `has_max` is false).
    pub max: f64,
    /// Whether a lower bound was declared.
    pub has_min: bool,
    /// Whether an upper bound was declared.
    pub has_max: bool,
    /// Whether the lower bound is exclusive.
    pub exclusive_min: bool,
    /// Whether the upper bound is exclusive.
    pub exclusive_max: bool,
}

impl NumberValidation {
    /// Creates validation metadata from optional declared bounds.
    #[must_use]
    pub fn from_bounds(
        min: Option<f64>,
        max: Option<f64>,
        exclusive_min: bool,
        exclusive_max: bool,
    ) -> Self {
        Self {
            min: min.unwrap_or(0.0),
            max: max.unwrap_or(0.0),
            has_min: min.is_some(),
            has_max: max.is_some(),
            exclusive_min,
            exclusive_max,
        }
    }
}

/// Marker causing uri-string/byte-sequence translation at (de)serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriConversion {
    /// Whether the field is required.
    pub required: bool,
}

/// Default value attached to a resolved field.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Floating point literal.
    Float(f32),
    /// Integer literal.
    Int(i32),
    /// Boolean literal.
    Bool(bool),
    /// String literal.
    Str(String),
    /// Reference to a member of a synthesized enum.
    EnumMember {
        /// Name of the enum type.
        enum_name: String,
        /// Name of the referenced member.
        member: String,
    },
}

/// One member of a synthesized enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Explicit backing value (integer enums only).
    pub value: Option<i64>,
}

impl EnumMember {
    /// Creates a member without an explicit backing value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a member with an explicit integer backing value.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }
}

/// A synthesized enum declaration the caller must register alongside the
/// field's owning type.
///
/// Members preserve source order; there is no sorting or deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    /// Enum type name.
    pub name: String,
    /// Members in source order.
    pub members: Vec<EnumMember>,
}

impl EnumDecl {
    /// Creates a new empty enum declaration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Adds a member to the declaration.
    pub fn add_member(&mut self, member: EnumMember) {
        self.members.push(member);
    }

    /// Looks up a member by name.
    #[must_use]
    pub fn member_named(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Looks up a member by its explicit backing value.
    #[must_use]
    pub fn member_for_value(&self, value: i64) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.value == Some(value))
    }
}

/// The resolver's output for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedType {
    /// Target type the field should use.
    pub target: TargetType,
    /// Numeric range check, if bounds were declared.
    pub validation: Option<NumberValidation>,
    /// Uri conversion marker, if `format == "uri"`.
    pub conversion: Option<UriConversion>,
    /// Default value, if the schema declared one.
    pub default: Option<DefaultValue>,
    /// Synthesized enum declaration, if the schema declared an enumeration.
    ///
    /// Ownership transfers to the caller, which registers the declaration
    /// in the output source exactly once.
    pub dependent_enum: Option<EnumDecl>,
}

impl ResolvedType {
    /// Creates a resolved type with no attached metadata.
    #[must_use]
    pub fn new(target: TargetType) -> Self {
        Self {
            target,
            validation: None,
            conversion: None,
            default: None,
            dependent_enum: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_validation_from_bounds() {
        let validation = NumberValidation::from_bounds(Some(1.0), None, true, false);
        assert_eq!(validation.min, 1.0);
        assert_eq!(validation.max, 0.0);
        assert!(validation.has_min);
        assert!(!validation.has_max);
        assert!(validation.exclusive_min);
        assert!(!validation.exclusive_max);
    }

    #[test]
    fn test_enum_decl_member_named() {
        let mut decl = EnumDecl::new("modeEnum");
        decl.add_member(EnumMember::new("POINTS"));
        decl.add_member(EnumMember::new("LINES"));

        assert_eq!(decl.member_named("LINES").unwrap().name, "LINES");
        assert!(decl.member_named("lines").is_none());
        assert!(decl.member_named("TRIANGLES").is_none());
    }

    #[test]
    fn test_enum_decl_member_for_value() {
        let mut decl = EnumDecl::new("targetEnum");
        decl.add_member(EnumMember::with_value("ArrayBuffer", 34962));
        decl.add_member(EnumMember::with_value("ElementArrayBuffer", 34963));

        assert_eq!(decl.member_for_value(34963).unwrap().name, "ElementArrayBuffer");
        assert!(decl.member_for_value(0).is_none());
    }

    #[test]
    fn test_enum_decl_preserves_order() {
        let mut decl = EnumDecl::new("kindEnum");
        decl.add_member(EnumMember::new("B"));
        decl.add_member(EnumMember::new("A"));
        decl.add_member(EnumMember::new("A"));

        let names: Vec<&str> = decl.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "A"]);
    }

    #[test]
    fn test_resolved_type_new() {
        let resolved = ResolvedType::new(TargetType::String);
        assert_eq!(resolved.target, TargetType::String);
        assert!(resolved.validation.is_none());
        assert!(resolved.conversion.is_none());
        assert!(resolved.default.is_none());
        assert!(resolved.dependent_enum.is_none());
    }
}
