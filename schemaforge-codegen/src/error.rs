//! Error types for field type resolution.

use thiserror::Error;

/// Error type for field type resolution.
///
/// Every failure is a permanent, local decision: a field the resolver
/// cannot characterize cannot be emitted safely, so callers are expected
/// to abort generation for the whole schema document.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Schema node parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] schemaforge_schema::ParseError),

    /// The schema shape is recognized but has no resolution rule.
    #[error("unsupported schema for field '{field}': {detail}")]
    Unsupported {
        /// Field name.
        field: String,
        /// What made the shape unsupported.
        detail: String,
    },

    /// The schema is self-contradictory under this dialect's rules.
    #[error("invalid schema for field '{field}': {message}")]
    InvalidSchema {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// The declared default value matches no enum member.
    #[error("invalid default for field '{field}': '{value}' is not in the enum list")]
    InvalidDefault {
        /// Field name.
        field: String,
        /// The offending default value.
        value: String,
    },
}

impl ResolveError {
    /// Creates an unsupported-schema error.
    pub fn unsupported(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Unsupported {
            field: field.into(),
            detail: detail.into(),
        }
    }

    /// Creates an invalid-schema error.
    pub fn invalid_schema(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid-default error.
    pub fn invalid_default(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDefault {
            field: field.into(),
            value: value.into(),
        }
    }
}
