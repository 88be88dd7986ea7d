//! Error types for schema node parsing.

use thiserror::Error;

/// Error type for schema node parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing or shape error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
