//! Error types for pipeline and configuration operations
//!
//! The individual transforms never fail; only the size-bounded pipeline and
//! configuration loading report errors.

use thiserror::Error;

/// Result type alias for preprocessing operations
pub type PrepResult<T> = Result<T, PrepError>;

/// Error types for preprocessing operations
#[derive(Debug, Error)]
pub enum PrepError {
    /// Input exceeds the configured size limit
    #[error("HTML input too large: {size} bytes. Maximum allowed: {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// Configuration failed validation
    #[error("Invalid preprocessing config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
