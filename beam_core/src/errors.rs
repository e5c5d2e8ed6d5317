//! # Error Types
//!
//! Structured error types for beam_core. Dispatch failures and input
//! problems carry enough context to be handled programmatically or shown
//! to a user as-is.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_span(span: f64) -> BeamResult<()> {
//!     if span <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "primary_span",
//!             span.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis operations.
///
/// The analyzer equations themselves never fail; the only runtime error the
/// facade raises is [`BeamError::InvalidCondition`]. The remaining variants
/// come from the optional validation helpers and the material catalog.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// The requested support condition has no registered analyzer
    #[error("Unknown support condition: '{condition}' (expected one of: simply-supported, two-span-unequal)")]
    InvalidCondition { condition: String },

    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material not found in the built-in catalog
    #[error("Material not found: {name}")]
    MaterialNotFound { name: String },
}

impl BeamError {
    /// Create an InvalidCondition error
    pub fn invalid_condition(condition: impl Into<String>) -> Self {
        BeamError::InvalidCondition {
            condition: condition.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(name: impl Into<String>) -> Self {
        BeamError::MaterialNotFound { name: name.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidCondition { .. } => "INVALID_CONDITION",
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
        }
    }
}
