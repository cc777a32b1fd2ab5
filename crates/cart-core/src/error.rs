//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                          │
//! │  ├── CoreError        - Product records that cannot be decoded         │
//! │  └── ValidationError  - Field-level problems in a record               │
//! │                                                                         │
//! │  cart-fixtures errors (separate crate)                                 │
//! │  └── FixtureError     - Mock server failures                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → FixtureError → caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves never fail. Adding a product twice or removing
//! one that is not there is a no-op, so none of these errors come out of
//! [`CartManager`](crate::CartManager).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning raw records into [`Product`](crate::Product)s.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The record is not a JSON object.
    ///
    /// ## When This Occurs
    /// - A source returned an array or scalar where a product was expected
    #[error("Product record must be a JSON object, got {found}")]
    NotAnObject { found: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or null.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., float id, empty string id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NotAnObject {
            found: "array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Product record must be a JSON object, got array"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "id has invalid format: must not be empty");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
