//! # Fixture Error Types
//!
//! Error types for the mock product source.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Record decoding (cart_core::CoreError)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FixtureError (this module) ← Adds HTTP-ish context                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Test / UI controller                                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cart_core::CoreError;
use thiserror::Error;

/// Mock server errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - `GET /products/:id` for an id the server never created
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The server answered with a status the caller did not expect.
    #[error("Unexpected status {status} for {path}")]
    UnexpectedStatus { status: u16, path: String },

    /// Response body did not have the expected shape.
    #[error("Unexpected response body: {reason}")]
    UnexpectedBody { reason: String },

    /// Request made after `shutdown()`.
    #[error("Mock server has been shut down")]
    ShutDown,

    /// A record could not be decoded into a product.
    #[error("Failed to decode product: {0}")]
    Decode(#[from] CoreError),
}

impl FixtureError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        FixtureError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates an UnexpectedBody error.
    pub fn unexpected_body(reason: impl Into<String>) -> Self {
        FixtureError::UnexpectedBody {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FixtureError::NotFound { .. })
    }
}

/// Convenience type alias for Results with FixtureError.
pub type FixtureResult<T> = Result<T, FixtureError>;
