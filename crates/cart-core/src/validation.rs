//! # Validation Module
//!
//! Checks applied to product records before they become [`Product`]s.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Product Source (API / MockServer)                            │
//! │  └── Produces JSON records                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Product::from_json                                           │
//! │  └── THIS MODULE: the record must carry a usable id                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartManager                                                  │
//! │  └── Nothing to validate; de-duplicates by id                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::validate_product_id;
//! use cart_core::ProductId;
//! use serde_json::json;
//!
//! let id = validate_product_id(Some(&json!("42"))).unwrap();
//! assert_eq!(id, ProductId::from("42"));
//!
//! assert!(validate_product_id(Some(&json!(4.2))).is_err());
//! ```
//!
//! [`Product`]: crate::Product

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::{json_kind, ProductId};
use crate::PRODUCT_ID_FIELD;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the `id` field of a product record.
///
/// ## Rules
/// - Must be present and not null
/// - Integers within `i64` are accepted as-is
/// - Strings must not be empty or whitespace
/// - Anything else (floats, booleans, arrays, objects) is rejected
pub fn validate_product_id(value: Option<&Value>) -> ValidationResult<ProductId> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Required {
            field: PRODUCT_ID_FIELD.to_string(),
        }),
        Some(Value::Number(n)) => n.as_i64().map(ProductId::Number).ok_or_else(|| {
            // is_u64 here means the integer is above i64::MAX
            let reason = if n.is_u64() {
                format!("{} is out of range for an integer id", n)
            } else {
                format!("{} is not an integer", n)
            };
            ValidationError::InvalidFormat {
                field: PRODUCT_ID_FIELD.to_string(),
                reason,
            }
        }),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::InvalidFormat {
            field: PRODUCT_ID_FIELD.to_string(),
            reason: "must not be empty".to_string(),
        }),
        Some(Value::String(s)) => Ok(ProductId::Text(s.clone())),
        Some(other) => Err(ValidationError::InvalidFormat {
            field: PRODUCT_ID_FIELD.to_string(),
            reason: format!("expected number or string, got {}", json_kind(other)),
        }),
    }
}
