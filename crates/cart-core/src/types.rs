//! # Domain Types
//!
//! Product records as the cart sees them.
//!
//! ## Opaque Products
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product record from a source          What the cart looks at           │
//! │  ────────────────────────────          ──────────────────────           │
//! │  {                                                                      │
//! │    "id": "1",              ──────────►  ProductId::Text("1")            │
//! │    "title": "Sneakers",    ─┐                                           │
//! │    "price": "109.90",       ├────────►  kept verbatim, never read       │
//! │    "image": "..."          ─┘                                           │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids come in two shapes because JSON sources disagree: some send numbers,
//! some send strings. `1` and `"1"` are different ids.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_product_id;

// =============================================================================
// Identified
// =============================================================================

/// Anything that can sit in a cart.
///
/// The cart compares items by id only, so this is the whole contract.
pub trait Identified {
    /// Identifier type. Equality decides cart membership.
    type Id: PartialEq + fmt::Debug;

    /// Returns this item's identifier.
    fn id(&self) -> &Self::Id;
}

// =============================================================================
// Product Id
// =============================================================================

/// Unique identifier of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ProductId {
    /// Numeric id (`"id": 42`).
    Number(#[ts(type = "number")] i64),
    /// String id (`"id": "42"` or a UUID).
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n)
    }
}

impl From<i32> for ProductId {
    fn from(n: i32) -> Self {
        ProductId::Number(i64::from(n))
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId::Text(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product, carried through the cart untouched.
///
/// Only `id` is typed. Every other field of the source record lands in
/// `attributes` and is serialized back out flat, so a product survives a
/// round trip through the cart byte-for-byte (modulo key order).
///
/// Deserializing goes through [`Product::from_json`], so serde and direct
/// decoding accept and reject exactly the same records.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Remaining fields of the record (title, price, image, ...).
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Creates a product with no attributes.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Product {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Sets an attribute, builder style.
    ///
    /// Setting `"id"` here is ignored; the id is fixed at construction.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != crate::PRODUCT_ID_FIELD {
            self.attributes.insert(key, value.into());
        }
        self
    }

    /// Returns an attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Decodes a product record received from a Product Source.
    ///
    /// ## Errors
    /// - `NotAnObject` if `value` is not a JSON object
    /// - `Validation` if `id` is missing, null, a float, or an empty string
    pub fn from_json(value: Value) -> CoreResult<Self> {
        let mut record = match value {
            Value::Object(record) => record,
            other => {
                return Err(CoreError::NotAnObject {
                    found: json_kind(&other).to_string(),
                })
            }
        };

        let id = validate_product_id(record.remove(crate::PRODUCT_ID_FIELD).as_ref())?;

        Ok(Product {
            id,
            attributes: record,
        })
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Product::from_json(value).map_err(de::Error::custom)
    }
}

impl Identified for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// Human name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
