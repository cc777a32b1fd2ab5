//! # Cart State
//!
//! The `{ open, items }` value handed back by every cart operation.
//!
//! ## Invariants
//! - `items` never holds two entries with the same id
//! - `items` keeps first-insertion order
//!
//! Both are maintained by [`CartManager`](crate::CartManager); a `CartState`
//! on its own is just data and can be serialized straight to the front end.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Identified, Product};

/// Snapshot of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState<P = Product> {
    /// Whether the cart panel is open.
    pub open: bool,

    /// Line items, in the order they were first added.
    pub items: Vec<P>,
}

impl<P> CartState<P> {
    /// Closed, empty cart.
    pub fn new() -> Self {
        CartState {
            open: false,
            items: Vec::new(),
        }
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<P: Identified> CartState<P> {
    /// Checks if an item with this id is present.
    pub fn contains(&self, id: &P::Id) -> bool {
        self.position(id).is_some()
    }

    /// Index of the item with this id.
    pub(crate) fn position(&self, id: &P::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

// Manual impl: a derive would require `P: Default`.
impl<P> Default for CartState<P> {
    fn default() -> Self {
        Self::new()
    }
}
