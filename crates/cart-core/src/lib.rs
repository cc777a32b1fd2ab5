//! # cart-core: Cart State for the Storefront
//!
//! This crate owns the client-side shopping cart: whether the cart panel is
//! open, and which products are in it. Everything here is synchronous and
//! in-memory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Controller                                │   │
//! │  │    Product list ──► "Add to cart" ──► Cart drawer               │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │ fetch products               │ cart operations        │
//! │  ┌──────────────▼──────────────┐  ┌────────────▼────────────────────┐  │
//! │  │      Product Source         │  │   ★ cart-core (THIS CRATE) ★    │  │
//! │  │  (real API / MockServer)    │  │                                 │  │
//! │  │                             │  │   CartManager ──► CartState     │  │
//! │  └─────────────────────────────┘  │   Product, ProductId            │  │
//! │                                   │                                 │  │
//! │                                   │   NO I/O • NO PRICING           │  │
//! │                                   └─────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product records and their ids
//! - [`state`] - The `{ open, items }` snapshot
//! - [`manager`] - `CartManager`, the only thing that mutates cart state
//! - [`validation`] - Checks applied to product records from a source
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{CartManager, Product};
//!
//! let mut cart = CartManager::new();
//! cart.open();
//!
//! let state = cart.add_product(Product::new("1"));
//! assert!(state.open);
//! assert_eq!(state.items.len(), 1);
//!
//! // Adding the same product again does nothing.
//! let state = cart.add_product(Product::new("1"));
//! assert_eq!(state.items.len(), 1);
//!
//! let state = cart.clear_cart();
//! assert!(!state.open && state.items.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod manager;
pub mod state;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use manager::CartManager;
pub use state::CartState;
pub use types::{Identified, Product, ProductId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// JSON key holding the product identifier.
///
/// The cart never looks at any other field of a product record.
pub const PRODUCT_ID_FIELD: &str = "id";
