//! # Cart Manager
//!
//! Owns the cart state and is the only thing allowed to change it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                CartManager              State Change         │
//! │  ─────────                ───────────              ────────────         │
//! │                                                                         │
//! │  Click cart icon ────────► open() ───────────────► open = true          │
//! │                                                                         │
//! │  Click outside ──────────► close() ──────────────► open = false         │
//! │                                                                         │
//! │  Click "Add" ────────────► add_product() ────────► items.push(p)        │
//! │                                                   (skipped if id known) │
//! │                                                                         │
//! │  Click remove ───────────► remove_product() ─────► items.remove(i)      │
//! │                                                                         │
//! │  Click "Clear" ──────────► clear_products() ─────► items.clear()        │
//! │                                                                         │
//! │  Checkout done ──────────► clear_cart() ─────────► items.clear(),       │
//! │                                                     open = false        │
//! │                                                                         │
//! │  Render ─────────────────► get_state() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Every write returns a fresh snapshot of the whole state.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here fails. A duplicate add or a remove of an unknown id leaves
//! the state as it was and still returns a snapshot.

use tracing::{debug, trace};

use crate::state::CartState;
use crate::types::{Identified, Product};

/// The shopping cart.
///
/// Generic over the item type so callers with their own product struct can
/// skip [`Product`]; anything [`Identified`] and `Clone` works.
///
/// ## Invariants
/// - Items are unique by id (adding a known id is a no-op)
/// - Items keep the position of their first add
#[derive(Debug, Clone)]
pub struct CartManager<P = Product> {
    state: CartState<P>,
}

impl<P: Identified + Clone> CartManager<P> {
    /// Creates a closed, empty cart.
    pub fn new() -> Self {
        CartManager {
            state: CartState::new(),
        }
    }

    /// Opens the cart.
    pub fn open(&mut self) -> CartState<P> {
        self.state.open = true;
        debug!(items = self.state.len(), "Cart opened");
        self.get_state()
    }

    /// Closes the cart.
    pub fn close(&mut self) -> CartState<P> {
        self.state.open = false;
        debug!(items = self.state.len(), "Cart closed");
        self.get_state()
    }

    /// Adds a product unless one with the same id is already in the cart.
    pub fn add_product(&mut self, product: P) -> CartState<P> {
        if self.state.contains(product.id()) {
            trace!(product_id = ?product.id(), "Product already in cart, ignoring");
        } else {
            debug!(
                product_id = ?product.id(),
                items = self.state.len() + 1,
                "Product added to cart"
            );
            self.state.items.push(product);
        }
        self.get_state()
    }

    /// Removes the product with this id, if present.
    pub fn remove_product(&mut self, id: &P::Id) -> CartState<P> {
        match self.state.position(id) {
            Some(index) => {
                self.state.items.remove(index);
                debug!(product_id = ?id, items = self.state.len(), "Product removed from cart");
            }
            None => trace!(product_id = ?id, "Product not in cart, nothing to remove"),
        }
        self.get_state()
    }

    /// Empties the cart. The open flag is left alone.
    pub fn clear_products(&mut self) -> CartState<P> {
        let removed = self.state.len();
        self.state.items.clear();
        debug!(removed, "Cart products cleared");
        self.get_state()
    }

    /// Empties and closes the cart.
    pub fn clear_cart(&mut self) -> CartState<P> {
        let removed = self.state.len();
        self.state.items.clear();
        self.state.open = false;
        debug!(removed, "Cart cleared");
        self.get_state()
    }

    /// Checks if the cart has at least one item.
    pub fn has_products(&self) -> bool {
        !self.state.is_empty()
    }

    /// Checks if an item with the same id as `product` is in the cart.
    pub fn product_is_in_the_cart(&self, product: &P) -> bool {
        self.state.contains(product.id())
    }

    /// Returns a snapshot of the current state.
    pub fn get_state(&self) -> CartState<P> {
        self.state.clone()
    }

    /// Borrows the current state without cloning it.
    pub fn state(&self) -> &CartState<P> {
        &self.state
    }

    /// Returns the stored item with this id.
    pub fn find_product(&self, id: &P::Id) -> Option<&P> {
        self.state.position(id).map(|index| &self.state.items[index])
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.state.len()
    }
}

impl<P: Identified + Clone> Default for CartManager<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductId;

    fn test_product(id: &str) -> Product {
        Product::new(id)
            .with_attribute("title", format!("Product {}", id))
            .with_attribute("price", "19.99")
    }

    #[test]
    fn test_new_cart_is_closed_and_empty() {
        let cart: CartManager = CartManager::new();
        let state = cart.get_state();

        assert!(!state.open);
        assert!(state.items.is_empty());
        assert!(!cart.has_products());
    }

    #[test]
    fn test_get_state_after_open_and_add() {
        let mut cart = CartManager::new();
        let product = test_product("1");

        cart.open();
        cart.add_product(product.clone());

        assert_eq!(
            cart.get_state(),
            CartState {
                open: true,
                items: vec![product],
            }
        );
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let mut cart: CartManager = CartManager::new();

        assert!(cart.open().open);
        assert!(cart.open().open);
        assert!(!cart.close().open);
        assert!(!cart.close().open);
    }

    #[test]
    fn test_add_same_product_only_once() {
        let mut cart = CartManager::new();
        let product = test_product("1");

        cart.add_product(product.clone());
        let state = cart.add_product(product);

        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_duplicate_keeps_first_copy_and_position() {
        let mut cart = CartManager::new();
        let a = test_product("a");
        let b = test_product("b");
        let a_again = Product::new("a").with_attribute("title", "Changed");

        cart.add_product(a.clone());
        cart.add_product(b.clone());
        let state = cart.add_product(a_again);

        assert_eq!(state.items, vec![a, b]);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = CartManager::new();
        let a = test_product("1");
        let b = test_product("2");

        cart.add_product(a.clone());
        cart.add_product(b.clone());

        assert_eq!(cart.get_state().items, vec![a, b]);
    }

    #[test]
    fn test_remove_product() {
        let mut cart = CartManager::new();
        let product = test_product("1");

        let state = cart.add_product(product.clone());
        assert_eq!(state.items.len(), 1);

        let state = cart.remove_product(&product.id);
        assert_eq!(state.items.len(), 0);
    }

    #[test]
    fn test_remove_only_matching_product() {
        let mut cart = CartManager::new();
        let a = test_product("1");
        let b = test_product("2");
        let c = test_product("3");

        cart.add_product(a.clone());
        cart.add_product(b);
        cart.add_product(c.clone());

        let state = cart.remove_product(&ProductId::from("2"));
        assert_eq!(state.items, vec![a, c]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartManager::new();
        cart.open();
        cart.add_product(test_product("1"));
        let before = cart.get_state();

        let after = cart.remove_product(&ProductId::from("missing"));

        assert_eq!(before, after);
    }

    #[test]
    fn test_clear_products_keeps_open_flag() {
        let mut cart = CartManager::new();
        cart.open();
        cart.add_product(test_product("1"));
        cart.add_product(test_product("2"));

        let state = cart.clear_products();

        assert!(state.items.is_empty());
        assert!(state.open);
    }

    #[test]
    fn test_clear_cart_closes_and_empties() {
        let mut cart = CartManager::new();
        cart.open();
        cart.add_product(test_product("1"));
        cart.add_product(test_product("2"));

        let state = cart.clear_cart();

        assert_eq!(state, CartState::new());
    }

    #[test]
    fn test_has_products() {
        let mut cart = CartManager::new();
        assert!(!cart.has_products());

        cart.add_product(test_product("1"));
        assert!(cart.has_products());

        cart.clear_products();
        assert!(!cart.has_products());
    }

    #[test]
    fn test_product_is_in_the_cart() {
        let mut cart = CartManager::new();
        let product = test_product("1");

        assert!(!cart.product_is_in_the_cart(&product));
        cart.add_product(product.clone());
        assert!(cart.product_is_in_the_cart(&product));

        // Membership is by id, other fields are irrelevant.
        assert!(cart.product_is_in_the_cart(&Product::new("1")));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut cart = CartManager::new();
        let snapshot = cart.add_product(test_product("1"));

        cart.clear_products();

        assert_eq!(snapshot.items.len(), 1);
        assert!(cart.state().is_empty());
    }

    #[test]
    fn test_find_product_and_item_count() {
        let mut cart = CartManager::new();
        let product = test_product("1");
        cart.add_product(product.clone());

        assert_eq!(cart.find_product(&ProductId::from("1")), Some(&product));
        assert_eq!(cart.find_product(&ProductId::from("2")), None);
        assert_eq!(cart.item_count(), 1);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Sku {
        code: u32,
        label: &'static str,
    }

    impl Identified for Sku {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.code
        }
    }

    #[test]
    fn test_custom_item_type() {
        let mut cart = CartManager::new();

        cart.add_product(Sku { code: 7, label: "first" });
        let state = cart.add_product(Sku { code: 7, label: "second" });
        assert_eq!(state.items, vec![Sku { code: 7, label: "first" }]);

        let state = cart.remove_product(&7);
        assert!(state.is_empty());
    }
}
