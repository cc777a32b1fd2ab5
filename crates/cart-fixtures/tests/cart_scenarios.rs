//! Cart behaviour driven by products from the mock server.

use cart_core::{CartManager, CartState, Product, ProductId};
use cart_fixtures::telemetry::init_test_tracing;
use cart_fixtures::{MockServer, ProductSource, ServerConfig};

struct Harness {
    server: MockServer,
    manager: CartManager,
}

impl Harness {
    fn new() -> Self {
        init_test_tracing();
        Harness {
            server: MockServer::new(ServerConfig::test()),
            manager: CartManager::new(),
        }
    }

    fn product(&mut self) -> Product {
        self.server.create_product().expect("server is running")
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        self.server.shutdown();
    }
}

#[test]
fn returns_the_state() {
    let mut h = Harness::new();
    let product = h.product();

    h.manager.open();
    h.manager.add_product(product.clone());

    assert_eq!(
        h.manager.get_state(),
        CartState {
            open: true,
            items: vec![product],
        }
    );
}

#[test]
fn sets_cart_to_open() {
    let mut h = Harness::new();
    assert!(h.manager.open().open);
}

#[test]
fn sets_cart_to_closed() {
    let mut h = Harness::new();
    h.manager.open();
    assert!(!h.manager.close().open);
}

#[test]
fn adds_product_only_once() {
    let mut h = Harness::new();
    let product = h.product();

    h.manager.add_product(product.clone());
    let state = h.manager.add_product(product);

    assert_eq!(state.items.len(), 1);
}

#[test]
fn removes_product() {
    let mut h = Harness::new();
    let product = h.product();

    let state = h.manager.add_product(product.clone());
    assert_eq!(state.items.len(), 1);

    let state = h.manager.remove_product(&product.id);
    assert_eq!(state.items.len(), 0);
}

#[test]
fn clears_products() {
    let mut h = Harness::new();
    let first = h.product();
    let second = h.product();

    h.manager.open();
    h.manager.add_product(first);
    h.manager.add_product(second);

    let state = h.manager.clear_products();

    assert!(state.items.is_empty());
    assert!(state.open);
}

#[test]
fn clears_cart() {
    let mut h = Harness::new();
    let first = h.product();
    let second = h.product();

    h.manager.open();
    h.manager.add_product(first);
    h.manager.add_product(second);

    let state = h.manager.clear_cart();

    assert!(!state.open);
    assert!(state.items.is_empty());
}

#[test]
fn has_products_when_not_empty() {
    let mut h = Harness::new();
    assert!(!h.manager.has_products());

    let first = h.product();
    let second = h.product();
    h.manager.add_product(first);
    h.manager.add_product(second);

    assert!(h.manager.has_products());
}

#[test]
fn knows_product_is_in_the_cart() {
    let mut h = Harness::new();
    let product = h.product();

    h.manager.add_product(product.clone());

    assert!(h.manager.product_is_in_the_cart(&product));
}

#[test]
fn keeps_first_seen_order_across_repeated_adds() {
    let mut h = Harness::new();
    let products: Vec<Product> = (0..4).map(|_| h.product()).collect();

    // Add each product several times in a scrambled order.
    for index in [2, 0, 2, 3, 0, 1, 3, 2, 1] {
        h.manager.add_product(products[index].clone());
    }

    let ids: Vec<ProductId> = h.manager.get_state().items.into_iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        vec![
            products[2].id.clone(),
            products[0].id.clone(),
            products[3].id.clone(),
            products[1].id.clone(),
        ]
    );
}

#[test]
fn products_fetched_from_source_match_created_ones() {
    let mut h = Harness::new();
    let created = h.product();

    let fetched = h.server.fetch_product(&created.id).unwrap();
    h.manager.add_product(created);

    // Same id, so the fetched copy is already "in the cart".
    assert!(h.manager.product_is_in_the_cart(&fetched));
    assert_eq!(h.manager.add_product(fetched).items.len(), 1);
}

#[test]
fn state_serializes_for_the_front_end() {
    let mut h = Harness::new();
    let product = h.product();

    h.manager.open();
    let state = h.manager.add_product(product);

    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["open"], true);
    assert_eq!(value["items"][0]["id"], "1");
    assert!(value["items"][0]["title"].is_string());

    let back: CartState = serde_json::from_value(value).unwrap();
    assert_eq!(back, state);
}
