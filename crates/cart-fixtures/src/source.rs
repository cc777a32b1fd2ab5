//! # Product Source
//!
//! Where products come from. The cart never calls a source; the UI
//! controller (or a test) fetches products and hands them to the cart.

use cart_core::{Product, ProductId};
use serde_json::Value;

use crate::error::{FixtureError, FixtureResult};
use crate::server::{MockServer, Request};

/// Something that can hand out product records.
pub trait ProductSource {
    /// Fetches every product.
    fn fetch_products(&self) -> FixtureResult<Vec<Product>>;

    /// Fetches one product by id.
    fn fetch_product(&self, id: &ProductId) -> FixtureResult<Product>;
}

impl ProductSource for MockServer {
    fn fetch_products(&self) -> FixtureResult<Vec<Product>> {
        let path = format!("/{}/products", self.config().namespace);
        let response = self.handle(&Request::get(path.as_str()))?;
        if !response.is_success() {
            return Err(FixtureError::UnexpectedStatus {
                status: response.status,
                path,
            });
        }

        match response.body {
            Value::Object(mut body) => match body.remove("products") {
                Some(Value::Array(records)) => records
                    .into_iter()
                    .map(|record| Product::from_json(record).map_err(FixtureError::from))
                    .collect(),
                _ => Err(FixtureError::unexpected_body("missing \"products\" array")),
            },
            _ => Err(FixtureError::unexpected_body("expected a JSON object")),
        }
    }

    fn fetch_product(&self, id: &ProductId) -> FixtureResult<Product> {
        let path = format!("/{}/products/{}", self.config().namespace, id);
        let response = self.handle(&Request::get(path.as_str()))?;

        match response.status {
            200 => {}
            404 => return Err(FixtureError::not_found("product", id.to_string())),
            status => return Err(FixtureError::UnexpectedStatus { status, path }),
        }

        match response.body {
            Value::Object(mut body) => match body.remove("product") {
                Some(record) => Ok(Product::from_json(record)?),
                None => Err(FixtureError::unexpected_body("missing \"product\" object")),
            },
            _ => Err(FixtureError::unexpected_body("expected a JSON object")),
        }
    }
}
