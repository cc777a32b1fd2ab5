//! # Mock Server
//!
//! In-process stand-in for the product API.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Request                             Response                           │
//! │  ───────                             ────────                           │
//! │  GET /{ns}/products           ─────► 200 { "products": [ ... ] }        │
//! │  GET /{ns}/products/{id}      ─────► 200 { "product": { ... } }         │
//! │                                      404 { "error": "..." }             │
//! │  anything else                ─────► 404 { "error": "..." }             │
//! │                                                                         │
//! │  after shutdown()             ─────► Err(FixtureError::ShutDown)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cart_core::Product;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::{Environment, ServerConfig};
use crate::error::{FixtureError, FixtureResult};
use crate::factory::ProductFactory;

// =============================================================================
// Request / Response
// =============================================================================

/// HTTP method of a mock request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request to the mock server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub method: Method,
    pub path: String,
}

impl Request {
    /// Shorthand for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Request {
            method: Method::Get,
            path: path.into(),
        }
    }
}

/// A response from the mock server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    fn ok(body: Value) -> Self {
        Response { status: 200, body }
    }

    fn not_found(message: String) -> Self {
        Response {
            status: 404,
            body: json!({ "error": message }),
        }
    }

    /// Checks for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// Mock Server
// =============================================================================

/// Fake product API holding fixture records in memory.
#[derive(Debug)]
pub struct MockServer {
    config: ServerConfig,
    factory: ProductFactory,
    records: Vec<Value>,
    running: bool,
}

impl MockServer {
    /// Starts a server. Development mode seeds `config.seed_count` products.
    pub fn new(config: ServerConfig) -> Self {
        let mut server = MockServer {
            factory: ProductFactory::new(config.id_strategy),
            config,
            records: Vec::new(),
            running: true,
        };

        if server.config.environment == Environment::Development {
            for _ in 0..server.config.seed_count {
                let record = server.factory.build();
                server.records.push(record);
            }
            info!(
                products = server.records.len(),
                namespace = %server.config.namespace,
                "Mock server seeded"
            );
        } else {
            debug!(namespace = %server.config.namespace, "Mock server started empty");
        }

        server
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Checks if `shutdown()` has not been called yet.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of stored products.
    pub fn product_count(&self) -> usize {
        self.records.len()
    }

    /// Creates and stores a product, returning it decoded.
    pub fn create_product(&mut self) -> FixtureResult<Product> {
        self.ensure_running()?;

        let record = self.factory.build();
        self.records.push(record.clone());
        let product = Product::from_json(record)?;

        debug!(product_id = %product.id, "Fixture product created");
        Ok(product)
    }

    /// Creates and stores `count` products.
    pub fn create_products(&mut self, count: usize) -> FixtureResult<Vec<Product>> {
        (0..count).map(|_| self.create_product()).collect()
    }

    /// Routes a request.
    ///
    /// Routing misses are ordinary 404 responses. Only a stopped server
    /// returns an error.
    pub fn handle(&self, request: &Request) -> FixtureResult<Response> {
        self.ensure_running()?;
        debug!(method = ?request.method, path = %request.path, "Mock request");

        if request.method != Method::Get {
            return Ok(Response::not_found(format!(
                "No route for {:?} {}",
                request.method, request.path
            )));
        }

        let segments: Vec<&str> = request
            .path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let response = match segments.as_slice() {
            [ns, "products"] if *ns == self.config.namespace => {
                Response::ok(json!({ "products": self.records }))
            }
            [ns, "products", id] if *ns == self.config.namespace => {
                match self.records.iter().find(|record| id_matches(record, id)) {
                    Some(record) => Response::ok(json!({ "product": record })),
                    None => Response::not_found(format!("product not found: {}", id)),
                }
            }
            _ => Response::not_found(format!("No route for GET {}", request.path)),
        };

        Ok(response)
    }

    /// Stops the server. Later requests fail with `ShutDown`.
    pub fn shutdown(&mut self) {
        if self.running {
            self.running = false;
            info!(products = self.records.len(), "Mock server shut down");
        }
    }

    fn ensure_running(&self) -> FixtureResult<()> {
        if self.running {
            Ok(())
        } else {
            Err(FixtureError::ShutDown)
        }
    }
}

/// Compares a record's id with a path segment, whether the id is a number or a string.
fn id_matches(record: &Value, segment: &str) -> bool {
    match record.get(cart_core::PRODUCT_ID_FIELD) {
        Some(Value::String(s)) => s == segment,
        Some(Value::Number(n)) => n.to_string() == segment,
        _ => false,
    }
}
