//! # cart-fixtures: Mock Product Source
//!
//! An in-process fake of the product API, used to originate [`Product`]
//! values in tests and during front-end development.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  Test / UI controller                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  cart-fixtures (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ ServerConfig  │    │  MockServer   │    │  Factory     │  │   │
//! │  │   │ (config.rs)   │───►│ (server.rs)   │◄───│ (factory.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ env, seeds,   │    │ GET /products │    │ id, title,   │  │   │
//! │  │   │ id strategy   │    │ GET /:id      │    │ price, image │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │ ProductSource (source.rs)      │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                    cart_core::Product ──► CartManager                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cart_core::CartManager;
//! use cart_fixtures::{MockServer, ServerConfig};
//!
//! let mut server = MockServer::new(ServerConfig::test());
//! let mut cart = CartManager::new();
//!
//! let product = server.create_product()?;
//! let state = cart.add_product(product);
//! assert_eq!(state.items.len(), 1);
//!
//! server.shutdown();
//! # Ok::<(), cart_fixtures::FixtureError>(())
//! ```
//!
//! [`Product`]: cart_core::Product

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod factory;
pub mod server;
pub mod source;
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Environment, IdStrategy, ServerConfig};
pub use error::{FixtureError, FixtureResult};
pub use factory::ProductFactory;
pub use server::{Method, MockServer, Request, Response};
pub use source::ProductSource;
