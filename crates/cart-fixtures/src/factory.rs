//! # Product Factory
//!
//! Builds fixture product records.
//!
//! ## Generated Records
//! ```json
//! {
//!   "id": "3",
//!   "title": "Canvas Backpack",
//!   "price": "42.75",
//!   "image": "/images/products/canvas-backpack.jpg",
//!   "createdAt": "2026-10-19T09:30:00+00:00"
//! }
//! ```
//!
//! Everything except `createdAt` (and ids under the `uuid` strategy) is a
//! pure function of the sequence number, so fixtures are stable across runs.

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::config::IdStrategy;

/// Catalog titles cycled through by the factory.
const TITLES: &[&str] = &[
    "Running Sneakers",
    "Leather Wallet",
    "Canvas Backpack",
    "Wool Beanie",
    "Denim Jacket",
    "Linen Shirt",
    "Chronograph Watch",
    "Polarized Sunglasses",
    "Suede Loafers",
    "Cotton Hoodie",
    "Travel Duffel",
    "Silk Scarf",
];

/// Lowest fixture price in cents ($9.99).
const MIN_PRICE_CENTS: u64 = 999;

/// Width of the fixture price band in cents.
const PRICE_SPREAD_CENTS: u64 = 19_000;

/// Generates product records one after another.
#[derive(Debug, Clone)]
pub struct ProductFactory {
    strategy: IdStrategy,
    sequence: u64,
}

impl ProductFactory {
    /// Creates a factory starting at sequence 1.
    pub fn new(strategy: IdStrategy) -> Self {
        ProductFactory {
            strategy,
            sequence: 0,
        }
    }

    /// Number of records built so far.
    pub fn built(&self) -> u64 {
        self.sequence
    }

    /// Builds the next record.
    pub fn build(&mut self) -> Value {
        self.sequence += 1;
        let n = self.sequence;

        let id = match self.strategy {
            IdStrategy::Sequential => n.to_string(),
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
        };

        let title = title_for(n);

        json!({
            "id": id,
            "title": title,
            "price": format_price(price_cents_for(n)),
            "image": format!("/images/products/{}.jpg", slug(title)),
            "createdAt": Utc::now().to_rfc3339(),
        })
    }
}

fn title_for(n: u64) -> &'static str {
    // n starts at 1
    TITLES[((n - 1) % TITLES.len() as u64) as usize]
}

fn price_cents_for(n: u64) -> u64 {
    MIN_PRICE_CENTS + (n * 1_375) % PRICE_SPREAD_CENTS
}

fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn slug(title: &str) -> String {
    title.to_ascii_lowercase().replace(' ', "-")
}
