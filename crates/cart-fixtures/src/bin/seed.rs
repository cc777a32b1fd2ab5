//! # Fixture Product Printer
//!
//! Prints fixture products as a JSON array, for pasting into front-end
//! mocks or piping into other tools.
//!
//! ## Usage
//! ```bash
//! # 10 products (default)
//! cargo run -p cart-fixtures --bin seed
//!
//! # Custom amount with UUID ids
//! cargo run -p cart-fixtures --bin seed -- --count 50 --uuid
//! ```
//!
//! `CART_FIXTURES_*` environment variables are honoured; flags win.

use std::env;

use cart_fixtures::telemetry::init_tracing;
use cart_fixtures::{Environment, IdStrategy, MockServer, ServerConfig};
use tracing::info;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Print {
        count: usize,
        id_strategy: IdStrategy,
    },
    Help,
}

/// Parses arguments (without the program name) on top of config defaults.
fn parse_args(args: &[String], defaults: &ServerConfig) -> Result<Command, String> {
    let mut count = defaults.seed_count;
    let mut id_strategy = defaults.id_strategy;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--count" | "-c" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{} requires a value", arg))?;
                count = value
                    .parse()
                    .map_err(|e| format!("invalid count '{}': {}", value, e))?;
            }
            "--uuid" => id_strategy = IdStrategy::Uuid,
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(Command::Print { count, id_strategy })
}

fn print_help() {
    println!("Fixture product printer");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>    Number of products to print (default: 10)");
    println!("      --uuid         Use UUID ids instead of 1, 2, 3, ...");
    println!("  -h, --help         Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let base = ServerConfig::from_env();
    let args: Vec<String> = env::args().skip(1).collect();

    let (count, id_strategy) = match parse_args(&args, &base)? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Print { count, id_strategy } => (count, id_strategy),
    };

    // Test mode so only the products asked for here exist.
    let config = base.environment(Environment::Test).id_strategy(id_strategy);
    let mut server = MockServer::new(config);
    let products = server.create_products(count)?;
    server.shutdown();

    info!(count = products.len(), "Fixture products generated");
    println!("{}", serde_json::to_string_pretty(&products)?);

    Ok(())
}
