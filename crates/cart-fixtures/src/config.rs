//! # Fixture Server Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CART_FIXTURES_*`)
//! 2. Defaults (this file)
//!
//! Invalid environment values are logged and ignored, the default stays.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable names.
pub const ENV_ENVIRONMENT: &str = "CART_FIXTURES_ENV";
pub const ENV_SEED_COUNT: &str = "CART_FIXTURES_SEED_COUNT";
pub const ENV_ID_STRATEGY: &str = "CART_FIXTURES_ID_STRATEGY";
pub const ENV_NAMESPACE: &str = "CART_FIXTURES_NAMESPACE";

/// Which mode the mock server runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Seeds `seed_count` products at startup.
    #[default]
    Development,

    /// Starts empty; tests create exactly what they need.
    Test,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Test => f.write_str("test"),
        }
    }
}

/// How fixture product ids are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `"1"`, `"2"`, `"3"`, ...
    #[default]
    Sequential,

    /// Random UUID v4 strings.
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(format!("unknown id strategy '{}'", other)),
        }
    }
}

/// Mock server configuration.
///
/// ## Example
/// ```rust
/// use cart_fixtures::{Environment, ServerConfig};
///
/// let config = ServerConfig::new()
///     .environment(Environment::Development)
///     .seed_count(3);
/// assert_eq!(config.seed_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Development seeds products, Test starts empty.
    /// Default: Development
    pub environment: Environment,

    /// Products created at startup in Development.
    /// Default: 10
    pub seed_count: usize,

    /// Id generation for fixture products.
    /// Default: Sequential
    pub id_strategy: IdStrategy,

    /// First path segment of every route (`/{namespace}/products`).
    /// Default: "api"
    pub namespace: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            environment: Environment::Development,
            seed_count: 10,
            id_strategy: IdStrategy::Sequential,
            namespace: "api".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for tests: empty server, sequential ids.
    pub fn test() -> Self {
        Self::default().environment(Environment::Test)
    }

    /// Creates a ServerConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CART_FIXTURES_ENV`: `development` or `test`
    /// - `CART_FIXTURES_SEED_COUNT`: number of products seeded in development
    /// - `CART_FIXTURES_ID_STRATEGY`: `sequential` or `uuid`
    /// - `CART_FIXTURES_NAMESPACE`: route prefix
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(value) = lookup(ENV_ENVIRONMENT) {
            match value.parse() {
                Ok(environment) => config.environment = environment,
                Err(e) => warn!(variable = ENV_ENVIRONMENT, error = %e, "Ignoring invalid value"),
            }
        }

        if let Some(value) = lookup(ENV_SEED_COUNT) {
            match value.trim().parse() {
                Ok(count) => config.seed_count = count,
                Err(e) => warn!(variable = ENV_SEED_COUNT, error = %e, "Ignoring invalid value"),
            }
        }

        if let Some(value) = lookup(ENV_ID_STRATEGY) {
            match value.parse() {
                Ok(strategy) => config.id_strategy = strategy,
                Err(e) => warn!(variable = ENV_ID_STRATEGY, error = %e, "Ignoring invalid value"),
            }
        }

        if let Some(value) = lookup(ENV_NAMESPACE) {
            let namespace = value.trim().trim_matches('/');
            if !namespace.is_empty() {
                config.namespace = namespace.to_string();
            }
        }

        config
    }

    /// Sets the environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the development seed count.
    pub fn seed_count(mut self, count: usize) -> Self {
        self.seed_count = count;
        self
    }

    /// Sets the id strategy.
    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Sets the route namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}
