//! Configuration management for the catalog service.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! The service uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CATALOG_*` environment overrides
//! - Default values for optional settings
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use catalog::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("catalog.toml")?;
//!
//! println!("Listening on {}", config.server.bind_address());
//! println!("Storage backend: {}", config.storage_backend);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ServerConfig`] - Bind address and shutdown timeout
//! - [`StorageBackend`] - Which store backs the catalog
//! - [`CosmosDbConfig`] - Cosmos DB connection
//! - [`PostgreSQLConfig`] - PostgreSQL connection pool
//! - [`HealthConfig`] - Readiness check timeout
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! storage_backend = "cosmosdb"
//!
//! [application]
//! log_level = "info"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [cosmosdb]
//! endpoint = "https://your-account.documents.azure.com:443/"
//! key = "${CATALOG_COSMOS_KEY}"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_str};
pub use schema::{
    ApplicationConfig, CatalogConfig, CosmosDbConfig, Environment, HealthConfig, LoggingConfig,
    PostgreSQLConfig, ServerConfig, StorageBackend,
};
pub use secret::{secret_string, SecretString, SecretValue};
