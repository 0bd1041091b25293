//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{CatalogConfig, StorageBackend};
use super::secret::secret_string;
use crate::domain::errors::CatalogError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CatalogConfig
/// 4. Applies environment variable overrides (CATALOG_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use catalog::config::loader::load_config;
///
/// let config = load_config("catalog.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CatalogConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CatalogError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CatalogError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_str(&contents)
}

/// Loads configuration from TOML text
///
/// Runs the same substitution, override and validation steps as [`load_config`].
///
/// # Errors
///
/// Returns a configuration error if any step fails.
pub fn load_config_str(contents: &str) -> Result<CatalogConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: CatalogConfig = toml::from_str(&contents)
        .map_err(|e| CatalogError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        CatalogError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CatalogError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(CatalogError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Parse a numeric or boolean override, rejecting malformed values
fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CatalogError::Configuration(format!("Invalid value '{value}' for {name}"))
    })
}

/// Applies environment variable overrides using CATALOG_* prefix
///
/// Environment variables follow the pattern: CATALOG_<SECTION>_<KEY>
/// For example: CATALOG_SERVER_PORT, CATALOG_COSMOSDB_KEY
fn apply_env_overrides(config: &mut CatalogConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("CATALOG_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("CATALOG_STORAGE_BACKEND") {
        config.storage_backend = match val.to_lowercase().as_str() {
            "cosmosdb" => StorageBackend::CosmosDB,
            "postgresql" => StorageBackend::PostgreSQL,
            "memory" => StorageBackend::Memory,
            other => {
                return Err(CatalogError::Configuration(format!(
                    "Invalid value '{other}' for CATALOG_STORAGE_BACKEND"
                )))
            }
        };
    }

    // Server overrides
    if let Ok(val) = std::env::var("CATALOG_SERVER_HOST") {
        config.server.host = val;
    }
    if let Ok(val) = std::env::var("CATALOG_SERVER_PORT") {
        config.server.port = parse_override("CATALOG_SERVER_PORT", &val)?;
    }
    if let Ok(val) = std::env::var("CATALOG_SERVER_SHUTDOWN_TIMEOUT_SECS") {
        config.server.shutdown_timeout_secs =
            parse_override("CATALOG_SERVER_SHUTDOWN_TIMEOUT_SECS", &val)?;
    }

    // Cosmos DB overrides (only if CosmosDB is configured)
    if let Some(ref mut cosmos_config) = config.cosmosdb {
        if let Ok(val) = std::env::var("CATALOG_COSMOSDB_ENDPOINT") {
            cosmos_config.endpoint = val;
        }
        if let Ok(val) = std::env::var("CATALOG_COSMOSDB_KEY") {
            cosmos_config.key = secret_string(val);
        }
    }

    // PostgreSQL overrides (only if PostgreSQL is configured)
    if let Some(ref mut pg_config) = config.postgresql {
        if let Ok(val) = std::env::var("CATALOG_POSTGRESQL_CONNECTION_STRING") {
            pg_config.connection_string = secret_string(val);
        }
        if let Ok(val) = std::env::var("CATALOG_POSTGRESQL_MAX_CONNECTIONS") {
            pg_config.max_connections =
                parse_override("CATALOG_POSTGRESQL_MAX_CONNECTIONS", &val)?;
        }
        if let Ok(val) = std::env::var("CATALOG_POSTGRESQL_SSL_MODE") {
            pg_config.ssl_mode = val;
        }
    }

    // Health overrides
    if let Ok(val) = std::env::var("CATALOG_HEALTH_READINESS_TIMEOUT_SECONDS") {
        config.health.readiness_timeout_seconds =
            parse_override("CATALOG_HEALTH_READINESS_TIMEOUT_SECONDS", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CATALOG_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("CATALOG_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("CATALOG_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
