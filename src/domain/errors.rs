//! Domain error types
//!
//! One error enum for the whole service. Driver errors are flattened to text
//! at the adapter boundary so no SDK type leaks past it.

use thiserror::Error;

/// Error type returned by every fallible catalog operation
///
/// The API layer maps each variant onto an HTTP status code.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Unreadable or invalid configuration, unusable startup settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed caller input (missing field, negative price, bad id)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested item does not exist
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Cosmos DB error: {0}")]
    CosmosDb(#[from] CosmosDbError),

    /// PostgreSQL or pool failure
    #[error("Database error: {0}")]
    Database(String),

    /// Storage unreachable
    #[error("Connection error: {0}")]
    Connection(String),

    /// Stored record could not be decoded (or encoded)
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl CatalogError {
    /// Whether the error originates in the storage layer
    ///
    /// Storage errors are surfaced to callers as server-side failures.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            CatalogError::CosmosDb(_)
                | CatalogError::Database(_)
                | CatalogError::Connection(_)
                | CatalogError::Serialization(_)
        )
    }
}

/// Failures reported by the Cosmos DB adapter
#[derive(Debug, Error)]
pub enum CosmosDbError {
    #[error("Failed to connect to Cosmos DB: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database: {0}")]
    DatabaseCreationFailed(String),

    #[error("Failed to create container: {0}")]
    ContainerCreationFailed(String),

    #[error("Failed to insert item document: {0}")]
    InsertFailed(String),

    #[error("Failed to replace item document: {0}")]
    UpdateFailed(String),

    #[error("Failed to delete item document: {0}")]
    DeleteFailed(String),

    #[error("Failed to query items: {0}")]
    QueryFailed(String),

    /// 409 from the store: an item with this id already exists
    #[error("Item already exists: {0}")]
    Conflict(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::NotFound("3f0c0d1e".to_string());
        assert_eq!(err.to_string(), "Item not found: 3f0c0d1e");
    }

    #[test]
    fn test_cosmosdb_error_conversion() {
        let cosmos_err = CosmosDbError::Conflict("duplicate id".to_string());
        let err: CatalogError = cosmos_err.into();
        assert!(matches!(err, CatalogError::CosmosDb(_)));
        assert!(err.is_storage());
    }

    #[test]
    fn test_is_storage() {
        assert!(CatalogError::Database("down".to_string()).is_storage());
        assert!(CatalogError::Connection("refused".to_string()).is_storage());
        assert!(!CatalogError::Validation("bad".to_string()).is_storage());
        assert!(!CatalogError::NotFound("x".to_string()).is_storage());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: CatalogError = toml_err.into();
        assert!(matches!(err, CatalogError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
