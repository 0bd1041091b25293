//! Cosmos DB client implementation
//!
//! This module provides the client for interacting with Azure Cosmos DB.
//! The client is created once at startup and shared by every request.

use crate::config::CosmosDbConfig;
use crate::domain::{CatalogError, CosmosDbError, Result};
use azure_core::credentials::Secret;
use azure_data_cosmos::clients::{ContainerClient, DatabaseClient};
use azure_data_cosmos::models::{ContainerProperties, IndexingPolicy, PartitionKeyDefinition};
use azure_data_cosmos::{CosmosClient, CosmosClientOptions};
use std::borrow::Cow;
use std::fmt::Display;

/// Database holding the catalog
pub const DATABASE_NAME: &str = "catalog";

/// Container holding item documents
pub const CONTAINER_NAME: &str = "items";

/// Partition key path of the items container
pub const PARTITION_KEY_PATH: &str = "/id";

/// Cosmos DB client for the catalog
///
/// Wraps the SDK client together with the database and container clients
/// for the fixed `catalog`/`items` location.
pub struct CosmosDbClient {
    /// Cosmos DB client
    client: CosmosClient,

    /// Database client
    database: DatabaseClient,

    /// Items container client
    container: ContainerClient,

    /// Configuration
    config: CosmosDbConfig,
}

impl CosmosDbClient {
    /// Create a new Cosmos DB client
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub async fn new(config: CosmosDbConfig) -> Result<Self> {
        use secrecy::ExposeSecret;

        // The SDK takes its own Secret type
        let key_str = config.key.expose_secret().as_str().to_owned();
        let key = Secret::new(key_str);
        let options = Some(CosmosClientOptions::default());

        let client = CosmosClient::with_key(&config.endpoint, key, options).map_err(|e| {
            CatalogError::CosmosDb(CosmosDbError::ConnectionFailed(format!(
                "Failed to create Cosmos client: {e}"
            )))
        })?;

        let database = client.database_client(DATABASE_NAME);
        let container = database.container_client(CONTAINER_NAME);

        Ok(Self {
            client,
            database,
            container,
            config,
        })
    }

    /// Test the connection to Cosmos DB
    ///
    /// Attempts to read the database to verify connectivity.
    pub async fn test_connection(&self) -> Result<()> {
        self.database.read(None).await.map_err(|e| {
            CatalogError::CosmosDb(CosmosDbError::ConnectionFailed(format!(
                "Connection test failed: {e}"
            )))
        })?;

        Ok(())
    }

    /// Ensure the database exists, creating it if necessary
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub async fn ensure_database_exists(&self) -> Result<()> {
        match self.database.read(None).await {
            Ok(_) => {
                tracing::info!(database = DATABASE_NAME, "Database already exists");
                Ok(())
            }
            Err(_) => {
                tracing::info!(database = DATABASE_NAME, "Creating database");

                self.client
                    .create_database(DATABASE_NAME, None)
                    .await
                    .map_err(|e| {
                        CatalogError::CosmosDb(CosmosDbError::DatabaseCreationFailed(format!(
                            "Failed to create database: {e}"
                        )))
                    })?;

                tracing::info!(database = DATABASE_NAME, "Database created successfully");
                Ok(())
            }
        }
    }

    /// Ensure the items container exists, creating it if necessary
    ///
    /// Partition key: `/id`
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be created.
    pub async fn ensure_container_exists(&self) -> Result<()> {
        match self.container.read(None).await {
            Ok(_) => {
                tracing::info!(container = CONTAINER_NAME, "Container already exists");
                Ok(())
            }
            Err(_) => {
                tracing::info!(container = CONTAINER_NAME, "Creating container");

                let partition_key_def = PartitionKeyDefinition {
                    paths: vec![PARTITION_KEY_PATH.to_string()],
                    kind: azure_data_cosmos::models::PartitionKeyKind::Hash,
                    version: None,
                };

                let properties = ContainerProperties {
                    id: Cow::Borrowed(CONTAINER_NAME),
                    partition_key: partition_key_def,
                    indexing_policy: Some(IndexingPolicy::default()),
                    ..Default::default()
                };

                self.database
                    .create_container(properties, None)
                    .await
                    .map_err(|e| {
                        CatalogError::CosmosDb(CosmosDbError::ContainerCreationFailed(format!(
                            "Failed to create container {CONTAINER_NAME}: {e}"
                        )))
                    })?;

                tracing::info!(container = CONTAINER_NAME, "Container created successfully");
                Ok(())
            }
        }
    }

    /// Get the items container client
    pub fn container(&self) -> &ContainerClient {
        &self.container
    }

    /// Get the database name
    pub fn database_name(&self) -> &str {
        DATABASE_NAME
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

/// Whether an SDK error is a 404 (not found)
pub(crate) fn is_not_found(e: &impl Display) -> bool {
    let msg = e.to_string();
    msg.contains("404") || msg.contains("NotFound")
}

/// Whether an SDK error is a 409 (conflict)
pub(crate) fn is_conflict(e: &impl Display) -> bool {
    let msg = e.to_string();
    msg.contains("409") || msg.contains("Conflict")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn test_config() -> CosmosDbConfig {
        CosmosDbConfig {
            endpoint: "https://test.documents.azure.com:443/".to_string(),
            key: secret_string("dGVzdC1rZXk=".to_string()),
            ensure_schema: false,
        }
    }

    #[tokio::test]
    async fn test_fixed_location() {
        let client = CosmosDbClient::new(test_config()).await.unwrap();
        assert_eq!(client.database_name(), "catalog");
        assert_eq!(client.endpoint(), "https://test.documents.azure.com:443/");
    }

    #[test]
    fn test_status_classification() {
        assert!(is_not_found(&"HttpResponse(404, NotFound)"));
        assert!(!is_not_found(&"HttpResponse(409, Conflict)"));
        assert!(is_conflict(&"HttpResponse(409, Conflict)"));
        assert!(!is_conflict(&"HttpResponse(503, ServiceUnavailable)"));
    }
}
