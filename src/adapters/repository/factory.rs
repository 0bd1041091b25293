//! Storage factory
//!
//! This module builds the configured storage backend. The backend client (and
//! its connection pool) is created exactly once and shared between the item
//! repository and the readiness probe.

use crate::adapters::cosmosdb::{CosmosDbClient, CosmosDbItemRepository};
use crate::adapters::memory::InMemoryItemRepository;
use crate::adapters::postgresql::{PostgreSQLClient, PostgreSQLItemRepository};
use crate::adapters::repository::traits::{ConnectivityProbe, ItemRepository};
use crate::config::schema::{CatalogConfig, StorageBackend};
use crate::domain::{CatalogError, Result};
use std::sync::Arc;

/// Handles onto a single storage backend
#[derive(Clone)]
pub struct Storage {
    /// Item persistence port
    pub repository: Arc<dyn ItemRepository>,

    /// Connectivity check for the same backend
    pub probe: Arc<dyn ConnectivityProbe>,
}

impl Storage {
    /// Wrap an adapter that implements both storage traits
    pub fn from_adapter<A>(adapter: Arc<A>) -> Self
    where
        A: ItemRepository + ConnectivityProbe + 'static,
    {
        Self {
            repository: adapter.clone() as Arc<dyn ItemRepository>,
            probe: adapter as Arc<dyn ConnectivityProbe>,
        }
    }

    /// In-memory storage, empty
    pub fn in_memory() -> Self {
        Self::from_adapter(Arc::new(InMemoryItemRepository::new()))
    }
}

/// Create the storage backend selected by `storage_backend`
///
/// When the backend's `ensure_schema` flag is set, the database/container
/// (Cosmos DB) or the items table (PostgreSQL) is created if missing.
///
/// # Errors
///
/// Returns an error if the backend section is missing or the client cannot be created.
pub async fn create_storage(config: &CatalogConfig) -> Result<Storage> {
    match config.storage_backend {
        StorageBackend::CosmosDB => {
            let cosmos_config = config.cosmosdb.as_ref().ok_or_else(|| {
                CatalogError::Configuration(
                    "cosmosdb configuration is required when storage_backend = 'cosmosdb'"
                        .to_string(),
                )
            })?;

            tracing::info!(endpoint = %cosmos_config.endpoint, "Creating CosmosDB storage");
            let client = CosmosDbClient::new(cosmos_config.clone()).await?;

            if cosmos_config.ensure_schema {
                client.ensure_database_exists().await?;
                client.ensure_container_exists().await?;
            }

            Ok(Storage::from_adapter(Arc::new(CosmosDbItemRepository::new(
                client,
            ))))
        }
        StorageBackend::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                CatalogError::Configuration(
                    "postgresql configuration is required when storage_backend = 'postgresql'"
                        .to_string(),
                )
            })?;

            let client = PostgreSQLClient::new(pg_config.clone()).await?;
            tracing::info!(
                connection = %client.connection_string_safe(),
                "Creating PostgreSQL storage"
            );

            if pg_config.ensure_schema {
                client.ensure_schema().await?;
            }

            Ok(Storage::from_adapter(Arc::new(
                PostgreSQLItemRepository::new(client),
            )))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; items are lost on restart");
            Ok(Storage::in_memory())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, ItemId};

    #[tokio::test]
    async fn test_probe_and_repository_share_backend() {
        let storage = Storage::in_memory();
        let item = Item::new(ItemId::generate(), "Potion", None, 50.0);

        storage.repository.create_item(&item).await.unwrap();

        assert_eq!(storage.probe.name(), "memory");
        assert!(storage.probe.test_connection().await.is_ok());
        assert!(storage.repository.get_item(&item.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_backend_section() {
        let mut config = CatalogConfig::default();
        config.storage_backend = StorageBackend::PostgreSQL;
        config.postgresql = None;

        let result = create_storage(&config).await;
        assert!(matches!(result, Err(CatalogError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_memory_backend() {
        let config = CatalogConfig::default();
        let storage = create_storage(&config).await.unwrap();
        assert!(storage.repository.get_items().await.unwrap().is_empty());
    }
}
