//! Cosmos DB adapter implementing the storage traits
//!
//! Translates the persistence port onto single-document Cosmos DB operations.
//! No retries are performed here; failures surface as storage errors.

use crate::adapters::cosmosdb::client::{is_conflict, is_not_found, CosmosDbClient};
use crate::adapters::cosmosdb::models::CosmosItem;
use crate::adapters::repository::traits::{ConnectivityProbe, ItemRepository};
use crate::domain::{CatalogError, CosmosDbError, Item, ItemId, Result};
use async_trait::async_trait;
use azure_data_cosmos::PartitionKey;
use futures::stream::StreamExt;
use std::sync::Arc;

/// Query selecting a single document by id
fn id_filter_query(id: &ItemId) -> String {
    // ItemId text is a hyphenated UUID, so it never contains quotes
    format!("SELECT * FROM c WHERE c.id = '{id}'")
}

/// Cosmos DB implementation of the storage traits
pub struct CosmosDbItemRepository {
    client: Arc<CosmosDbClient>,
}

impl CosmosDbItemRepository {
    /// Create a new Cosmos DB adapter
    pub fn new(client: CosmosDbClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    async fn collect_query(
        &self,
        query: String,
        partition_key: Option<PartitionKey>,
    ) -> Result<Vec<Item>> {
        let container = self.client.container();

        let pager = match partition_key {
            Some(pk) => container.query_items::<CosmosItem>(query, pk, None),
            None => container.query_items::<CosmosItem>(query, (), None),
        };
        let mut pager = pager.map_err(|e| {
            CatalogError::CosmosDb(CosmosDbError::QueryFailed(format!(
                "Failed to create query: {e}"
            )))
        })?;

        let mut items = Vec::new();
        while let Some(doc) = pager.next().await {
            let doc = doc.map_err(|e| {
                CatalogError::CosmosDb(CosmosDbError::QueryFailed(format!(
                    "Failed to read query results: {e}"
                )))
            })?;
            items.push(Item::try_from(doc)?);
        }

        Ok(items)
    }
}

#[async_trait]
impl ItemRepository for CosmosDbItemRepository {
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        tracing::debug!(item_id = %id, "Fetching item from Cosmos DB");

        let partition_key = PartitionKey::from(id.to_string());
        let mut items = self
            .collect_query(id_filter_query(id), Some(partition_key))
            .await?;

        if items.len() > 1 {
            tracing::warn!(
                item_id = %id,
                count = items.len(),
                "Multiple documents found with same ID, using first one"
            );
        }

        Ok(if items.is_empty() {
            None
        } else {
            Some(items.swap_remove(0))
        })
    }

    async fn get_items(&self) -> Result<Vec<Item>> {
        let items = self.collect_query("SELECT * FROM c".to_string(), None).await?;
        tracing::debug!(count = items.len(), "Listed items from Cosmos DB");
        Ok(items)
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        let doc = CosmosItem::from(item);
        let partition_key = PartitionKey::from(doc.id.clone());

        self.client
            .container()
            .create_item(partition_key, doc, None)
            .await
            .map_err(|e| {
                if is_conflict(&e) {
                    CatalogError::CosmosDb(CosmosDbError::Conflict(format!(
                        "Item {} already exists",
                        item.id
                    )))
                } else {
                    CatalogError::CosmosDb(CosmosDbError::InsertFailed(format!(
                        "Failed to insert item {}: {e}",
                        item.id
                    )))
                }
            })?;

        tracing::debug!(item_id = %item.id, "Item inserted");
        Ok(())
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let doc = CosmosItem::from(item);
        let document_id = doc.id.clone();
        let partition_key = PartitionKey::from(document_id.clone());

        match self
            .client
            .container()
            .replace_item(partition_key, &document_id, doc, None)
            .await
        {
            Ok(_) => {
                tracing::debug!(item_id = %item.id, "Item replaced");
                Ok(())
            }
            Err(e) if is_not_found(&e) => {
                tracing::debug!(item_id = %item.id, "Replace target missing, nothing to update");
                Ok(())
            }
            Err(e) => Err(CatalogError::CosmosDb(CosmosDbError::UpdateFailed(format!(
                "Failed to replace item {}: {e}",
                item.id
            )))),
        }
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        let document_id = id.to_string();
        let partition_key = PartitionKey::from(document_id.clone());

        match self
            .client
            .container()
            .delete_item(partition_key, &document_id, None)
            .await
        {
            Ok(_) => {
                tracing::debug!(item_id = %id, "Item deleted");
                Ok(())
            }
            Err(e) if is_not_found(&e) => Ok(()),
            Err(e) => Err(CatalogError::CosmosDb(CosmosDbError::DeleteFailed(format!(
                "Failed to delete item {id}: {e}"
            )))),
        }
    }
}

#[async_trait]
impl ConnectivityProbe for CosmosDbItemRepository {
    fn name(&self) -> &str {
        "cosmosdb"
    }

    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }
}
