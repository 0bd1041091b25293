//! PostgreSQL adapter implementing the storage traits
//!
//! Relational variant of the persistence port backed by the `items` table.

use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::PostgreSQLItem;
use crate::adapters::repository::traits::{ConnectivityProbe, ItemRepository};
use crate::domain::{Item, ItemId, Result};
use async_trait::async_trait;
use std::sync::Arc;

const SELECT_COLUMNS: &str = "SELECT id, name, description, price, created_date FROM items";

/// PostgreSQL implementation of the storage traits
pub struct PostgreSQLItemRepository {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLItemRepository {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ItemRepository for PostgreSQLItemRepository {
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        let query = format!("{SELECT_COLUMNS} WHERE id = $1");
        let id_text = id.to_string();

        let rows = self.client.query(&query, &[&id_text]).await?;

        rows.first()
            .map(|row| PostgreSQLItem::from_row(row).and_then(Item::try_from))
            .transpose()
    }

    async fn get_items(&self) -> Result<Vec<Item>> {
        let rows = self.client.query(SELECT_COLUMNS, &[]).await?;

        rows.iter()
            .map(|row| PostgreSQLItem::from_row(row).and_then(Item::try_from))
            .collect()
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        let row = PostgreSQLItem::from(item);

        self.client
            .execute(
                "INSERT INTO items (id, name, description, price, created_date) \
                 VALUES ($1, $2, $3, $4, $5)",
                &[
                    &row.id,
                    &row.name,
                    &row.description,
                    &row.price,
                    &row.created_date,
                ],
            )
            .await?;

        tracing::debug!(item_id = %item.id, "Item inserted");
        Ok(())
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let row = PostgreSQLItem::from(item);

        let affected = self
            .client
            .execute(
                "UPDATE items SET name = $2, description = $3, price = $4, created_date = $5 \
                 WHERE id = $1",
                &[
                    &row.id,
                    &row.name,
                    &row.description,
                    &row.price,
                    &row.created_date,
                ],
            )
            .await?;

        tracing::debug!(item_id = %item.id, affected, "Item replaced");
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        let id_text = id.to_string();

        let affected = self
            .client
            .execute("DELETE FROM items WHERE id = $1", &[&id_text])
            .await?;

        tracing::debug!(item_id = %id, affected, "Item deleted");
        Ok(())
    }
}

#[async_trait]
impl ConnectivityProbe for PostgreSQLItemRepository {
    fn name(&self) -> &str {
        "postgresql"
    }

    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }
}
