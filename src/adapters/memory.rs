//! In-memory storage adapter
//!
//! Keeps items in a process-local map. Used for local development and as the
//! backend of the integration tests; contents are lost on restart.

use crate::adapters::repository::traits::{ConnectivityProbe, ItemRepository};
use crate::domain::{CatalogError, Item, ItemId, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory implementation of the storage traits
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryItemRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `items`
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: RwLock::new(items.into_iter().map(|item| (item.id, item)).collect()),
        }
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the repository holds no items
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn get_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(CatalogError::Database(format!(
                "Item with id {} already exists",
                item.id
            )));
        }
        items.insert(item.id, item.clone());
        Ok(())
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        if let Some(existing) = self.items.write().await.get_mut(&item.id) {
            *existing = item.clone();
        }
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        self.items.write().await.remove(id);
        Ok(())
    }
}

#[async_trait]
impl ConnectivityProbe for InMemoryItemRepository {
    fn name(&self) -> &str {
        "memory"
    }

    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> Item {
        Item::new(ItemId::generate(), name, Some("desc".to_string()), 10.0)
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = InMemoryItemRepository::new();
        let item = sample("Potion");

        repo.create_item(&item).await.unwrap();

        assert_eq!(repo.get_item(&item.id).await.unwrap(), Some(item));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = InMemoryItemRepository::new();
        assert!(repo.get_item(&ItemId::generate()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_create_fails() {
        let repo = InMemoryItemRepository::new();
        let item = sample("Potion");

        repo.create_item(&item).await.unwrap();
        let err = repo.create_item(&item).await.unwrap_err();

        assert!(err.is_storage());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let repo = InMemoryItemRepository::new();
        let item = sample("Potion");
        repo.create_item(&item).await.unwrap();

        let mut changed = item.clone();
        changed.name = "Hi-Potion".to_string();
        changed.description = None;
        repo.update_item(&changed).await.unwrap();

        assert_eq!(repo.get_item(&item.id).await.unwrap(), Some(changed));
    }

    #[tokio::test]
    async fn test_update_missing_is_noop() {
        let repo = InMemoryItemRepository::new();
        repo.update_item(&sample("Ghost")).await.unwrap();
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryItemRepository::with_items(vec![sample("Potion")]);
        let id = repo.get_items().await.unwrap()[0].id;

        repo.delete_item(&id).await.unwrap();
        repo.delete_item(&id).await.unwrap();

        assert!(repo.get_item(&id).await.unwrap().is_none());
    }
}
