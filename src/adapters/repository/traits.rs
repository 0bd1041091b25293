//! Storage abstraction traits
//!
//! This module defines the traits that storage adapters must implement
//! to back the catalog.

use crate::domain::{Item, ItemId, Result};
use async_trait::async_trait;

/// Persistence port for catalog items
///
/// Implementations operate purely on [`Item`] and [`ItemId`] and know nothing
/// about HTTP or transfer shapes. Every failure is a storage error; absence
/// is never an error.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Look up an item by id
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(Item))` if found, `Ok(None)` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails for reasons other than "not found".
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>>;

    /// Return every stored item, in storage-defined order
    async fn get_items(&self) -> Result<Vec<Item>>;

    /// Insert a new item
    ///
    /// The caller guarantees that `item.id` is populated and unique.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the id collides with an existing record.
    async fn create_item(&self, item: &Item) -> Result<()>;

    /// Replace the stored record matching `item.id` with `item`
    ///
    /// Replacing a record that does not exist is a no-op.
    async fn update_item(&self, item: &Item) -> Result<()>;

    /// Remove the record matching `id`
    ///
    /// Deleting a missing id is not an error.
    async fn delete_item(&self, id: &ItemId) -> Result<()>;
}

/// Connectivity check against a storage backend
///
/// Used by the readiness health check; has no effect on item operations.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Name reported in health check output
    fn name(&self) -> &str;

    /// Test the storage connection
    ///
    /// # Errors
    ///
    /// Returns an error if the connection test fails.
    async fn test_connection(&self) -> Result<()>;
}
