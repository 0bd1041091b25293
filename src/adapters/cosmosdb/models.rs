//! Cosmos DB document models
//!
//! This module defines the document structure used when storing items
//! in Azure Cosmos DB. Identifiers and timestamps are stored as text so that
//! they read back identically regardless of SDK or server version.

use crate::domain::{format_timestamp, parse_timestamp, CatalogError, Item, ItemId, Result};
use serde::{Deserialize, Serialize};

/// Item document as stored in the `items` container
///
/// System properties added by Cosmos DB (`_rid`, `_etag`, `_ts`, ...) are
/// ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmosItem {
    /// Document ID and partition key (hyphenated UUID text)
    pub id: String,

    /// Item name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Item price
    pub price: f64,

    /// Creation timestamp, RFC 3339 text with offset
    pub created_date: String,
}

impl From<&Item> for CosmosItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            created_date: format_timestamp(&item.created_date),
        }
    }
}

impl TryFrom<CosmosItem> for Item {
    type Error = CatalogError;

    fn try_from(doc: CosmosItem) -> Result<Self> {
        let id: ItemId = doc
            .id
            .parse()
            .map_err(|e: String| CatalogError::Serialization(format!("Malformed document id: {e}")))?;

        Ok(Item {
            id,
            name: doc.name,
            description: doc.description,
            price: doc.price,
            created_date: parse_timestamp(&doc.created_date)?,
        })
    }
}
