//! PostgreSQL row models
//!
//! This module defines the row structure used when storing items in the
//! `items` table.

use crate::domain::{format_timestamp, parse_timestamp, CatalogError, Item, ItemId, Result};
use tokio_postgres::Row;

/// Row of the `items` table
#[derive(Debug, Clone, PartialEq)]
pub struct PostgreSQLItem {
    /// Primary key (hyphenated UUID text)
    pub id: String,

    /// Item name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Item price
    pub price: f64,

    /// Creation timestamp, RFC 3339 text with offset
    pub created_date: String,
}

impl PostgreSQLItem {
    /// Read a row selected with `SELECT id, name, description, price, created_date`
    ///
    /// # Errors
    ///
    /// Returns an error if a column is missing or has an unexpected type.
    pub fn from_row(row: &Row) -> Result<Self> {
        let column = |e: tokio_postgres::Error| {
            CatalogError::Serialization(format!("Malformed items row: {e}"))
        };

        Ok(Self {
            id: row.try_get("id").map_err(column)?,
            name: row.try_get("name").map_err(column)?,
            description: row.try_get("description").map_err(column)?,
            price: row.try_get("price").map_err(column)?,
            created_date: row.try_get("created_date").map_err(column)?,
        })
    }
}

impl From<&Item> for PostgreSQLItem {
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

impl TryFrom<PostgreSQLItem> for Item {
    type Error = CatalogError;

    fn try_from(row: PostgreSQLItem) -> Result<Self> {
        let id: ItemId = row
            .id
            .parse()
            .map_err(|e: String| CatalogError::Serialization(format!("Malformed row id: {e}")))?;

        Ok(Item {
            id,
            name: row.name,
            description: row.description,
            price: row.price,
            created_date: parse_timestamp(&row.created_date)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_round_trip() {
        let item = Item::new(ItemId::generate(), "Phoenix Down", None, 300.0);

        let row = PostgreSQLItem::from(&item);
        assert_eq!(row.id, item.id.to_string());

        let back = Item::try_from(row).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_bad_timestamp() {
        let row = PostgreSQLItem {
            id: ItemId::generate().to_string(),
            name: "Tent".to_string(),
            description: None,
            price: 10.0,
            created_date: "2024-13-40".to_string(),
        };

        assert!(Item::try_from(row).is_err());
    }
}
