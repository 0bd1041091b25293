//! Item domain model
//!
//! The item is the only entity managed by the catalog. Its `id` and
//! `created_date` are assigned once at creation and never change.

use super::errors::CatalogError;
use super::ids::ItemId;
use super::result::Result;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// A catalog item
///
/// # Examples
///
/// ```
/// use catalog::domain::{Item, ItemId};
///
/// let item = Item::new(ItemId::generate(), "Potion", Some("Heals".to_string()), 50.0);
/// assert_eq!(item.as_dto().name, "Potion");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Server-assigned unique identifier
    pub id: ItemId,

    /// Display name, never empty
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Non-negative price
    pub price: f64,

    /// Creation instant, kept with its offset
    pub created_date: DateTime<FixedOffset>,
}

impl Item {
    /// Creates an item stamped with the current UTC instant
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: Option<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            price,
            created_date: Utc::now().fixed_offset(),
        }
    }

    /// Formats the creation date the way it is persisted
    pub fn created_date_text(&self) -> String {
        format_timestamp(&self.created_date)
    }
}

/// Rejects blank names
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation("name cannot be empty".to_string()));
    }
    Ok(())
}

/// Rejects negative or non-finite prices
pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(CatalogError::Validation(
            "price must be a finite number".to_string(),
        ));
    }
    if price < 0.0 {
        return Err(CatalogError::Validation(format!(
            "price must be non-negative, got {price}"
        )));
    }
    Ok(())
}

/// Formats a timestamp as RFC 3339 text keeping sub-second digits and the offset
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Parses RFC 3339 text produced by [`format_timestamp`]
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).map_err(|e| {
        CatalogError::Serialization(format!("Invalid timestamp '{text}': {e}"))
    })
}
