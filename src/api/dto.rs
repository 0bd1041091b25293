//! Transfer shapes exchanged at the HTTP boundary
//!
//! Input shapes carry no `id` or `createdDate`, so callers can never set the
//! server-controlled fields. Unknown JSON fields are ignored.

use crate::domain::{validate_name, validate_price, Item, ItemId, Result};
use serde::{Deserialize, Serialize};

/// Read shape of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// RFC 3339 timestamp with offset
    pub created_date: String,
}

/// Body of `POST /items`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl CreateItemDto {
    /// # Errors
    ///
    /// `CatalogError::Validation` on a blank name or an invalid price.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

/// Body of `PUT /items/{id}`; only name and price may change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    pub name: String,
    pub price: f64,
}

impl UpdateItemDto {
    /// # Errors
    ///
    /// `CatalogError::Validation` on a blank name or an invalid price.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

/// Query string of `GET /items`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsQuery {
    #[serde(default)]
    pub name_to_match: Option<String>,
}

impl Item {
    /// Project the entity onto its read shape
    pub fn as_dto(&self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            created_date: self.created_date_text(),
        }
    }
}
