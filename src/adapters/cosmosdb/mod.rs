//! Azure Cosmos DB integration
//!
//! Document-store backend for the catalog. Items live in the `items`
//! container of the `catalog` database, one document per item.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::CosmosDbItemRepository;
pub use client::CosmosDbClient;
pub use models::CosmosItem;
