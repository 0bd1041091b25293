//! PostgreSQL integration
//!
//! Relational backend for the catalog, storing one row per item.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLItemRepository;
pub use client::PostgreSQLClient;
pub use models::PostgreSQLItem;
