//! Storage abstraction layer
//!
//! This module provides a trait-based abstraction for item persistence,
//! allowing the catalog to run against different backends (Cosmos DB,
//! PostgreSQL, in-memory).

pub mod factory;
pub mod traits;

pub use factory::{create_storage, Storage};
pub use traits::{ConnectivityProbe, ItemRepository};
