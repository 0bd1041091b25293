//! Storage adapters
//!
//! Concrete implementations of the persistence port, one per supported backend.

pub mod cosmosdb;
pub mod memory;
pub mod postgresql;
pub mod repository;
