// Catalog - Item Catalog Microservice
// Copyright (c) 2025 Catalog Contributors
// Licensed under the MIT License

//! # Catalog - Item Catalog Microservice
//!
//! Catalog exposes CRUD operations over a collection of items (id, name,
//! description, price, creation timestamp) plus liveness and readiness
//! endpoints, backed by Azure Cosmos DB, PostgreSQL or an in-memory store.
//!
//! ## Architecture
//!
//! - [`api`] - axum handlers, transfer shapes and HTTP error mapping
//! - [`core`] - Health reporting
//! - [`adapters`] - Storage backends behind the [`adapters::repository::ItemRepository`] port
//! - [`domain`] - The item entity, identifiers and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catalog::adapters::repository::create_storage;
//! use catalog::api::{router, AppState};
//! use catalog::config::load_config;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("catalog.toml")?;
//!     let storage = create_storage(&config).await?;
//!
//!     let state = Arc::new(AppState::from_storage(storage, Duration::from_secs(5)));
//!     let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
//!     axum::serve(listener, router(state)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library code returns [`domain::Result`], whose error type is [`domain::CatalogError`].
//! At the HTTP boundary validation errors become 400, missing items 404 and
//! storage failures 500.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
