//! HTTP surface of the catalog
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/items` | [`items::list_items`] |
//! | GET | `/items/{id}` | [`items::get_item`] |
//! | POST | `/items` | [`items::create_item`] |
//! | PUT | `/items/{id}` | [`items::update_item`] |
//! | DELETE | `/items/{id}` | [`items::delete_item`] |
//! | GET | `/health/live` | [`health::live`] |
//! | GET | `/health/ready` | [`health::ready`] |

pub mod dto;
pub mod errors;
pub mod health;
pub mod items;

use crate::adapters::repository::{ItemRepository, Storage};
use crate::core::HealthReporter;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;

pub use dto::{CreateItemDto, ItemDto, ListItemsQuery, UpdateItemDto};
pub use errors::ErrorResponse;

/// Shared request state
pub struct AppState {
    pub repository: Arc<dyn ItemRepository>,
    pub health: HealthReporter,
}

impl AppState {
    /// State over a storage backend, with its probe registered for readiness
    pub fn from_storage(storage: Storage, readiness_timeout: Duration) -> Self {
        Self {
            repository: storage.repository,
            health: HealthReporter::new(readiness_timeout).with_probe(storage.probe),
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .with_state(state)
}
