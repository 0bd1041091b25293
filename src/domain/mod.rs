//! Domain models and types for the catalog service.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ItemId`])
//! - **The item entity** ([`Item`]) and its invariants
//! - **Error types** ([`CatalogError`], [`CosmosDbError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CatalogError>`]:
//!
//! ```rust
//! use catalog::domain::{validate_price, Result};
//!
//! fn example() -> Result<()> {
//!     validate_price(10.0)?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod item;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{CatalogError, CosmosDbError};
pub use ids::ItemId;
pub use item::{format_timestamp, parse_timestamp, validate_name, validate_price, Item};
pub use result::Result;
