//! Logging and observability
//!
//! Structured logging built on `tracing`, with an optional rotating JSON log
//! file next to the console output.
//!
//! # Example
//!
//! ```no_run
//! use catalog::logging::init_logging;
//! use catalog::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use catalog::log_error_with_context;
/// use catalog::domain::CatalogError;
///
/// let error = CatalogError::Database("connection reset".to_string());
/// log_error_with_context!(&error, "Failed to list items");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log a successful item mutation (create, update, delete)
///
/// # Example
///
/// ```no_run
/// use catalog::log_item_mutation;
/// use catalog::domain::ItemId;
///
/// let id = ItemId::generate();
/// log_item_mutation!("create", &id);
/// ```
#[macro_export]
macro_rules! log_item_mutation {
    ($operation:expr, $item_id:expr) => {
        tracing::info!(
            operation = $operation,
            item_id = %$item_id,
            "Item mutated"
        );
    };
}
