//! Result type alias for the catalog service

use super::errors::CatalogError;

/// Result type alias for catalog operations
///
/// # Examples
///
/// ```
/// use catalog::domain::result::Result;
/// use catalog::domain::errors::CatalogError;
///
/// fn failing_function() -> Result<()> {
///     Err(CatalogError::Validation("price must be non-negative".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, CatalogError>;
