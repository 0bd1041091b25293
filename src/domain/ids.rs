//! Domain identifier types
//!
//! Item identifiers are UUIDs generated server-side. They are exchanged and
//! persisted as hyphenated lowercase text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Item identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use catalog::domain::ids::ItemId;
/// use std::str::FromStr;
///
/// let id = ItemId::from_str("7d44b88c-4199-4bad-97dc-d78268e01398").unwrap();
/// assert_eq!(id.to_string(), "7d44b88c-4199-4bad-97dc-d78268e01398");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid item id '{s}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_text_round_trip() {
        let id = ItemId::generate();
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_display_is_lowercase_hyphenated() {
        let id = ItemId::from_str("7D44B88C-4199-4BAD-97DC-D78268E01398").unwrap();
        assert_eq!(id.to_string(), "7d44b88c-4199-4bad-97dc-d78268e01398");
    }

    #[test]
    fn test_invalid_id() {
        assert!(ItemId::from_str("").is_err());
        assert!(ItemId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        assert!(ItemId::from_str(" 7d44b88c-4199-4bad-97dc-d78268e01398").is_err());
        assert!(ItemId::from_str("7d44b88c-4199-4bad-97dc-d78268e01398\n").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let id = ItemId::from_str("7d44b88c-4199-4bad-97dc-d78268e01398").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"7d44b88c-4199-4bad-97dc-d78268e01398\"");
    }
}
