//! Credential wrappers for configuration values
//!
//! The Cosmos DB key and the PostgreSQL connection string are held as
//! [`SecretString`]. The inner buffer is zeroed on drop and `Debug` output is
//! redacted, so a config struct can be logged without leaking either value.
//!
//! ```rust
//! use catalog::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let key = secret_string("cosmos-account-key".to_string());
//! assert!(!format!("{key:?}").contains("cosmos-account-key"));
//! assert_eq!(key.expose_secret().as_str(), "cosmos-account-key");
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;
use zeroize::Zeroize;

/// Credential text, zeroed when dropped
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl SecretValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl Deref for SecretValue {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Serialize for SecretValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Redacted, zeroizing string used for credentials in [`crate::config::CatalogConfig`]
pub type SecretString = Secret<SecretValue>;

/// Wrap a plain string (typically from an environment override)
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue(value))
}
