//! The storage port and its typed extension.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};

/// A durable string-keyed byte store.
///
/// Object-safe so consumers can hold an `Arc<dyn KeyValue>` and swap the
/// backing store between the platform store and [`crate::MemoryStore`]
/// without touching their own code.
pub trait KeyValue {
    /// Get the raw bytes stored under `key`, or `None` if absent.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete the value under `key`. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get_raw(key)?.is_some())
    }
}

/// JSON convenience methods over any [`KeyValue`] implementation.
pub trait KeyValueExt: KeyValue {
    /// Get and deserialize the value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize and store a value under `key`.
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }
}

impl<S: KeyValue + ?Sized> KeyValueExt for S {}

/// Helper to build storage keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = storage_key!("cart", session_id);
/// // Returns "cart:sess123"
/// ```
#[macro_export]
macro_rules! storage_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;
    use std::sync::Arc;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        items: Vec<String>,
    }

    #[test]
    fn test_typed_round_trip() {
        let store = MemoryStore::new();
        let snapshot = Snapshot {
            items: vec!["a".to_string(), "b".to_string()],
        };

        store.set("snap", &snapshot).unwrap();
        let restored: Option<Snapshot> = store.get("snap").unwrap();
        assert_eq!(restored, Some(snapshot));
    }

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        let value: Option<Snapshot> = store.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let store = MemoryStore::new();
        store.set_raw("snap", b"not json").unwrap();
        let result: Result<Option<Snapshot>, _> = store.get("snap");
        assert!(result.is_err());
    }

    #[test]
    fn test_typed_access_through_trait_object() {
        let store: Arc<dyn KeyValue> = Arc::new(MemoryStore::new());
        store.set("n", &42_u32).unwrap();
        assert_eq!(store.get::<u32>("n").unwrap(), Some(42));
    }

    #[test]
    fn test_storage_key_macro() {
        let key = storage_key!("cart", "sess123");
        assert_eq!(key, "cart:sess123");

        let key = storage_key!("order", "01712345678", 7);
        assert_eq!(key, "order:01712345678:7");
    }
}
