//! Key-value persistence.
//!
//! Everything the tracker remembers lives under two keys of a
//! [`KeyValueStore`]. Values are JSON documents; a key that is absent,
//! null or does not decode as the expected shape reads as the caller's
//! default.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{RsvpError, RsvpResult};

/// Raw JSON access to a persistent key-value mapping.
///
/// Implementations must be read-after-write consistent within a process
/// and apply `update_raw` without letting another write interleave.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Option<Value>;

    fn set_raw(&self, key: &str, value: Value) -> RsvpResult<()>;

    /// Read-modify-write a key. Nothing is written if `f` fails.
    fn update_raw(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<Value>) -> RsvpResult<Value>,
    ) -> RsvpResult<()>;

    /// Make buffered writes durable.
    fn flush(&self) -> RsvpResult<()> {
        Ok(())
    }
}

/// Typed access on top of [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        decode(key, self.get_raw(key), default)
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> RsvpResult<()> {
        self.set_raw(key, encode(value)?)
    }

    /// Apply `f` to the current value (or `default`) and persist the result.
    fn update<T, F>(&self, key: &str, default: T, f: F) -> RsvpResult<()>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(T) -> T,
    {
        let mut default = Some(default);
        let mut f = Some(f);

        self.update_raw(key, &mut |current| {
            let (Some(default), Some(f)) = (default.take(), f.take()) else {
                return Err(RsvpError::Serialization(format!(
                    "update of '{key}' applied more than once"
                )));
            };
            encode(&f(decode(key, current, default)))
        })
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

fn decode<T: DeserializeOwned>(key: &str, value: Option<Value>, default: T) -> T {
    match value {
        None | Some(Value::Null) => default,
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "stored value is malformed, using default");
            default
        }),
    }
}

fn encode<T: Serialize>(value: &T) -> RsvpResult<Value> {
    serde_json::to_value(value).map_err(|e| RsvpError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_returns_default() {
        let store = MemoryStore::new();
        let events: Vec<String> = store.get("all-events", vec![]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_get_malformed_returns_default() {
        let store = MemoryStore::new();
        store
            .set_raw("all-events", serde_json::json!({"not": "a list"}))
            .unwrap();

        let events: Vec<String> = store.get("all-events", vec![]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_get_null_returns_default() {
        let store = MemoryStore::new();
        store.set_raw("all-events", Value::Null).unwrap();

        let events: Vec<String> = store.get("all-events", vec!["seed".to_string()]);
        assert_eq!(events, vec!["seed".to_string()]);
    }

    #[test]
    fn test_update_starts_from_default() {
        let store = MemoryStore::new();
        store
            .update("names", Vec::<String>::new(), |mut names| {
                names.push("Liza".to_string());
                names
            })
            .unwrap();
        store
            .update("names", Vec::<String>::new(), |mut names| {
                names.push("Gus".to_string());
                names
            })
            .unwrap();

        let names: Vec<String> = store.get("names", vec![]);
        assert_eq!(names, vec!["Liza".to_string(), "Gus".to_string()]);
    }

    #[test]
    fn test_works_through_trait_object() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("count", &3u32).unwrap();
        assert_eq!(store.get("count", 0u32), 3);
    }
}
