//! In-process store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use super::KeyValueStore;
use crate::error::RsvpResult;

/// A store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, Value>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<Value> {
        self.values().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: Value) -> RsvpResult<()> {
        self.values().insert(key.to_string(), value);
        Ok(())
    }

    fn update_raw(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<Value>) -> RsvpResult<Value>,
    ) -> RsvpResult<()> {
        let mut values = self.values();
        let next = f(values.get(key).cloned())?;
        values.insert(key.to_string(), next);
        Ok(())
    }
}
