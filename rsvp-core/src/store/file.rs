//! On-disk store: one JSON file per key.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use super::KeyValueStore;
use crate::error::{RsvpError, RsvpResult};

/// What is known about one key's file.
#[derive(Debug, Clone)]
enum Slot {
    /// No file, or a file that does not parse as JSON
    Absent,
    Present(Value),
    /// The file exists but could not be read. Writes to the key are refused
    /// so the unread contents are never replaced.
    Unreadable { kind: std::io::ErrorKind, message: String },
}

impl Slot {
    fn value(&self) -> Option<Value> {
        match self {
            Slot::Present(value) => Some(value.clone()),
            Slot::Absent | Slot::Unreadable { .. } => None,
        }
    }

    fn check_writable(&self, path: &Path) -> RsvpResult<()> {
        match self {
            Slot::Unreadable { kind, message } => Err(RsvpError::Io(std::io::Error::new(
                *kind,
                format!("refusing to overwrite unreadable {}: {message}", path.display()),
            ))),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
struct FileState {
    cache: HashMap<String, Slot>,
    dirty: HashSet<String>,
}

/// A store backed by `<dir>/<key>.json` files.
///
/// Writes are buffered in memory and reach disk on [`KeyValueStore::flush`]
/// or when the store is dropped.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    state: Mutex<FileState>,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> RsvpResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;

        Ok(FileStore {
            dir,
            state: Mutex::new(FileState::default()),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn state(&self) -> MutexGuard<'_, FileState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_file(&self, key: &str) -> Slot {
        let path = self.key_path(key);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Slot::Absent,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read store file");
                return Slot::Unreadable {
                    kind: e.kind(),
                    message: e.to_string(),
                };
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Slot::Present(value),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "store file is not valid JSON");
                Slot::Absent
            }
        }
    }

    fn cached(&self, state: &mut FileState, key: &str) -> Slot {
        if let Some(slot) = state.cache.get(key) {
            return slot.clone();
        }
        let slot = self.read_file(key);
        state.cache.insert(key.to_string(), slot.clone());
        slot
    }

    fn write_file(&self, key: &str, value: &Value) -> RsvpResult<()> {
        let path = self.key_path(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        let content = serde_json::to_string_pretty(value)
            .map_err(|e| RsvpError::Serialization(e.to_string()))?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<Value> {
        let mut state = self.state();
        self.cached(&mut state, key).value()
    }

    fn set_raw(&self, key: &str, value: Value) -> RsvpResult<()> {
        let mut state = self.state();
        self.cached(&mut state, key)
            .check_writable(&self.key_path(key))?;

        state.cache.insert(key.to_string(), Slot::Present(value));
        state.dirty.insert(key.to_string());
        Ok(())
    }

    fn update_raw(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<Value>) -> RsvpResult<Value>,
    ) -> RsvpResult<()> {
        let mut state = self.state();
        let current = self.cached(&mut state, key);
        current.check_writable(&self.key_path(key))?;

        let next = f(current.value())?;
        state.cache.insert(key.to_string(), Slot::Present(next));
        state.dirty.insert(key.to_string());
        Ok(())
    }

    fn flush(&self) -> RsvpResult<()> {
        let mut state = self.state();

        // Sort for deterministic write order
        let mut dirty: Vec<String> = state.dirty.iter().cloned().collect();
        dirty.sort();

        for key in dirty {
            match state.cache.get(&key) {
                Some(Slot::Present(value)) => self.write_file(&key, value)?,
                Some(slot) => slot.check_writable(&self.key_path(&key))?,
                None => {}
            }
            state.dirty.remove(&key);
            tracing::debug!(key, dir = %self.dir.display(), "flushed store key");
        }

        Ok(())
    }
}

impl Drop for FileStore {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!(dir = %self.dir.display(), error = %e, "failed to flush store on drop");
        }
    }
}
