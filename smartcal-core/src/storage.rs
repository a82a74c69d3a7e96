//! Keyed snapshot storage.
//!
//! Each store persists one record under a fixed key. Records are wrapped in a
//! small JSON envelope so the layout can change later without guessing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{SmartCalError, SmartCalResult};

pub const EVENTS_KEY: &str = "smartcal-events";
pub const THEME_KEY: &str = "smartcal-theme";

const RECORD_VERSION: u32 = 0;

/// Backend holding raw serialized records by key.
pub trait Storage: Send + Sync {
    fn read(&self, key: &str) -> SmartCalResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> SmartCalResult<()>;
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    state: T,
    version: u32,
}

/// Read and decode the record stored under `key`, if any.
pub fn load_record<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> SmartCalResult<Option<T>> {
    let Some(raw) = storage.read(key)? else {
        return Ok(None);
    };

    let envelope: Envelope<T> = serde_json::from_str(&raw)
        .map_err(|e| SmartCalError::Serialization(format!("record '{key}': {e}")))?;

    if envelope.version != RECORD_VERSION {
        return Err(SmartCalError::Serialization(format!(
            "record '{key}' has unsupported version {}",
            envelope.version
        )));
    }

    Ok(Some(envelope.state))
}

/// Encode `state` and write it under `key`. Any failure is reported as
/// [`SmartCalError::Persistence`].
pub fn save_record<T: Serialize>(storage: &dyn Storage, key: &str, state: &T) -> SmartCalResult<()> {
    let envelope = Envelope {
        state,
        version: RECORD_VERSION,
    };
    let raw = serde_json::to_string(&envelope)
        .map_err(|e| SmartCalError::Persistence(format!("record '{key}': {e}")))?;

    storage.write(key, &raw).map_err(|e| match e {
        SmartCalError::Persistence(_) => e,
        other => SmartCalError::Persistence(format!("record '{key}': {other}")),
    })
}

/// Records as `<dir>/<key>.json` files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> SmartCalResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> SmartCalResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// Records kept in memory. Writes can be made to fail to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> SmartCalResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> SmartCalResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SmartCalError::Persistence(format!("storage quota exceeded writing '{key}'")));
        }

        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
