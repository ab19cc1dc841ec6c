//! JSON Store Repository
//!
//! Persists the employee store at `~/.staffdeck/hr-dashboard-storage.json`.
//!
//! Layout:
//!
//! ```json
//! {
//!   "version": 1,
//!   "savedAt": "2026-01-01T00:00:00Z",
//!   "state": { "employees": [...], "bookmarkedEmployees": [1, 5] }
//! }
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::StoreSnapshot;
use crate::domain::ports::{StoreError, StoreRepository};

pub const STORE_VERSION: u32 = 1;
pub const STORE_FILE_NAME: &str = "hr-dashboard-storage.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedStore {
    #[serde(default = "current_version")]
    version: u32,
    #[serde(default)]
    state: StoreSnapshot,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedStoreRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    state: &'a StoreSnapshot,
}

fn current_version() -> u32 {
    STORE_VERSION
}

pub struct JsonStoreRepository {
    path: PathBuf,
}

impl JsonStoreRepository {
    pub fn new() -> Self {
        Self {
            path: default_store_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<StoreSnapshot, StoreError> {
        if !self.path.exists() {
            return Ok(StoreSnapshot::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;

        let persisted: PersistedStore =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        if persisted.version > STORE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path: self.path.clone(),
                found: persisted.version,
                expected: STORE_VERSION,
            });
        }

        Ok(persisted.state)
    }

    fn save_to_disk(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        let persisted = PersistedStoreRef {
            version: STORE_VERSION,
            saved_at: Utc::now(),
            state: snapshot,
        };
        let content = serde_json::to_string_pretty(&persisted).map_err(|e| {
            StoreError::SerializationError {
                message: e.to_string(),
            }
        })?;

        write_atomic(&self.path, content.as_bytes()).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })
    }
}

impl Default for JsonStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreRepository for JsonStoreRepository {
    fn load(&self) -> Result<StoreSnapshot, StoreError> {
        self.load_from_disk()
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::AccessError {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| StoreError::AccessError {
                message: e.to_string(),
            })?;

        let result = self.save_to_disk(snapshot);

        let _ = lock_file.unlock();
        result
    }
}

/// Write via a temp file in the same directory, then rename over `path`.
fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Store location, honoring `STAFFDECK_STORE_PATH`.
pub fn default_store_path() -> PathBuf {
    if let Ok(path) = std::env::var("STAFFDECK_STORE_PATH") {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs::home_dir()
        .map(|h| h.join(".staffdeck").join(STORE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(".staffdeck").join(STORE_FILE_NAME))
}
