//! StoreRepository port
//!
//! Persists the store snapshot to device-local storage. The store calls
//! `save` after every committed mutation and `load` once on startup.

use std::path::PathBuf;

use crate::domain::entities::StoreSnapshot;

pub trait StoreRepository: Send + Sync {
    /// Load the persisted snapshot. Missing storage is an empty snapshot, not an error.
    fn load(&self) -> Result<StoreSnapshot, StoreError>;
    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize store: {message}")]
    SerializationError { message: String },

    #[error(
        "store file corrupted: {path}\n  → Fix: Delete it and fetch again\n  → Run: rm {path} && staffdeck fetch\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("store file {path} has unsupported version {found} (expected {expected})")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}
