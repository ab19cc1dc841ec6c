//! In-memory store repository used by tests and the library API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::StoreSnapshot;
use crate::domain::ports::{StoreError, StoreRepository};

#[derive(Default)]
pub struct InMemoryStoreRepository {
    snapshot: Mutex<StoreSnapshot>,
    saves: AtomicUsize,
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl StoreRepository for InMemoryStoreRepository {
    fn load(&self) -> Result<StoreSnapshot, StoreError> {
        self.snapshot
            .lock()
            .map(|s| s.clone())
            .map_err(|e| StoreError::AccessError {
                message: e.to_string(),
            })
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        let mut guard = self.snapshot.lock().map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;
        *guard = snapshot.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
