//! Store observers provided by the infrastructure layer.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::StoreSnapshot;
use crate::domain::ports::{StoreChange, StoreObserver};

/// Emits one debug event per committed store mutation.
pub struct TracingStoreObserver;

impl StoreObserver for TracingStoreObserver {
    fn on_change(&self, change: &StoreChange, snapshot: &Arc<StoreSnapshot>) {
        match change {
            StoreChange::EmployeesReplaced { count } => {
                debug!(count, bookmarks = snapshot.bookmarks.len(), "employees replaced")
            }
            StoreChange::BookmarkToggled { id, bookmarked } => {
                debug!(%id, bookmarked, total = snapshot.bookmarks.len(), "bookmark toggled")
            }
        }
    }
}
