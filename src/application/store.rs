//! Employee Store
//!
//! Single source of truth for the employee list and the bookmark set.
//!
//! Every mutation commits in memory first, then notifies observers, then
//! writes the new snapshot through the injected repository. A failed write is
//! returned to the caller but never rolls back the in-memory state, which
//! stays authoritative for the rest of the session.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{BookmarkSet, Employee, StoreSnapshot};
use crate::domain::ports::{StoreChange, StoreError, StoreObserver, StoreRepository};
use crate::domain::services::{
    bookmark_ratio, department_stats, filter_employees, BookmarkRatio, DepartmentStats,
    EmployeeQuery,
};
use crate::domain::value_objects::EmployeeId;

/// Handle returned by [`EmployeeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct EmployeeStore {
    snapshot: Arc<StoreSnapshot>,
    repository: Arc<dyn StoreRepository>,
    observers: Vec<(SubscriptionId, Arc<dyn StoreObserver>)>,
    next_subscription: u64,
}

impl EmployeeStore {
    /// Empty store that persists through `repository` without loading from it.
    pub fn new(repository: Arc<dyn StoreRepository>) -> Self {
        Self::with_snapshot(repository, StoreSnapshot::default())
    }

    /// Restore from the repository, falling back to an empty store when the
    /// persisted state cannot be read.
    pub fn restore(repository: Arc<dyn StoreRepository>) -> Self {
        match repository.load() {
            Ok(snapshot) => Self::with_snapshot(repository, snapshot),
            Err(e) => {
                warn!(error = %e, "could not restore store, starting empty");
                Self::new(repository)
            }
        }
    }

    /// Restore from the repository, returning the load error to the caller.
    pub fn try_restore(repository: Arc<dyn StoreRepository>) -> Result<Self, StoreError> {
        let snapshot = repository.load()?;
        Ok(Self::with_snapshot(repository, snapshot))
    }

    fn with_snapshot(repository: Arc<dyn StoreRepository>, snapshot: StoreSnapshot) -> Self {
        debug!(
            employees = snapshot.employees.len(),
            bookmarks = snapshot.bookmarks.len(),
            "store ready"
        );
        Self {
            snapshot: Arc::new(snapshot),
            repository,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replace the whole employee list. Bookmarks are left untouched.
    pub fn set_employees(&mut self, employees: Vec<Employee>) -> Result<(), StoreError> {
        let count = employees.len();
        Arc::make_mut(&mut self.snapshot).employees = employees;
        self.commit(StoreChange::EmployeesReplaced { count })
    }

    /// Add `id` to the bookmarks if absent, remove it if present.
    ///
    /// Returns whether `id` is bookmarked afterwards. On `Err` the toggle has
    /// still been applied in memory; only the write failed.
    pub fn toggle_bookmark(&mut self, id: EmployeeId) -> Result<bool, StoreError> {
        let bookmarked = Arc::make_mut(&mut self.snapshot).bookmarks.toggle(id);
        self.commit(StoreChange::BookmarkToggled { id, bookmarked })?;
        Ok(bookmarked)
    }

    pub fn is_bookmarked(&self, id: EmployeeId) -> bool {
        self.snapshot.bookmarks.contains(id)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.snapshot.employees
    }

    pub fn bookmark_ids(&self) -> &BookmarkSet {
        &self.snapshot.bookmarks
    }

    pub fn bookmarked_employees(&self) -> Vec<&Employee> {
        self.snapshot.bookmarked_employees()
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.snapshot.find(id)
    }

    /// Current immutable snapshot. Later mutations never change it.
    pub fn snapshot(&self) -> Arc<StoreSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn search(&self, query: &EmployeeQuery) -> Vec<&Employee> {
        filter_employees(&self.snapshot.employees, query)
    }

    pub fn department_stats(&self) -> DepartmentStats {
        department_stats(&self.snapshot.employees)
    }

    pub fn bookmark_ratio(&self) -> BookmarkRatio {
        bookmark_ratio(&self.snapshot.employees, &self.snapshot.bookmarks)
    }

    /// Register an observer called after every committed mutation.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != len_before
    }

    fn commit(&mut self, change: StoreChange) -> Result<(), StoreError> {
        debug!(?change, "store mutation committed");
        for (_, observer) in &self.observers {
            observer.on_change(&change, &self.snapshot);
        }

        if let Err(e) = self.repository.save(&self.snapshot) {
            warn!(error = %e, "store change kept in memory but not persisted");
            return Err(e);
        }
        Ok(())
    }
}
