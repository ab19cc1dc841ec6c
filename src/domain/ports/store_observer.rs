//! Store Observer Port
//!
//! Subscription interface for store mutations. Observers run synchronously
//! after each committed mutation, in subscription order, and receive the new
//! immutable snapshot.

use std::sync::Arc;

use crate::domain::entities::StoreSnapshot;
use crate::domain::value_objects::EmployeeId;

/// What a committed mutation changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    /// The employee list was replaced wholesale
    EmployeesReplaced { count: usize },

    /// A bookmark was added or removed
    BookmarkToggled { id: EmployeeId, bookmarked: bool },
}

/// Trait for receiving store changes
///
/// Implementations can be:
/// - TracingStoreObserver: debug log line per mutation
/// - closures: `|change, snapshot| { ... }`
/// - NoopObserver: ignores everything
pub trait StoreObserver: Send + Sync {
    fn on_change(&self, change: &StoreChange, snapshot: &Arc<StoreSnapshot>);
}

impl<F> StoreObserver for F
where
    F: Fn(&StoreChange, &Arc<StoreSnapshot>) + Send + Sync,
{
    fn on_change(&self, change: &StoreChange, snapshot: &Arc<StoreSnapshot>) {
        self(change, snapshot)
    }
}

pub struct NoopObserver;

impl StoreObserver for NoopObserver {
    fn on_change(&self, _change: &StoreChange, _snapshot: &Arc<StoreSnapshot>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Test observer that records all changes
    struct RecordingObserver {
        changes: Arc<Mutex<Vec<StoreChange>>>,
    }

    impl StoreObserver for RecordingObserver {
        fn on_change(&self, change: &StoreChange, _snapshot: &Arc<StoreSnapshot>) {
            self.changes.lock().unwrap().push(change.clone());
        }
    }

    #[test]
    fn recording_observer_captures_changes() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let observer = RecordingObserver {
            changes: changes.clone(),
        };
        let snapshot = Arc::new(StoreSnapshot::default());

        observer.on_change(&StoreChange::EmployeesReplaced { count: 3 }, &snapshot);
        observer.on_change(
            &StoreChange::BookmarkToggled {
                id: EmployeeId::new(1),
                bookmarked: true,
            },
            &snapshot,
        );

        assert_eq!(changes.lock().unwrap().len(), 2);
    }

    #[test]
    fn closures_are_observers() {
        let seen = Arc::new(Mutex::new(0usize));
        let counter = seen.clone();
        let observer = move |_: &StoreChange, snapshot: &Arc<StoreSnapshot>| {
            *counter.lock().unwrap() += snapshot.employees.len() + 1;
        };

        observer.on_change(
            &StoreChange::EmployeesReplaced { count: 0 },
            &Arc::new(StoreSnapshot::default()),
        );
        assert_eq!(*seen.lock().unwrap(), 1);
    }
}
