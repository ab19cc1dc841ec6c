//! Store snapshot entity
//!
//! The complete store contents at one point in time: the employee list and the
//! bookmark set. The store hands these out behind an `Arc`, and every committed
//! mutation produces a new snapshot, so a snapshot a reader holds never changes.

use serde::{Deserialize, Serialize};

use super::{BookmarkSet, Employee};
use crate::domain::value_objects::EmployeeId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default, rename = "bookmarkedEmployees")]
    pub bookmarks: BookmarkSet,
}

impl StoreSnapshot {
    pub fn new(employees: Vec<Employee>, bookmarks: BookmarkSet) -> Self {
        Self {
            employees,
            bookmarks,
        }
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        crate::domain::services::find_employee(&self.employees, id)
    }

    /// Loaded employees whose id is bookmarked, in list order.
    ///
    /// Stale bookmark ids have no employee and are skipped.
    pub fn bookmarked_employees(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| self.bookmarks.contains(e.id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.bookmarks.is_empty()
    }
}
