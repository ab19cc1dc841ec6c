//! Bookmark set entity
//!
//! A set of employee ids the user marked for quick reference. Ids are not
//! validated against the loaded employee list; stale ids are kept until the
//! user toggles them off.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EmployeeId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<EmployeeId>", into = "Vec<EmployeeId>")]
pub struct BookmarkSet {
    ids: HashSet<EmployeeId>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.ids.contains(&id)
    }

    /// Insert `id` if absent, remove it if present.
    ///
    /// Returns whether `id` is bookmarked afterwards.
    pub fn toggle(&mut self, id: EmployeeId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.ids.iter().copied()
    }

    /// Ids in ascending order; used for persistence and display.
    pub fn sorted(&self) -> Vec<EmployeeId> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<EmployeeId> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = EmployeeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<EmployeeId>> for BookmarkSet {
    fn from(ids: Vec<EmployeeId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<BookmarkSet> for Vec<EmployeeId> {
    fn from(set: BookmarkSet) -> Self {
        set.sorted()
    }
}
