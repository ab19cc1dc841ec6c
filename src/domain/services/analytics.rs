//! Derived analytics views
//!
//! Department aggregation and the bookmark ratio shown on the analytics
//! screen. Both are pure functions of their inputs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{BookmarkSet, Employee};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DepartmentStat {
    pub count: usize,
    pub total_rating: u32,
}

impl DepartmentStat {
    /// `total_rating / count`. Groups only exist for present employees, so
    /// `count` is never zero.
    pub fn average_rating(&self) -> f64 {
        f64::from(self.total_rating) / self.count as f64
    }
}

/// Per-department statistics keyed by department name.
///
/// Iteration order is alphabetical by department name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentStats {
    by_department: BTreeMap<String, DepartmentStat>,
}

impl DepartmentStats {
    pub fn get(&self, department: &str) -> Option<&DepartmentStat> {
        self.by_department.get(department)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DepartmentStat)> {
        self.by_department.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.by_department.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_department.is_empty()
    }
}

pub fn department_stats(employees: &[Employee]) -> DepartmentStats {
    let mut by_department: BTreeMap<String, DepartmentStat> = BTreeMap::new();
    for employee in employees {
        let stat = by_department
            .entry(employee.department.name().to_string())
            .or_default();
        stat.count += 1;
        stat.total_rating += u32::from(employee.performance.get());
    }
    DepartmentStats { by_department }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BookmarkRatio {
    pub bookmarked: usize,
    pub not_bookmarked: usize,
}

/// Split the loaded employees into bookmarked and not bookmarked.
///
/// Counts only bookmark ids that belong to a loaded employee; stale ids left
/// over from an earlier list are ignored.
pub fn bookmark_ratio(employees: &[Employee], bookmarks: &BookmarkSet) -> BookmarkRatio {
    let bookmarked = employees
        .iter()
        .filter(|e| bookmarks.contains(e.id))
        .count();
    BookmarkRatio {
        bookmarked,
        not_bookmarked: employees.len() - bookmarked,
    }
}
