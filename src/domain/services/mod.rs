//! Domain Services
//!
//! Stateless computations over store contents. Nothing here mutates the
//! store or touches I/O.

mod analytics;
mod enrichment;
mod profile;
mod query;

pub use analytics::{bookmark_ratio, department_stats, BookmarkRatio, DepartmentStat, DepartmentStats};
pub use enrichment::{enrich, PLACEHOLDER_BIO};
pub use profile::{
    EmployeeProfile, FeedbackEntry, PerformanceRecord, PerformanceTier, ProjectRecord,
    ProjectStatus,
};
pub use query::{filter_employees, find_employee, EmployeeQuery};
