//! staffdeck - terminal HR dashboard
//!
//! Fetches employee records once, enriches them with a department and a
//! performance rating, and keeps them in a persisted store alongside the
//! user's bookmarks. Search, department analytics and bookmark ratios are
//! derived from the store on demand.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{EmployeeStore, IngestUseCase};
pub use config::Config;
pub use domain::entities::{Employee, StoreSnapshot};
pub use domain::value_objects::{Department, EmployeeId, Rating};
pub use error::{StaffdeckError, StaffdeckResult};
