//! Application Layer
//!
//! Use cases that orchestrate the domain through its ports.
//!
//! - `store` - EmployeeStore, the single source of truth for employees and bookmarks
//! - `ingest` - one-shot fetch and enrichment into the store
//! - `actions` - simulated promotion and project assignment

pub mod actions;
pub mod ingest;
pub mod store;

pub use actions::{ActionOutcome, ProjectCatalog, UnknownProject};
pub use ingest::{IngestError, IngestReport, IngestUseCase};
pub use store::{EmployeeStore, SubscriptionId};
