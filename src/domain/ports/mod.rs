//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmation;
pub mod employee_source;
pub mod random_source;
pub mod store_observer;
pub mod store_repository;

pub use confirmation::{AutoConfirm, AutoDecline, Confirmation};
pub use employee_source::{EmployeeSource, SourceError};
pub use random_source::{choose, RandomSource};
pub use store_observer::{NoopObserver, StoreChange, StoreObserver};
pub use store_repository::{StoreError, StoreRepository};
