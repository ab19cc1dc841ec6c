//! Domain Entities
//!
//! Core objects with identity: employees, the bookmark set, and the store
//! snapshot that bundles them.

mod bookmark_set;
mod employee;
mod snapshot;
mod source_record;

pub use bookmark_set::BookmarkSet;
pub use employee::Employee;
pub use snapshot::StoreSnapshot;
pub use source_record::SourceRecord;
