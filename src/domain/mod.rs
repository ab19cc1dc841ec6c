//! Domain Layer
//!
//! The core of staffdeck: employee records, bookmarks, and the derived views
//! computed over them, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Employee, BookmarkSet, StoreSnapshot, SourceRecord
//! - `value_objects/` - EmployeeId, Department, Rating
//! - `services/` - Search/filter, department aggregation, bookmark ratio, enrichment
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Storage, data source and randomness go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
