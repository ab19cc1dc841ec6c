//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Store persistence (JSON file, in-memory)
//! - `http/` - Employee sources over HTTP
//! - `random` - Seedable random source
//! - `prompt` - Interactive confirmation
//! - `observers` - Store observers

pub mod http;
pub mod observers;
pub mod prompt;
pub mod random;
pub mod repositories;

pub use http::HttpEmployeeSource;
pub use observers::TracingStoreObserver;
pub use prompt::DialoguerConfirmation;
pub use random::ChaChaRandom;
pub use repositories::{InMemoryStoreRepository, JsonStoreRepository};
