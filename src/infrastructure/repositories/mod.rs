//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_store;
mod memory;

pub use json_store::{default_store_path, JsonStoreRepository, STORE_FILE_NAME, STORE_VERSION};
pub use memory::InMemoryStoreRepository;
