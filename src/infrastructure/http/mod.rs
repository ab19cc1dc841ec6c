//! HTTP employee sources

mod dummyjson;

pub use dummyjson::{decode_users, HttpEmployeeSource, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECS};
