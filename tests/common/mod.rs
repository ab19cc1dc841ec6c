//! Common test utilities for staffdeck CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated home, config and store paths plus a CLI runner
//! - `serve_json`: One-shot local HTTP server standing in for the users API
//! - Fixtures: Store files and API payloads

pub mod env;
pub mod fixtures;
pub mod server;

pub use env::*;
pub use fixtures::*;
pub use server::*;
