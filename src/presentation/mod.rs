//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the store and use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use staffdeck::presentation::factory;
//!
//! let config = staffdeck::config::Config::load_or_default(None);
//! let mut store = factory::create_store(factory::store_path(None, &config));
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_ingest_use_case, create_store, store_path, IngestOverrides};
