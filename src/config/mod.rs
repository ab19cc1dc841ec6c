//! Configuration module for staffdeck
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STAFFDECK_*)
//! 3. Project config (./staffdeck.toml)
//! 4. User config (~/.config/staffdeck/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{closest_match, levenshtein, EnvVarValidator, MAX_SUGGESTION_DISTANCE};
pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, IngestConfig, OutputConfig, SourceConfig, StorageConfig};
