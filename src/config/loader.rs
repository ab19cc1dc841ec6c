//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{StaffdeckError, StaffdeckResult};

use super::env_validator::{closest_match, EnvVarValidator, MAX_SUGGESTION_DISTANCE};
use super::types::{ColorMode, Config};

pub const PROJECT_CONFIG_FILE: &str = "staffdeck.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StaffdeckResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StaffdeckError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    warn!("{}", warning);
                }
                return with_env_overrides(config);
            }
            Err(e) => warn!(error = %e, "ignoring config file"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (STAFFDECK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

pub(super) fn apply_overrides<F, W>(mut config: Config, lookup: F, warnings: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: std::io::Write,
{
    if let Some(url) = lookup("STAFFDECK_SOURCE_URL").filter(|v| !v.trim().is_empty()) {
        config.source.url = url;
    }

    if let Some(value) = lookup("STAFFDECK_LIMIT") {
        config.source.limit = EnvVarValidator::new("STAFFDECK_LIMIT", &["a positive integer"])
            .parse_with_writer(
                &value,
                |s| s.trim().parse().ok().filter(|n: &usize| *n > 0),
                config.source.limit,
                warnings,
            );
    }

    if let Some(path) = lookup("STAFFDECK_STORE_PATH").filter(|v| !v.trim().is_empty()) {
        config.storage.path = Some(PathBuf::from(path));
    }

    if let Some(value) = lookup("STAFFDECK_COLOR") {
        config.output.color = EnvVarValidator::new("STAFFDECK_COLOR", &ColorMode::NAMES)
            .parse_with_writer(&value, ColorMode::parse, config.output.color, warnings);
    }

    if let Some(value) = lookup("STAFFDECK_SEED") {
        config.ingest.seed = EnvVarValidator::new("STAFFDECK_SEED", &["an unsigned integer"])
            .parse_with_writer(
                &value,
                |s| s.trim().parse().ok().map(Some),
                config.ingest.seed,
                warnings,
            );
    }

    config
}

/// `$XDG_CONFIG_HOME/staffdeck/config.toml`, else `~/.config/staffdeck/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("staffdeck").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "url",
        "limit",
        "timeout_secs",
        "storage",
        "path",
        "ingest",
        "seed",
        "output",
        "color",
        "unicode",
    ];

    closest_match(unknown, CANDIDATES.iter().copied(), MAX_SUGGESTION_DISTANCE).map(str::to_string)
}
