//! Use Case Factory
//!
//! Creates the store and use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::application::{EmployeeStore, IngestUseCase};
use crate::config::Config;
use crate::domain::ports::{AutoConfirm, AutoDecline, Confirmation, RandomSource};
use crate::infrastructure::repositories::default_store_path;
use crate::infrastructure::{
    ChaChaRandom, DialoguerConfirmation, HttpEmployeeSource, JsonStoreRepository,
    TracingStoreObserver,
};

/// Store location: `--store` flag, then config/env, then the default.
pub fn store_path(cli_store: Option<&Path>, config: &Config) -> PathBuf {
    cli_store
        .map(Path::to_path_buf)
        .or_else(|| config.storage.path.clone())
        .unwrap_or_else(default_store_path)
}

/// Restore the store from `path`, starting empty if it cannot be read.
pub fn create_store(path: PathBuf) -> EmployeeStore {
    let mut store = EmployeeStore::restore(Arc::new(JsonStoreRepository::with_path(path)));
    store.subscribe(Arc::new(TracingStoreObserver));
    store
}

/// Options the `fetch` command can override on top of config.
#[derive(Debug, Clone, Default)]
pub struct IngestOverrides {
    pub seed: Option<u64>,
    pub limit: Option<usize>,
    pub url: Option<String>,
}

/// Build the ingest use case. Returns the seed used so the run can be replayed.
pub fn create_ingest_use_case(config: &Config, overrides: &IngestOverrides) -> (IngestUseCase, u64) {
    let url = overrides
        .url
        .clone()
        .unwrap_or_else(|| config.source.url.clone());
    let source = HttpEmployeeSource::new(url)
        .with_timeout(Duration::from_secs(config.source.timeout_secs));

    let random = match overrides.seed.or(config.ingest.seed) {
        Some(seed) => ChaChaRandom::seeded(seed),
        None => ChaChaRandom::from_time(),
    };
    let seed = random.seed();
    let random: Box<dyn RandomSource> = Box::new(random);

    let limit = overrides.limit.unwrap_or(config.source.limit);
    (
        IngestUseCase::new(Arc::new(source), random).with_limit(limit),
        seed,
    )
}

/// `--yes` confirms everything; otherwise prompt on a terminal and decline elsewhere.
pub fn create_confirmation(yes: bool, interactive: bool) -> Box<dyn Confirmation> {
    if yes {
        Box::new(AutoConfirm)
    } else if interactive {
        Box::new(DialoguerConfirmation::new())
    } else {
        Box::new(AutoDecline)
    }
}
