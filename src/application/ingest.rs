//! Ingest Use Case
//!
//! Fetches the employee list once, enriches every record, and hands the full
//! list to the store in a single `set_employees` call. If the fetch fails the
//! store keeps whatever list it had before.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::store::EmployeeStore;
use crate::domain::ports::{EmployeeSource, RandomSource, SourceError, StoreError};
use crate::domain::services::enrich;
use crate::domain::value_objects::EmployeeId;

/// Observed size of the upstream list.
pub const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IngestError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Outcome of a successful ingest
#[derive(Debug)]
pub struct IngestReport {
    pub source: String,
    pub fetched: usize,
    /// Ids that appeared more than once upstream. They are kept as delivered.
    pub duplicate_ids: Vec<EmployeeId>,
    /// Set when the list was stored in memory but could not be written to disk.
    pub persist_error: Option<StoreError>,
}

impl IngestReport {
    pub fn persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

pub struct IngestUseCase {
    source: Arc<dyn EmployeeSource>,
    random: Box<dyn RandomSource>,
    limit: usize,
}

impl IngestUseCase {
    pub fn new(source: Arc<dyn EmployeeSource>, random: Box<dyn RandomSource>) -> Self {
        Self {
            source,
            random,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn run(&mut self, store: &mut EmployeeStore) -> Result<IngestReport, IngestError> {
        let source = self.source.describe();
        info!(%source, limit = self.limit, "fetching employees");

        let records = self.source.fetch(self.limit).map_err(|e| {
            error!(%source, error = %e, "error fetching employees");
            IngestError::from(e)
        })?;

        let duplicate_ids = find_duplicates(records.iter().map(|r| r.id));
        if !duplicate_ids.is_empty() {
            warn!(?duplicate_ids, "source returned duplicate employee ids");
        }

        let employees: Vec<_> = records
            .into_iter()
            .map(|record| enrich(record, self.random.as_mut()))
            .collect();
        let fetched = employees.len();

        let persist_error = store.set_employees(employees).err();
        info!(fetched, persisted = persist_error.is_none(), "employees loaded");

        Ok(IngestReport {
            source,
            fetched,
            duplicate_ids,
            persist_error,
        })
    }
}

fn find_duplicates(ids: impl Iterator<Item = EmployeeId>) -> Vec<EmployeeId> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for id in ids {
        if !seen.insert(id) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    duplicates
}
