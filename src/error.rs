//! Error types for staffdeck
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow` at the edges.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::{IngestError, UnknownProject};
use crate::domain::ports::StoreError;
use crate::domain::value_objects::{EmployeeId, ParseDepartmentError};

/// Result type alias for staffdeck operations
pub type StaffdeckResult<T> = Result<T, StaffdeckError>;

/// Main error type for staffdeck operations
#[derive(Error, Debug)]
pub enum StaffdeckError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    #[error("employee {id} not found\n  → Run: staffdeck list")]
    EmployeeNotFound { id: EmployeeId },

    #[error(transparent)]
    UnknownDepartment(#[from] ParseDepartmentError),

    #[error(transparent)]
    UnknownProject(#[from] UnknownProject),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
