//! EmployeeSource port
//!
//! The external data source that supplies raw person records once per
//! session. Implementations either return the full list or an error; they
//! never return a partial list.

use crate::domain::entities::SourceRecord;

pub trait EmployeeSource: Send + Sync {
    fn fetch(&self, limit: usize) -> Result<Vec<SourceRecord>, SourceError>;

    /// Human-readable location for logs and headers.
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("request to employee source failed: {message}")]
    Transport { message: String },

    #[error("employee source returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("employee source returned malformed data: {message}")]
    Malformed { message: String },
}
