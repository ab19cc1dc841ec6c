//! Employee entity
//!
//! One person record held by the store. Field names serialize in camelCase so
//! the persisted file keeps the layout of the original dashboard storage.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Department, EmployeeId, Rating};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    /// Synthesized at ingestion; not stable across re-fetches.
    pub department: Department,
    /// Synthesized at ingestion; not stable across re-fetches.
    pub performance: Rating,
    pub address: String,
    pub phone: String,
    pub bio: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
