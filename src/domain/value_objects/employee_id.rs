//! Employee identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the upstream data source.
///
/// This is the primary key for every lookup in the store and the only value
/// kept in the bookmark set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for EmployeeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
