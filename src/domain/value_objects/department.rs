//! Department value object
//!
//! Departments are not supplied by the upstream source. Ingestion draws one of
//! these five uniformly at random for every employee.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
}

impl Department {
    /// All departments, in the order the dashboard offers them.
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Department::name).collect()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDepartmentError {
    pub value: String,
    pub suggestion: Option<&'static str>,
}

impl fmt::Display for ParseDepartmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown department '{}'", self.value)?;
        if let Some(suggestion) = self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseDepartmentError {}

impl FromStr for Department {
    type Err = ParseDepartmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseDepartmentError {
                value: wanted.to_string(),
                suggestion: suggest(wanted),
            })
    }
}

fn suggest(value: &str) -> Option<&'static str> {
    crate::config::closest_match(
        value,
        Department::ALL.iter().map(Department::name),
        crate::config::MAX_SUGGESTION_DISTANCE,
    )
}
