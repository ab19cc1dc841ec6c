//! Simulated HR actions
//!
//! Promotion requests and project assignments only ask for confirmation and
//! produce a message. They never touch the store.

use crate::domain::entities::Employee;
use crate::domain::ports::Confirmation;

pub const PROMOTION_SUBMITTED: &str = "Promotion request submitted!";

const DEFAULT_PROJECTS: [&str; 5] = [
    "Website Redesign",
    "Mobile App Development",
    "Data Migration",
    "Security Audit",
    "Cloud Infrastructure",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Submitted { message: String },
    Cancelled,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown project '{name}'. Available: {}", .available.join(", "))]
pub struct UnknownProject {
    pub name: String,
    pub available: Vec<String>,
}

/// Projects an employee can be assigned to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<String>,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self {
            projects: DEFAULT_PROJECTS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ProjectCatalog {
    pub fn names(&self) -> &[String] {
        &self.projects
    }

    /// Case-insensitive lookup returning the canonical project name.
    pub fn resolve(&self, name: &str) -> Result<&str, UnknownProject> {
        let wanted = name.trim();
        self.projects
            .iter()
            .find(|p| p.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
            .ok_or_else(|| UnknownProject {
                name: wanted.to_string(),
                available: self.projects.clone(),
            })
    }
}

pub fn promotion_prompt(employee: &Employee) -> String {
    format!(
        "Are you sure you want to promote {} {}?",
        employee.first_name, employee.last_name
    )
}

pub fn request_promotion(employee: &Employee, confirmation: &dyn Confirmation) -> ActionOutcome {
    if confirmation.confirm(&promotion_prompt(employee)) {
        ActionOutcome::Submitted {
            message: PROMOTION_SUBMITTED.to_string(),
        }
    } else {
        ActionOutcome::Cancelled
    }
}

pub fn assign_project(
    employee: &Employee,
    project: &str,
    catalog: &ProjectCatalog,
    confirmation: &dyn Confirmation,
) -> Result<ActionOutcome, UnknownProject> {
    let project = catalog.resolve(project)?;
    let prompt = format!("Assign {} to {}?", employee.full_name(), project);
    if !confirmation.confirm(&prompt) {
        return Ok(ActionOutcome::Cancelled);
    }
    Ok(ActionOutcome::Submitted {
        message: format!("Assigned {} to {}", employee.first_name, project),
    })
}
