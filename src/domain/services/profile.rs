//! Employee detail profile
//!
//! The detail screen shows a six-month performance history, the projects an
//! employee works on and reviewer feedback. None of this comes from the data
//! source: history ratings are drawn fresh for each view, projects and
//! feedback are a fixed showcase.

use serde::Serialize;

use crate::domain::ports::{choose, RandomSource};
use crate::domain::value_objects::Rating;

/// Badge tier for a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceTier {
    Outstanding,
    Strong,
    Solid,
    Developing,
    NeedsAttention,
}

impl PerformanceTier {
    pub fn from_rating(rating: Rating) -> Self {
        match rating.get() {
            5 => PerformanceTier::Outstanding,
            4 => PerformanceTier::Strong,
            3 => PerformanceTier::Solid,
            2 => PerformanceTier::Developing,
            _ => PerformanceTier::NeedsAttention,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Outstanding => "Outstanding",
            PerformanceTier::Strong => "Strong",
            PerformanceTier::Solid => "Solid",
            PerformanceTier::Developing => "Developing",
            PerformanceTier::NeedsAttention => "Needs attention",
        }
    }
}

const HISTORY_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

const HISTORY_FEEDBACK: [&str; 5] = [
    "Excellent work on project deliverables",
    "Great team collaboration",
    "Strong problem-solving skills",
    "Consistent performance",
    "Good communication skills",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceRecord {
    pub month: &'static str,
    pub rating: Rating,
    pub feedback: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub name: &'static str,
    pub status: ProjectStatus,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub due_date: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub author: &'static str,
    pub role: &'static str,
    pub date: &'static str,
    pub rating: Rating,
    pub comment: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeProfile {
    pub history: Vec<PerformanceRecord>,
    pub projects: Vec<ProjectRecord>,
    pub feedback: Vec<FeedbackEntry>,
}

impl EmployeeProfile {
    pub fn generate(random: &mut dyn RandomSource) -> Self {
        let history = HISTORY_MONTHS
            .iter()
            .map(|&month| PerformanceRecord {
                month,
                rating: *choose(random, &Rating::ALL),
                feedback: *choose(random, &HISTORY_FEEDBACK),
            })
            .collect();

        Self {
            history,
            projects: showcase_projects(),
            feedback: showcase_feedback(),
        }
    }
}

fn showcase_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            name: "Website Redesign",
            status: ProjectStatus::InProgress,
            progress: 75,
            due_date: "2024-04-15",
            description: "Modernizing the company website with new features and improved UX.",
        },
        ProjectRecord {
            name: "Mobile App Development",
            status: ProjectStatus::Completed,
            progress: 100,
            due_date: "2024-03-01",
            description: "Developed a new mobile app for customer engagement.",
        },
        ProjectRecord {
            name: "Data Migration",
            status: ProjectStatus::Planning,
            progress: 20,
            due_date: "2024-05-30",
            description: "Planning the migration of legacy data to new systems.",
        },
    ]
}

fn showcase_feedback() -> Vec<FeedbackEntry> {
    vec![
        FeedbackEntry {
            author: "John Smith",
            role: "Project Manager",
            date: "2024-03-15",
            rating: Rating::ALL[4],
            comment: "Exceptional work on the latest project. Great attention to detail and timely delivery.",
        },
        FeedbackEntry {
            author: "Sarah Johnson",
            role: "Team Lead",
            date: "2024-02-28",
            rating: Rating::ALL[3],
            comment: "Strong technical skills and good team player. Could improve on documentation.",
        },
        FeedbackEntry {
            author: "Michael Brown",
            role: "Department Head",
            date: "2024-02-15",
            rating: Rating::ALL[4],
            comment: "Outstanding performance in the last quarter. Keep up the good work!",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::random_source::ScriptedRandom;

    #[test]
    fn tiers_follow_rating() {
        let tiers: Vec<_> = Rating::ALL
            .iter()
            .map(|r| PerformanceTier::from_rating(*r).label())
            .collect();
        assert_eq!(
            tiers,
            vec!["Needs attention", "Developing", "Solid", "Strong", "Outstanding"]
        );
    }

    #[test]
    fn history_covers_six_months_with_drawn_ratings() {
        let mut random = ScriptedRandom::new(vec![0, 1, 4, 2]);
        let profile = EmployeeProfile::generate(&mut random);

        let months: Vec<_> = profile.history.iter().map(|r| r.month).collect();
        assert_eq!(months, HISTORY_MONTHS.to_vec());
        assert_eq!(profile.history[0].rating.get(), 1);
        assert_eq!(profile.history[0].feedback, "Great team collaboration");
        assert_eq!(profile.history[1].rating.get(), 5);
        assert_eq!(profile.history[1].feedback, "Strong problem-solving skills");
    }

    #[test]
    fn showcase_is_fixed() {
        let mut random = ScriptedRandom::new(vec![3]);
        let profile = EmployeeProfile::generate(&mut random);
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.projects[1].status.label(), "Completed");
        assert_eq!(profile.feedback.len(), 3);
        assert_eq!(profile.feedback[0].author, "John Smith");
    }
}
