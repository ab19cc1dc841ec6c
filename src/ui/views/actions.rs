//! Output for commands that act on a single employee: bookmark toggles and
//! the simulated promote/assign actions.

use staffdeck::application::ActionOutcome;
use staffdeck::domain::ports::StoreError;
use staffdeck::Employee;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn employee_label(employee: &Employee) -> String {
    format!("{} (#{})", employee.full_name(), employee.id)
}

pub struct ActionView<'a> {
    title: &'a str,
    employee: &'a Employee,
    outcome: &'a ActionOutcome,
}

impl<'a> ActionView<'a> {
    pub fn new(title: &'a str, employee: &'a Employee, outcome: &'a ActionOutcome) -> Self {
        Self {
            title,
            employee,
            outcome,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut header = CommandHeader::new(Icon::Action, self.title);
        header.add("Employee", employee_label(self.employee));
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');

        match self.outcome {
            ActionOutcome::Submitted { message } => out.push_str(&format!(
                "{} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::success(message.as_str()).render(supports_color)
            )),
            ActionOutcome::Cancelled => out.push_str(&format!(
                "{} {}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("Cancelled. Nothing was submitted.").render(supports_color)
            )),
        }
        out
    }
}

pub struct BookmarkView<'a> {
    employee: &'a Employee,
    bookmarked: bool,
    save_error: Option<&'a StoreError>,
}

impl<'a> BookmarkView<'a> {
    pub fn new(employee: &'a Employee, bookmarked: bool, save_error: Option<&'a StoreError>) -> Self {
        Self {
            employee,
            bookmarked,
            save_error,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = Icon::bookmark(self.bookmarked).colored(supports_color, supports_unicode);
        let mut out = if self.bookmarked {
            format!("{} Bookmarked {}\n", icon, employee_label(self.employee))
        } else {
            format!("{} Removed bookmark from {}\n", icon, employee_label(self.employee))
        };

        if let Some(e) = self.save_error {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!("Not saved, change lasts for this run only: {}", e))
                    .render(supports_color)
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdeck::{Department, EmployeeId, Rating};

    fn jane() -> Employee {
        Employee {
            id: EmployeeId::new(2),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            age: 31,
            department: Department::Marketing,
            performance: Rating::new(3).unwrap(),
            address: "2 Elm, Austin".to_string(),
            phone: "555".to_string(),
            bio: "bio".to_string(),
        }
    }

    #[test]
    fn submitted_action() {
        let outcome = ActionOutcome::Submitted {
            message: "Promotion request submitted!".to_string(),
        };
        let rendered = ActionView::new("Promote", &jane(), &outcome).render(false, false);
        assert_eq!(
            rendered,
            "[ACTION] Promote\nEmployee: Jane Doe (#2)\n\n[OK] Promotion request submitted!\n"
        );
    }

    #[test]
    fn cancelled_action() {
        let rendered = ActionView::new("Promote", &jane(), &ActionOutcome::Cancelled).render(false, false);
        assert!(rendered.ends_with("[ ] Cancelled. Nothing was submitted.\n"));
    }

    #[test]
    fn bookmark_toggle_lines() {
        assert_eq!(
            BookmarkView::new(&jane(), true, None).render(false, false),
            "[*] Bookmarked Jane Doe (#2)\n"
        );

        let err = StoreError::AccessError {
            message: "disk full".to_string(),
        };
        let rendered = BookmarkView::new(&jane(), false, Some(&err)).render(false, true);
        assert!(rendered.starts_with("☆ Removed bookmark from Jane Doe (#2)\n"));
        assert!(rendered.contains("⚠ Not saved"));
    }
}
