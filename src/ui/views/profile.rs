use staffdeck::domain::services::{EmployeeProfile, PerformanceTier, ProjectStatus};
use staffdeck::Employee;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::stars::stars;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::widgets::table::{Align, Table};

const LABEL_WIDTH: usize = 8;

pub struct ProfileView<'a> {
    employee: &'a Employee,
    bookmarked: bool,
    profile: &'a EmployeeProfile,
}

impl<'a> ProfileView<'a> {
    pub fn new(employee: &'a Employee, bookmarked: bool, profile: &'a EmployeeProfile) -> Self {
        Self {
            employee,
            bookmarked,
            profile,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let e = self.employee;
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Profile, e.full_name());
        header.add("ID", e.id.to_string());
        header.add("Department", e.department.to_string());
        header.add(
            "Bookmark",
            format!(
                "{} {}",
                Icon::bookmark(self.bookmarked).render(supports_unicode),
                if self.bookmarked { "yes" } else { "no" }
            ),
        );
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        let mut details = Box::with_title("Details").style(BoxStyle::Info);
        details.add_field("Email", LABEL_WIDTH, &e.email);
        details.add_field("Phone", LABEL_WIDTH, &e.phone);
        details.add_field("Age", LABEL_WIDTH, e.age.to_string());
        details.add_field("Address", LABEL_WIDTH, &e.address);
        details.add_empty();
        details.add_line(e.bio.as_str());
        out.push_str(&details.render(supports_color, supports_unicode));

        out.push_str(&self.render_performance(supports_color, supports_unicode));
        out.push_str(&self.render_projects(supports_color, supports_unicode));
        out.push_str(&self.render_feedback(supports_color, supports_unicode));
        out
    }

    fn render_performance(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rating = self.employee.performance;
        let tier = PerformanceTier::from_rating(rating);
        let tier_text = match tier {
            PerformanceTier::Outstanding | PerformanceTier::Strong => ColoredText::success(tier.label()),
            PerformanceTier::Solid => ColoredText::info(tier.label()),
            PerformanceTier::Developing => ColoredText::warning(tier.label()),
            PerformanceTier::NeedsAttention => ColoredText::error(tier.label()),
        };

        let mut b = Box::with_title("Performance").style(BoxStyle::Info);
        b.add_field(
            "Rating",
            LABEL_WIDTH,
            format!(
                "{} {}/5 ({})",
                stars(rating, supports_unicode),
                rating.get(),
                tier_text.render(supports_color)
            ),
        );
        b.add_empty();

        let mut table = Table::new(&[
            ("Month", Align::Left),
            ("Rating", Align::Left),
            ("Feedback", Align::Left),
        ]);
        for record in &self.profile.history {
            table.add_row(vec![
                record.month.to_string(),
                stars(record.rating, supports_unicode),
                record.feedback.to_string(),
            ]);
        }
        for line in table.render_lines(supports_color) {
            b.add_line(line);
        }
        b.render(supports_color, supports_unicode)
    }

    fn render_projects(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut table = Table::new(&[
            ("Project", Align::Left),
            ("Status", Align::Left),
            ("Progress", Align::Right),
            ("Due", Align::Left),
        ]);
        for project in &self.profile.projects {
            let status = match project.status {
                ProjectStatus::Completed => ColoredText::success(project.status.label()),
                ProjectStatus::InProgress => ColoredText::info(project.status.label()),
                ProjectStatus::Planning => ColoredText::dim(project.status.label()),
            };
            table.add_row(vec![
                project.name.to_string(),
                status.render(supports_color),
                format!("{}%", project.progress),
                project.due_date.to_string(),
            ]);
        }

        let mut b = Box::with_title("Projects").style(BoxStyle::Info);
        for line in table.render_lines(supports_color) {
            b.add_line(line);
        }
        b.render(supports_color, supports_unicode)
    }

    fn render_feedback(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut b = Box::with_title("Feedback").style(BoxStyle::Info);
        for (i, entry) in self.profile.feedback.iter().enumerate() {
            if i > 0 {
                b.add_empty();
            }
            b.add_line(format!(
                "{} {} {}",
                ColoredText::plain(entry.author).bold().render(supports_color),
                ColoredText::dim(format!("({}, {})", entry.role, entry.date)).render(supports_color),
                stars(entry.rating, supports_unicode)
            ));
            b.add_line(entry.comment);
        }
        b.render(supports_color, supports_unicode)
    }
}
