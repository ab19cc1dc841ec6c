use staffdeck::domain::services::DepartmentStats;
use staffdeck::Department;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::{Align, Table};

/// Every department, including ones with no employees yet.
pub struct DepartmentsView<'a> {
    stats: &'a DepartmentStats,
}

impl<'a> DepartmentsView<'a> {
    pub fn new(stats: &'a DepartmentStats) -> Self {
        Self { stats }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = CommandHeader::new(Icon::People, "Departments").render(supports_color, supports_unicode);
        out.push('\n');

        let mut table = Table::new(&[("Department", Align::Left), ("Employees", Align::Right)]);
        for department in Department::ALL {
            let count = self
                .stats
                .get(department.name())
                .map(|s| s.count)
                .unwrap_or(0);
            let count = if count == 0 {
                ColoredText::dim("0").render(supports_color)
            } else {
                count.to_string()
            };
            table.add_row(vec![department.to_string(), count]);
        }
        for line in table.render_lines(supports_color) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
