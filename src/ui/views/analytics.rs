use std::path::Path;

use staffdeck::domain::services::{BookmarkRatio, DepartmentStats};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::widgets::table::{Align, Table};

pub struct AnalyticsView<'a> {
    store_path: &'a Path,
    stats: &'a DepartmentStats,
    ratio: BookmarkRatio,
}

impl<'a> AnalyticsView<'a> {
    pub fn new(store_path: &'a Path, stats: &'a DepartmentStats, ratio: BookmarkRatio) -> Self {
        Self {
            store_path,
            stats,
            ratio,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let total = self.ratio.bookmarked + self.ratio.not_bookmarked;
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Analytics, "Analytics");
        header.add("Store", self.store_path.display().to_string());
        header.add("Employees", total.to_string());
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        if self.stats.is_empty() {
            out.push_str(&format!(
                "{} {}\n\n{}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No employees loaded.").render(supports_color),
                ColoredText::dim("Run `staffdeck fetch` to load employees.").render(supports_color)
            ));
            return out;
        }

        let mut table = Table::new(&[
            ("Department", Align::Left),
            ("Employees", Align::Right),
            ("Avg rating", Align::Right),
        ]);
        for (department, stat) in self.stats.iter() {
            table.add_row(vec![
                department.to_string(),
                stat.count.to_string(),
                format!("{:.1}", stat.average_rating()),
            ]);
        }
        let mut departments = Box::with_title("Departments").style(BoxStyle::Info);
        for line in table.render_lines(supports_color) {
            departments.add_line(line);
        }
        out.push_str(&departments.render(supports_color, supports_unicode));

        let mut bookmarks = Box::with_title("Bookmarks").style(BoxStyle::Info);
        bookmarks.add_field(
            "Bookmarked",
            14,
            format!("{} ({}%)", self.ratio.bookmarked, percent(self.ratio.bookmarked, total)),
        );
        bookmarks.add_field(
            "Not bookmarked",
            14,
            format!(
                "{} ({}%)",
                self.ratio.not_bookmarked,
                percent(self.ratio.not_bookmarked, total)
            ),
        );
        out.push_str(&bookmarks.render(supports_color, supports_unicode));
        out
    }
}

fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    format!("{:.0}", part as f64 * 100.0 / total as f64)
}
