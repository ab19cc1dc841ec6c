use std::path::Path;

use staffdeck::domain::entities::BookmarkSet;
use staffdeck::Employee;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::stars::stars;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::widgets::table::{Align, Table};

/// Employee table used by `list` and `bookmarks`.
pub struct EmployeesView<'a> {
    title: &'a str,
    store_path: &'a Path,
    employees: &'a [&'a Employee],
    total: usize,
    bookmarks: &'a BookmarkSet,
    filter: Option<String>,
    empty_hint: &'a str,
}

impl<'a> EmployeesView<'a> {
    pub fn new(
        title: &'a str,
        store_path: &'a Path,
        employees: &'a [&'a Employee],
        total: usize,
        bookmarks: &'a BookmarkSet,
    ) -> Self {
        Self {
            title,
            store_path,
            employees,
            total,
            bookmarks,
            filter: None,
            empty_hint: "Run `staffdeck fetch` to load employees.",
        }
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_empty_hint(mut self, hint: &'a str) -> Self {
        self.empty_hint = hint;
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::People, self.title);
        header.add("Store", self.store_path.display().to_string());
        if let Some(filter) = &self.filter {
            header.add("Filter", filter.as_str());
        }
        header.add(
            "Showing",
            format!("{} of {}", self.employees.len(), self.total),
        );
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        if self.employees.is_empty() {
            out.push_str(&format!(
                "{} {}\n\n{}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No employees found.").render(supports_color),
                ColoredText::dim(self.empty_hint).render(supports_color)
            ));
            return out;
        }

        let mut table = Table::new(&[
            ("", Align::Left),
            ("ID", Align::Right),
            ("Name", Align::Left),
            ("Department", Align::Left),
            ("Rating", Align::Left),
            ("Email", Align::Left),
        ]);
        for employee in self.employees {
            let marked = self.bookmarks.contains(employee.id);
            let marker = if marked {
                ColoredText::warning(Icon::Bookmarked.render(supports_unicode))
                    .render(supports_color)
            } else {
                ColoredText::dim(Icon::NotBookmarked.render(supports_unicode))
                    .render(supports_color)
            };
            table.add_row(vec![
                marker,
                employee.id.to_string(),
                employee.full_name(),
                employee.department.to_string(),
                stars(employee.performance, supports_unicode),
                ColoredText::dim(employee.email.as_str()).render(supports_color),
            ]);
        }

        let mut b = Box::with_title(self.title).style(BoxStyle::Info);
        for line in table.render_lines(supports_color) {
            b.add_line(line);
        }
        out.push_str(&b.render(supports_color, supports_unicode));
        out
    }
}
