//! Column layout for list views. Cells may contain ANSI color; widths are
//! measured on visible text.

use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::visible_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<(String, Align)>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[(&str, Align)]) -> Self {
        Self {
            headers: headers
                .iter()
                .map(|(h, align)| (h.to_string(), *align))
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Header line, then one line per row. Trailing whitespace is trimmed.
    pub fn render_lines(&self, supports_color: bool) -> Vec<String> {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| visible_width(cell))
                    .chain(std::iter::once(visible_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header_cells: Vec<String> = self.headers.iter().map(|(h, _)| h.clone()).collect();
        let mut lines = vec![ColoredText::dim(self.format_row(&header_cells, &widths))
            .render(supports_color)];
        lines.extend(self.rows.iter().map(|row| self.format_row(row, &widths)));
        lines
    }

    fn format_row(&self, cells: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, ((_, align), width)) in self.headers.iter().zip(widths).enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = " ".repeat(width.saturating_sub(visible_width(cell)));
            if i > 0 {
                line.push_str("  ");
            }
            match align {
                Align::Left => {
                    line.push_str(cell);
                    line.push_str(&pad);
                }
                Align::Right => {
                    line.push_str(&pad);
                    line.push_str(cell);
                }
            }
        }
        line.trim_end().to_string()
    }
}
