use super::{heading, hint};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed outcome shown at the end of a mutating command.
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    notes: Vec<(Icon, String)>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn new(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            notes: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_info(&mut self, message: impl Into<String>) {
        self.notes.push((Icon::Success, message.into()));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.notes.push((Icon::Warning, message.into()));
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = if self.success {
            (
                BoxStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            )
        } else {
            (
                BoxStyle::Warning,
                Icon::Warning,
                ColoredText::warning(self.title.as_str()),
            )
        };

        let mut b = Box::with_title(heading(icon, title, supports_color, supports_unicode)).style(style);

        if !self.stats.is_empty() {
            b.add_empty();
            for (label, count) in &self.stats {
                b.add_line(format!("{} {}", count, label));
            }
        }

        if !self.notes.is_empty() {
            b.add_empty();
            for (icon, note) in &self.notes {
                b.add_line(format!(
                    "{} {}",
                    icon.colored(supports_color, supports_unicode),
                    note
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(hint("Next", next_step, supports_color, supports_unicode));
        }

        b.render(supports_color, supports_unicode)
    }
}
