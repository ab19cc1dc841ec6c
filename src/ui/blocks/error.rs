use super::{heading, hint};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed error with an optional fix hint.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    title: String,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::error(self.title.as_str());
        let mut b = Box::with_title(heading(Icon::Error, title, supports_color, supports_unicode))
            .style(BoxStyle::Error);

        b.add_empty();
        b.add_line(self.message.as_str());

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(hint("Fix", fix, supports_color, supports_unicode));
        }

        b.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_message_and_fix() {
        let rendered = ErrorBlock::new("Not found", "employee 9 not found")
            .with_fix("staffdeck list")
            .render(false, false);
        assert!(rendered.contains("[FAIL] Not found"));
        assert!(rendered.contains("employee 9 not found"));
        assert!(rendered.contains("[>] Fix: staffdeck list"));
    }
}
