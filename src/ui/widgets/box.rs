use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::text::{ColoredText, SemanticColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Bordered panel. Width follows the widest line.
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.content.extend(line.lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    /// `label` padded to `label_width`, then `value`.
    pub fn add_field(&mut self, label: &str, label_width: usize, value: impl AsRef<str>) {
        self.add_line(format!(
            "{}{} {}",
            label,
            " ".repeat(label_width.saturating_sub(visible_width(label))),
            value.as_ref()
        ));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rows: Vec<&str> = self
            .title
            .iter()
            .chain(self.content.iter())
            .map(String::as_str)
            .collect();
        // one space of padding on each side
        let inner = 2 + rows.iter().map(|r| visible_width(r)).max().unwrap_or(0);

        let glyph = |c: BorderChar| c.render(supports_unicode);
        let paint = |s: String| ColoredText::toned(s, self.style.tone()).render(supports_color);
        let rule = |left: BorderChar, right: BorderChar| {
            paint(format!(
                "{}{}{}",
                glyph(left),
                glyph(BorderChar::Horizontal).repeat(inner),
                glyph(right)
            ))
        };
        let side = paint(glyph(BorderChar::Vertical).to_string());

        let mut out = rule(BorderChar::TopLeft, BorderChar::TopRight);
        out.push('\n');
        for row in rows {
            let fill = " ".repeat(inner - 1 - visible_width(row));
            out.push_str(&format!("{side} {row}{fill}{side}\n"));
        }
        out.push_str(&rule(BorderChar::BottomLeft, BorderChar::BottomRight));
        out.push('\n');
        out
    }
}

impl BoxStyle {
    fn tone(self) -> SemanticColor {
        match self {
            BoxStyle::Info => SemanticColor::Info,
            BoxStyle::Success => SemanticColor::Success,
            BoxStyle::Warning => SemanticColor::Warning,
            BoxStyle::Error => SemanticColor::Error,
        }
    }
}

/// Display width ignoring ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        // ESC [ ... <final letter>
        if matches!(chars.peek(), Some('[') | Some(']')) {
            chars.next();
        }
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }

    Cow::Owned(out)
}
