use std::fmt;

use crossterm::style::{Attribute, Color, ContentStyle};

use crate::ui::theme::colors;

/// Meaning of a piece of text, mapped to a theme color at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl From<SemanticColor> for Color {
    fn from(tone: SemanticColor) -> Self {
        match tone {
            SemanticColor::Success => colors::SUCCESS,
            SemanticColor::Error => colors::ERROR,
            SemanticColor::Warning => colors::WARNING,
            SemanticColor::Info => colors::INFO,
            SemanticColor::Dim => colors::DIM,
        }
    }
}

/// Text with an optional tone; `Display` always prints it plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn toned(text: impl Into<String>, tone: SemanticColor) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::toned(text, SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::toned(text, SemanticColor::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::toned(text, SemanticColor::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::toned(text, SemanticColor::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::toned(text, SemanticColor::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.tone.map(Color::from);
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        style
    }

    pub fn render(&self, supports_color: bool) -> String {
        if supports_color {
            self.style().apply(self.text.as_str()).to_string()
        } else {
            self.text.clone()
        }
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
