use crate::ui::primitives::text::{ColoredText, SemanticColor};
use crate::ui::theme::{icons, icons_ascii};

/// Status and section markers, each with a unicode and an ASCII glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Bookmarked,
    NotBookmarked,
    People,
    Profile,
    Analytics,
    Fetch,
    Action,
}

impl Icon {
    pub fn bookmark(bookmarked: bool) -> Self {
        if bookmarked {
            Icon::Bookmarked
        } else {
            Icon::NotBookmarked
        }
    }

    /// `(unicode, ascii)`
    fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Pending => (icons::PENDING, icons_ascii::PENDING),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Bookmarked => (icons::BOOKMARKED, icons_ascii::BOOKMARKED),
            Icon::NotBookmarked => (icons::NOT_BOOKMARKED, icons_ascii::NOT_BOOKMARKED),
            Icon::People => (icons::PEOPLE, icons_ascii::PEOPLE),
            Icon::Profile => (icons::PROFILE, icons_ascii::PROFILE),
            Icon::Analytics => (icons::ANALYTICS, icons_ascii::ANALYTICS),
            Icon::Fetch => (icons::FETCH, icons_ascii::FETCH),
            Icon::Action => (icons::ACTION, icons_ascii::ACTION),
        }
    }

    fn tone(self) -> SemanticColor {
        match self {
            Icon::Success => SemanticColor::Success,
            Icon::Error => SemanticColor::Error,
            Icon::Warning | Icon::Bookmarked => SemanticColor::Warning,
            Icon::Pending | Icon::Arrow | Icon::NotBookmarked => SemanticColor::Dim,
            _ => SemanticColor::Info,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        ColoredText::toned(self.render(supports_unicode), self.tone()).render(supports_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_glyphs_used_without_unicode() {
        assert_eq!(Icon::Success.render(false), icons_ascii::SUCCESS);
        assert_eq!(Icon::People.colored(false, false), "[STAFF]");
    }

    #[test]
    fn bookmark_icon_follows_state() {
        assert_eq!(Icon::bookmark(true).render(true), "★");
        assert_eq!(Icon::bookmark(false).render(false), "[ ]");
    }

    #[test]
    fn colored_icon_carries_ansi() {
        assert!(Icon::Bookmarked.colored(true, true).starts_with("\u{1b}["));
    }
}
