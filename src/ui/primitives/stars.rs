use staffdeck::Rating;

use crate::ui::theme::{icons, icons_ascii};

/// Fixed-width strip: one full star per rating point, empty stars up to the max.
pub fn stars(rating: Rating, supports_unicode: bool) -> String {
    let (full, empty) = if supports_unicode {
        (icons::STAR_FULL, icons::STAR_EMPTY)
    } else {
        (icons_ascii::STAR_FULL, icons_ascii::STAR_EMPTY)
    };
    let filled = usize::from(rating.get());
    let rest = usize::from(Rating::MAX) - filled;
    format!("{}{}", full.repeat(filled), empty.repeat(rest))
}
