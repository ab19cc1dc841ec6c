pub mod error;
pub mod header;
pub mod summary;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// `icon title`, title in bold.
fn heading(icon: Icon, title: ColoredText, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        icon.colored(supports_color, supports_unicode),
        title.bold().render(supports_color)
    )
}

/// `-> Label: text` footer line.
fn hint(label: &str, text: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {} {}",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("{}:", label)).render(supports_color),
        text
    )
}
