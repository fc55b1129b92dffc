//! Section header widget
//!
//! Displays a section title with an optional trailing count.
//! This is a reusable widget that does not depend on application-specific types.

use iced::widget::{Space, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme;

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `size` - Font size of the title
/// * `count` - Optional item count shown on the right
pub fn view<'a, Message: 'a>(title: &'a str, size: u32, count: Option<usize>) -> Element<'a, Message> {
    let title_text = text(title)
        .size(size)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let count_text: Element<'a, Message> = match count {
        Some(n) => text(n.to_string())
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into(),
        None => Space::new().width(0).into(),
    };

    row![title_text, Space::new().width(Fill), count_text]
        .align_y(Alignment::Center)
        .into()
}
