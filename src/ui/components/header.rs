//! Header component
//! Static logo band with the theme toggle

use iced::widget::{Space, button, container, row, svg, tooltip};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

pub const HEADER_HEIGHT: f32 = 96.0;

/// Build the header band
pub fn view<'a>(locale: Locale) -> Element<'a, Message> {
    let logo = svg(svg::Handle::from_memory(icons::LOGO.as_bytes()))
        .width(56)
        .height(56);

    let theme_icon = svg(svg::Handle::from_memory(icons::THEME.as_bytes()))
        .width(20)
        .height(20)
        .style(|theme, _status| svg::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let theme_toggle = tooltip(
        button(theme_icon)
            .padding(8)
            .style(theme::text_button)
            .on_press(Message::ToggleDarkMode),
        locale.get(Key::ToggleTheme),
        tooltip::Position::Left,
    );

    let content = row![
        Space::new().width(Fill),
        logo,
        Space::new().width(Fill),
        theme_toggle,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(20.0));

    container(content)
        .width(Fill)
        .height(HEADER_HEIGHT)
        .style(theme::header)
        .into()
}
