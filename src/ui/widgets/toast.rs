//! Toast notification widget
//!
//! Inline notice with an accent bar, an icon and an optional action button.
//! Used for the search error affordance and loading hints.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::ui::theme;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Error,
    Info,
}

impl ToastStyle {
    /// Get the accent color for this style (used for icon/indicator only)
    pub fn accent_color(&self, theme: &iced::Theme) -> iced::Color {
        match self {
            ToastStyle::Error => theme::danger(theme),
            ToastStyle::Info => theme::info(theme),
        }
    }

    /// Get the icon for this style
    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Error => "✗",
            ToastStyle::Info => "ℹ",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }
}

/// Build a toast notification widget
///
/// `action` renders a trailing text button, e.g. "Retry".
pub fn view_toast<'a, Message: Clone + 'a>(
    toast: &Toast,
    action: Option<(&'a str, Message)>,
) -> Element<'a, Message> {
    let style = toast.style;

    // Left accent bar (thin vertical line)
    let accent_bar = container(Space::new().width(3).height(20)).style(move |theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(style.accent_color(theme))),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon_widget = text(style.icon()).size(14).style(move |theme| text::Style {
        color: Some(style.accent_color(theme)),
    });

    let message_widget = text(toast.message.clone()).size(13).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let action_widget: Element<'a, Message> = match action {
        Some((label, msg)) => button(text(label).size(13))
            .padding(Padding::new(4.0).left(12.0).right(12.0))
            .style(theme::primary_button)
            .on_press(msg)
            .into(),
        None => Space::new().width(0).into(),
    };

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon_widget,
        Space::new().width(10),
        message_widget,
        Space::new().width(Fill),
        action_widget,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(10.0).left(12.0).right(12.0));

    container(content)
        .width(Fill)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::surface_elevated(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            ..Default::default()
        })
        .into()
}
