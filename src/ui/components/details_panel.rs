//! Details panel component
//! Side panel with configuration and maintenance history of the selected system

use iced::widget::{Space, button, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::{Configuration, MaintenanceRecord};
use crate::app::Message;
use crate::features::{DetailsState, Loadable};
use crate::i18n::{Key, Locale};
use crate::ui::widgets::{Toast, section_header, view_toast};
use crate::ui::{icons, theme};

pub const PANEL_WIDTH: f32 = 340.0;

/// Build the details panel
pub fn view(details: &DetailsState, locale: Locale) -> Element<'_, Message> {
    let close_icon = svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
        .width(16)
        .height(16)
        .style(|theme, _status| svg::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let title = row![
        column![
            section_header::view(&details.name, 20, None),
            text(details.code.as_str()).size(13).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ]
        .width(Fill),
        button(close_icon)
            .padding(6)
            .style(theme::text_button)
            .on_press(Message::CloseDetails),
    ]
    .align_y(Alignment::Start);

    let configuration = section(
        locale.get(Key::DetailsConfiguration),
        &details.configuration,
        locale.get(Key::DetailsNoConfiguration),
        locale,
        configuration_line,
    );

    let maintenance = section(
        locale.get(Key::DetailsMaintenance),
        &details.maintenance,
        locale.get(Key::DetailsNoMaintenance),
        locale,
        maintenance_line,
    );

    let content = column![
        title,
        Space::new().height(20),
        configuration,
        Space::new().height(20),
        maintenance,
    ]
    .padding(Padding::new(20.0));

    container(
        scrollable(content)
            .height(Fill)
            .style(theme::dark_scrollable),
    )
    .width(PANEL_WIDTH)
    .height(Fill)
    .style(theme::details_panel)
    .into()
}

fn section<'a, T>(
    title: &'a str,
    data: &'a Loadable<Vec<T>>,
    empty_text: &'a str,
    locale: Locale,
    line: fn(&'a T) -> String,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match data {
        Loadable::Loading => muted(locale.get(Key::SearchLoading)),
        Loadable::Failed(e) => view_toast(
            &Toast::error(format!("{}: {}", locale.get(Key::DetailsLoadFailed), e)),
            None,
        ),
        Loadable::Loaded(items) if items.is_empty() => muted(empty_text),
        Loadable::Loaded(items) => column(items.iter().map(|item| {
            text(line(item))
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
                .into()
        }))
        .spacing(6)
        .into(),
    };

    let count = match data {
        Loadable::Loaded(items) => Some(items.len()),
        _ => None,
    };

    column![section_header::view(title, 15, count), Space::new().height(8), body].into()
}

fn muted(label: &str) -> Element<'_, Message> {
    text(label)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        })
        .into()
}

fn configuration_line(entry: &Configuration) -> String {
    format!("{} = {}", entry.key, entry.value)
}

fn maintenance_line(record: &MaintenanceRecord) -> String {
    format!(
        "{} · {}",
        record.when.format("%Y-%m-%d %H:%M"),
        record.username
    )
}
