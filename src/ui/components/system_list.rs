//! System list component
//! One card per catalog record, keyed by system code

use iced::widget::{button, column, keyed_column, text};
use iced::{Element, Fill, Padding};

use crate::api::SystemRecord;
use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Display lines of a row: name, code, parent
///
/// A missing parent is shown as `null`.
pub fn row_labels(record: &SystemRecord, locale: Locale) -> [String; 3] {
    [
        format!("{}{}", locale.get(Key::RowName), record.name),
        format!("{}{}", locale.get(Key::RowCode), record.code),
        format!(
            "{}{}",
            locale.get(Key::RowParent),
            record.parent_system_code.as_deref().unwrap_or("null")
        ),
    ]
}

/// Build the result list
pub fn view<'a>(
    systems: &'a [SystemRecord],
    selected: Option<&'a str>,
    locale: Locale,
) -> Element<'a, Message> {
    keyed_column(systems.iter().map(|record| {
        let is_selected = selected == Some(record.code.as_str());
        (record.code.as_str(), system_row(record, is_selected, locale))
    }))
    .spacing(8)
    .width(Fill)
    .into()
}

fn system_row(record: &SystemRecord, selected: bool, locale: Locale) -> Element<'_, Message> {
    let [name, code, parent] = row_labels(record, locale);

    let lines = column![
        text(name).size(15),
        text(code).size(13).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
        text(parent).size(13).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .spacing(2);

    button(lines)
        .width(Fill)
        .padding(Padding::new(12.0).left(16.0))
        .style(theme::system_row(selected))
        .on_press(Message::SelectSystem(
            record.code.clone(),
            record.name.clone(),
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn english() -> Locale {
        Locale::new(Language::English)
    }

    #[test]
    fn labels_for_root_system() {
        let record = SystemRecord {
            code: "A".to_string(),
            name: "Alpha".to_string(),
            parent_system_code: None,
        };
        assert_eq!(
            row_labels(&record, english()),
            [
                "Name: Alpha".to_string(),
                "Code:A".to_string(),
                "Parent:null".to_string(),
            ]
        );
    }

    #[test]
    fn labels_for_child_system() {
        let record = SystemRecord {
            code: "C1".to_string(),
            name: "Core Sys".to_string(),
            parent_system_code: Some("P1".to_string()),
        };
        assert_eq!(
            row_labels(&record, english()),
            [
                "Name: Core Sys".to_string(),
                "Code:C1".to_string(),
                "Parent:P1".to_string(),
            ]
        );
    }

    #[test]
    fn empty_parent_string_is_kept_verbatim() {
        let record = SystemRecord {
            code: "L1".to_string(),
            name: "Laser 1".to_string(),
            parent_system_code: Some(String::new()),
        };
        assert_eq!(row_labels(&record, english())[2], "Parent:");
    }
}
