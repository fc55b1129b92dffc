//! Search page - the systems search view
//! Header, search input, status line and result list, with the details panel on the right

use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::features::{DetailsState, FetchStatus, SearchSession};
use crate::i18n::{Key, Locale};
use crate::ui::widgets::{Toast, section_header, view_toast};
use crate::ui::{components, theme};

/// Notice shown above the list for the current fetch status
pub fn status_notice(session: &SearchSession, locale: Locale) -> Option<Toast> {
    match session.status() {
        FetchStatus::Failed(e) => Some(Toast::error(format!(
            "{}: {}",
            locale.get(Key::SearchFailed),
            e
        ))),
        FetchStatus::Loaded if session.results().is_empty() => {
            Some(Toast::info(locale.get(Key::SearchNoResults)))
        }
        FetchStatus::Idle | FetchStatus::Loading | FetchStatus::Loaded => None,
    }
}

/// Build the search page
pub fn view<'a>(
    session: &'a SearchSession,
    details: Option<&'a DetailsState>,
    locale: Locale,
) -> Element<'a, Message> {
    let loading_hint: Element<'a, Message> = if session.is_loading() {
        text(locale.get(Key::SearchLoading))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into()
    } else {
        Space::new().height(0).into()
    };

    let notice: Element<'a, Message> = match status_notice(session, locale) {
        Some(toast) => {
            let action = matches!(session.status(), FetchStatus::Failed(_))
                .then(|| (locale.get(Key::Retry), Message::RetrySearch));
            view_toast(&toast, action)
        }
        None => Space::new().height(0).into(),
    };

    let list = scrollable(
        container(components::system_list::view(
            session.results(),
            details.map(|d| d.code.as_str()),
            locale,
        ))
        .padding(Padding::new(0.0).right(12.0)),
    )
    .height(Fill)
    .style(theme::dark_scrollable);

    let main_column = column![
        section_header::view(
            locale.get(Key::SystemsHeader),
            24,
            Some(session.results().len())
        ),
        Space::new().height(12),
        components::search_bar::view(session.query(), locale),
        Space::new().height(6),
        loading_hint,
        Space::new().height(6),
        notice,
        Space::new().height(12),
        list,
    ]
    .width(Fill)
    .height(Fill);

    let body: Element<'a, Message> = match details {
        Some(details) => row![
            main_column,
            Space::new().width(20),
            components::details_panel::view(details, locale),
        ]
        .into(),
        None => main_column.into(),
    };

    container(column![
        components::header::view(locale),
        container(body).padding(Padding::new(24.0)),
    ])
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchError, SystemRecord};
    use crate::i18n::Language;
    use crate::ui::widgets::ToastStyle;

    fn english() -> Locale {
        Locale::new(Language::English)
    }

    #[test]
    fn no_notice_before_first_response() {
        let mut session = SearchSession::new();
        assert_eq!(status_notice(&session, english()), None);
        session.poll_fetch();
        assert_eq!(status_notice(&session, english()), None);
    }

    #[test]
    fn empty_result_shows_no_results_notice() {
        let mut session = SearchSession::new();
        let ticket = session.poll_fetch().unwrap();
        session.apply(ticket.seq, Ok(vec![]));

        let notice = status_notice(&session, english()).unwrap();
        assert_eq!(notice.style, ToastStyle::Info);
        assert_eq!(notice.message, "No systems found");
    }

    #[test]
    fn failure_shows_error_notice_over_stale_rows() {
        let mut session = SearchSession::new();
        let ticket = session.poll_fetch().unwrap();
        session.apply(
            ticket.seq,
            Ok(vec![SystemRecord {
                code: "A".to_string(),
                name: "Alpha".to_string(),
                parent_system_code: None,
            }]),
        );
        let ticket = session.retry();
        session.apply(ticket.seq, Err(FetchError::Status(500)));

        let notice = status_notice(&session, english()).unwrap();
        assert_eq!(notice.style, ToastStyle::Error);
        assert_eq!(
            notice.message,
            "Search failed: Catalog responded with HTTP 500"
        );
        assert_eq!(session.results().len(), 1);
    }
}
