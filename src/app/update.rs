//! Message update handlers - thin dispatcher delegating to submodules

mod details;
mod search;
mod settings;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle a message, then run the search fetch reaction
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.dispatch(&message);
        // Reaction is keyed on the query, so passes caused by responses settle here
        let fetch = self.sync_search();
        Task::batch([task, fetch])
    }

    /// Try each handler in order until one handles the message
    fn dispatch(&mut self, message: &Message) -> Task<Message> {
        if let Some(task) = self.handle_search(message) {
            return task;
        }
        if let Some(task) = self.handle_details(message) {
            return task;
        }
        if let Some(task) = self.handle_settings(message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{FetchError, SystemRecord};
    use crate::app::{App, Message};
    use crate::features::{FetchStatus, Loadable, Settings};

    fn app() -> App {
        App::with_settings(Settings::default()).0
    }

    fn record(code: &str, name: &str, parent: Option<&str>) -> SystemRecord {
        SystemRecord {
            code: code.to_string(),
            name: name.to_string(),
            parent_system_code: parent.map(str::to_string),
        }
    }

    #[test]
    fn mount_issues_initial_fetch() {
        let app = app();
        assert_eq!(app.search.latest_seq(), Some(1));
        assert_eq!(app.search.query(), "");
        assert!(app.search.is_loading());
    }

    #[test]
    fn typing_then_response_shows_rows() {
        let mut app = app();
        let _ = app.update(Message::SystemsFetched(1, Ok(vec![])));

        let _ = app.update(Message::SearchTextChanged("core".to_string()));
        assert_eq!(app.search.query(), "core");
        assert_eq!(app.search.latest_seq(), Some(2));

        let _ = app.update(Message::SystemsFetched(
            2,
            Ok(vec![record("C1", "Core Sys", Some("P1"))]),
        ));
        assert_eq!(app.search.results(), &[record("C1", "Core Sys", Some("P1"))]);
        assert_eq!(app.search.status(), &FetchStatus::Loaded);
    }

    #[test]
    fn unrelated_messages_do_not_refetch() {
        let mut app = app();
        let _ = app.update(Message::SystemsFetched(1, Ok(vec![record("A", "Alpha", None)])));

        for _ in 0..50 {
            let _ = app.update(Message::Noop);
            let _ = app.update(Message::SystemsFetched(1, Ok(vec![record("A", "Alpha", None)])));
        }

        assert_eq!(app.search.latest_seq(), Some(1));
    }

    #[test]
    fn late_response_for_old_query_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::SearchTextChanged("x".to_string()));
        let _ = app.update(Message::SearchTextChanged("xy".to_string()));
        assert_eq!(app.search.latest_seq(), Some(3));

        let _ = app.update(Message::SystemsFetched(3, Ok(vec![record("XY", "Xy", None)])));
        let _ = app.update(Message::SystemsFetched(2, Ok(vec![record("X", "X", None)])));

        assert_eq!(app.search.results(), &[record("XY", "Xy", None)]);
    }

    #[test]
    fn failure_then_retry() {
        let mut app = app();
        let _ = app.update(Message::SystemsFetched(1, Ok(vec![record("A", "Alpha", None)])));
        let _ = app.update(Message::SearchTextChanged("a".to_string()));
        let _ = app.update(Message::SystemsFetched(
            2,
            Err(FetchError::Network("connection refused".to_string())),
        ));

        assert!(matches!(app.search.status(), FetchStatus::Failed(_)));
        assert_eq!(app.search.results(), &[record("A", "Alpha", None)]);

        let _ = app.update(Message::RetrySearch);
        assert_eq!(app.search.latest_seq(), Some(3));
        assert!(app.search.is_loading());
    }

    #[test]
    fn selecting_a_row_opens_details() {
        let mut app = app();
        let _ = app.update(Message::SelectSystem(
            "L1CS1CAM1".to_string(),
            "Camera 1".to_string(),
        ));

        let details = app.ui.details.as_ref().expect("details open");
        assert_eq!(details.code, "L1CS1CAM1");
        assert_eq!(details.configuration, Loadable::Loading);
        // Opening details is not a search change
        assert_eq!(app.search.latest_seq(), Some(1));
    }

    #[test]
    fn details_ignore_results_for_previous_selection() {
        let mut app = app();
        let _ = app.update(Message::SelectSystem("A".to_string(), "Alpha".to_string()));
        let _ = app.update(Message::SelectSystem("B".to_string(), "Beta".to_string()));

        let _ = app.update(Message::ConfigurationLoaded("A".to_string(), Ok(vec![])));
        let _ = app.update(Message::MaintenanceLoaded(
            "B".to_string(),
            Err(FetchError::Status(500)),
        ));

        let details = app.ui.details.as_ref().unwrap();
        assert_eq!(details.code, "B");
        assert_eq!(details.configuration, Loadable::Loading);
        assert_eq!(details.maintenance, Loadable::Failed(FetchError::Status(500)));
    }

    #[test]
    fn close_details() {
        let mut app = app();
        let _ = app.update(Message::SelectSystem("A".to_string(), "Alpha".to_string()));
        let _ = app.update(Message::CloseDetails);
        assert!(app.ui.details.is_none());
    }
}
