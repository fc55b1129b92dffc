//! Search message handlers and the fetch reaction

use iced::Task;
use tracing::debug;

use crate::api::FetchError;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{Applied, FetchTicket};

impl App {
    /// Handle search related messages
    pub fn handle_search(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SearchTextChanged(value) => {
                self.search.update_search_text(value.clone());
                Some(Task::none())
            }

            Message::SystemsFetched(seq, outcome) => {
                if let Applied::Replaced(count) = self.search.apply(*seq, outcome.clone()) {
                    debug!("Search #{} returned {} systems", seq, count);
                }
                Some(Task::none())
            }

            Message::RetrySearch => {
                let ticket = self.search.retry();
                Some(self.fetch_systems(ticket))
            }

            _ => None,
        }
    }

    /// Issue a search request if the query changed since the last one
    pub fn sync_search(&mut self) -> Task<Message> {
        match self.search.poll_fetch() {
            Some(ticket) => self.fetch_systems(ticket),
            None => Task::none(),
        }
    }

    fn fetch_systems(&self, ticket: FetchTicket) -> Task<Message> {
        let FetchTicket { seq, query } = ticket;

        let Some(client) = self.core.catalog.clone() else {
            return Task::done(Message::SystemsFetched(
                seq,
                Err(FetchError::Network("catalog client unavailable".to_string())),
            ));
        };

        debug!("Issuing search #{} for {:?}", seq, query);
        Task::perform(
            async move { client.search_systems(&query).await },
            move |result| Message::SystemsFetched(seq, result),
        )
    }
}
