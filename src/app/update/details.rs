//! Detail pane message handlers

use iced::Task;
use tracing::{debug, error};

use crate::api::FetchError;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::DetailsState;

impl App {
    /// Handle detail pane related messages
    pub fn handle_details(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectSystem(code, name) => {
                if self.ui.details.as_ref().is_some_and(|d| &d.code == code) {
                    return Some(Task::none());
                }
                self.ui.details = Some(DetailsState::new(code.clone(), name.clone()));
                Some(self.load_details(code))
            }

            Message::ConfigurationLoaded(code, result) => {
                if let Err(e) = result {
                    error!("Failed to load configuration for {}: {}", code, e);
                }
                let applied = self
                    .ui
                    .details
                    .as_mut()
                    .is_some_and(|d| d.set_configuration(code, result.clone()));
                if !applied {
                    debug!("Ignoring configuration for deselected system {}", code);
                }
                Some(Task::none())
            }

            Message::MaintenanceLoaded(code, result) => {
                if let Err(e) = result {
                    error!("Failed to load maintenance for {}: {}", code, e);
                }
                let applied = self
                    .ui
                    .details
                    .as_mut()
                    .is_some_and(|d| d.set_maintenance(code, result.clone()));
                if !applied {
                    debug!("Ignoring maintenance for deselected system {}", code);
                }
                Some(Task::none())
            }

            Message::CloseDetails => {
                self.ui.details = None;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Load configuration and maintenance history concurrently
    fn load_details(&self, code: &str) -> Task<Message> {
        let Some(client) = self.core.catalog.clone() else {
            let unavailable = || FetchError::Network("catalog client unavailable".to_string());
            return Task::batch([
                Task::done(Message::ConfigurationLoaded(
                    code.to_string(),
                    Err(unavailable()),
                )),
                Task::done(Message::MaintenanceLoaded(
                    code.to_string(),
                    Err(unavailable()),
                )),
            ]);
        };

        let configuration = {
            let client = client.clone();
            let code = code.to_string();
            Task::perform(
                {
                    let code = code.clone();
                    async move { client.configuration(&code).await }
                },
                move |result| Message::ConfigurationLoaded(code.clone(), result),
            )
        };

        let maintenance = {
            let code = code.to_string();
            Task::perform(
                {
                    let code = code.clone();
                    async move { client.maintenance(&code).await }
                },
                move |result| Message::MaintenanceLoaded(code.clone(), result),
            )
        };

        Task::batch([configuration, maintenance])
    }
}
