//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{SearchSession, Settings};
pub use message::Message;
pub use state::{App, CoreState, UiState};

/// Window title
pub const WINDOW_TITLE: &str = "Systems database";

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        Self::with_settings(settings)
    }

    /// Create the application from explicit settings and issue the mount fetch
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let mut app = Self {
            core: CoreState::new(settings),
            search: SearchSession::new(),
            ui: UiState::default(),
        };

        let init_task = app.sync_search();
        (app, init_task)
    }

    /// Fixed window title
    pub fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Escape closes the detail pane while it is open
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        if self.ui.details.is_none() {
            return iced::Subscription::none();
        }

        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            } => Some(Message::CloseDetails),
            _ => None,
        })
    }
}
