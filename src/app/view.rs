// src/app/view.rs
//! Application view rendering

use iced::Element;

use super::App;
use super::message::Message;
use crate::ui::pages;

impl App {
    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        pages::search::view(&self.search, self.ui.details.as_ref(), self.core.locale)
    }
}
