// src/app/state.rs
//! Application state definitions

use crate::api::CatalogClient;
use crate::features::{DetailsState, SearchSession, Settings};
use crate::i18n::{Language, Locale};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Core infrastructure (Settings, catalog client)
    pub core: CoreState,
    /// Search view state (query, results, fetch sequencing)
    pub search: SearchSession,
    /// UI state (detail pane)
    pub ui: UiState,
}

/// Core Infrastructure & Services
#[derive(Debug)]
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// `None` when the HTTP client could not be built
    pub catalog: Option<CatalogClient>,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));

        let catalog = match CatalogClient::new(&settings.catalog) {
            Ok(client) => {
                tracing::info!("Catalog client ready for {}", client.base_url());
                Some(client)
            }
            Err(e) => {
                tracing::error!("Failed to create catalog client: {}", e);
                None
            }
        };

        Self {
            settings,
            locale,
            catalog,
        }
    }
}

/// UI State
#[derive(Debug, Default)]
pub struct UiState {
    /// Detail pane for the selected system
    pub details: Option<DetailsState>,
}
