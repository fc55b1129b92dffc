//! Detail pane state for a selected system

use crate::api::{Configuration, FetchError, MaintenanceRecord};

/// Data that is loaded asynchronously
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> From<Result<T, FetchError>> for Loadable<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => Loadable::Failed(e),
        }
    }
}

/// The system currently shown in the detail pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsState {
    pub code: String,
    pub name: String,
    pub configuration: Loadable<Vec<Configuration>>,
    pub maintenance: Loadable<Vec<MaintenanceRecord>>,
}

impl DetailsState {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            configuration: Loadable::Loading,
            maintenance: Loadable::Loading,
        }
    }

    /// Store configuration if it belongs to this system
    pub fn set_configuration(
        &mut self,
        code: &str,
        result: Result<Vec<Configuration>, FetchError>,
    ) -> bool {
        if code != self.code {
            return false;
        }
        self.configuration = result.into();
        true
    }

    /// Store maintenance history if it belongs to this system
    pub fn set_maintenance(
        &mut self,
        code: &str,
        result: Result<Vec<MaintenanceRecord>, FetchError>,
    ) -> bool {
        if code != self.code {
            return false;
        }
        self.maintenance = result.into();
        true
    }
}
