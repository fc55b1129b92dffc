//! Application messages

use crate::api::{Configuration, FetchError, MaintenanceRecord, SystemRecord};

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for ignored events
    Noop,

    // ============ Search ============
    /// Search input changed
    SearchTextChanged(String),
    /// Search response settled (sequence number, outcome)
    SystemsFetched(u64, Result<Vec<SystemRecord>, FetchError>),
    /// Re-issue the current search after a failure
    RetrySearch,

    // ============ Details ============
    /// Result row selected (code, name)
    SelectSystem(String, String),
    /// Configuration settled for a system code
    ConfigurationLoaded(String, Result<Vec<Configuration>, FetchError>),
    /// Maintenance history settled for a system code
    MaintenanceLoaded(String, Result<Vec<MaintenanceRecord>, FetchError>),
    /// Close the detail pane
    CloseDetails,

    // ============ Settings ============
    /// Switch between dark and light theme
    ToggleDarkMode,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::Noop => simple!("Noop"),

            Self::SearchTextChanged(q) => simple!("SearchTextChanged", "{:?}", q),
            Self::SystemsFetched(seq, Ok(v)) => {
                simple!("SystemsFetched", "#{}, {} systems", seq, v.len())
            }
            Self::SystemsFetched(seq, Err(e)) => simple!("SystemsFetched", "#{}, {}", seq, e),
            Self::RetrySearch => simple!("RetrySearch"),

            Self::SelectSystem(code, _) => simple!("SelectSystem", "{}", code),
            Self::ConfigurationLoaded(code, r) => {
                simple!("ConfigurationLoaded", "{}, ok={}", code, r.is_ok())
            }
            Self::MaintenanceLoaded(code, r) => {
                simple!("MaintenanceLoaded", "{}, ok={}", code, r.is_ok())
            }
            Self::CloseDetails => simple!("CloseDetails"),

            Self::ToggleDarkMode => simple!("ToggleDarkMode"),
        }
    }
}
