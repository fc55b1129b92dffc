//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod details;
pub mod search;
pub mod settings;

pub use details::{DetailsState, Loadable};
pub use search::{Applied, FetchStatus, FetchTicket, SearchSession};
pub use settings::Settings;
