//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic.
//! They are the only layer that should import from `crate::app`.

pub mod details_panel;
pub mod header;
pub mod search_bar;
pub mod system_list;
