//! Pages module
//! Full-window views for the systems browser

pub mod search;
