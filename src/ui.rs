//! UI module for the systems browser
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-window views composed from components

pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
