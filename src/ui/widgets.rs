//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.

pub mod section_header;
mod toast;

pub use toast::{Toast, ToastStyle, view_toast};
