//! Systems catalog API module
//!
//! Provides the HTTP client and response models for the catalog service.

pub mod catalog;

pub use catalog::model::{Configuration, MaintenanceRecord, SystemRecord};
pub use catalog::{CatalogClient, FetchError};
