//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::SystemsHeader, "Systems");
    m.insert(Key::ToggleTheme, "Toggle theme");

    // Search
    m.insert(Key::SearchPlaceholder, "Search by name or code");
    m.insert(Key::SearchLoading, "Loading...");
    m.insert(Key::SearchNoResults, "No systems found");
    m.insert(Key::SearchFailed, "Search failed");
    m.insert(Key::Retry, "Retry");

    // Result rows
    m.insert(Key::RowName, "Name: ");
    m.insert(Key::RowCode, "Code:");
    m.insert(Key::RowParent, "Parent:");

    // Details pane
    m.insert(Key::DetailsConfiguration, "Configuration");
    m.insert(Key::DetailsMaintenance, "Maintenance");
    m.insert(Key::DetailsNoConfiguration, "No configuration entries");
    m.insert(Key::DetailsNoMaintenance, "No maintenance recorded");
    m.insert(Key::DetailsLoadFailed, "Could not load");
    m.insert(Key::Close, "Close");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
