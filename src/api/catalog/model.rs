//! Catalog API model types
//!
//! Data structures for catalog service responses. Bodies are parsed with serde
//! at the boundary; anything that does not match the expected shape is rejected.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::FetchError;

/// A single entry of the systems catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRecord {
    /// Unique system code, used as row identity
    pub code: String,
    /// Display name
    pub name: String,
    /// Code of the parent system, if any
    #[serde(default)]
    pub parent_system_code: Option<String>,
}

/// A configuration entry attached to a system
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Configuration {
    pub key: String,
    pub value: String,
}

/// A maintenance event recorded for a system
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub system_name: String,
    pub when: DateTime<FixedOffset>,
    pub username: String,
}

/// Parse a JSON array body into typed records
pub fn parse_list<T>(body: &[u8]) -> Result<Vec<T>, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Parse a `/v1/systems` response body
///
/// Rows are keyed by code, so duplicate and empty codes are reported
/// but still kept in the list.
pub fn parse_systems(body: &[u8]) -> Result<Vec<SystemRecord>, FetchError> {
    let systems: Vec<SystemRecord> = parse_list(body)?;

    let duplicates = duplicate_codes(&systems);
    if !duplicates.is_empty() {
        tracing::warn!("Catalog returned duplicate system codes: {:?}", duplicates);
    }
    let empty = systems.iter().filter(|s| s.code.is_empty()).count();
    if empty > 0 {
        tracing::warn!("Catalog returned {} systems without a code", empty);
    }

    Ok(systems)
}

/// Codes that appear more than once, in first-seen order
pub fn duplicate_codes(systems: &[SystemRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for system in systems {
        let code = system.code.as_str();
        if !seen.insert(code) && reported.insert(code) {
            duplicates.push(code);
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str) -> SystemRecord {
        SystemRecord {
            code: code.to_string(),
            name: format!("System {}", code),
            parent_system_code: None,
        }
    }

    #[test]
    fn parses_null_parent() {
        let body = br#"[{"code":"A","name":"Alpha","parentSystemCode":null}]"#;
        let systems = parse_systems(body).unwrap();
        assert_eq!(
            systems,
            vec![SystemRecord {
                code: "A".to_string(),
                name: "Alpha".to_string(),
                parent_system_code: None,
            }]
        );
    }

    #[test]
    fn parses_missing_parent_and_extra_fields() {
        let body = br#"[{"code":"C1","name":"Core Sys","extra":42}]"#;
        let systems = parse_systems(body).unwrap();
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].parent_system_code, None);
    }

    #[test]
    fn parses_empty_array() {
        assert!(parse_systems(b"[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_body() {
        let err = parse_systems(br#"{"message":"General server error"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn rejects_record_without_code() {
        let err = parse_systems(br#"[{"name":"Alpha"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_systems(b"<html>oops</html>"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn duplicate_codes_reported_once() {
        let systems = vec![record("A"), record("B"), record("A"), record("A")];
        assert_eq!(duplicate_codes(&systems), vec!["A"]);
        assert!(duplicate_codes(&systems[..2]).is_empty());
    }

    #[test]
    fn parses_maintenance_timestamps() {
        let body = br#"[{"systemName":"Chamber 1","when":"2022-01-05T15:22:00Z","username":"Marie"}]"#;
        let records: Vec<MaintenanceRecord> = parse_list(body).unwrap();
        assert_eq!(records[0].username, "Marie");
        assert_eq!(records[0].when.to_rfc3339(), "2022-01-05T15:22:00+00:00");
    }

    #[test]
    fn parses_configuration() {
        let body = br#"[{"key":"IP","value":"192.168.1.50"}]"#;
        let entries: Vec<Configuration> = parse_list(body).unwrap();
        assert_eq!(
            entries,
            vec![Configuration {
                key: "IP".to_string(),
                value: "192.168.1.50".to_string(),
            }]
        );
    }
}
