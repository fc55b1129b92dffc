//! Catalog service client
//!
//! Thin reqwest wrapper around the systems catalog HTTP API. Every call maps
//! its outcome onto [`FetchError`] so results can travel inside messages.

pub mod model;

use std::fmt;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tracing::debug;

use crate::features::settings::CatalogSettings;
use model::{Configuration, MaintenanceRecord, SystemRecord};

/// Maximum number of systems requested per search
pub const RESULT_LIMIT: u32 = 50;

/// Build the search URL for a query
///
/// `searchText` is only appended for a non-empty query.
pub fn systems_url(base_url: &str, query: &str) -> String {
    let mut url = format!("{}/v1/systems?limit={}", trim_base(base_url), RESULT_LIMIT);
    if !query.is_empty() {
        url.push_str("&searchText=");
        url.push_str(&urlencoding::encode(query));
    }
    url
}

/// Build the configuration URL for a system
pub fn configuration_url(base_url: &str, code: &str) -> String {
    format!(
        "{}/v1/system/configuration/{}",
        trim_base(base_url),
        urlencoding::encode(code)
    )
}

/// Build the maintenance history URL for a system
pub fn maintenance_url(base_url: &str, code: &str) -> String {
    format!(
        "{}/v1/system/maintenance?systemCode={}",
        trim_base(base_url),
        urlencoding::encode(code)
    )
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Failure of a single catalog request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or no usable client
    Network(String),
    /// Non-2xx HTTP status
    Status(u16),
    /// Body did not match the expected shape
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "Network error: {}", e),
            FetchError::Status(code) => write!(f, "Catalog responded with HTTP {}", code),
            FetchError::Decode(e) => write!(f, "Invalid catalog response: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Network(e.to_string()),
        }
    }
}

/// HTTP client for the systems catalog
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CatalogClient {
    /// Create a client from catalog settings
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search systems by name or code
    pub async fn search_systems(&self, query: &str) -> Result<Vec<SystemRecord>, FetchError> {
        let body = self.get(&systems_url(&self.base_url, query)).await?;
        model::parse_systems(&body)
    }

    /// Configuration entries of a system
    pub async fn configuration(&self, code: &str) -> Result<Vec<Configuration>, FetchError> {
        let body = self.get(&configuration_url(&self.base_url, code)).await?;
        model::parse_list(&body)
    }

    /// Maintenance history of a system
    pub async fn maintenance(&self, code: &str) -> Result<Vec<MaintenanceRecord>, FetchError> {
        let body = self.get(&maintenance_url(&self.base_url, code)).await?;
        model::parse_list(&body)
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BASE: &str = "http://localhost:3700";

    #[test]
    fn systems_url_without_query() {
        assert_eq!(
            systems_url(BASE, ""),
            "http://localhost:3700/v1/systems?limit=50"
        );
    }

    #[test]
    fn systems_url_with_query() {
        assert_eq!(
            systems_url(BASE, "core"),
            "http://localhost:3700/v1/systems?limit=50&searchText=core"
        );
    }

    #[test]
    fn systems_url_encodes_query() {
        let url = systems_url(BASE, "a&b c/é");
        assert_eq!(
            url,
            "http://localhost:3700/v1/systems?limit=50&searchText=a%26b%20c%2F%C3%A9"
        );
    }

    #[test]
    fn systems_url_limit_and_search_text_presence() {
        for query in ["", " ", "x", "L1CS1", "Temperature sensor 1", "%", "&limit=5"] {
            let url = systems_url(BASE, query);
            assert!(url.contains("limit=50"), "{}", url);
            assert_eq!(url.contains("searchText="), !query.is_empty(), "{}", url);
            assert_eq!(url.matches("limit=").count(), 1, "{}", url);
        }
    }

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        assert_eq!(
            systems_url("http://catalog.local/", ""),
            "http://catalog.local/v1/systems?limit=50"
        );
    }

    #[test]
    fn detail_urls() {
        assert_eq!(
            configuration_url(BASE, "L1CS1CAM1"),
            "http://localhost:3700/v1/system/configuration/L1CS1CAM1"
        );
        assert_eq!(
            maintenance_url(BASE, "L1 CH1"),
            "http://localhost:3700/v1/system/maintenance?systemCode=L1%20CH1"
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            FetchError::Status(500).to_string(),
            "Catalog responded with HTTP 500"
        );
        assert!(FetchError::Network("refused".into()).to_string().contains("refused"));
    }

    /// Serve a single canned HTTP response and report the request line
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            let request = String::from_utf8_lossy(&request).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });

        (base, handle)
    }

    fn client_for(base_url: String) -> CatalogClient {
        CatalogClient::new(&CatalogSettings {
            base_url,
            request_timeout_secs: Some(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn search_systems_parses_response() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"code":"C1","name":"Core Sys","parentSystemCode":"P1"}]"#,
        )
        .await;

        let systems = client_for(base).search_systems("core").await.unwrap();
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].name, "Core Sys");
        assert_eq!(systems[0].parent_system_code.as_deref(), Some("P1"));

        let request_line = server.await.unwrap();
        assert_eq!(
            request_line,
            "GET /v1/systems?limit=50&searchText=core HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base, server) = serve_once("500 Internal Server Error", r#""General server error""#).await;

        let err = client_for(base).search_systems("").await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));

        let request_line = server.await.unwrap();
        assert_eq!(request_line, "GET /v1/systems?limit=50 HTTP/1.1");
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client_for(base).search_systems("").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
