//! Origin API client
//!
//! Shared page-fetch capability for catalog, season and discovery
//! endpoints. The client exposes success/failure only; callers never
//! inspect status codes beyond that.

use crate::config::Config;
use crate::models::{CatalogItem, Origin, Season};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// API client for one harvest run.
///
/// The underlying connection pool is shared read-only across all
/// concurrent fan-out tasks; no task mutates client configuration
/// mid-run.
pub struct ApiClient {
    http: Client,
    user_agent: String,
    referer: String,
    api_key: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    /// * `user_agent` - identity header for catalog calls
    /// * `referer` - referer header the origin expects
    /// * `api_key` - trailing path credential segment
    /// * `timeout_ms` - per-request wall-clock bound
    pub fn new(user_agent: &str, referer: &str, api_key: &str, timeout_ms: u64) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .gzip(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            user_agent: user_agent.to_string(),
            referer: referer.to_string(),
            api_key: api_key.trim_matches('/').to_string(),
        }
    }

    /// Create from the run configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.user_agent,
            &config.referer,
            &config.api_key,
            config.request_timeout_ms,
        )
    }

    /// Full request URL: origin base, endpoint path, key segment.
    fn api_url(&self, origin: &Origin, path: &str) -> String {
        format!("{}{}/{}", origin.base_url, path, self.api_key)
    }

    /// Make a GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        user_agent: &str,
    ) -> Result<T, FetchError> {
        let response = self
            .http
            .get(url)
            .header("User-Agent", user_agent)
            .header("Referer", &self.referer)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // Some endpoints return empty bodies for no results
        if text.is_empty() || text == "[]" || text == "null" {
            return Err(FetchError::Empty);
        }

        serde_json::from_str(&text).map_err(|e| {
            debug!("unparseable response from {}: {}", url, e);
            FetchError::Parse(e.to_string())
        })
    }

    /// Fetch one page of a catalog listing.
    pub async fn fetch_items(
        &self,
        origin: &Origin,
        path: &str,
    ) -> Result<Vec<CatalogItem>, FetchError> {
        self.get_json(&self.api_url(origin, path), &self.user_agent)
            .await
    }

    /// Same as [`ApiClient::fetch_items`] with a caller-chosen
    /// User-Agent; the probe identifies itself differently from
    /// catalog calls.
    pub async fn fetch_items_as(
        &self,
        origin: &Origin,
        path: &str,
        user_agent: &str,
    ) -> Result<Vec<CatalogItem>, FetchError> {
        self.get_json(&self.api_url(origin, path), user_agent).await
    }

    /// Fetch the full season/episode tree of one series in one call.
    pub async fn fetch_seasons(
        &self,
        origin: &Origin,
        series_id: i64,
    ) -> Result<Vec<Season>, FetchError> {
        let path = format!("/api/season/by/serie/{}", series_id);
        self.get_json(&self.api_url(origin, &path), &self.user_agent)
            .await
    }

    /// Fetch a free-text document from an absolute URL.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network/connection error
    #[error("network error: {0}")]
    Network(String),
    /// HTTP error (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// JSON parsing error
    #[error("parse error: {0}")]
    Parse(String),
    /// Empty response from the origin
    #[error("empty response")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client() -> ApiClient {
        ApiClient::new("test-agent", "http://referer.test/", "KEY", 5_000)
    }

    #[test]
    fn test_api_url_construction() {
        let client = test_client();
        let origin = Origin::new("http://example.com");
        assert_eq!(
            client.api_url(&origin, "/api/channel/by/filtres/0/0/0"),
            "http://example.com/api/channel/by/filtres/0/0/0/KEY"
        );
    }

    #[test]
    fn test_api_key_slashes_are_normalized() {
        let client = ApiClient::new("ua", "ref", "/KEY/", 5_000);
        let origin = Origin::new("http://example.com/");
        assert_eq!(client.api_url(&origin, "/p"), "http://example.com/p/KEY");
    }

    #[tokio::test]
    async fn test_empty_list_body_is_reported_as_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/p/KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let result = test_client()
            .fetch_items(&Origin::new(&server.uri()), "/p")
            .await;
        assert!(matches!(result, Err(FetchError::Empty)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/p/KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\":\"a list\"}"))
            .mount(&server)
            .await;

        let result = test_client()
            .fetch_items(&Origin::new(&server.uri()), "/p")
            .await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_identity_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/p/KEY"))
            .and(header("User-Agent", "test-agent"))
            .and(header("Referer", "http://referer.test/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"[{"id": 1, "title": "A", "sources": []}]"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let items = test_client()
            .fetch_items(&Origin::new(&server.uri()), "/p")
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, Some(1));
    }
}
