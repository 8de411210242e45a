//! HTTP client for the RedClaw API.
//!
//! [`RedclawApi`] is the seam the command handlers are written against;
//! [`HttpClient`] is the reqwest-backed implementation used by the binary.
//!
//! # Example
//!
//! ```rust,no_run
//! use redclaw_cli::client::{HttpClient, RedclawApi};
//! use redclaw_cli::config::ClientConfig;
//!
//! # async fn example() -> Result<(), redclaw_cli::CliError> {
//! let config = ClientConfig::from_env()?;
//! let client = HttpClient::new(&config)?;
//! let status = client.status().await?;
//! println!("{status:?}");
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::config::{ApiKey, ClientConfig};
use crate::error::CliError;
use crate::model::{
    self, Alert, AlertQuery, Keyword, NewKeyword, NewSource, ResourceId, ServiceStatus, Source,
};

/// Path prefix shared by every endpoint.
const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Source kind sent by `sources add-rss`.
pub const RSS_KIND: &str = "rss";

/// Operations the CLI performs against the service.
///
/// Each method issues exactly one request.
pub trait RedclawApi: Send + Sync {
    /// `GET /api/v1/status`. Any 2xx answer is a healthy status.
    fn status(&self) -> impl Future<Output = Result<ServiceStatus, CliError>> + Send;

    /// `GET /api/v1/keywords`.
    fn list_keywords(&self) -> impl Future<Output = Result<Vec<Keyword>, CliError>> + Send;

    /// `POST /api/v1/keywords`.
    fn add_keyword(
        &self,
        pattern: &str,
        enabled: bool,
    ) -> impl Future<Output = Result<ResourceId, CliError>> + Send;

    /// `DELETE /api/v1/keywords/{id}`.
    fn delete_keyword(&self, id: &str) -> impl Future<Output = Result<(), CliError>> + Send;

    /// `POST /api/v1/keywords/{id}/toggle`.
    ///
    /// Yields the updated keyword when the service echoes it back.
    fn toggle_keyword(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Keyword>, CliError>> + Send;

    /// `GET /api/v1/alerts`.
    fn list_alerts(
        &self,
        query: &AlertQuery,
    ) -> impl Future<Output = Result<Vec<Alert>, CliError>> + Send;

    /// `GET /api/v1/sources`.
    fn list_sources(&self) -> impl Future<Output = Result<Vec<Source>, CliError>> + Send;

    /// `POST /api/v1/sources` with kind `rss`.
    fn add_rss_source(
        &self,
        url: &Url,
    ) -> impl Future<Output = Result<ResourceId, CliError>> + Send;
}

/// reqwest-backed [`RedclawApi`].
pub struct HttpClient {
    http: Client,
    base_url: Url,
    api_key: ApiKey,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Builds a client from a resolved config.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] if the HTTP client cannot be constructed
    /// or the base URL cannot carry a path.
    pub fn new(config: &ClientConfig) -> Result<Self, CliError> {
        if config.base_url.cannot_be_a_base() {
            return Err(CliError::Config(format!(
                "base URL `{}` cannot carry API paths",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("redclaw-cli/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| CliError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Resolves `/api/v1/<segments..>` against the base URL.
    ///
    /// Segments are percent-encoded, so identifiers cannot escape their slot.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(API_PREFIX).extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        debug!(method = method.as_str(), path = url.path(), "Building request");
        self.http
            .request(method, url)
            .bearer_auth(self.api_key.expose())
    }

    /// Sends a request and turns non-success statuses into errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, CliError> {
        let response = request.send().await.map_err(|e| CliError::Request {
            status: None,
            body: e.to_string(),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<body unreadable: {e}>"));
        Err(CliError::from_status(status.as_u16(), body))
    }

    async fn send_text(&self, request: RequestBuilder) -> Result<String, CliError> {
        let text = self.send(request).await?.text().await?;
        trace!(bytes = text.len(), "Read response body");
        Ok(text)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, CliError> {
        let text = self.send_text(request).await?;
        serde_json::from_str(&text).map_err(|e| CliError::Decode(e.to_string()))
    }

    /// Like [`Self::send_json`] but tolerates an empty body.
    async fn send_optional_json(&self, request: RequestBuilder) -> Result<Value, CliError> {
        let text = self.send_text(request).await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| CliError::Decode(e.to_string()))
    }
}

impl RedclawApi for HttpClient {
    // ========================================================================
    // Status
    // ========================================================================

    async fn status(&self) -> Result<ServiceStatus, CliError> {
        let text = self.send_text(self.request(Method::GET, &["status"])).await?;
        Ok(ServiceStatus::from_body(&text))
    }

    // ========================================================================
    // Keywords
    // ========================================================================

    async fn list_keywords(&self) -> Result<Vec<Keyword>, CliError> {
        let body = self
            .send_json(self.request(Method::GET, &["keywords"]))
            .await?;
        model::decode_list(body)
    }

    async fn add_keyword(&self, pattern: &str, enabled: bool) -> Result<ResourceId, CliError> {
        let request = self
            .request(Method::POST, &["keywords"])
            .json(&NewKeyword { pattern, enabled });
        let body: Value = self.send_json(request).await?;
        model::decode_created_id(&body)
    }

    async fn delete_keyword(&self, id: &str) -> Result<(), CliError> {
        self.send(self.request(Method::DELETE, &["keywords", id]))
            .await?;
        Ok(())
    }

    async fn toggle_keyword(&self, id: &str) -> Result<Option<Keyword>, CliError> {
        let body = self
            .send_optional_json(self.request(Method::POST, &["keywords", id, "toggle"]))
            .await?;
        Ok(model::decode_keyword(&body))
    }

    // ========================================================================
    // Alerts
    // ========================================================================

    async fn list_alerts(&self, query: &AlertQuery) -> Result<Vec<Alert>, CliError> {
        let request = self
            .request(Method::GET, &["alerts"])
            .query(&query.to_pairs());
        let body = self.send_json(request).await?;
        model::decode_list(body)
    }

    // ========================================================================
    // Sources
    // ========================================================================

    async fn list_sources(&self) -> Result<Vec<Source>, CliError> {
        let body = self
            .send_json(self.request(Method::GET, &["sources"]))
            .await?;
        model::decode_list(body)
    }

    async fn add_rss_source(&self, url: &Url) -> Result<ResourceId, CliError> {
        let request = self.request(Method::POST, &["sources"]).json(&NewSource {
            kind: RSS_KIND,
            url: url.as_str(),
        });
        let body: Value = self.send_json(request).await?;
        model::decode_created_id(&body)
    }
}
