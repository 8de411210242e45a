//! Wire types for the RedClaw HTTP API.
//!
//! The service schema is versioned externally, so decoding is lenient:
//! identifiers may be numbers or strings, list endpoints may answer with a
//! bare array or an envelope, and a few common field spellings are accepted.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CliError;

/// Server-assigned identifier, kept exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Numeric identifier.
    Number(i64),
    /// Opaque string identifier.
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

const fn enabled_by_default() -> bool {
    true
}

/// A watched text pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Identifier.
    pub id: ResourceId,
    /// Pattern text.
    #[serde(alias = "keyword", alias = "text")]
    pub pattern: String,
    /// Whether matches currently raise alerts.
    #[serde(default = "enabled_by_default", alias = "active")]
    pub enabled: bool,
}

/// A match of a keyword in ingested content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Source the content came from.
    #[serde(default, alias = "source_name", alias = "source_id")]
    pub source: Option<Value>,
    /// Keyword that matched.
    #[serde(default, alias = "matched_keyword")]
    pub keyword: Option<String>,
    /// When the alert was raised.
    #[serde(default, alias = "created_at", alias = "published_at")]
    pub timestamp: Option<String>,
    /// Title of the matched item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Link to the matched item.
    #[serde(default, alias = "link", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Alert {
    /// Source rendered as text, whatever JSON type the service used.
    #[must_use]
    pub fn source_label(&self) -> String {
        match &self.source {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "-".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// A content feed the service ingests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Identifier.
    pub id: ResourceId,
    /// Feed kind, e.g. `rss`.
    #[serde(rename = "type", alias = "kind", default)]
    pub kind: String,
    /// Feed location.
    #[serde(default)]
    pub url: String,
    /// Display name, if the service assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the feed is being polled.
    #[serde(default = "enabled_by_default", alias = "active")]
    pub enabled: bool,
}

/// What `status` shows when the service answers 2xx with an empty body.
pub const STATUS_OK: &str = "ok";

/// Point-in-time health snapshot. Its shape is owned by the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServiceStatus {
    /// A JSON object of named fields.
    Fields(serde_json::Map<String, Value>),
    /// Any other JSON value, e.g. an array or a bare string.
    Value(Value),
    /// A non-JSON body such as `OK`.
    Text(String),
}

impl ServiceStatus {
    /// Interprets a success body. Never fails: any 2xx answer is healthy.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            return Self::Text(STATUS_OK.to_string());
        }
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => Self::Fields(fields),
            Ok(value) => Self::Value(value),
            Err(_) => Self::Text(body.to_string()),
        }
    }
}

impl Default for ServiceStatus {
    fn default() -> Self {
        Self::Fields(serde_json::Map::new())
    }
}

/// Query parameters for listing alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertQuery {
    /// Restrict to one ingestion source.
    pub source: Option<String>,
    /// Upper bound on returned alerts.
    pub limit: Option<u32>,
}

impl AlertQuery {
    /// Query pairs for the request URL, only for the filters that are set.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(source) = &self.source {
            pairs.push(("source", source.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Body for creating a keyword.
#[derive(Debug, Clone, Serialize)]
pub struct NewKeyword<'a> {
    /// Pattern text.
    pub pattern: &'a str,
    /// Initial state; omitted from the body when `true`, the service default.
    #[serde(skip_serializing_if = "is_true")]
    pub enabled: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_true(value: &bool) -> bool {
    *value
}

/// Body for registering a source.
#[derive(Debug, Clone, Serialize)]
pub struct NewSource<'a> {
    /// Feed kind.
    #[serde(rename = "type")]
    pub kind: &'a str,
    /// Feed location.
    pub url: &'a str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Bare(Vec<T>),
    Wrapped(Envelope<T>),
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(
        alias = "items",
        alias = "keywords",
        alias = "alerts",
        alias = "sources"
    )]
    data: Vec<T>,
}

/// Decodes a list response, bare or enveloped.
///
/// # Errors
///
/// Returns [`CliError::Decode`] when the body is neither shape.
pub fn decode_list<T>(body: Value) -> Result<Vec<T>, CliError>
where
    T: for<'de> Deserialize<'de>,
{
    match serde_json::from_value::<Listing<T>>(body) {
        Ok(Listing::Bare(items) | Listing::Wrapped(Envelope { data: items })) => Ok(items),
        Err(e) => Err(CliError::Decode(format!("expected a list: {e}"))),
    }
}

/// Pulls the new resource's identifier out of a create response.
///
/// Accepts `{"id": ..}` and `{"data": {"id": ..}}`.
///
/// # Errors
///
/// Returns [`CliError::Decode`] when no identifier is present.
pub fn decode_created_id(body: &Value) -> Result<ResourceId, CliError> {
    let id = body
        .get("id")
        .or_else(|| body.get("data").and_then(|data| data.get("id")))
        .ok_or_else(|| CliError::Decode("create response carries no `id`".into()))?;
    serde_json::from_value(id.clone())
        .map_err(|e| CliError::Decode(format!("unusable `id` in create response: {e}")))
}

/// Decodes a keyword from a response that may or may not carry one.
#[must_use]
pub fn decode_keyword(body: &Value) -> Option<Keyword> {
    let candidate = body.get("data").unwrap_or(body);
    serde_json::from_value(candidate.clone()).ok()
}
