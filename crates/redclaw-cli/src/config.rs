//! Session configuration.
//!
//! Resolved once at process start from the environment and handed to the
//! command handlers. Nothing here is cached or written back.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::CliError;

/// Environment variable holding the service base URL.
pub const URL_VAR: &str = "REDCLAW_URL";

/// Environment variable holding the bearer credential.
pub const API_KEY_VAR: &str = "REDCLAW_API_KEY";

/// Default request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API key that never shows up in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for the `Authorization` header only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Everything a command needs to reach the service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL. May carry a path prefix.
    pub base_url: Url,
    /// Bearer credential.
    pub api_key: ApiKey,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Builds a config from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] if the URL is not an absolute http(s) URL
    /// or the key is blank.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, CliError> {
        let base_url = parse_base_url(base_url)?;
        if api_key.trim().is_empty() {
            return Err(missing(API_KEY_VAR));
        }
        Ok(Self {
            base_url,
            api_key: ApiKey::new(api_key.trim()),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Resolves the config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] if `REDCLAW_URL` or `REDCLAW_API_KEY` is
    /// unset or empty, or if the URL is malformed.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the config through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, URL_VAR)?;
        let key = required(&lookup, API_KEY_VAR)?;
        Self::new(&url, &key)
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| missing(name))
}

fn missing(name: &str) -> CliError {
    CliError::Config(format!("missing required setting `{name}`"))
}

fn parse_base_url(raw: &str) -> Result<Url, CliError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(missing(URL_VAR));
    }
    let url = Url::parse(raw)
        .map_err(|e| CliError::Config(format!("invalid {URL_VAR} `{raw}`: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(CliError::Config(format!(
            "invalid {URL_VAR} `{raw}`: must be an http:// or https:// URL"
        )));
    }
    Ok(url)
}
