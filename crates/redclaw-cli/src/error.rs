//! CLI error types.

use thiserror::Error;

use crate::exitcode;

/// Errors surfaced by a `redclaw` invocation.
///
/// Every variant terminates the invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required setting is missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Local input was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// Transport failure or non-success HTTP status.
    #[error("{}", request_message(.status.as_ref(), .body))]
    Request {
        /// HTTP status, absent when the request never got a response.
        status: Option<u16>,
        /// Response body or transport error text.
        body: String,
    },

    /// The service reported that the addressed resource does not exist.
    #[error("not found: {body}")]
    NotFound {
        /// Response body, verbatim.
        body: String,
    },

    /// A successful response carried a body we could not decode.
    #[error("unexpected response from service: {0}")]
    Decode(String),

    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn request_message(status: Option<&u16>, body: &str) -> String {
    match (status, body.is_empty()) {
        (Some(code), true) => format!("request failed (HTTP {code})"),
        (Some(code), false) => format!("request failed (HTTP {code}): {body}"),
        (None, _) => format!("request failed: {body}"),
    }
}

impl CliError {
    /// Builds the error for a non-success HTTP response.
    ///
    /// 404 becomes [`CliError::NotFound`]; everything else is a
    /// [`CliError::Request`] carrying the status and body untouched.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 404 {
            Self::NotFound { body }
        } else {
            Self::Request {
                status: Some(status),
                body,
            }
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => exitcode::CONFIG,
            Self::Validation(_) => exitcode::DATAERR,
            Self::Request { .. } | Self::Decode(_) => exitcode::UNAVAILABLE,
            Self::NotFound { .. } => exitcode::NOINPUT,
            Self::Format(_) | Self::Io(_) => exitcode::IOERR,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Request {
            status: err.status().map(|s| s.as_u16()),
            body: err.to_string(),
        }
    }
}
