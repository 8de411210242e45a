//! Local input checks run before any request is built.

use url::Url;

use crate::error::CliError;

/// Trims a keyword pattern and rejects it if nothing is left.
///
/// # Errors
///
/// Returns [`CliError::Validation`] for an empty or blank pattern.
pub fn keyword_pattern(raw: &str) -> Result<&str, CliError> {
    let pattern = raw.trim();
    if pattern.is_empty() {
        return Err(CliError::Validation("keyword pattern must not be empty".into()));
    }
    Ok(pattern)
}

/// Checks a resource identifier given on the command line.
///
/// # Errors
///
/// Returns [`CliError::Validation`] for an empty or blank identifier.
pub fn resource_id(raw: &str) -> Result<&str, CliError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(CliError::Validation("identifier must not be empty".into()));
    }
    Ok(id)
}

/// Parses `--limit` as a positive integer.
///
/// # Errors
///
/// Returns [`CliError::Validation`] unless the value is an integer >= 1.
pub fn limit(raw: &str) -> Result<u32, CliError> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(CliError::Validation(format!(
            "--limit must be a positive integer, got `{raw}`"
        ))),
        Ok(n) => Ok(n),
    }
}

/// Parses a feed URL, requiring a scheme and a host.
///
/// # Errors
///
/// Returns [`CliError::Validation`] when the URL is relative, unparsable or
/// has no host.
pub fn feed_url(raw: &str) -> Result<Url, CliError> {
    let raw = raw.trim();
    let url = Url::parse(raw)
        .map_err(|e| CliError::Validation(format!("malformed URL `{raw}`: {e}")))?;
    if !url.has_host() {
        return Err(CliError::Validation(format!(
            "malformed URL `{raw}`: missing host"
        )));
    }
    Ok(url)
}
