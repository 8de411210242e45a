//! Service status command implementation.
//!
//! One GET against the status endpoint. Used as a connectivity check: any
//! 2xx answer succeeds whatever its body, failures are reported as-is.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::client::RedclawApi;
use crate::error::CliError;
use crate::model::ServiceStatus;
use crate::output::{OutputFormat, TableDisplay};

/// Status command executor.
pub struct StatusCommand<'a, C> {
    api: &'a C,
}

impl<'a, C: RedclawApi> StatusCommand<'a, C> {
    /// Create a new status command.
    #[must_use]
    pub const fn new(api: &'a C) -> Self {
        Self { api }
    }

    /// Execute the status command.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, answers with a
    /// failure status, or output fails.
    pub async fn execute<W: Write>(&self, writer: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        let status = self.api.status().await?;
        format.write(writer, &StatusReport(status))
    }
}

/// Renderable wrapper around the status payload.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct StatusReport(pub ServiceStatus);

impl TableDisplay for StatusReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "RedClaw Status")?;
        writeln!(writer, "══════════════════════════════════")?;

        let fields = match &self.0 {
            ServiceStatus::Fields(fields) => fields,
            ServiceStatus::Value(value) => {
                writeln!(writer, "{}", render_value(value))?;
                return Ok(());
            }
            ServiceStatus::Text(text) => {
                writeln!(writer, "{text}")?;
                return Ok(());
            }
        };

        if fields.is_empty() {
            writeln!(writer, "(service returned no fields)")?;
            return Ok(());
        }

        let width = fields.keys().map(String::len).max().unwrap_or(0) + 1;
        for (key, value) in fields {
            let label = format!("{key}:");
            writeln!(writer, "{label:<width$}  {}", render_value(value))?;
        }
        Ok(())
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
