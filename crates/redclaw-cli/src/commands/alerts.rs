//! Alert listing command implementation.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::cli::AlertCommands;
use crate::client::RedclawApi;
use crate::error::CliError;
use crate::model::{Alert, AlertQuery};
use crate::output::{truncate, OutputFormat, TableDisplay};
use crate::validate;

/// Handler for alert subcommands.
pub struct AlertCommand<'a, C> {
    api: &'a C,
}

impl<'a, C: RedclawApi> AlertCommand<'a, C> {
    /// Creates a new alert command handler.
    #[must_use]
    pub const fn new(api: &'a C) -> Self {
        Self { api }
    }

    /// Executes the alert subcommand.
    ///
    /// # Errors
    ///
    /// Returns error if `--limit` is not a positive integer, or if the
    /// request or output fails.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &AlertCommands,
    ) -> Result<(), CliError> {
        match command {
            AlertCommands::List { source, limit } => {
                let query = AlertQuery {
                    source: source.clone(),
                    limit: limit.as_deref().map(validate::limit).transpose()?,
                };
                self.list(out, format, &query).await
            }
        }
    }

    async fn list<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        query: &AlertQuery,
    ) -> Result<(), CliError> {
        debug!(source = ?query.source, limit = ?query.limit, "Listing alerts");
        let alerts = self.api.list_alerts(query).await?;
        format.write(out, &AlertList { alerts })
    }
}

// Output types

/// Alerts in the order the service returned them.
#[derive(Debug, Clone, Serialize)]
pub struct AlertList {
    /// Alerts.
    pub alerts: Vec<Alert>,
}

impl TableDisplay for AlertList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.alerts.is_empty() {
            writeln!(writer, "No alerts found")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<20}  {:<16}  {:<20}  TITLE",
            "TIME", "SOURCE", "KEYWORD"
        )?;
        writeln!(writer, "{}", "─".repeat(100))?;

        for alert in &self.alerts {
            let title = alert
                .title
                .as_deref()
                .or(alert.url.as_deref())
                .unwrap_or("-");
            writeln!(
                writer,
                "{:<20}  {:<16}  {:<20}  {}",
                truncate(alert.timestamp.as_deref().unwrap_or("-"), 20),
                truncate(&alert.source_label(), 16),
                truncate(alert.keyword.as_deref().unwrap_or("-"), 20),
                truncate(title, 40)
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} alert(s)", self.alerts.len())?;
        Ok(())
    }
}
