//! Ingestion source command implementation.

use std::io::Write;

use serde::Serialize;

use crate::cli::SourceCommands;
use crate::client::RedclawApi;
use crate::error::CliError;
use crate::model::Source;
use crate::output::{truncate, Created, OutputFormat, TableDisplay};
use crate::validate;

/// Handler for source subcommands.
pub struct SourceCommand<'a, C> {
    api: &'a C,
}

impl<'a, C: RedclawApi> SourceCommand<'a, C> {
    /// Creates a new source command handler.
    #[must_use]
    pub const fn new(api: &'a C) -> Self {
        Self { api }
    }

    /// Executes the source subcommand.
    ///
    /// # Errors
    ///
    /// Returns error if the feed URL is malformed, or if the request or
    /// output fails.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &SourceCommands,
    ) -> Result<(), CliError> {
        match command {
            SourceCommands::AddRss { url } => self.add_rss(out, format, url).await,
            SourceCommands::List => self.list(out, format).await,
        }
    }

    async fn add_rss<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        url: &str,
    ) -> Result<(), CliError> {
        let url = validate::feed_url(url)?;
        let id = self.api.add_rss_source(&url).await?;
        format.write(
            out,
            &Created {
                resource: "source",
                id,
            },
        )
    }

    async fn list<W: Write>(&self, out: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        let sources = self.api.list_sources().await?;
        format.write(out, &SourceList { sources })
    }
}

// Output types

/// Registered sources of every kind.
#[derive(Debug, Clone, Serialize)]
pub struct SourceList {
    /// Sources.
    pub sources: Vec<Source>,
}

impl TableDisplay for SourceList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.sources.is_empty() {
            writeln!(writer, "No sources registered")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<12}  {:<6}  {:<8}  URL",
            "ID", "KIND", "ENABLED"
        )?;
        writeln!(writer, "{}", "─".repeat(80))?;

        for source in &self.sources {
            writeln!(
                writer,
                "{:<12}  {:<6}  {:<8}  {}",
                truncate(&source.id.to_string(), 12),
                source.kind,
                if source.enabled { "yes" } else { "no" },
                source.url
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} source(s)", self.sources.len())?;
        Ok(())
    }
}
