//! Keyword watchlist command implementation.
//!
//! Handles adding, listing, deleting, toggling and exporting keywords.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::KeywordCommands;
use crate::client::RedclawApi;
use crate::error::CliError;
use crate::model::Keyword;
use crate::output::{self, ActionResponse, Created, OutputFormat, TableDisplay};
use crate::validate;

/// Version stamped into export documents.
pub const EXPORT_VERSION: u32 = 1;

/// Handler for keyword subcommands.
pub struct KeywordCommand<'a, C> {
    api: &'a C,
}

impl<'a, C: RedclawApi> KeywordCommand<'a, C> {
    /// Creates a new keyword command handler.
    #[must_use]
    pub const fn new(api: &'a C) -> Self {
        Self { api }
    }

    /// Executes the keyword subcommand.
    ///
    /// # Errors
    ///
    /// Returns error if validation, the request, or output fails.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &KeywordCommands,
    ) -> Result<(), CliError> {
        match command {
            KeywordCommands::Add { pattern, disabled } => {
                self.add(out, format, pattern, !disabled).await
            }
            KeywordCommands::List => self.list(out, format).await,
            KeywordCommands::Delete { id } => self.delete(out, format, id).await,
            KeywordCommands::Toggle { id } => self.toggle(out, format, id).await,
            KeywordCommands::Export => self.export(out).await,
        }
    }

    async fn add<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        pattern: &str,
        enabled: bool,
    ) -> Result<(), CliError> {
        let pattern = validate::keyword_pattern(pattern)?;
        let id = self.api.add_keyword(pattern, enabled).await?;
        format.write(
            out,
            &Created {
                resource: "keyword",
                id,
            },
        )
    }

    async fn list<W: Write>(&self, out: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        let keywords = self.api.list_keywords().await?;
        format.write(out, &KeywordList { keywords })
    }

    async fn delete<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        id: &str,
    ) -> Result<(), CliError> {
        let id = validate::resource_id(id)?;
        self.api.delete_keyword(id).await?;
        format.write(
            out,
            &ActionResponse {
                id: id.to_string(),
                message: format!("Keyword {id} deleted"),
            },
        )
    }

    async fn toggle<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        id: &str,
    ) -> Result<(), CliError> {
        let id = validate::resource_id(id)?;
        let message = match self.api.toggle_keyword(id).await? {
            Some(keyword) => format!(
                "Keyword {} '{}' is now {}",
                keyword.id,
                keyword.pattern,
                enabled_label(keyword.enabled)
            ),
            None => format!("Keyword {id} toggled"),
        };
        format.write(
            out,
            &ActionResponse {
                id: id.to_string(),
                message,
            },
        )
    }

    /// Always JSON: the export document is meant for machines.
    async fn export<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let keywords = self.api.list_keywords().await?;
        output::write_json(out, &KeywordExport::from_keywords(&keywords))
    }
}

const fn enabled_label(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

// Output types

/// List of keywords in service order.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordList {
    /// Keywords.
    pub keywords: Vec<Keyword>,
}

impl TableDisplay for KeywordList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.keywords.is_empty() {
            writeln!(writer, "No keywords configured")?;
            return Ok(());
        }

        writeln!(writer, "{:<12}  {:<8}  PATTERN", "ID", "ENABLED")?;
        writeln!(writer, "{}", "─".repeat(60))?;

        for keyword in &self.keywords {
            writeln!(
                writer,
                "{:<12}  {:<8}  {}",
                output::truncate(&keyword.id.to_string(), 12),
                if keyword.enabled { "yes" } else { "no" },
                keyword.pattern
            )?;
        }

        let enabled = self.keywords.iter().filter(|k| k.enabled).count();
        writeln!(writer)?;
        writeln!(
            writer,
            "Total: {} keyword(s) ({} enabled)",
            self.keywords.len(),
            enabled
        )?;
        Ok(())
    }
}

/// Portable watchlist dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordExport {
    /// Document format version.
    pub version: u32,
    /// Entries in service order.
    pub keywords: Vec<ExportedKeyword>,
}

/// One exported keyword. Identifiers are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedKeyword {
    /// Pattern in the trimmed form `keywords add` sends.
    pub pattern: String,
    /// Enabled flag at export time; `false` maps to `keywords add --disabled`.
    pub enabled: bool,
}

impl ExportedKeyword {
    /// The `keywords add` invocation that recreates this entry.
    #[must_use]
    pub fn to_add_command(&self) -> KeywordCommands {
        KeywordCommands::Add {
            pattern: self.pattern.clone(),
            disabled: !self.enabled,
        }
    }
}

impl KeywordExport {
    /// Builds an export document from a fetched watchlist.
    #[must_use]
    pub fn from_keywords(keywords: &[Keyword]) -> Self {
        Self {
            version: EXPORT_VERSION,
            keywords: keywords
                .iter()
                .map(|k| ExportedKeyword {
                    pattern: k.pattern.trim().to_string(),
                    enabled: k.enabled,
                })
                .collect(),
        }
    }
}
