//! # redclaw-cli
//!
//! Operator command line for the RedClaw monitoring service.
//!
//! Provides commands for:
//! - Keyword watchlist management (add, list, delete, toggle, export)
//! - Alert listing with source and limit filters
//! - Ingestion source management (RSS)
//! - Service status checks
//!
//! # Architecture
//!
//! Every invocation is one-shot: the [`config::ClientConfig`] is resolved
//! from the environment, one command group handler runs against a
//! [`client::RedclawApi`], and exactly one HTTP request is sent.
//!
//! ```text
//! ┌──────────────┐   HTTPS + Bearer key   ┌──────────────────┐
//! │  redclaw-cli │───────────────────────►│  RedClaw service │
//! └──────────────┘     /api/v1/...        └──────────────────┘
//! ```

use std::io::Write;

use tracing::debug;

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod exitcode;
pub mod model;
pub mod output;
pub mod validate;

pub use cli::{Cli, Commands, Format};
pub use client::{HttpClient, RedclawApi};
pub use config::ClientConfig;
pub use error::CliError;
pub use output::OutputFormat;

use commands::{AlertCommand, KeywordCommand, SourceCommand, StatusCommand};

/// Routes a parsed command to its handler.
///
/// # Errors
///
/// Returns whatever the handler returns; nothing is retried.
pub async fn dispatch<C, W>(
    api: &C,
    out: &mut W,
    format: &OutputFormat,
    command: &Commands,
) -> Result<(), CliError>
where
    C: RedclawApi,
    W: Write,
{
    match command {
        Commands::Keywords { command } => {
            KeywordCommand::new(api).execute(out, format, command).await
        }
        Commands::Alerts { command } => AlertCommand::new(api).execute(out, format, command).await,
        Commands::Sources { command } => {
            SourceCommand::new(api).execute(out, format, command).await
        }
        Commands::Status => StatusCommand::new(api).execute(out, format).await,
    }
}

/// Runs a parsed invocation against the real service.
///
/// # Errors
///
/// Returns [`CliError`] for config, validation, request or output failures.
pub async fn run<W: Write>(cli: &Cli, config: ClientConfig, out: &mut W) -> Result<(), CliError> {
    let config = config.with_timeout(std::time::Duration::from_secs(cli.timeout));
    debug!(base_url = %config.base_url, timeout = ?config.timeout, "Resolved configuration");

    let client = HttpClient::new(&config)?;
    let format = OutputFormat::new(cli.format);
    dispatch(&client, out, &format, &cli.command).await
}
