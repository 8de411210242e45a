//! Command-line argument parsing with clap.

use clap::{Parser, Subcommand, ValueEnum};

/// RedClaw CLI - keyword monitoring from the terminal.
///
/// Requires `REDCLAW_URL` and `REDCLAW_API_KEY` in the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "redclaw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Request timeout in seconds.
    #[arg(
        long,
        global = true,
        env = "REDCLAW_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level command groups.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage the keyword watchlist.
    Keywords {
        /// Keyword subcommand to execute.
        #[command(subcommand)]
        command: KeywordCommands,
    },

    /// Inspect alerts raised by keyword matches.
    Alerts {
        /// Alert subcommand to execute.
        #[command(subcommand)]
        command: AlertCommands,
    },

    /// Manage ingestion sources.
    Sources {
        /// Source subcommand to execute.
        #[command(subcommand)]
        command: SourceCommands,
    },

    /// Check service health.
    Status,
}

/// Keyword subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum KeywordCommands {
    /// Watch a new pattern.
    Add {
        /// Text pattern to watch for.
        pattern: String,

        /// Create the keyword switched off.
        #[arg(long)]
        disabled: bool,
    },

    /// List all keywords.
    List,

    /// Stop watching a keyword.
    Delete {
        /// Keyword identifier.
        id: String,
    },

    /// Enable or disable a keyword.
    Toggle {
        /// Keyword identifier.
        id: String,
    },

    /// Dump the watchlist as JSON for backup or transfer.
    ///
    /// Each entry is restored with `keywords add <pattern>`, plus
    /// `--disabled` when its `enabled` is false.
    Export,
}

/// Alert subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum AlertCommands {
    /// List recent alerts, newest first.
    List {
        /// Only alerts from this source.
        #[arg(long)]
        source: Option<String>,

        /// Maximum number of alerts to return.
        ///
        /// Checked locally so a bad value never reaches the service.
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<String>,
    },
}

/// Source subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum SourceCommands {
    /// Register an RSS feed.
    AddRss {
        /// Feed URL.
        url: String,
    },

    /// List all sources.
    List,
}
