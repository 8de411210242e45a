//! RedClaw CLI binary entrypoint.
//!
//! This is the main entry point for the `redclaw` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use redclaw_cli::{run, Cli, ClientConfig, CliError};

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Resolved before the runtime exists, so a missing setting can never
    // turn into a network call.
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    match runtime.block_on(run(&cli, config, &mut stdout)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(err: &CliError) -> ExitCode {
    eprintln!("Error: {err}");
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
