//! Command implementations for promptpalette.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Startup state (config, host API, logging) is resolved once
//! into a [`Session`] before any command runs.

mod assemble;
mod composite;
mod config_cmd;
mod nodes;


use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::Config;
use crate::error::{PaletteError, Result};
use crate::host::HostApi;
use crate::logging;
use std::io::Write;

/// State resolved once at startup and shared by every command.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub host_api: HostApi,
}

impl Session {
    /// Load config, resolve the host API.
    ///
    /// Priority for the host API: `--host-api` > PROMPTPALETTE_HOST_API > config > V1.
    pub fn resolve(global: &GlobalArgs) -> Result<Self> {
        let config = Config::resolve(global.config.as_deref())?;

        let cli_api = global
            .host_api
            .as_deref()
            .map(|s| HostApi::parse(s, "--host-api"))
            .transpose()?;
        let host_api = HostApi::resolve(cli_api, config.host_api)?;

        Ok(Self { config, host_api })
    }
}

/// Entry point used by `main`.
///
/// Resolves the session, initialises logging, runs the command, and writes
/// its output to stdout.
pub fn dispatch(cli: Cli) -> Result<()> {
    let session = Session::resolve(&cli.global)?;
    logging::init(cli.global.debug, Some(session.config.log_level.as_str()));
    tracing::debug!(host_api = %session.host_api, "session resolved");

    let output = run(cli.command, &session)?;
    write_stdout(&output)
}

/// Run a command and return what it would print.
pub fn run(command: Command, session: &Session) -> Result<String> {
    match command {
        Command::Assemble(args) => assemble::cmd_assemble(args, session),
        Command::Composite(args) => composite::cmd_composite(args, session),
        Command::Nodes => Ok(nodes::cmd_nodes(session)),
        Command::Config(args) => config_cmd::cmd_config(args, session),
    }
}

/// Render a node result for stdout: raw text, or host-wrapped JSON.
fn render_result(result: &str, json: bool, session: &Session) -> String {
    if !json {
        return result.to_string();
    }

    // `Value`'s Display is compact JSON and cannot fail.
    let wrapped = session.host_api.output_wrapping().wrap(result);
    format!("{wrapped}\n")
}

fn write_stdout(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| PaletteError::IoError(format!("failed to write output: {}", e)))
}
