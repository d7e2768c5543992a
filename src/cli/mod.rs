//! CLI argument parsing for promptpalette.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// PromptPalette: assemble prompts from annotated multi-line text.
///
/// Lines starting with `//` or `#` are skipped, inline `//` comments are cut,
/// group tags like `[hair]` are removed (`\[` and `\]` stay as brackets),
/// and the remaining lines are joined with a separator.
#[derive(Parser, Debug)]
#[command(name = "promptpalette")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to a YAML config file (overrides PROMPTPALETTE_CONFIG).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Host plugin API for --json output (v1 or v3).
    #[arg(long, global = true)]
    pub host_api: Option<String>,

    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands for promptpalette.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter and join palette text.
    ///
    /// Reads TEXT, --file, or stdin. Option flags override config defaults.
    Assemble(AssembleArgs),

    /// Assemble from a composite JSON value (Vue widget payload).
    ///
    /// A mapping supplies `text` and `separator`; any other value is used as the text.
    Composite(CompositeArgs),

    /// List the nodes offered under the resolved host API.
    Nodes,

    /// Show the effective configuration as YAML.
    Config(ConfigArgs),
}

/// Arguments for the `assemble` command.
#[derive(Parser, Debug)]
pub struct AssembleArgs {
    /// Palette text, or `-` for stdin. Reads stdin when omitted.
    pub text: Option<String>,

    /// Read palette text from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Text placed before all content.
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Separator between kept lines.
    #[arg(short, long, allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Append the separator after the last line.
    /// `--trailing-separator=false` overrides a config default.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub trailing_separator: Option<bool>,

    /// Append a line break to the separator.
    /// `--separator-newline=false` overrides a config default.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub separator_newline: Option<bool>,

    /// Append a line break to the result.
    /// `--add-newline=false` overrides a config default.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub add_newline: Option<bool>,

    /// Print the host-wrapped JSON output instead of raw text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `composite` command.
#[derive(Parser, Debug)]
pub struct CompositeArgs {
    /// JSON payload, or `-` for stdin. Reads stdin when omitted.
    pub data: Option<String>,

    /// Read the payload from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the host-wrapped JSON output instead of raw text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print built-in defaults instead of the effective config.
    #[arg(long)]
    pub default: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
