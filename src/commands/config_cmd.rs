//! Implementation of the `promptpalette config` command.

use super::Session;
use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;

/// Print the effective config (or the built-in defaults) as YAML.
pub fn cmd_config(args: ConfigArgs, session: &Session) -> Result<String> {
    if args.default {
        Config::default().to_yaml()
    } else {
        session.config.to_yaml()
    }
}
