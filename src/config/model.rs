//! Config struct definition and default implementation.

use crate::host::HostApi;
use crate::palette::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Configuration for promptpalette.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Assembly defaults
    // =========================================================================
    /// Separator between kept lines (default: ", ").
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Append the separator after the last kept line.
    #[serde(default)]
    pub trailing_separator: bool,

    /// Append a line break to the separator.
    #[serde(default)]
    pub separator_newline: bool,

    /// Append a line break to the final result.
    #[serde(default)]
    pub add_newline: bool,

    /// Text prepended before all content.
    #[serde(default)]
    pub prefix: Option<String>,

    // =========================================================================
    // Host and logging
    // =========================================================================
    /// Host plugin API used to wrap `--json` output. Unset defers to the
    /// environment, then V1.
    #[serde(default)]
    pub host_api: Option<HostApi>,

    /// tracing filter directive used when neither RUST_LOG nor --debug is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions for serde
fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}
fn default_log_level() -> String {
    super::operations::DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            trailing_separator: false,
            separator_newline: false,
            add_newline: false,
            prefix: None,
            host_api: None,
            log_level: default_log_level(),
        }
    }
}
