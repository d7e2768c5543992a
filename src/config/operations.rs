//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PaletteError, Result};
use crate::palette::AssembleOptions;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_PATH_ENV: &str = "PROMPTPALETTE_CONFIG";

/// Log level when nothing else selects one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PaletteError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PaletteError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config named by `--config` or `PROMPTPALETTE_CONFIG`.
    ///
    /// With neither set, returns the built-in defaults.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self> {
        let path = match cli_path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_PATH_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        };

        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                PaletteError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PaletteError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `log_level` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(PaletteError::UserError(
                "config validation failed: log_level must be non-empty (e.g. 'warn', 'debug')"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Assembly options seeded from this config.
    pub fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            prefix: self.prefix.clone(),
            separator: self.separator.clone(),
            trailing_separator: self.trailing_separator,
            separator_newline: self.separator_newline,
            add_newline: self.add_newline,
        }
    }
}
