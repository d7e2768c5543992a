//! Per-call options for [`assemble`](super::assemble).

use serde::{Deserialize, Serialize};

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Formatting options for one assembly call.
///
/// Deserializing a partial mapping fills the missing fields with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssembleOptions {
    /// Text placed before all content. Ignored when empty.
    pub prefix: Option<String>,

    /// Delimiter placed between kept lines (default: ", ").
    pub separator: String,

    /// Append the separator after the last kept line.
    pub trailing_separator: bool,

    /// Append a line break to the separator.
    pub separator_newline: bool,

    /// Append a line break to the final result.
    pub add_newline: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            trailing_separator: false,
            separator_newline: false,
            add_newline: false,
        }
    }
}

impl AssembleOptions {
    /// Options with the given separator and everything else at defaults.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Default::default()
        }
    }

    /// The separator as actually inserted between lines.
    ///
    /// Gains a trailing `\n` when `separator_newline` is set. An empty separator
    /// stays empty; callers check for that before joining.
    pub fn effective_separator(&self) -> String {
        if self.separator_newline {
            format!("{}\n", self.separator)
        } else {
            self.separator.clone()
        }
    }

    /// The prefix, if present and non-empty.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }
}
