//! Configuration for promptpalette.
//!
//! An optional YAML file supplies defaults for assembly options, the host API
//! and the log level. Unknown fields are ignored and missing fields fall back to
//! built-in defaults, so an empty file is a valid config.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
pub use operations::{CONFIG_PATH_ENV, DEFAULT_LOG_LEVEL};
