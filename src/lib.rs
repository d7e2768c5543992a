//! PromptPalette: assemble prompts from annotated multi-line text.
//!
//! The core lives in [`palette`]: a pure, total transform from palette text to a
//! single prompt string. The other modules are the surrounding CLI plumbing.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod host;
pub mod input;
pub mod logging;
pub mod palette;
