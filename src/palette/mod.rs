//! Prompt text assembly.
//!
//! Takes multi-line prompt text and produces a single joined string:
//! - Blank lines and full-line comments (`//` or `#`) are dropped
//! - Inline `//` comments are cut off
//! - Group tags `[name]` are removed, escaped brackets `\[` `\]` survive as literals
//! - Remaining lines are joined with a configurable separator
//!
//! Two entry points share the same line filter: [`assemble`] takes explicit
//! [`AssembleOptions`], [`assemble_composite`] takes a loosely typed JSON value
//! as sent by the alternate (Vue) widget and always does a plain join.

mod assemble;
mod composite;
mod filter;
mod options;

#[cfg(test)]
mod tests;

// Re-export public API
pub use assemble::{JoinStyle, assemble, assemble_with};
pub use composite::{CompositeInput, DEFAULT_COMPOSITE_SEPARATOR, assemble_composite};
pub use filter::{filter_line, filter_lines, remove_group_tags};
pub use options::{AssembleOptions, DEFAULT_SEPARATOR};
