//! Joining filtered lines into the final prompt string.

use super::filter::filter_lines;
use super::options::AssembleOptions;

/// How kept lines are combined after filtering.
#[derive(Debug, Clone, Copy)]
pub enum JoinStyle<'a> {
    /// Full formatting: prefix, newline-aware separator, trailing separator, final newline.
    Formatted(&'a AssembleOptions),
    /// Plain `separator.join(lines)` with no other decoration.
    Plain(&'a str),
}

/// Filter `text` and join the kept lines according to `style`.
///
/// Both public entry points go through here so there is a single filter.
pub fn assemble_with(text: &str, style: JoinStyle<'_>) -> String {
    let lines = filter_lines(text);
    match style {
        JoinStyle::Formatted(options) => join_formatted(&lines, options),
        JoinStyle::Plain(separator) => lines.join(separator),
    }
}

/// Assemble a prompt from multi-line palette text.
///
/// Never fails: empty text gives an empty result, or just the prefix and
/// decoration when those are configured.
///
/// # Example
///
/// ```
/// use promptpalette::palette::{AssembleOptions, assemble};
///
/// let text = "masterpiece\n// low quality\nred hair [hair]\nsmile // maybe";
/// let out = assemble(text, &AssembleOptions::default());
/// assert_eq!(out, "masterpiece, red hair, smile");
/// ```
pub fn assemble(text: &str, options: &AssembleOptions) -> String {
    tracing::debug!(
        separator = ?options.separator,
        trailing_separator = options.trailing_separator,
        separator_newline = options.separator_newline,
        add_newline = options.add_newline,
        has_prefix = options.prefix().is_some(),
        "assembling palette text"
    );
    assemble_with(text, JoinStyle::Formatted(options))
}

fn join_formatted(lines: &[String], options: &AssembleOptions) -> String {
    let no_separator = options.separator.is_empty();
    let effective_separator = options.effective_separator();

    let mut result = if no_separator {
        lines.concat()
    } else {
        lines.join(effective_separator.as_str())
    };

    if let Some(prefix) = options.prefix() {
        result = if no_separator {
            format!("{prefix}{result}")
        } else {
            format!("{prefix}{effective_separator}{result}")
        };
    }

    if options.trailing_separator && !no_separator && !lines.is_empty() {
        result.push_str(&effective_separator);
    }

    if options.add_newline {
        result.push('\n');
    }

    result
}
