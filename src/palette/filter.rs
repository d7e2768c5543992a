//! Line filtering: comment stripping, group tag removal, escape handling.

use regex::Regex;
use std::sync::LazyLock;

/// A group tag with any whitespace in front of it: `  [name]`.
static GROUP_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[[^\]]+\]").expect("Invalid group tag regex"));

/// Marker for a line that is a comment in its entirety.
const FULL_LINE_COMMENT_MARKERS: [&str; 2] = ["//", "#"];

/// Start of an inline comment.
const INLINE_COMMENT_MARKER: &str = "//";

// Private-use code points stand in for escaped brackets while tags are removed.
const ESCAPED_OPEN_SENTINEL: char = '\u{E000}';
const ESCAPED_CLOSE_SENTINEL: char = '\u{E001}';

/// Remove group tags `[name]` from a line while preserving escaped brackets.
///
/// `\[` and `\]` are turned into literal `[` and `]` and are never treated as
/// tag delimiters. The result is trimmed.
///
/// # Example
///
/// ```
/// use promptpalette::palette::remove_group_tags;
///
/// assert_eq!(remove_group_tags("red hair [look] \\[x\\]"), "red hair [x]");
/// ```
pub fn remove_group_tags(line: &str) -> String {
    let protected = line
        .replace(r"\[", &ESCAPED_OPEN_SENTINEL.to_string())
        .replace(r"\]", &ESCAPED_CLOSE_SENTINEL.to_string());

    let stripped = GROUP_TAG_REGEX.replace_all(&protected, "");

    stripped
        .replace(ESCAPED_OPEN_SENTINEL, "[")
        .replace(ESCAPED_CLOSE_SENTINEL, "]")
        .trim()
        .to_string()
}

/// Filter a single line.
///
/// Returns `None` if the line is dropped: blank, a full-line comment, or empty
/// once the inline comment and group tags are gone.
///
/// Inline comment detection is a plain substring search for `//`; there is no
/// escape for it, so `http://` in content cuts the line short.
pub fn filter_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if FULL_LINE_COMMENT_MARKERS
        .iter()
        .any(|marker| trimmed.starts_with(marker))
    {
        return None;
    }

    let content = match line.find(INLINE_COMMENT_MARKER) {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    };

    let cleaned = remove_group_tags(content);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Filter every line of `text`, keeping the order of the surviving lines.
///
/// Lines are split on `\n`; a trailing `\r` is whitespace and gets trimmed.
pub fn filter_lines(text: &str) -> Vec<String> {
    let kept: Vec<String> = text.split('\n').filter_map(filter_line).collect();
    tracing::trace!(kept = kept.len(), "filtered palette lines");
    kept
}
