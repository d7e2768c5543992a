//! Tests for palette assembly.

use serde_json::json;

use super::assemble::{JoinStyle, assemble_with};
use super::composite::{CompositeInput, DEFAULT_COMPOSITE_SEPARATOR, assemble_composite};
use super::options::{AssembleOptions, DEFAULT_SEPARATOR};
use super::assemble;

// =========================================================================
// Helper functions
// =========================================================================

fn sep(separator: &str) -> AssembleOptions {
    AssembleOptions::with_separator(separator)
}

// =========================================================================
// Filtering through assemble
// =========================================================================

#[test]
fn test_full_line_comment_dropped() {
    assert_eq!(assemble("// ignored\nkeep", &AssembleOptions::default()), "keep");
}

#[test]
fn test_inline_comment_truncated() {
    assert_eq!(assemble("abc // note", &AssembleOptions::default()), "abc");
}

#[test]
fn test_tags_removed_escapes_kept() {
    assert_eq!(
        assemble(r"a [group] b \[literal\]", &AssembleOptions::default()),
        "a b [literal]"
    );
}

#[test]
fn test_default_separator() {
    let text = "masterpiece\n\n# quality tags\nbest quality\n//worst quality\nsmile [face]";
    assert_eq!(
        assemble(text, &AssembleOptions::default()),
        "masterpiece, best quality, smile"
    );
}

#[test]
fn test_empty_text() {
    assert_eq!(assemble("", &AssembleOptions::default()), "");
    assert_eq!(assemble("\n\n  \n", &AssembleOptions::default()), "");
}

// =========================================================================
// Separator handling
// =========================================================================

#[test]
fn test_empty_separator_concatenates() {
    assert_eq!(assemble("a\nb", &sep("")), "ab");
}

#[test]
fn test_empty_separator_ignores_separator_newline() {
    let opts = AssembleOptions {
        separator_newline: true,
        trailing_separator: true,
        ..sep("")
    };
    assert_eq!(assemble("a\nb", &opts), "ab");
}

#[test]
fn test_separator_newline() {
    let opts = AssembleOptions {
        separator_newline: true,
        ..sep(",")
    };
    assert_eq!(assemble("a\nb", &opts), "a,\nb");
}

#[test]
fn test_custom_separator() {
    assert_eq!(assemble("a\nb\nc", &sep(" AND ")), "a AND b AND c");
}

// =========================================================================
// Trailing separator
// =========================================================================

#[test]
fn test_trailing_separator_requires_lines() {
    let opts = AssembleOptions {
        trailing_separator: true,
        ..sep(",")
    };
    assert_eq!(assemble("", &opts), "");
    assert_eq!(assemble("// only a comment", &opts), "");
}

#[test]
fn test_trailing_separator_appended() {
    let opts = AssembleOptions {
        trailing_separator: true,
        ..Default::default()
    };
    assert_eq!(assemble("a\nb", &opts), "a, b, ");
}

#[test]
fn test_trailing_separator_with_newlines() {
    let opts = AssembleOptions {
        trailing_separator: true,
        separator_newline: true,
        add_newline: true,
        ..sep(",")
    };
    assert_eq!(assemble("a\nb", &opts), "a,\nb,\n\n");
}

// =========================================================================
// Prefix
// =========================================================================

#[test]
fn test_prefix_with_separator() {
    let opts = AssembleOptions {
        prefix: Some("a".to_string()),
        ..sep(", ")
    };
    assert_eq!(assemble("b", &opts), "a, b");
}

#[test]
fn test_prefix_without_separator() {
    let opts = AssembleOptions {
        prefix: Some("pre".to_string()),
        ..sep("")
    };
    assert_eq!(assemble("x\ny", &opts), "prexy");
}

#[test]
fn test_prefix_uses_effective_separator() {
    let opts = AssembleOptions {
        prefix: Some("p".to_string()),
        separator_newline: true,
        ..sep(",")
    };
    assert_eq!(assemble("a\nb", &opts), "p,\na,\nb");
}

#[test]
fn test_prefix_with_no_kept_lines() {
    let opts = AssembleOptions {
        prefix: Some("a".to_string()),
        trailing_separator: true,
        ..Default::default()
    };
    // The prefix keeps its separator, but no trailing separator is added.
    assert_eq!(assemble("// nothing", &opts), "a, ");
}

#[test]
fn test_empty_prefix_ignored() {
    let opts = AssembleOptions {
        prefix: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(assemble("b", &opts), "b");
}

// =========================================================================
// Final newline
// =========================================================================

#[test]
fn test_add_newline() {
    let opts = AssembleOptions {
        add_newline: true,
        ..Default::default()
    };
    assert_eq!(assemble("a", &opts), "a\n");
}

#[test]
fn test_add_newline_on_empty_text() {
    let opts = AssembleOptions {
        add_newline: true,
        ..Default::default()
    };
    assert_eq!(assemble("", &opts), "\n");
}

#[test]
fn test_deterministic() {
    let opts = AssembleOptions {
        prefix: Some("start".to_string()),
        trailing_separator: true,
        separator_newline: true,
        add_newline: true,
        ..sep(";")
    };
    let text = "one [a]\n// two\nthree // c\n\\[four\\]";
    let first = assemble(text, &opts);
    assert_eq!(first, "start;\none;\nthree;\n[four];\n\n");
    assert_eq!(assemble(text, &opts), first);
}

// =========================================================================
// Composite variant
// =========================================================================

#[test]
fn test_composite_mapping() {
    let data = json!({"text": "a\nb [g]\n// c", "separator": " + "});
    assert_eq!(assemble_composite(&data), "a + b");
}

#[test]
fn test_composite_mapping_defaults() {
    assert_eq!(assemble_composite(&json!({"text": "a\nb"})), "a, b");
    assert_eq!(assemble_composite(&json!({})), "");
}

#[test]
fn test_composite_null_fields_fall_back() {
    let input = CompositeInput::from_value(&json!({"text": null, "separator": null}));
    assert_eq!(input.text, "");
    assert_eq!(input.separator, ", ");
}

#[test]
fn test_composite_plain_string() {
    assert_eq!(assemble_composite(&json!("x\ny // z")), "x, y");
}

#[test]
fn test_composite_non_string_values_are_stringified() {
    assert_eq!(assemble_composite(&json!(42)), "42");
    assert_eq!(assemble_composite(&json!(null)), "");

    let input = CompositeInput::from_value(&json!({"text": true, "separator": 0}));
    assert_eq!(input.text, "true");
    assert_eq!(input.separator, "0");
}

#[test]
fn test_composite_array_payload_is_compact_json() {
    let input = CompositeInput::from_value(&json!(["a", "b"]));
    assert_eq!(input.text, r#"["a","b"]"#);
    assert_eq!(input.separator, ", ");

    // A bracketed line reads as a group tag and is filtered away.
    assert_eq!(assemble_composite(&json!(["a", "b"])), "");
}

#[test]
fn test_composite_object_text_is_compact_json() {
    let data = json!({"text": {"k": 1}});
    let input = CompositeInput::from_value(&data);
    assert_eq!(input.text, r#"{"k":1}"#);
    assert_eq!(input.separator, ", ");
    assert_eq!(assemble_composite(&data), r#"{"k":1}"#);
}

#[test]
fn test_composite_array_text_is_compact_json() {
    let input = CompositeInput::from_value(&json!({"text": ["x", 1]}));
    assert_eq!(input.text, r#"["x",1]"#);
}

#[test]
fn test_composite_array_separator_is_compact_json() {
    let data = json!({"text": "a\nb", "separator": [1, 2]});
    assert_eq!(CompositeInput::from_value(&data).separator, "[1,2]");
    assert_eq!(assemble_composite(&data), "a[1,2]b");
}

#[test]
fn test_composite_default_separator_matches_assemble() {
    assert_eq!(DEFAULT_COMPOSITE_SEPARATOR, DEFAULT_SEPARATOR);
}

#[test]
fn test_composite_ignores_formatting_options() {
    // Only text and separator are read; the join is always plain.
    let data = json!({
        "text": "a\nb",
        "separator": ",",
        "separator_newline": true,
        "trailing_separator": true,
        "prefix": "p"
    });
    assert_eq!(assemble_composite(&data), "a,b");
}

#[test]
fn test_composite_empty_separator() {
    assert_eq!(assemble_composite(&json!({"text": "a\nb", "separator": ""})), "ab");
}

#[test]
fn test_both_styles_share_filter() {
    let text = "  keep  \n# drop\nalso [x] // no";
    let opts = sep("|");
    assert_eq!(
        assemble_with(text, JoinStyle::Formatted(&opts)),
        assemble_with(text, JoinStyle::Plain("|"))
    );
}
