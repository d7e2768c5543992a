//! Implementation of the `promptpalette composite` command.

use super::{Session, render_result};
use crate::cli::CompositeArgs;
use crate::error::Result;
use crate::input::InputSource;
use crate::palette::assemble_composite;
use serde_json::Value;

/// Execute the `promptpalette composite` command.
///
/// Input that is not valid JSON is treated as a plain string payload.
pub fn cmd_composite(args: CompositeArgs, session: &Session) -> Result<String> {
    let raw = InputSource::from_args(args.data, args.file)?.read()?;
    let data = parse_payload(raw);

    let result = assemble_composite(&data);
    Ok(render_result(&result, args.json, session))
}

fn parse_payload(raw: String) -> Value {
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "payload is not JSON, using it as text");
            Value::String(raw)
        }
    }
}
