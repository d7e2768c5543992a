//! Implementation of the `promptpalette assemble` command.

use super::{Session, render_result};
use crate::cli::AssembleArgs;
use crate::error::Result;
use crate::input::InputSource;
use crate::palette::{AssembleOptions, assemble};

/// Execute the `promptpalette assemble` command.
///
/// Config supplies the option defaults; flags given on the command line win,
/// including `--add-newline=false` style flags that switch a config default off.
pub fn cmd_assemble(args: AssembleArgs, session: &Session) -> Result<String> {
    let text = InputSource::from_args(args.text.clone(), args.file.clone())?.read()?;
    let options = merge_options(session.config.assemble_options(), &args);

    let result = assemble(&text, &options);
    Ok(render_result(&result, args.json, session))
}

fn merge_options(base: AssembleOptions, args: &AssembleArgs) -> AssembleOptions {
    AssembleOptions {
        prefix: args.prefix.clone().or(base.prefix),
        separator: args.separator.clone().unwrap_or(base.separator),
        trailing_separator: args.trailing_separator.unwrap_or(base.trailing_separator),
        separator_newline: args.separator_newline.unwrap_or(base.separator_newline),
        add_newline: args.add_newline.unwrap_or(base.add_newline),
    }
}
