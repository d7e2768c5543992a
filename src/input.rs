//! Reading palette text for the CLI.
//!
//! Text comes from exactly one source: an inline argument, a file, or stdin.
//! An inline argument of `-` means stdin.

use crate::error::{PaletteError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Pick the source from CLI arguments.
    ///
    /// Giving both inline text and `--file` is a user error.
    pub fn from_args(inline: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (inline, file) {
            (Some(_), Some(_)) => Err(PaletteError::UserError(
                "give either inline text or --file, not both".to_string(),
            )),
            (Some(text), None) if text == "-" => Ok(Self::Stdin),
            (Some(text), None) => Ok(Self::Inline(text)),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => Ok(Self::Stdin),
        }
    }

    /// Read the whole input as a string.
    pub fn read(self) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text),
            Self::File(path) => read_file(&path),
            Self::Stdin => read_all(std::io::stdin().lock(), "stdin"),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading input file");
    let bytes = std::fs::read(path).map_err(|e| {
        PaletteError::IoError(format!(
            "failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(decode(bytes, &path.display().to_string()))
}

fn read_all<R: Read>(mut reader: R, name: &str) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| PaletteError::IoError(format!("failed to read {}: {}", name, e)))?;
    Ok(decode(buf, name))
}

/// Invalid UTF-8 sequences become U+FFFD rather than failing the read.
fn decode(bytes: Vec<u8>, name: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(source = name, "input is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
