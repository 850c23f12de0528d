//! Reading prompt text from `--text`, a file, or stdin.

use crate::cli::InputArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{GachaError, Result};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the prompt named by `args`, falling back to `stdin`.
///
/// Inputs larger than `max_bytes` are rejected so a stray binary file does
/// not end up in a generation request. Files and stdin are read through a
/// bounded reader, so an endless stream fails without being buffered.
pub fn read_input<R: Read>(args: &InputArgs, max_bytes: usize, stdin: R) -> Result<String> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => {
            if text.len() > max_bytes {
                return Err(too_large(max_bytes));
            }
            text.clone()
        }
        (None, Some(path)) if path != Path::new("-") => {
            let file = File::open(path).map_err(|e| {
                GachaError::IoError(format!("failed to read '{}': {}", path.display(), e))
            })?;
            read_bounded(file, max_bytes, &format!("'{}'", path.display()))?
        }
        _ => read_bounded(stdin, max_bytes, "stdin")?,
    };

    debug!("read {} bytes of prompt text", text.len());
    Ok(text)
}

/// Resolve the output format: `--json` wins over the config.
pub fn output_format(args: &InputArgs, config: &Config) -> OutputFormat {
    if args.json {
        OutputFormat::Json
    } else {
        config.format
    }
}

/// Read at most `max_bytes + 1` bytes; the extra byte detects oversize input.
fn read_bounded<R: Read>(reader: R, max_bytes: usize, source: &str) -> Result<String> {
    let limit = (max_bytes as u64).saturating_add(1);
    let mut buf = Vec::new();
    reader
        .take(limit)
        .read_to_end(&mut buf)
        .map_err(|e| GachaError::IoError(format!("failed to read {}: {}", source, e)))?;

    if buf.len() > max_bytes {
        return Err(too_large(max_bytes));
    }

    String::from_utf8(buf)
        .map_err(|e| GachaError::IoError(format!("failed to read {}: {}", source, e)))
}

fn too_large(max_bytes: usize) -> GachaError {
    GachaError::UserError(format!("input is larger than max_input_bytes ({})", max_bytes))
}
