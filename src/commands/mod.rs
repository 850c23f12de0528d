//! Command implementations for gacha.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands take their input and output streams as
//! arguments so tests can drive them without a terminal.

mod input;
mod render;
mod tokens;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{GachaError, Result};
use std::io::{self, Write};

/// Dispatch a command to its implementation.
///
/// Resolves the config (explicit `--config`, then `./gacha.yaml`, then
/// defaults) and runs the command against stdin/stdout.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        GachaError::IoError(format!("failed to determine current directory: {}", e))
    })?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Expand(args) => render::cmd_expand(args, &config, stdin, &mut stdout),
        Command::Preview(args) => render::cmd_preview(args, &config, stdin, &mut stdout),
        Command::Tokens(args) => tokens::cmd_tokens(args, &config, stdin, &mut stdout),
    }
}

/// Write `text` followed by a newline.
fn write_output<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{}", text)
        .and_then(|_| out.flush())
        .map_err(|e| GachaError::IoError(format!("failed to write output: {}", e)))
}
