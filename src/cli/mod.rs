//! CLI argument parsing for gacha.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Gacha: resolve `{{a,b,c}}(n)` alternative-lists in prompt text.
///
/// Each `{{...}}(n)` block is replaced by n of its comma-separated items.
/// An optional quoted separator follows the count: `{{a,b}}(2, ", ")`.
#[derive(Parser, Debug)]
#[command(name = "gacha")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./gacha.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for gacha.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the prompt with random picks.
    ///
    /// Items are shuffled before picking, so repeated runs differ unless a
    /// seed is given.
    Expand(ExpandArgs),

    /// Resolve the prompt deterministically.
    ///
    /// Takes the first n items of each block in declared order. Useful as
    /// live feedback while writing a prompt.
    Preview(PreviewArgs),

    /// List the blocks found in the prompt.
    ///
    /// Shows each block's position, count, items, and whether it would be
    /// substituted, emptied, or left unchanged.
    Tokens(TokensArgs),
}

/// Where the prompt text comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Prompt file to read. Reads stdin when omitted or "-".
    pub file: Option<PathBuf>,

    /// Prompt text given inline instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Print JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `expand` command.
#[derive(Parser, Debug)]
pub struct ExpandArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Seed for reproducible picks (overrides config `seed`).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of independent expansions (overrides config `batch`).
    #[arg(short = 'n', long)]
    pub batch: Option<u32>,
}

/// Arguments for the `preview` command.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `tokens` command.
#[derive(Parser, Debug)]
pub struct TokensArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_expand_minimal() {
        let cli = Cli::try_parse_from(["gacha", "expand"]).unwrap();
        if let Command::Expand(args) = cli.command {
            assert!(args.input.file.is_none());
            assert!(args.input.text.is_none());
            assert!(!args.input.json);
            assert!(args.seed.is_none());
            assert!(args.batch.is_none());
        } else {
            panic!("Expected Expand command");
        }
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_expand_full() {
        let cli = Cli::try_parse_from([
            "gacha",
            "--config",
            "my.yaml",
            "-vv",
            "expand",
            "prompt.txt",
            "--seed",
            "42",
            "-n",
            "3",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.yaml")));
        assert_eq!(cli.verbose, 2);
        if let Command::Expand(args) = cli.command {
            assert_eq!(args.input.file, Some(PathBuf::from("prompt.txt")));
            assert!(args.input.json);
            assert_eq!(args.seed, Some(42));
            assert_eq!(args.batch, Some(3));
        } else {
            panic!("Expected Expand command");
        }
    }

    #[test]
    fn parse_preview_inline_text() {
        let cli = Cli::try_parse_from(["gacha", "preview", "--text", "{{a,b}}(1)"]).unwrap();
        if let Command::Preview(args) = cli.command {
            assert_eq!(args.input.text.as_deref(), Some("{{a,b}}(1)"));
        } else {
            panic!("Expected Preview command");
        }
    }

    #[test]
    fn parse_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["gacha", "tokens", "-t", "x", "--config", "c.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
        assert!(matches!(cli.command, Command::Tokens(_)));
    }

    #[test]
    fn text_conflicts_with_file() {
        let result = Cli::try_parse_from(["gacha", "preview", "p.txt", "--text", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["gacha"]).is_err());
    }
}
