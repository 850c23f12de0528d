//! Implementation of the `gacha tokens` command.
//!
//! Lists each `{{...}}(n)` block with its byte span, count, resolved items,
//! separator, and what resolution would do with it. Nothing is resolved.

use super::input::{output_format, read_input};
use super::write_output;
use crate::cli::TokensArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{GachaError, Result};
use crate::notation::{TokenOutcome, TokenReport, inspect};
use std::io::{Read, Write};

/// Execute the `gacha tokens` command.
pub fn cmd_tokens<R: Read, W: Write>(
    args: TokensArgs,
    config: &Config,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let text = read_input(&args.input, config.max_input_bytes, stdin)?;
    let reports = inspect(&text);

    match output_format(&args.input, config) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).map_err(|e| {
                GachaError::IoError(format!("failed to serialize token report: {}", e))
            })?;
            write_output(out, &json)
        }
        OutputFormat::Text => write_output(out, &format_reports(&reports)),
    }
}

fn format_reports(reports: &[TokenReport]) -> String {
    if reports.is_empty() {
        return "No tokens found.".to_string();
    }

    let mut lines = vec![format!("Tokens ({}):", reports.len())];
    for (i, report) in reports.iter().enumerate() {
        lines.push(format!(
            "  {}. [{}..{}] {} - {}",
            i + 1,
            report.span.start,
            report.span.end,
            one_line(&report.text),
            outcome_label(report.outcome)
        ));
        lines.push(format!(
            "     count: {}  separator: {:?}",
            report.count, report.separator
        ));
        lines.push(format!("     items: {:?}", report.candidates));
    }
    lines.join("\n")
}

/// Keep multi-line tokens on one report line.
fn one_line(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn outcome_label(outcome: TokenOutcome) -> &'static str {
    match outcome {
        TokenOutcome::Substituted => "substituted",
        TokenOutcome::Empty => "empty (count is 0)",
        TokenOutcome::Unchanged => "unchanged (no items)",
    }
}
