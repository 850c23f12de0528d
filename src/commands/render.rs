//! Implementation of the `gacha expand` and `gacha preview` commands.
//!
//! Both read one prompt and print its resolved form. `expand` can produce a
//! batch of independent draws from one random stream; with a seed the whole
//! batch is reproducible.

use super::input::{output_format, read_input};
use super::write_output;
use crate::cli::{ExpandArgs, PreviewArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{GachaError, Result};
use crate::notation::Expansion;
use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde_json::json;
use std::io::{Read, Write};

/// Line printed between prompts when a batch is written as text.
const BATCH_DIVIDER: &str = "---";

/// Execute the `gacha expand` command.
pub fn cmd_expand<R: Read, W: Write>(
    args: ExpandArgs,
    config: &Config,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let text = read_input(&args.input, config.max_input_bytes, stdin)?;

    let batch = args.batch.unwrap_or(config.batch);
    if batch == 0 {
        return Err(GachaError::UserError("--batch must be greater than 0".to_string()));
    }

    let records = match args.seed.or(config.seed) {
        Some(seed) => {
            info!("expanding {} prompt(s) with seed {}", batch, seed);
            expand_batch(&text, batch, &mut Pcg32::seed_from_u64(seed))
        }
        None => expand_batch(&text, batch, &mut rand::thread_rng()),
    };

    if records.iter().all(|r| !r.changed()) {
        info!("no notation was substituted");
    }

    print_records(&records, output_format(&args.input, config), out)
}

/// Execute the `gacha preview` command.
pub fn cmd_preview<R: Read, W: Write>(
    args: PreviewArgs,
    config: &Config,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let text = read_input(&args.input, config.max_input_bytes, stdin)?;
    let record = Expansion::preview(&text);

    match output_format(&args.input, config) {
        OutputFormat::Text => write_output(out, &record.resolved),
        OutputFormat::Json => write_output(out, &record_json(&record).to_string()),
    }
}

/// Draw `batch` independent expansions from one generator.
fn expand_batch<G: Rng + ?Sized>(text: &str, batch: u32, rng: &mut G) -> Vec<Expansion> {
    (0..batch)
        .map(|_| Expansion::random(text, &mut *rng))
        .collect()
}

fn print_records<W: Write>(records: &[Expansion], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let resolved: Vec<&str> = records.iter().map(|r| r.resolved.as_str()).collect();
            write_output(out, &resolved.join(&format!("\n{}\n", BATCH_DIVIDER)))
        }
        OutputFormat::Json => {
            let items: Vec<_> = records.iter().map(record_json).collect();
            write_output(out, &serde_json::Value::Array(items).to_string())
        }
    }
}

fn record_json(record: &Expansion) -> serde_json::Value {
    json!({
        "original": record.original,
        "resolved": record.resolved,
        "changed": record.changed(),
    })
}
