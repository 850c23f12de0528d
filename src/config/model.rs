//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the gacha CLI.
///
/// This struct represents the contents of `gacha.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed seed for `expand`. When unset, draws come from the thread-local
    /// generator and differ on every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Number of independent expansions produced per run.
    #[serde(default = "default_batch")]
    pub batch: u32,

    /// Output format for all commands.
    #[serde(default)]
    pub format: OutputFormat,

    /// Inputs longer than this many bytes are rejected.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            batch: default_batch(),
            format: OutputFormat::default(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}
