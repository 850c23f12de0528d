//! Configuration types and defaults for gacha.

use serde::{Deserialize, Serialize};

/// How resolved prompts and token reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain resolved text, one prompt per line block (default).
    #[default]
    Text,
    /// JSON records with original and resolved text.
    Json,
}

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "gacha.yaml";

// Default value functions for serde
pub(crate) fn default_batch() -> u32 {
    1
}
pub(crate) fn default_max_input_bytes() -> usize {
    1024 * 1024
}
