//! Gacha: expander for `{{a,b,c}}(n)` alternative-lists in prompt text.
//!
//! The [`notation`] module is the engine and has no I/O. The remaining
//! modules back the `gacha` command-line tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod notation;

#[cfg(test)]
mod test_support;
