//! Alternative-list notation for prompt text.
//!
//! A prompt may contain blocks of the form:
//!
//! ```text
//! a {{red, blue, green}}(2, ", ") car
//! ```
//!
//! Each block is replaced by `count` of its comma-separated items, joined by
//! the separator (a single space when omitted). [`expand`] picks items at
//! random for generation; [`preview`] takes them in declared order so the
//! result is stable while the prompt is being edited.
//!
//! # Escapes
//!
//! - Items: `\,` `\{` `\}` plus `\\` `\n` `\t` `\r`
//! - Separators: `\(` `\)` `\'` `\"` plus `\\` `\n` `\t` `\r`
//!
//! # Fallbacks
//!
//! Malformed notation is never an error. A block that does not match the
//! grammar, or has no non-empty items, is left exactly as written. A count of
//! zero replaces the block with nothing.

mod expander;
mod items;
mod scanner;
mod selection;
mod unescape;


pub use expander::{
    Expansion, TokenOutcome, TokenReport, expand, expand_with_rng, inspect, preview, resolve,
};
pub use items::DEFAULT_SEPARATOR;
pub use scanner::{Token, Tokens, tokens};
pub use selection::{PreviewSelection, RandomSelection, Selection};
pub use unescape::{ITEM_ESCAPES, SEPARATOR_ESCAPES, unescape};
