//! Orchestration: scan, split, select, substitute.

use super::items::{candidates, separator};
use super::scanner::{Token, tokens};
use super::selection::{PreviewSelection, RandomSelection, Selection};
use log::debug;
use rand::Rng;
use serde::Serialize;
use std::ops::Range;

/// What happened to one token during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenOutcome {
    /// Replaced by the selected items.
    Substituted,
    /// Replaced by the empty string because the count is zero.
    Empty,
    /// Left as written because no item survived trimming.
    Unchanged,
}

/// Resolve every token in `text` with the given strategy.
///
/// Substitutions are computed against the original offsets, and replaced
/// text is never scanned again.
pub fn resolve<S: Selection + ?Sized>(text: &str, selection: &mut S) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for token in tokens(text) {
        result.push_str(&text[last..token.span.start]);
        result.push_str(&replacement(&token, selection));
        last = token.span.end;
    }

    result.push_str(&text[last..]);
    result
}

/// Resolve `text` with the thread-local random generator.
///
/// Repeated calls on the same input give different draws.
///
/// ```
/// let out = gacha::notation::expand("{{a,b}}(0)");
/// assert_eq!(out, "");
/// ```
pub fn expand(text: &str) -> String {
    expand_with_rng(text, &mut rand::thread_rng())
}

/// Resolve `text` drawing from `rng`.
pub fn expand_with_rng<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    resolve(text, &mut RandomSelection::new(rng))
}

/// Resolve `text` deterministically, taking items in declared order.
///
/// ```
/// let out = gacha::notation::preview(r#"{{a,b,c}}(2, ", ")"#);
/// assert_eq!(out, "a, b");
/// ```
pub fn preview(text: &str) -> String {
    resolve(text, &mut PreviewSelection)
}

fn replacement<S: Selection + ?Sized>(token: &Token<'_>, selection: &mut S) -> String {
    let items = candidates(token.content);
    match outcome(&items, token.count) {
        TokenOutcome::Unchanged => {
            debug!(
                "token at {}..{} has no items, leaving it as written",
                token.span.start, token.span.end
            );
            token.text.to_string()
        }
        TokenOutcome::Empty => String::new(),
        TokenOutcome::Substituted => selection
            .select(items, token.count)
            .join(&separator(token.separator)),
    }
}

fn outcome(items: &[String], count: usize) -> TokenOutcome {
    if items.is_empty() {
        TokenOutcome::Unchanged
    } else if count == 0 {
        TokenOutcome::Empty
    } else {
        TokenOutcome::Substituted
    }
}

/// A prompt before and after resolution.
///
/// Callers record both strings; `changed` tells whether any token applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub original: String,
    pub resolved: String,
}

impl Expansion {
    /// Random resolution drawing from `rng`.
    pub fn random<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Self {
        Self {
            original: text.to_string(),
            resolved: expand_with_rng(text, rng),
        }
    }

    /// Deterministic preview resolution.
    pub fn preview(text: &str) -> Self {
        Self {
            original: text.to_string(),
            resolved: preview(text),
        }
    }

    pub fn changed(&self) -> bool {
        self.original != self.resolved
    }
}

/// Description of one token for highlighting and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport {
    pub span: Range<usize>,
    pub text: String,
    pub count: usize,
    pub candidates: Vec<String>,
    pub separator: String,
    pub outcome: TokenOutcome,
}

/// Report every token in `text` without resolving it.
pub fn inspect(text: &str) -> Vec<TokenReport> {
    tokens(text)
        .map(|token| {
            let candidates = candidates(token.content);
            TokenReport {
                outcome: outcome(&candidates, token.count),
                span: token.span,
                text: token.text.to_string(),
                count: token.count,
                separator: separator(token.separator),
                candidates,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_precedence() {
        assert_eq!(outcome(&[], 0), TokenOutcome::Unchanged);
        assert_eq!(outcome(&[], 3), TokenOutcome::Unchanged);
        assert_eq!(outcome(&["a".to_string()], 0), TokenOutcome::Empty);
        assert_eq!(outcome(&["a".to_string()], 1), TokenOutcome::Substituted);
    }

    #[test]
    fn test_resolve_with_custom_strategy() {
        struct Last;
        impl Selection for Last {
            fn select(&mut self, mut candidates: Vec<String>, count: usize) -> Vec<String> {
                candidates.reverse();
                candidates.truncate(count);
                candidates
            }
        }
        assert_eq!(resolve("x {{a,b,c}}(2, '+') y", &mut Last), "x c+b y");
    }

    #[test]
    fn test_resolve_through_trait_object() {
        let mut selection: Box<dyn Selection> = Box::new(PreviewSelection);
        assert_eq!(resolve("{{a,b}}(1)", selection.as_mut()), "a");
    }

    #[test]
    fn test_expansion_changed() {
        assert!(Expansion::preview("{{a}}(1)").changed());
        assert!(!Expansion::preview("plain").changed());
        // Unchanged tokens do not count as a change.
        assert!(!Expansion::preview("{{ , }}(1)").changed());
    }

    #[test]
    fn test_inspect_reports_each_token() {
        let reports = inspect(r#"{{a, b}}(1, "/") {{ }}(2) {{c}}(0)"#);
        assert_eq!(reports.len(), 3);

        assert_eq!(reports[0].span, 0..16);
        assert_eq!(reports[0].candidates, ["a", "b"]);
        assert_eq!(reports[0].separator, "/");
        assert_eq!(reports[0].outcome, TokenOutcome::Substituted);

        assert_eq!(reports[1].text, "{{ }}(2)");
        assert!(reports[1].candidates.is_empty());
        assert_eq!(reports[1].separator, " ");
        assert_eq!(reports[1].outcome, TokenOutcome::Unchanged);

        assert_eq!(reports[2].count, 0);
        assert_eq!(reports[2].outcome, TokenOutcome::Empty);
    }

    #[test]
    fn test_inspect_serializes_outcome_snake_case() {
        let reports = inspect("{{a}}(0)");
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["outcome"], "empty");
        assert_eq!(json[0]["span"]["start"], 0);
        assert_eq!(json[0]["span"]["end"], 8);
    }
}
