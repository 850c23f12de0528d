//! Token matcher for `{{content}}(count[, 'sep'])` occurrences.
//!
//! The scanner walks the source once, left to right, and yields
//! non-overlapping tokens. Text that does not match the grammar is never an
//! error: the scanner skips one character past the failed `{{` and keeps
//! looking, so the caller copies that text through untouched.
//!
//! # Grammar
//!
//! ```text
//! {{ CONTENT }} ( COUNT [ , \s* SEP ] )
//! ```
//!
//! - `CONTENT` has no unescaped `{` or `}`; `\{` and `\}` are allowed. It ends
//!   at the first `}}` followed by a valid `(COUNT[, SEP])` tail.
//! - `COUNT` is one or more ASCII digits.
//! - `SEP` is `'...'` or `"..."`, ending at the first matching quote that is
//!   followed by `)`. Backslash escapes (including escaped quotes) are skipped
//!   over without ending the body.
//! - `\s` is any Unicode whitespace.

use log::{debug, trace};
use std::ops::Range;

/// One located occurrence of the notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte range of the whole match in the source.
    pub span: Range<usize>,
    /// The full matched text, `{{` through the closing `)`.
    pub text: &'a str,
    /// Raw content between `{{` and `}}`, escapes not yet decoded.
    pub content: &'a str,
    /// Number of items to pick. Saturates at `usize::MAX`.
    pub count: usize,
    /// Raw separator body between the quotes, if one was given.
    pub separator: Option<&'a str>,
}

/// Iterator over the tokens of a source string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    pos: usize,
}

/// Scan `source` for tokens.
pub fn tokens(source: &str) -> Tokens<'_> {
    Tokens { source, pos: 0 }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while let Some(offset) = self.source[self.pos..].find("{{") {
            let start = self.pos + offset;
            if let Some(token) = match_at(self.source, start) {
                trace!(
                    "token at {}..{}: count={} separator={:?}",
                    token.span.start, token.span.end, token.count, token.separator
                );
                self.pos = token.span.end;
                return Some(token);
            }
            debug!("no token at offset {}, leaving text as-is", start);
            // `{` is a single byte, so start + 1 is a char boundary.
            self.pos = start + 1;
        }

        self.pos = self.source.len();
        None
    }
}

/// Everything after the content: `}}(COUNT[, SEP])`.
struct Tail<'a> {
    end: usize,
    count: usize,
    separator: Option<&'a str>,
}

/// Try to match a token whose `{{` starts at `start`.
fn match_at(source: &str, start: usize) -> Option<Token<'_>> {
    let bytes = source.as_bytes();
    let content_start = start + 2;
    let mut pos = content_start;

    // Content is lazy: every reachable position is first tried as the end.
    loop {
        if let Some(tail) = match_tail(source, pos) {
            return Some(build(source, start, content_start, pos, tail));
        }

        match bytes.get(pos) {
            None | Some(b'{') | Some(b'}') => return None,
            Some(b'\\') if matches!(bytes.get(pos + 1), Some(b'{') | Some(b'}')) => {
                // The backslash alone is also valid content, so the brace
                // after it may start the closing `}}`.
                if let Some(tail) = match_tail(source, pos + 1) {
                    return Some(build(source, start, content_start, pos + 1, tail));
                }
                pos += 2;
            }
            Some(_) => pos += 1,
        }
    }
}

fn build<'a>(
    source: &'a str,
    start: usize,
    content_start: usize,
    content_end: usize,
    tail: Tail<'a>,
) -> Token<'a> {
    Token {
        span: start..tail.end,
        text: &source[start..tail.end],
        content: &source[content_start..content_end],
        count: tail.count,
        separator: tail.separator,
    }
}

fn match_tail(source: &str, pos: usize) -> Option<Tail<'_>> {
    let bytes = source.as_bytes();
    if !bytes.get(pos..)?.starts_with(b"}}(") {
        return None;
    }

    let digits_start = pos + 3;
    let mut i = digits_start;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    // Only overflow can fail here; a huge count behaves like "all items".
    let count = source[digits_start..i].parse().unwrap_or(usize::MAX);

    match bytes.get(i) {
        Some(b')') => Some(Tail {
            end: i + 1,
            count,
            separator: None,
        }),
        Some(b',') => {
            let (separator, end) = match_separator(source, i + 1)?;
            Some(Tail {
                end,
                count,
                separator: Some(separator),
            })
        }
        _ => None,
    }
}

/// Match `\s* QUOTE body QUOTE )` starting at `pos`.
///
/// `\s` is Unicode whitespace. The body is lazy: a closing quote that is not
/// followed by `)` is kept as body text and the scan continues. Returns the
/// raw body and the index just past the `)`.
fn match_separator(source: &str, pos: usize) -> Option<(&str, usize)> {
    let bytes = source.as_bytes();
    let rest = source.get(pos..)?;
    let i = pos + rest.len() - rest.trim_start_matches(char::is_whitespace).len();

    let quote = *bytes.get(i)?;
    if quote != b'\'' && quote != b'"' {
        return None;
    }

    let body_start = i + 1;
    let mut j = body_start;
    loop {
        match *bytes.get(j)? {
            b'\\' => {
                bytes.get(j + 1)?;
                j += 2;
            }
            b if b == quote && bytes.get(j + 1) == Some(&b')') => {
                return Some((&source[body_start..j], j + 2));
            }
            _ => j += 1,
        }
    }
}
