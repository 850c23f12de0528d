//! Splitting token content into candidate items.

use super::unescape::{ITEM_ESCAPES, SEPARATOR_ESCAPES, unescape};

/// Separator used when a token does not give one.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Split raw content on unescaped commas.
///
/// Escaped `\,`, `\{` and `\}` are kept raw here; decoding happens per item
/// after splitting. A trailing empty accumulator is not emitted.
pub fn split_raw(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut items = Vec::new();
    let mut item_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if matches!(bytes.get(i + 1), Some(b',') | Some(b'{') | Some(b'}')) => i += 2,
            b',' => {
                items.push(&content[item_start..i]);
                i += 1;
                item_start = i;
            }
            _ => i += 1,
        }
    }

    if item_start < content.len() {
        items.push(&content[item_start..]);
    }

    items
}

/// Trim and decode one raw item.
pub fn resolve_item(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r'));
    unescape(trimmed, ITEM_ESCAPES)
}

/// Resolve the candidate list for a token's content, dropping empty items.
pub fn candidates(content: &str) -> Vec<String> {
    split_raw(content)
        .into_iter()
        .map(resolve_item)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Resolve a token's separator, falling back to a single space.
pub fn separator(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => unescape(raw, SEPARATOR_ESCAPES),
        None => DEFAULT_SEPARATOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_raw("a,b,c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_escapes_raw() {
        assert_eq!(split_raw(r"a\,b,c"), [r"a\,b", "c"]);
        assert_eq!(split_raw(r"\{x\},y"), [r"\{x\}", "y"]);
    }

    #[test]
    fn test_split_empty_segments() {
        assert_eq!(split_raw(",a,,b,"), ["", "a", "", "b"]);
        assert!(split_raw("").is_empty());
    }

    #[test]
    fn test_split_escaped_backslash_then_comma() {
        // `\\` is not a split-time escape, so the comma after it is escaped.
        assert_eq!(split_raw(r"a\\,b"), [r"a\\,b"]);
    }

    #[test]
    fn test_resolve_trims_outer_whitespace_only() {
        assert_eq!(resolve_item("  red  car \n"), "red  car");
        assert_eq!(resolve_item("\r\n\tline1\nline2\t"), "line1\nline2");
    }

    #[test]
    fn test_resolve_decodes_after_trim() {
        // An escaped newline survives because trimming runs first.
        assert_eq!(resolve_item(r" a\n "), "a\n");
        assert_eq!(resolve_item(r"\{x\}\,y"), "{x},y");
    }

    #[test]
    fn test_candidates_drop_empty() {
        assert_eq!(candidates(" a , , b ,"), ["a", "b"]);
        assert!(candidates(" , \n ,").is_empty());
        assert!(candidates("").is_empty());
    }

    #[test]
    fn test_candidates_escaped_comma() {
        assert_eq!(candidates(r"red\, blue,green"), ["red, blue", "green"]);
    }

    #[test]
    fn test_separator_default() {
        assert_eq!(separator(None), " ");
    }

    #[test]
    fn test_separator_decoded() {
        assert_eq!(separator(Some(", ")), ", ");
        assert_eq!(separator(Some(r"\n")), "\n");
        assert_eq!(separator(Some(r#"\"\)"#)), r#"")"#);
        assert_eq!(separator(Some("")), "");
    }
}
