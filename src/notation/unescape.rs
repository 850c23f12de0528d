//! Backslash unescaping shared by items and separators.

/// Escapes accepted inside item content, in addition to the standard ones.
pub const ITEM_ESCAPES: &[char] = &['{', '}', ','];

/// Escapes accepted inside a quoted separator, in addition to the standard ones.
pub const SEPARATOR_ESCAPES: &[char] = &['(', ')', '\'', '"'];

/// Decode backslash escapes in `input`.
///
/// `\\`, `\n`, `\t` and `\r` are always recognized. A backslash followed by a
/// character in `allowed` yields that character. Any other backslash is kept
/// as-is and the character after it is read normally on the next step.
///
/// This never fails: unknown escapes and a trailing backslash pass through.
///
/// ```
/// use gacha::notation::unescape;
///
/// assert_eq!(unescape(r"\{x\}", &['{', '}']), "{x}");
/// assert_eq!(unescape(r"a\qb", &[]), r"a\qb");
/// ```
pub fn unescape(input: &str, allowed: &[char]) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        let decoded = match chars.peek() {
            Some('\\') => Some('\\'),
            Some('n') => Some('\n'),
            Some('t') => Some('\t'),
            Some('r') => Some('\r'),
            Some(c) if allowed.contains(c) => Some(*c),
            _ => None,
        };

        match decoded {
            Some(c) => {
                chars.next();
                result.push(c);
            }
            // Leave the following character for the next iteration.
            None => result.push('\\'),
        }
    }

    result
}
