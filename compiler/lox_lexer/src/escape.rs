//! Escape sequence processing for string literals.
//!
//! Recognized escapes: `\"`, `\\`, `\n`, `\t`, `\r`. Anything else is kept
//! verbatim, backslash included.

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        _ => None,
    }
}

/// Unescape the contents of a string literal (quotes already stripped).
pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => {
                if let Some(resolved) = resolve_escape(esc) {
                    result.push(resolved);
                } else {
                    result.push('\\');
                    result.push(esc);
                }
            }
            None => result.push('\\'),
        }
    }

    result
}
