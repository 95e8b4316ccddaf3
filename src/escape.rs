//! Escape sequences.
//!
//! The last formatting step collapses every doubled delimiter to a single
//! one: `{{` → `{`, `}}` → `}`, `[[` → `[`, `]]` → `]`. Pairs are consumed left
//! to right without overlapping, so `}}}` becomes `}}`.

use std::borrow::Cow;

#[inline]
const fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b'{' | b'}' | b'[' | b']')
}

/// Collapses doubled delimiters, borrowing when there is nothing to do.
///
/// # Examples
///
/// ```rust
/// use message_formatter::escape::unescape;
///
/// assert_eq!(unescape("{{prefix}} value [[suffix]]"), "{prefix} value [suffix]");
/// assert_eq!(unescape("{}}}"), "{}}");
/// ```
#[must_use]
pub fn unescape(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut output: Option<String> = None;
    let mut copied = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if is_delimiter(bytes[i]) && bytes[i + 1] == bytes[i] {
            let out = output.get_or_insert_with(|| String::with_capacity(text.len()));
            // keep the first of the pair, skip the second
            out.push_str(&text[copied..=i]);
            i += 2;
            copied = i;
        } else {
            i += 1;
        }
    }

    match output {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs() {
        assert_eq!(unescape("{{ }} [[ ]]"), "{ } [ ]");
    }

    #[test]
    fn test_pairs_do_not_overlap() {
        assert_eq!(unescape("{{{"), "{{");
        assert_eq!(unescape("{{{{"), "{{");
        assert_eq!(unescape("]]]"), "]]");
    }

    #[test]
    fn test_mixed_delimiters_are_not_pairs() {
        assert_eq!(unescape("{}[]"), "{}[]");
        assert_eq!(unescape("}{]["), "}{][");
    }

    #[test]
    fn test_borrows_plain_text() {
        assert!(matches!(unescape("no escapes {here}"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(unescape("ü{{ß}}✓"), "ü{ß}✓");
    }
}
