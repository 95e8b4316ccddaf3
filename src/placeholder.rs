//! Placeholder tokens.
//!
//! A placeholder has the shape
//!
//! ```text
//! { [+] [key] [.decimals] [#format] [:conjunction] } [?]
//! ```
//!
//! where every piece is optional:
//!
//! | Piece | Grammar | Meaning |
//! |-------|---------|---------|
//! | `+` | literal | force a leading `+` on non-negative numbers |
//! | `key` | `[A-Za-z0-9_-]*` | argument name or index, empty means positional |
//! | `.decimals` | `[1-9][0-9]*` | fractional digits for numbers |
//! | `#format` | one of `b o x e c p` | binary, octal, hex, exponent, caret, pictures |
//! | `:conjunction` | text up to an unescaped `}` | list joiner, `?` requests the type name |
//! | `?` | literal after `}` | marks the placeholder as required by its optional section |
//!
//! A `{` directly preceded by another `{` never opens a placeholder, and a
//! closing `}` directly followed by another `}` never closes one; both are
//! escapes resolved at the very end of formatting.

use crate::Key;
use std::ops::Range;

/// Output format selected with `#format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericFormat {
    /// `#b`: `0b` prefixed base 2.
    Binary,
    /// `#o`: `0o` prefixed base 8.
    Octal,
    /// `#x`: `0x` prefixed upper-case base 16.
    Hex,
    /// `#e`: exponent notation.
    Exponent,
    /// `#c`: caret notation for control characters in strings.
    Caret,
    /// `#p`: Unicode control pictures for control characters in strings.
    Pictures,
}

impl NumericFormat {
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'b' => Some(NumericFormat::Binary),
            b'o' => Some(NumericFormat::Octal),
            b'x' => Some(NumericFormat::Hex),
            b'e' => Some(NumericFormat::Exponent),
            b'c' => Some(NumericFormat::Caret),
            b'p' => Some(NumericFormat::Pictures),
            _ => None,
        }
    }
}

/// A parsed placeholder token.
#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder<'a> {
    pub sign: bool,
    pub key: Option<Key>,
    pub decimals: Option<usize>,
    pub format: Option<NumericFormat>,
    /// Raw conjunction text; escaped braces are left doubled.
    pub conjunction: Option<&'a str>,
    /// Trailing `?`, only meaningful inside optional sections.
    pub optional: bool,
}

impl Placeholder<'_> {
    /// Returns `true` for the `:?` type-query / void marker.
    #[inline]
    #[must_use]
    pub fn is_type_query(&self) -> bool {
        self.conjunction == Some("?")
    }
}

/// A placeholder together with the byte range it occupies.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub span: Range<usize>,
    pub placeholder: Placeholder<'a>,
}

#[inline]
const fn is_key_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

/// Parses a placeholder that starts exactly at `start`.
///
/// Returns the token and the byte offset just past it, or `None` when the
/// text at `start` is not a placeholder.
#[must_use]
pub fn parse_at(text: &str, start: usize) -> Option<(Placeholder<'_>, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&b'{') || (start > 0 && bytes[start - 1] == b'{') {
        return None;
    }

    let mut i = start + 1;

    let sign = bytes.get(i) == Some(&b'+');
    if sign {
        i += 1;
    }

    let key_start = i;
    while i < bytes.len() && is_key_byte(bytes[i]) {
        i += 1;
    }
    let key = (i > key_start).then(|| Key::parse(&text[key_start..i]));

    let mut decimals = None;
    if bytes.get(i) == Some(&b'.') && matches!(bytes.get(i + 1), Some(b'1'..=b'9')) {
        let digits_start = i + 1;
        i = digits_start;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        decimals = Some(text[digits_start..i].parse().ok()?);
    }

    let mut format = None;
    if bytes.get(i) == Some(&b'#') {
        if let Some(parsed) = bytes.get(i + 1).copied().and_then(NumericFormat::from_byte) {
            format = Some(parsed);
            i += 2;
        }
    }

    let mut conjunction = None;
    if bytes.get(i) == Some(&b':') {
        let conjunction_start = i + 1;
        let mut j = conjunction_start;
        loop {
            match bytes.get(j) {
                Some(b'}') if bytes.get(j + 1) == Some(&b'}') => j += 2,
                Some(b'}') | None => break,
                Some(_) => j += 1,
            }
        }
        if j == conjunction_start || j == bytes.len() {
            return None;
        }
        conjunction = Some(&text[conjunction_start..j]);
        i = j;
    }

    if bytes.get(i) != Some(&b'}') {
        return None;
    }
    let close = i;

    let (optional, end) = match bytes.get(close + 1) {
        Some(b'}') => return None,
        Some(b'?') if bytes.get(close + 2) != Some(&b'}') => (true, close + 2),
        _ => (false, close + 1),
    };

    Some((
        Placeholder {
            sign,
            key,
            decimals,
            format,
            conjunction,
            optional,
        },
        end,
    ))
}

/// Left-to-right iterator over the placeholders of a text.
///
/// # Examples
///
/// ```rust
/// use message_formatter::placeholder::Placeholders;
///
/// let tokens: Vec<_> = Placeholders::new("{{skip}} {name.2} {}?").collect();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].span, 9..17);
/// assert!(tokens[1].placeholder.optional);
/// ```
#[derive(Clone, Debug)]
pub struct Placeholders<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Placeholders<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Placeholders { text, pos: 0 }
    }
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(offset) = self.text[self.pos..].find('{') {
            let start = self.pos + offset;
            if let Some((placeholder, end)) = parse_at(self.text, start) {
                self.pos = end;
                return Some(Token {
                    span: start..end,
                    placeholder,
                });
            }
            self.pos = start + 1;
        }
        self.pos = self.text.len();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<Placeholder<'_>> {
        match parse_at(text, 0) {
            Some((placeholder, end)) if end == text.len() => Some(placeholder),
            _ => None,
        }
    }

    #[test]
    fn test_empty_placeholder() {
        let placeholder = parse("{}").unwrap();
        assert!(!placeholder.sign);
        assert_eq!(placeholder.key, None);
        assert_eq!(placeholder.decimals, None);
        assert_eq!(placeholder.format, None);
        assert_eq!(placeholder.conjunction, None);
        assert!(!placeholder.optional);
    }

    #[test]
    fn test_all_pieces() {
        let placeholder = parse("{+amount.2#e:and}?").unwrap();
        assert!(placeholder.sign);
        assert_eq!(placeholder.key, Some(Key::Name("amount".to_string())));
        assert_eq!(placeholder.decimals, Some(2));
        assert_eq!(placeholder.format, Some(NumericFormat::Exponent));
        assert_eq!(placeholder.conjunction, Some("and"));
        assert!(placeholder.optional);
    }

    #[test]
    fn test_numeric_key_becomes_index() {
        assert_eq!(parse("{42.5}").unwrap().key, Some(Key::Index(42)));
        assert_eq!(
            parse("{042}").unwrap().key,
            Some(Key::Name("042".to_string()))
        );
    }

    #[test]
    fn test_type_query() {
        assert!(parse("{:?}").unwrap().is_type_query());
        assert!(!parse("{:??}").unwrap().is_type_query());
    }

    #[test]
    fn test_zero_decimals_is_not_a_placeholder() {
        assert!(parse("{.0}").is_none());
        assert!(parse("{.}").is_none());
    }

    #[test]
    fn test_unknown_format_is_not_a_placeholder() {
        assert!(parse("{#z}").is_none());
        assert!(parse("{#X}").is_none());
    }

    #[test]
    fn test_decimals_overflow_is_not_a_placeholder() {
        assert!(parse("{.99999999999999999999999999}").is_none());
    }

    #[test]
    fn test_escaped_braces_in_conjunction() {
        let placeholder = parse("{:}}}").unwrap();
        assert_eq!(placeholder.conjunction, Some("}}"));

        let placeholder = parse("{:a}}b}").unwrap();
        assert_eq!(placeholder.conjunction, Some("a}}b"));
    }

    #[test]
    fn test_unterminated_conjunction() {
        assert!(parse_at("{:a}}", 0).is_none());
        assert!(parse_at("{:abc", 0).is_none());
        assert!(parse_at("{:}", 0).is_none());
    }

    #[test]
    fn test_escaped_opening_brace() {
        assert!(parse_at("{{0}}", 1).is_none());
        assert!(parse_at("{{0}}", 0).is_none());
    }

    #[test]
    fn test_closing_brace_followed_by_brace() {
        assert!(parse_at("{0}}", 0).is_none());
    }

    #[test]
    fn test_trailing_question_mark() {
        assert_eq!(parse_at("{0}?", 0).map(|(p, end)| (p.optional, end)), Some((true, 4)));
        // `?` followed by `}` is left in place
        assert_eq!(parse_at("{0}?}", 0).map(|(p, end)| (p.optional, end)), Some((false, 3)));
    }

    #[test]
    fn test_iterator_skips_literals() {
        let tokens: Vec<_> = Placeholders::new("a {} b {{c}} {d} e {:?}").collect();
        let spans: Vec<_> = tokens.iter().map(|t| t.span.clone()).collect();
        assert_eq!(spans, vec![2..4, 13..16, 19..23]);
    }

    #[test]
    fn test_iterator_handles_multibyte_text() {
        let tokens: Vec<_> = Placeholders::new("grüße {name} ✓").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].placeholder.key,
            Some(Key::Name("name".to_string()))
        );
    }
}
