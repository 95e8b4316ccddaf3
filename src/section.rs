//! Optional sections.
//!
//! An optional section is a `[ ... ]` span of the pattern. It is kept (without
//! its outer brackets) when every placeholder inside it that carries the
//! trailing `?` marker resolves to a non-empty argument, and dropped entirely
//! otherwise. Nested spans are part of the outer span's content and are never
//! evaluated on their own.
//!
//! A span opens at a single `[` and closes at the matching single `]`.
//! Doubled brackets inside a span are escapes and count as content. Every
//! level needs at least one character of content; an unterminated or empty
//! span leaves the `[` as plain text.

use crate::placeholder::Placeholders;
use crate::{Arguments, Key};
use std::borrow::Cow;
use tracing::debug;

/// Finds the closing bracket of the section opening at `start`.
fn match_section(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start) != Some(&b'[')
        || bytes.get(start + 1) == Some(&b'[')
        || (start > 0 && bytes[start - 1] == b'[')
    {
        return None;
    }

    // One entry per open level: whether it has content yet.
    let mut levels = vec![false];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            // escaped bracket, plain content
            b'[' | b']' if bytes.get(i + 1) == Some(&bytes[i]) => {
                if let Some(has_content) = levels.last_mut() {
                    *has_content = true;
                }
                i += 2;
                continue;
            }
            b'[' => levels.push(false),
            b']' => {
                if levels.last() != Some(&true) {
                    return None;
                }
                levels.pop();
                match levels.last_mut() {
                    Some(has_content) => *has_content = true,
                    None => return Some(i),
                }
            }
            _ => {
                if let Some(has_content) = levels.last_mut() {
                    *has_content = true;
                }
            }
        }
        i += 1;
    }
    None
}

/// Decides whether a section's content is kept.
///
/// `counter` is the number of positional placeholders that precede the
/// section in the resolved text; keyless placeholders inside the section
/// resolve against it. It only advances when the section is kept.
fn is_kept(content: &str, arguments: &Arguments, counter: &mut usize) -> bool {
    let mut next_position = *counter;
    let mut kept = true;
    for token in Placeholders::new(content) {
        let key = match token.placeholder.key {
            Some(key) => key,
            None => {
                next_position += 1;
                Key::Index(next_position - 1)
            }
        };
        if kept && token.placeholder.optional {
            kept = arguments.get(&key).is_some_and(|value| !value.is_empty());
            if !kept {
                debug!(key = %key, "optional section dropped");
            }
        }
    }
    if kept {
        *counter = next_position;
    }
    kept
}

fn count_positional(text: &str) -> usize {
    Placeholders::new(text)
        .filter(|token| token.placeholder.key.is_none())
        .count()
}

/// Resolves every optional section of `pattern`.
///
/// Placeholders are left untouched; kept sections lose their outer
/// brackets, dropped sections disappear.
pub(crate) fn resolve_sections<'a>(pattern: &'a str, arguments: &Arguments) -> Cow<'a, str> {
    let bytes = pattern.as_bytes();
    let mut output: Option<String> = None;
    let mut copied = 0;
    let mut counter = 0;
    let mut i = 0;

    while let Some(offset) = pattern[i..].find('[') {
        let start = i + offset;
        let Some(end) = match_section(bytes, start) else {
            i = start + 1;
            continue;
        };

        let out = output.get_or_insert_with(|| String::with_capacity(pattern.len()));
        let literal = &pattern[copied..start];
        counter += count_positional(literal);
        out.push_str(literal);

        let content = &pattern[start + 1..end];
        if is_kept(content, arguments, &mut counter) {
            out.push_str(content);
        }

        i = end + 1;
        copied = i;
    }

    match output {
        Some(mut out) => {
            out.push_str(&pattern[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn resolve(pattern: &str, arguments: &Arguments) -> String {
        resolve_sections(pattern, arguments).into_owned()
    }

    #[test]
    fn test_match_simple_section() {
        assert_eq!(match_section(b"[abc]", 0), Some(4));
        assert_eq!(match_section(b"x[a]y", 1), Some(3));
    }

    #[test]
    fn test_match_nested_section() {
        assert_eq!(match_section(b"[a [b] c]", 0), Some(8));
        assert_eq!(match_section(b"[a [b] c]", 3), Some(5));
    }

    #[test]
    fn test_escaped_brackets_are_not_sections() {
        assert_eq!(match_section(b"[[a]]", 0), None);
        assert_eq!(match_section(b"[[a]]", 1), None);
        assert_eq!(match_section(b"[a]]", 0), None);
    }

    #[test]
    fn test_nested_section_closing_on_outer_bracket() {
        // the inner `]` is followed by `]`, so neither level can close
        assert_eq!(match_section(b"[x[y]]", 0), None);
        assert_eq!(match_section(b"[x[y]]", 2), None);
    }

    #[test]
    fn test_escaped_brackets_inside_section_are_content() {
        assert_eq!(match_section(b"[see [[docs]]]", 0), Some(13));
        assert_eq!(match_section(b"[a]]]", 0), Some(4));
        assert_eq!(match_section(b"[[[a]", 0), None);
    }

    #[test]
    fn test_section_with_escaped_brackets_is_dropped_as_a_whole() {
        assert_eq!(resolve("a[ see [[docs]] {x}?]", &args!["x" => ""]), "a");
        assert_eq!(
            resolve("a[ see [[docs]] {x}?]", &args!["x" => "v"]),
            "a see [[docs]] {x}?"
        );
    }

    #[test]
    fn test_empty_section_is_text() {
        assert_eq!(match_section(b"[]", 0), None);
        assert_eq!(match_section(b"[a[]]", 0), None);
    }

    #[test]
    fn test_unterminated_section() {
        assert_eq!(match_section(b"[abc", 0), None);
        assert_eq!(match_section(b"[a [b] c", 0), None);
    }

    #[test]
    fn test_section_without_markers_is_kept() {
        assert_eq!(resolve("a[b]c", &Arguments::new()), "abc");
    }

    #[test]
    fn test_section_with_empty_marker_is_dropped() {
        assert_eq!(resolve("always[ {}?]", &args![""]), "always");
        assert_eq!(resolve("always[ {0}?]", &args![""]), "always");
        assert_eq!(resolve("always[ {x}?]", &Arguments::new()), "always");
    }

    #[test]
    fn test_section_with_present_marker_is_kept() {
        assert_eq!(resolve("always[ {0}?]", &args!["optional"]), "always {0}?");
        assert_eq!(
            resolve("always[ {0}? {1}]", &args!["optional", ""]),
            "always {0}? {1}"
        );
    }

    #[test]
    fn test_one_empty_marker_drops_the_section() {
        assert_eq!(
            resolve("always[ {0}? {1}? {2}?]", &args!["foo", "bar", ""]),
            "always"
        );
    }

    #[test]
    fn test_nested_span_is_one_unit() {
        assert_eq!(resolve("[a [b {0}?] c]", &args![1]), "a [b {0}?] c");
        assert_eq!(resolve("[a [b {0}?] c]", &args![0]), "");
    }

    #[test]
    fn test_positional_markers_follow_preceding_placeholders() {
        let arguments = args!["first", ""];
        assert_eq!(resolve("{} [{}?]", &arguments), "{} ");
        assert_eq!(resolve("{}[{}?]", &args!["", "second"]), "{}{}?");
    }

    #[test]
    fn test_dropped_section_does_not_advance_positions() {
        let arguments = args!["", "x"];
        assert_eq!(resolve("[{}?][{}?]", &arguments), "");
        assert_eq!(resolve("[{}?][{}?]", &args!["a", ""]), "{}?");
    }

    #[test]
    fn test_without_sections_borrows() {
        assert!(matches!(
            resolve_sections("plain {} [[text]]", &Arguments::new()),
            Cow::Borrowed(_)
        ));
    }
}
