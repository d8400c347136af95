//! # textfmt
//!
//! Message formatter: literal `\n` escape sequences become `<br/>`, `[`
//! becomes `<b>` and `]` becomes `</b>`.
//!
//! The transform is deterministic, total and pure. Bracket balance is not
//! validated: unbalanced input passes through producing unbalanced output
//! markers, which is accepted behavior rather than an error.

use memchr::memchr3;
use std::borrow::Cow;

/// Format a message for display.
///
/// Applies, in order: every literal `\n` escape sequence (backslash
/// followed by `n`, not an actual newline) becomes `<br/>`, every `[`
/// becomes `<b>`, every `]` becomes `</b>`. Pre-existing markers are not
/// escaped. A lone backslash not followed by `n` is left as-is.
///
/// Returns a `Cow::Borrowed` when the message contains nothing to replace
/// (fast path).
///
/// # Examples
///
/// ```
/// use textfmt::format;
///
/// assert_eq!(format("plain text"), "plain text");
/// assert_eq!(format(r"a\nb"), "a<br/>b");
/// assert_eq!(format("[bold]"), "<b>bold</b>");
/// assert_eq!(format(r"[a]\n[b]"), "<b>a</b><br/><b>b</b>");
/// ```
pub fn format(message: &str) -> Cow<'_, str> {
    // Fast path: nothing that could start a substitution.
    if memchr3(b'\\', b'[', b']', message.as_bytes()).is_none() {
        return Cow::Borrowed(message);
    }

    let mut out = String::with_capacity(message.len() + 16);
    let mut rest = message;
    while let Some(pos) = memchr3(b'\\', b'[', b']', rest.as_bytes()) {
        out.push_str(&rest[..pos]);
        match rest.as_bytes()[pos] {
            b'[' => {
                out.push_str("<b>");
                rest = &rest[pos + 1..];
            }
            b']' => {
                out.push_str("</b>");
                rest = &rest[pos + 1..];
            }
            // A backslash only forms a line break together with an `n`.
            _ if rest.as_bytes().get(pos + 1) == Some(&b'n') => {
                out.push_str("<br/>");
                rest = &rest[pos + 2..];
            }
            _ => {
                out.push('\\');
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_returned_unchanged_and_borrowed() {
        let formatted = format("no markers here");
        assert_eq!(formatted, "no markers here");
        assert!(matches!(formatted, Cow::Borrowed(_)));
    }

    #[test]
    fn escaped_newline_becomes_line_break() {
        assert_eq!(format(r"a\nb"), "a<br/>b");
        assert_eq!(format(r"\n\n"), "<br/><br/>");
    }

    #[test]
    fn actual_newline_is_not_a_marker() {
        assert_eq!(format("a\nb"), "a\nb");
    }

    #[test]
    fn brackets_become_emphasis_markers() {
        assert_eq!(format("[bold]"), "<b>bold</b>");
        assert_eq!(format(r"[a]\n[b]"), "<b>a</b><br/><b>b</b>");
    }

    #[test]
    fn unbalanced_brackets_pass_through() {
        assert_eq!(format("[open"), "<b>open");
        assert_eq!(format("]close["), "</b>close<b>");
    }

    #[test]
    fn lone_backslash_is_kept() {
        assert_eq!(format(r"a\b"), r"a\b");
        assert_eq!(format("trailing\\"), "trailing\\");
    }

    #[test]
    fn pre_existing_markers_are_not_escaped() {
        assert_eq!(format(r"<b>x</b>\n"), "<b>x</b><br/>");
    }

    #[test]
    fn formatting_is_not_idempotent_over_markers() {
        // Re-formatting output that still contains brackets re-escapes it.
        let once = format("[[x]]").into_owned();
        assert_eq!(once, "<b><b>x</b></b>");
        assert_eq!(format(&once), once); // no brackets left, identity
    }

    #[test]
    fn multibyte_text_survives_substitution() {
        assert_eq!(format(r"café [são]\n"), "café <b>são</b><br/>");
    }
}
