//! JSON string-literal escaping over a pluggable text sink.
//!
//! One algorithm, two destinations: [`escape`] collects into a growable
//! `String`, while [`escape_to`] appends fragments to any [`Sink`], such as
//! a [`StreamSink`] wrapping an `io::Write`, and never buffers the whole
//! result before writing. Output carries no surrounding quotes; callers add
//! the delimiters.
//!
//! Rust strings are always valid UTF-8, so unpaired surrogate halves cannot
//! reach this routine.

use std::convert::Infallible;
use std::io;

/// A destination that accepts short text fragments.
///
/// The in-memory implementation on `String` cannot fail; [`StreamSink`]
/// surfaces the underlying writer's `io::Error` instead of swallowing it.
pub trait Sink {
    type Error;

    /// Appends one fragment of already-escaped text.
    fn append(&mut self, fragment: &str) -> Result<(), Self::Error>;
}

impl Sink for String {
    type Error = Infallible;

    fn append(&mut self, fragment: &str) -> Result<(), Infallible> {
        self.push_str(fragment);
        Ok(())
    }
}

/// Adapts any `io::Write` into a [`Sink`], writing each fragment through
/// synchronously.
pub struct StreamSink<W> {
    inner: W,
}

impl<W: io::Write> StreamSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for StreamSink<W> {
    type Error = io::Error;

    fn append(&mut self, fragment: &str) -> io::Result<()> {
        self.inner.write_all(fragment.as_bytes())
    }
}

/// Escape special characters in a string for JSON emission.
///
/// Escapes, in priority order: the quote and backslash as two-character
/// escapes, the five named controls (`\b`, `\f`, `\n`, `\r`, `\t`), and
/// any character in `[0x0000, 0x0020)`, `[0x0080, 0x00A0)`, or
/// `[0x2000, 0x2100)` as a lowercase `\uXXXX` escape. Everything else
/// passes through verbatim.
///
/// # Examples
///
/// ```
/// use json_ast::escape;
///
/// assert_eq!(escape("hello"), "hello");
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("line1\nline2"), "line1\\nline2");
/// assert_eq!(escape("a\u{2005}b"), "a\\u2005b");
/// ```
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let Ok(()) = escape_to(s, &mut out);
    out
}

/// The shared escaping algorithm. Unescaped spans are appended as whole
/// slices of the input; only escape sequences are materialized.
pub fn escape_to<S: Sink + ?Sized>(s: &str, sink: &mut S) -> Result<(), S::Error> {
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let fixed = match ch {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            '\u{0008}' => Some("\\b"),
            '\u{000C}' => Some("\\f"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\t' => Some("\\t"),
            _ => None,
        };
        if fixed.is_none() && !needs_unicode_escape(ch) {
            continue;
        }

        if last < i {
            sink.append(&s[last..i])?;
        }
        match fixed {
            Some(esc) => sink.append(esc)?,
            None => sink.append(&format!("\\u{:04x}", ch as u32))?,
        }
        last = i + ch.len_utf8();
    }

    if last < s.len() {
        sink.append(&s[last..])?;
    }
    Ok(())
}

/// Characters escaped as `\uXXXX`: C0 controls without a named escape, the
/// C1 range, and `[0x2000, 0x2100)`.
fn needs_unicode_escape(ch: char) -> bool {
    let cp = ch as u32;
    cp < 0x20 || (0x80..0xa0).contains(&cp) || (0x2000..0x2100).contains(&cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_simple() {
        assert_eq!(escape("hello"), "hello");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
    }

    #[test]
    fn test_escape_backslash() {
        assert_eq!(escape("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_escape_newline() {
        assert_eq!(escape("line1\nline2"), "line1\\nline2");
    }

    #[test]
    fn test_escape_tab() {
        assert_eq!(escape("tab\there"), "tab\\there");
    }

    #[test]
    fn test_escape_carriage_return() {
        assert_eq!(escape("line1\rline2"), "line1\\rline2");
    }

    #[test]
    fn test_escape_backspace() {
        // \x08 is the backspace character
        assert_eq!(escape("back\x08space"), "back\\bspace");
    }

    #[test]
    fn test_escape_form_feed() {
        // \x0c is the form feed character
        assert_eq!(escape("form\x0cfeed"), "form\\ffeed");
    }

    #[test]
    fn test_escape_null_byte() {
        assert_eq!(escape("null\0byte"), "null\\u0000byte");
    }

    #[test]
    fn test_escape_unnamed_c0_control() {
        assert_eq!(escape("\x1b"), "\\u001b");
    }

    #[test]
    fn test_escape_c1_range() {
        assert_eq!(escape("\u{0080}"), "\\u0080");
        assert_eq!(escape("\u{009f}"), "\\u009f");
    }

    #[test]
    fn test_escape_c1_range_is_exclusive_above() {
        // U+00A0 (no-break space) is just past the C1 block
        assert_eq!(escape("\u{00a0}"), "\u{00a0}");
    }

    #[test]
    fn test_escape_general_punctuation_block() {
        assert_eq!(escape("a\u{2005}b"), "a\\u2005b");
        assert_eq!(escape("\u{2000}"), "\\u2000");
        assert_eq!(escape("\u{20ff}"), "\\u20ff");
    }

    #[test]
    fn test_escape_block_bounds_are_exclusive() {
        assert_eq!(escape("\u{1fff}"), "\u{1fff}");
        assert_eq!(escape("\u{2100}"), "\u{2100}");
    }

    #[test]
    fn test_escape_ascii_passes_through() {
        let printable = "azAZ09 !#$%&'()*+,-./:;<=>?@[]^_`{|}~";
        assert_eq!(escape(printable), printable);
    }

    #[test]
    fn test_escape_multibyte_passes_through() {
        assert_eq!(escape("hello 日本語"), "hello 日本語");
    }

    #[test]
    fn test_escape_to_stream() {
        let mut sink = StreamSink::new(Vec::new());
        escape_to("a\"b", &mut sink).unwrap();
        assert_eq!(sink.into_inner(), b"a\\\"b");
    }

    #[test]
    fn test_escape_to_stream_propagates_write_failure() {
        struct FailingWriter;

        impl io::Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = StreamSink::new(FailingWriter);
        let err = escape_to("anything", &mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
