//! Navigation over one raw header field value
//!
//! A `ValueCursor` walks a single header value byte by byte: peek,
//! advance, optional-whitespace skipping, and top-level comma scanning
//! that does not split inside quoted strings. The cursor carries a
//! base offset so that slices handed out during list parsing still
//! report failure positions relative to the original value.

use crate::span::Span;

/// OWS: optional whitespace around tokens (SP / HTAB)
pub fn is_ows(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// tchar: any visible US-ASCII character allowed in an HTTP token
pub fn is_tchar(byte: u8) -> bool {
    matches!(byte,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
        | b'^' | b'_' | b'`' | b'|' | b'~'
        | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
}

/// DIGIT: any US-ASCII digit
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Byte-wise cursor over one header value.
#[derive(Debug, Clone)]
pub struct ValueCursor<'a> {
    input: &'a str,
    pos: usize,
    base: usize,
}

impl<'a> ValueCursor<'a> {
    /// Create a cursor over a complete raw value
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            base: 0,
        }
    }

    /// Create a cursor over a slice of a larger value; `base` is the
    /// slice's offset in the original value, used for error positions.
    pub fn with_base(input: &'a str, base: usize) -> Self {
        Self {
            input,
            pos: 0,
            base,
        }
    }

    /// Current position relative to this cursor's input
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current position relative to the original value
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Unconsumed remainder of the input
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek at the current byte without advancing
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Advance by `n` bytes (clamped to the end of input)
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Consume one byte if it matches
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip optional whitespace
    pub fn skip_ows(&mut self) {
        while let Some(b) = self.peek() {
            if is_ows(b) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Consume the longest prefix whose bytes satisfy `pred`
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if pred(b) {
                self.pos += 1;
            } else {
                break;
            }
        }
        &self.input[start..self.pos]
    }

    /// Consume everything up to the end of input
    pub fn take_rest(&mut self) -> &'a str {
        let rest = self.rest();
        self.pos = self.input.len();
        rest
    }
}

/// Split a value on commas at the top syntactic level.
///
/// Commas inside quoted strings do not split; a backslash escapes the
/// next byte inside a quoted string. Returns each raw element with its
/// span in the input, untrimmed and including empty elements, so the
/// caller decides how HTTP list syntax tolerance applies.
pub fn split_top_level_commas(input: &str) -> Vec<(Span, &str)> {
    let bytes = input.as_bytes();
    let mut elements = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if escaped {
            escaped = false;
        } else if in_quotes {
            match b {
                b'\\' => escaped = true,
                b'"' => in_quotes = false,
                _ => {}
            }
        } else {
            match b {
                b'"' => in_quotes = true,
                b',' => {
                    elements.push((Span::new(start, i), &input[start..i]));
                    start = i + 1;
                }
                _ => {}
            }
        }
        i += 1;
    }
    elements.push((Span::new(start, input.len()), &input[start..]));
    elements
}
