//! Token cursor abstraction over the host document reader.
//!
//! The codec only needs two things from the reader: the kind of the current
//! token and its raw, undecoded text. [`RawToken`] is the borrowed form used
//! by the serde glue and by tests.

use serde_json::value::RawValue;
use std::fmt;

/// Lexical category of a JSON token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    String,
    Boolean,
    Null,
    ArrayStart,
    ObjectStart,
    Unknown,
}

impl TokenKind {
    /// Classify a JSON value by the first byte of its raw text.
    #[inline]
    pub fn from_leading_byte(byte: u8) -> Self {
        match byte {
            b'0'..=b'9' | b'-' => TokenKind::Number,
            b'"' => TokenKind::String,
            b't' | b'f' => TokenKind::Boolean,
            b'n' => TokenKind::Null,
            b'[' => TokenKind::ArrayStart,
            b'{' => TokenKind::ObjectStart,
            _ => TokenKind::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
            TokenKind::ArrayStart => "array start",
            TokenKind::ObjectStart => "object start",
            TokenKind::Unknown => "unknown token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only view of the reader's current token.
pub trait TokenCursor {
    /// Kind of the current token
    fn kind(&self) -> TokenKind;

    /// Raw source text of the current token, exactly as it appears in the input
    fn raw(&self) -> &[u8];
}

/// A single token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    kind: TokenKind,
    raw: &'a [u8],
}

impl<'a> RawToken<'a> {
    pub fn new(kind: TokenKind, raw: &'a [u8]) -> Self {
        Self { kind, raw }
    }

    /// Numeric token with the given text. The text is not validated.
    pub fn number(text: &'a str) -> Self {
        Self::new(TokenKind::Number, text.as_bytes())
    }

    /// Build a token from the raw text of one complete JSON value.
    ///
    /// Empty input classifies as [`TokenKind::Unknown`].
    pub fn from_json(text: &'a str) -> Self {
        let kind = text
            .as_bytes()
            .first()
            .map_or(TokenKind::Unknown, |&b| TokenKind::from_leading_byte(b));
        Self::new(kind, text.as_bytes())
    }
}

impl TokenCursor for RawToken<'_> {
    #[inline]
    fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    fn raw(&self) -> &[u8] {
        self.raw
    }
}

// serde_json captures the value text verbatim, without surrounding whitespace
impl TokenCursor for RawValue {
    fn kind(&self) -> TokenKind {
        RawToken::from_json(self.get()).kind
    }

    fn raw(&self) -> &[u8] {
        self.get().as_bytes()
    }
}
