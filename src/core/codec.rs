//! # u128 Codec
//!
//! Converts between `u128` and its decimal text inside a JSON document.
//!
//! JSON numbers are text, and most JSON stacks parse them into `f64`, which
//! silently rounds anything above 2^53. This codec never touches a float: it
//! reads the raw digit span of a number token and writes the value back as a
//! bare, unquoted literal.
//!
//! ## Rules
//! - decode accepts only [`TokenKind::Number`] tokens
//! - the span must be ASCII digits only: no sign, point, exponent or whitespace
//! - values above `u128::MAX` are rejected, never clamped
//! - encode emits the canonical digit string (`"0"` for zero, no leading zeros)

use crate::config::CodecConfig;
use crate::core::sink::RawSink;
use crate::core::token::{RawToken, TokenCursor, TokenKind};
use crate::error::constants::{
    REASON_EMPTY, REASON_LEADING_ZERO, REASON_NON_DIGIT, REASON_OVERFLOW, REASON_TOO_LONG,
};
use crate::error::FormatError;
use tracing::{debug, trace};

/// Number of decimal digits in `u128::MAX`
pub const MAX_DIGITS: usize = 39;

/// Default cap on the raw span length accepted by decode
pub const DEFAULT_MAX_LITERAL_LEN: usize = 64;

/// A component that converts one value type to and from document tokens.
///
/// The host framework owns the mapping from value type to codec; this trait
/// is the capability it dispatches to.
pub trait ValueCodec {
    type Value;

    /// Convert the current token into a value
    fn decode<C: TokenCursor + ?Sized>(&self, token: &C) -> Result<Self::Value, FormatError>;

    /// Write `value` to `sink`. Sink errors are returned unchanged.
    fn encode<S: RawSink>(&self, value: &Self::Value, sink: S) -> Result<S::Ok, S::Error>;
}

/// Lossless codec for `u128` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U128Codec {
    allow_leading_zeros: bool,
    max_literal_len: usize,
}

impl Default for U128Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl U128Codec {
    pub const fn new() -> Self {
        Self {
            allow_leading_zeros: true,
            max_literal_len: DEFAULT_MAX_LITERAL_LEN,
        }
    }

    /// Build a codec using the decode policies of `config`
    ///
    /// # Errors
    /// Returns `CodecError::ConfigError` if `config` does not validate
    pub fn from_config(config: &CodecConfig) -> crate::error::Result<Self> {
        config.validate_strict()?;
        Ok(Self {
            allow_leading_zeros: config.allow_leading_zeros,
            max_literal_len: config.max_literal_len,
        })
    }

    pub const fn with_leading_zeros(mut self, allow: bool) -> Self {
        self.allow_leading_zeros = allow;
        self
    }

    pub const fn with_max_literal_len(mut self, len: usize) -> Self {
        self.max_literal_len = len;
        self
    }

    pub fn allows_leading_zeros(&self) -> bool {
        self.allow_leading_zeros
    }

    pub fn max_literal_len(&self) -> usize {
        self.max_literal_len
    }

    /// Decode `text` as the raw span of a numeric token
    ///
    /// The length cap applies to the whole span, so a zero-padded literal
    /// longer than `max_literal_len` fails even when its value is in range.
    pub fn decode_str(&self, text: &str) -> Result<u128, FormatError> {
        self.decode(&RawToken::number(text))
    }

    /// Canonical decimal text of `value`
    pub fn encode_to_string(&self, value: u128) -> String {
        let mut out = String::with_capacity(MAX_DIGITS);
        match self.encode(&value, &mut out) {
            Ok(()) => out,
            Err(never) => match never {},
        }
    }

    fn parse_digits(&self, raw: &[u8]) -> Result<u128, FormatError> {
        if raw.is_empty() {
            return Err(reject(raw, REASON_EMPTY));
        }

        // Bound the work before looking at the content
        if raw.len() > self.max_literal_len {
            return Err(reject(raw, REASON_TOO_LONG));
        }

        if !raw.iter().all(u8::is_ascii_digit) {
            return Err(reject(raw, REASON_NON_DIGIT));
        }

        if !self.allow_leading_zeros && raw.len() > 1 && raw[0] == b'0' {
            return Err(reject(raw, REASON_LEADING_ZERO));
        }

        raw.iter()
            .try_fold(0u128, |acc, &digit| {
                acc.checked_mul(10)?.checked_add(u128::from(digit - b'0'))
            })
            .ok_or_else(|| reject(raw, REASON_OVERFLOW))
    }
}

impl ValueCodec for U128Codec {
    type Value = u128;

    fn decode<C: TokenCursor + ?Sized>(&self, token: &C) -> Result<u128, FormatError> {
        let kind = token.kind();
        if kind != TokenKind::Number {
            debug!(%kind, "rejected non-numeric token for u128");
            return Err(FormatError::UnexpectedToken(kind));
        }

        let raw = token.raw();
        let value = self.parse_digits(raw)?;
        trace!(digits = raw.len(), "decoded u128 literal");
        Ok(value)
    }

    fn encode<S: RawSink>(&self, value: &u128, sink: S) -> Result<S::Ok, S::Error> {
        let digits = value.to_string();
        trace!(digits = digits.len(), "encoding u128 literal");
        sink.write_raw(&digits)
    }
}

#[inline]
fn reject(raw: &[u8], reason: &'static str) -> FormatError {
    debug!(reason, len = raw.len(), "rejected u128 literal");
    FormatError::invalid(raw, reason)
}
