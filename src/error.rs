//! # Error Types
//!
//! Error handling for the u128 codec and its surrounding surfaces.
//!
//! ## Error Categories
//! - **Format Errors**: a token that is not a number, or a numeric token whose
//!   text is not an in-range unsigned decimal literal ([`FormatError`])
//! - **Serialization Errors**: failures reported by serde backends
//! - **Configuration Errors**: unreadable or invalid codec configuration
//!
//! [`FormatError`] is the only failure the codec itself produces. Sink errors
//! from `encode` are never wrapped; they surface with the sink's own type.
//!
//! ## Example Usage
//! ```rust
//! use u128_json::core::codec::U128Codec;
//! use u128_json::error::FormatError;
//!
//! let err = U128Codec::default().decode_str("1.5").unwrap_err();
//! assert!(matches!(err, FormatError::InvalidLiteral { .. }));
//! ```

use crate::core::token::TokenKind;
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Decode errors
    pub const ERR_EXPECTED_NUMBER: &str = "expected numeric token";
    pub const ERR_INVALID_LITERAL: &str = "invalid integer literal";

    /// Reasons attached to `ERR_INVALID_LITERAL`
    pub const REASON_EMPTY: &str = "empty literal";
    pub const REASON_NON_DIGIT: &str = "non-digit character";
    pub const REASON_OVERFLOW: &str = "value exceeds 2^128 - 1";
    pub const REASON_LEADING_ZERO: &str = "leading zero";
    pub const REASON_TOO_LONG: &str = "literal exceeds maximum length";

    /// Header errors
    pub const ERR_EMPTY_DATA: &str = "Empty data";

    /// Codec registration
    pub const ERR_CODEC_INSTALLED: &str = "A codec is already installed";
}

/// The single decode failure of the codec.
///
/// Both variants are the same error kind; the variant only carries context
/// for the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("{}, found {0}", constants::ERR_EXPECTED_NUMBER)]
    UnexpectedToken(TokenKind),

    #[error("{} {literal:?}: {reason}", constants::ERR_INVALID_LITERAL)]
    InvalidLiteral {
        literal: String,
        reason: &'static str,
    },
}

impl FormatError {
    pub(crate) fn invalid(raw: &[u8], reason: &'static str) -> Self {
        FormatError::InvalidLiteral {
            literal: String::from_utf8_lossy(raw).into_owned(),
            reason,
        }
    }
}

// CodecError is the crate-level error for format dispatch and configuration
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Deserialize error: {0}")]
    DeserializeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
