//! # u128-json
//!
//! Lossless `u128` values in JSON documents.
//!
//! Most JSON stacks parse numbers into `f64`, which rounds every integer above
//! 2^53. This crate reads a `u128` from the raw digit text of a JSON number
//! token and writes it back as a bare, unquoted number literal, so values up
//! to `u128::MAX` survive a round trip exactly.
//!
//! ## Modules
//! - [`core`]: the codec, its token cursor and raw sink boundaries, format dispatch
//! - [`json`]: serde `with` modules and the [`json::JsonU128`] newtype
//! - [`config`]: decode policy configuration
//! - [`error`]: [`error::FormatError`] and the crate-level [`error::CodecError`]
//!
//! ## Example
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Offset {
//!     #[serde(with = "u128_json::json::u128_raw")]
//!     value: u128,
//! }
//!
//! let json = serde_json::to_string(&Offset { value: u128::MAX }).unwrap();
//! assert_eq!(json, r#"{"value":340282366920938463463374607431768211455}"#);
//!
//! let back: Offset = serde_json::from_str(&json).unwrap();
//! assert_eq!(back.value, u128::MAX);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod json;

pub use crate::core::codec::{U128Codec, ValueCodec};
pub use crate::error::{CodecError, FormatError};
pub use crate::json::JsonU128;
