//! # Core Codec Components
//!
//! The u128 conversion unit and the two boundaries it talks through.
//!
//! ## Components
//! - **Token**: read-only cursor over the reader's current token
//! - **Sink**: raw-literal output, emitted without quoting or escaping
//! - **Codec**: decode/encode between `u128` and decimal text
//! - **Serialization**: format dispatch for documents carrying `u128` fields
//!
//! ## Wire Format
//! ```text
//! {"balance": 340282366920938463463374607431768211455}
//! ```
//! The value is a bare JSON number, never a quoted string, and never passes
//! through `f64`.

pub mod codec;
pub mod serialization;
pub mod sink;
pub mod token;
