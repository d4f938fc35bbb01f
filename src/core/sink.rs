//! Raw-literal output sinks.
//!
//! A [`RawSink`] receives text that must land in the output verbatim, with no
//! quoting and no escaping. It is consumed by the write, the same way a serde
//! `Serializer` is consumed by a single value.

use serde::ser::{self, Serialize, Serializer};
use serde_json::value::RawValue;
use std::convert::Infallible;
use std::io;

/// Destination for a pre-formatted literal.
pub trait RawSink {
    /// Value produced by a successful write
    type Ok;
    /// Failure reported by the destination; passed through unchanged
    type Error;

    /// Emit `literal` exactly as given at the current position
    fn write_raw(self, literal: &str) -> Result<Self::Ok, Self::Error>;
}

/// Appends to an in-memory string.
impl RawSink for &mut String {
    type Ok = ();
    type Error = Infallible;

    fn write_raw(self, literal: &str) -> Result<(), Infallible> {
        self.push_str(literal);
        Ok(())
    }
}

/// Writes to any `io::Write` destination.
#[derive(Debug)]
pub struct WriterSink<W>(pub W);

impl<W: io::Write> RawSink for WriterSink<W> {
    type Ok = ();
    type Error = io::Error;

    fn write_raw(mut self, literal: &str) -> io::Result<()> {
        self.0.write_all(literal.as_bytes())
    }
}

/// Injects the literal into a serde serializer as a raw JSON value.
///
/// `serde_json` writes `RawValue` content verbatim, so the literal appears as a
/// bare JSON number rather than a quoted string.
#[derive(Debug)]
pub struct SerializerSink<S>(pub S);

impl<S: Serializer> RawSink for SerializerSink<S> {
    type Ok = S::Ok;
    type Error = S::Error;

    fn write_raw(self, literal: &str) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(literal.to_owned()).map_err(<S::Error as ser::Error>::custom)?;
        raw.serialize(self.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn test_string_sink_appends() {
        let mut out = String::from("[");
        (&mut out).write_raw("7").unwrap();
        out.push(']');
        assert_eq!(out, "[7]");
    }

    #[test]
    fn test_writer_sink() {
        let mut buf = Vec::new();
        WriterSink(&mut buf).write_raw("123").expect("write");
        assert_eq!(buf, b"123");
    }

    #[test]
    fn test_writer_sink_error_passes_through() {
        let mut slot = [0u8; 2];
        let err = WriterSink(&mut slot[..]).write_raw("123").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }

    #[test]
    fn test_serializer_sink_is_unquoted() {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::new(&mut buf);
        SerializerSink(&mut ser).write_raw("18446744073709551616").expect("serialize");
        assert_eq!(buf, b"18446744073709551616");
    }
}
