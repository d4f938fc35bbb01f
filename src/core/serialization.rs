//! # Serialization Formats
//!
//! Format dispatch for documents that carry `u128` fields.
//!
//! JSON is the format this crate exists for: `u128` fields annotated with
//! [`crate::json::u128_raw`] are written as bare number literals. Bincode and
//! MessagePack are binary formats that carry `u128` natively, so the same
//! annotated types round-trip through them unchanged.
//!
//! ## Usage
//! ```ignore
//! use u128_json::core::serialization::{MultiFormat, SerializationFormat};
//!
//! let bytes = ledger.serialize_format(SerializationFormat::Json)?;
//! let back = Ledger::deserialize_format(&bytes, SerializationFormat::Json)?;
//! ```

use crate::config::CodecConfig;
use crate::error::constants::ERR_EMPTY_DATA;
use crate::error::CodecError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationFormat {
    /// Human-readable JSON with raw u128 literals (default)
    #[default]
    Json,
    /// Binary compact format
    Bincode,
    /// Compact binary format (MessagePack)
    #[serde(rename = "msgpack")]
    MessagePack,
}

impl SerializationFormat {
    /// Get the format identifier byte for headers
    pub fn format_byte(self) -> u8 {
        match self {
            SerializationFormat::Bincode => 0x01,
            SerializationFormat::Json => 0x02,
            SerializationFormat::MessagePack => 0x03,
        }
    }

    /// Detect format from identifier byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(SerializationFormat::Bincode),
            0x02 => Some(SerializationFormat::Json),
            0x03 => Some(SerializationFormat::MessagePack),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            SerializationFormat::Bincode => "Bincode",
            SerializationFormat::Json => "JSON",
            SerializationFormat::MessagePack => "MessagePack",
        }
    }
}

impl FromStr for SerializationFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(SerializationFormat::Json),
            "bincode" => Ok(SerializationFormat::Bincode),
            "msgpack" | "messagepack" => Ok(SerializationFormat::MessagePack),
            other => Err(CodecError::ConfigError(format!(
                "Unknown serialization format: {other}"
            ))),
        }
    }
}

/// Trait for types that support multiple serialization formats
pub trait MultiFormat: Serialize + for<'de> Deserialize<'de> + Sized {
    /// Serialize to bytes using the specified format
    fn serialize_format(&self, format: SerializationFormat) -> crate::error::Result<Vec<u8>> {
        match format {
            SerializationFormat::Bincode => bincode::serialize(self)
                .map_err(|e| CodecError::SerializeError(e.to_string())),
            SerializationFormat::Json => {
                serde_json::to_vec(self).map_err(|e| CodecError::SerializeError(e.to_string()))
            }
            SerializationFormat::MessagePack => {
                rmp_serde::to_vec(self).map_err(|e| CodecError::SerializeError(e.to_string()))
            }
        }
    }

    /// Serialize to bytes using the format named in `config`
    fn serialize_configured(&self, config: &CodecConfig) -> crate::error::Result<Vec<u8>> {
        self.serialize_format(config.format)
    }

    /// Serialize to bytes with format header
    fn serialize_with_header(&self, format: SerializationFormat) -> crate::error::Result<Vec<u8>> {
        let mut data = vec![format.format_byte()];
        let mut payload = self.serialize_format(format)?;
        data.append(&mut payload);
        Ok(data)
    }

    /// Deserialize from bytes using the specified format
    fn deserialize_format(data: &[u8], format: SerializationFormat) -> crate::error::Result<Self> {
        match format {
            SerializationFormat::Bincode => bincode::deserialize(data)
                .map_err(|e| CodecError::DeserializeError(e.to_string())),
            SerializationFormat::Json => serde_json::from_slice(data)
                .map_err(|e| CodecError::DeserializeError(e.to_string())),
            SerializationFormat::MessagePack => rmp_serde::from_slice(data)
                .map_err(|e| CodecError::DeserializeError(e.to_string())),
        }
    }

    /// Deserialize from bytes using the format named in `config`
    fn deserialize_configured(data: &[u8], config: &CodecConfig) -> crate::error::Result<Self> {
        Self::deserialize_format(data, config.format)
    }

    /// Deserialize from bytes with format header
    fn deserialize_with_header(data: &[u8]) -> crate::error::Result<(Self, SerializationFormat)> {
        let Some((&byte, payload)) = data.split_first() else {
            return Err(CodecError::DeserializeError(ERR_EMPTY_DATA.to_string()));
        };

        let format = SerializationFormat::from_byte(byte).ok_or_else(|| {
            CodecError::DeserializeError(format!("Unknown format byte: {byte}"))
        })?;

        let value = Self::deserialize_format(payload, format)?;
        Ok((value, format))
    }
}
