//! # serde Integration
//!
//! Hooks the u128 codec into serde by value type.
//!
//! - `#[serde(with = "u128_json::json::u128_raw")]` on a `u128` field
//! - `#[serde(with = "u128_json::json::u128_raw::option")]` on an `Option<u128>` field
//! - [`JsonU128`] as a drop-in field type
//!
//! ## Writing
//! Values are handed to the serializer as integers, never as text or `f64`.
//! `serde_json`'s writer prints them as bare digit literals. Human-readable
//! formats get `u64` when the value fits, so TOML and friends can carry small
//! values; anything a format cannot hold exactly is an error from that format,
//! never a rounded number. Binary formats always get the native `u128`.
//!
//! ## Reading
//! `serde_json`'s reader hands over the raw text of the value, which goes
//! through [`U128Codec`]: only number tokens with plain decimal digits are
//! accepted. Other human-readable readers fall back to serde's native `u128`
//! handling. Decode policies come from the codec set with [`install`], or the
//! default codec when none is installed.
//!
//! The raw text cannot be captured through serde's content buffering, so under
//! `#[serde(flatten)]` or untagged and internally tagged enums these fields
//! lose the strict checks.

use crate::config::CodecConfig;
use crate::core::codec::{U128Codec, ValueCodec};
use crate::error::constants::ERR_CODEC_INSTALLED;
use crate::error::{CodecError, FormatError};
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

// Newtype name serde_json's reader answers with the raw value text
const RAW_VALUE_TOKEN: &str = "$serde_json::private::RawValue";

static INSTALLED: OnceLock<U128Codec> = OnceLock::new();

/// Install the process-wide codec used by [`u128_raw`] and [`JsonU128`].
///
/// The configuration is validated first. A codec can be installed once.
pub fn install(config: &CodecConfig) -> crate::error::Result<()> {
    let codec = U128Codec::from_config(config)?;
    INSTALLED
        .set(codec)
        .map_err(|_| CodecError::ConfigError(ERR_CODEC_INSTALLED.to_string()))
}

/// The installed codec, or the default one.
pub fn codec() -> U128Codec {
    INSTALLED.get().copied().unwrap_or_default()
}

/// Serialize `value` without any text or float intermediate.
pub fn serialize_u128<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if serializer.is_human_readable() {
        if let Ok(small) = u64::try_from(*value) {
            return serializer.serialize_u64(small);
        }
    }
    serializer.serialize_u128(*value)
}

/// Deserialize a `u128` through `codec`.
pub fn deserialize_with<'de, D>(codec: &U128Codec, deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    if !deserializer.is_human_readable() {
        return u128::deserialize(deserializer);
    }
    deserializer.deserialize_newtype_struct(RAW_VALUE_TOKEN, U128Visitor { codec: *codec })
}

struct U128Visitor {
    codec: U128Codec,
}

impl<'de> Visitor<'de> for U128Visitor {
    type Value = u128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned 128-bit integer")
    }

    // serde_json: a single-entry map holding the raw value text
    fn visit_map<A>(self, map: A) -> Result<u128, A::Error>
    where
        A: MapAccess<'de>,
    {
        let raw = Box::<RawValue>::deserialize(MapAccessDeserializer::new(map))?;
        self.codec.decode(&*raw).map_err(de::Error::custom)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        u128::deserialize(deserializer)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
        Ok(u128::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
        u128::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }
}

/// `with` module for `u128` fields.
pub mod u128_raw {
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize_u128(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_with(&super::codec(), deserializer)
    }

    /// `with` module for `Option<u128>` fields; `null` maps to `None`.
    pub mod option {
        use crate::json::JsonU128;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &Option<u128>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(v) => serializer.serialize_some(&JsonU128(*v)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u128>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(Option::<JsonU128>::deserialize(deserializer)?.map(u128::from))
        }
    }
}

/// A `u128` that serializes as a bare JSON number without loss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonU128(pub u128);

impl Serialize for JsonU128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        u128_raw::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for JsonU128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u128_raw::deserialize(deserializer).map(JsonU128)
    }
}

impl From<u128> for JsonU128 {
    fn from(value: u128) -> Self {
        JsonU128(value)
    }
}

impl From<JsonU128> for u128 {
    fn from(value: JsonU128) -> Self {
        value.0
    }
}

impl fmt::Display for JsonU128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses with the installed codec's rules, including its literal length cap.
impl FromStr for JsonU128 {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec().decode_str(s).map(JsonU128)
    }
}
