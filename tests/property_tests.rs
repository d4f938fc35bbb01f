//! Property-based tests using proptest
//!
//! These tests validate the codec's round-trip and canonical-form guarantees
//! across the full u128 range.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use u128_json::core::token::{RawToken, TokenKind};
use u128_json::json::JsonU128;
use u128_json::{FormatError, U128Codec, ValueCodec};

// Values spread over every magnitude, not just near u128::MAX
fn any_magnitude() -> impl Strategy<Value = u128> {
    prop_oneof![
        any::<u128>(),
        any::<u64>().prop_map(u128::from),
        (0u32..128, any::<u128>()).prop_map(|(bits, v)| v >> bits),
        Just(0u128),
        Just(u128::MAX),
        Just(1u128 << 53),
        Just((1u128 << 53) + 1),
    ]
}

// Property: decode(encode(v)) == v
proptest! {
    #[test]
    fn prop_codec_roundtrip(value in any_magnitude()) {
        let codec = U128Codec::default();
        let text = codec.encode_to_string(value);
        prop_assert_eq!(codec.decode_str(&text).expect("decode"), value);
    }
}

// Property: encoded text is canonical decimal
proptest! {
    #[test]
    fn prop_encode_canonical(value in any_magnitude()) {
        let text = U128Codec::default().encode_to_string(value);

        prop_assert!(!text.is_empty());
        prop_assert!(text.bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(text == "0" || !text.starts_with('0'));
        prop_assert_eq!(text, value.to_string());
    }
}

// Property: strict codec also accepts everything encode produces
proptest! {
    #[test]
    fn prop_strict_codec_accepts_canonical(value in any_magnitude()) {
        let codec = U128Codec::new().with_leading_zeros(false);
        let text = codec.encode_to_string(value);
        prop_assert_eq!(codec.decode_str(&text).expect("decode"), value);
    }
}

// Property: JSON document round-trip preserves the exact value
proptest! {
    #[test]
    fn prop_json_document_roundtrip(values in prop::collection::vec(any_magnitude(), 0..32)) {
        let wrapped: Vec<JsonU128> = values.iter().copied().map(JsonU128).collect();
        let json = serde_json::to_string(&wrapped).expect("serialize");

        // The document is a plain array of numbers
        prop_assert!(!json.contains('"'));

        let recovered: Vec<JsonU128> = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(recovered, wrapped);
    }
}

// Property: any non-number token kind is rejected regardless of text
proptest! {
    #[test]
    fn prop_non_number_kind_rejected(
        kind in prop_oneof![
            Just(TokenKind::String),
            Just(TokenKind::Boolean),
            Just(TokenKind::Null),
            Just(TokenKind::ArrayStart),
            Just(TokenKind::ObjectStart),
            Just(TokenKind::Unknown),
        ],
        digits in "[0-9]{1,39}",
    ) {
        let token = RawToken::new(kind, digits.as_bytes());
        let result = U128Codec::default().decode(&token);
        prop_assert_eq!(result, Err(FormatError::UnexpectedToken(kind)));
    }
}

// Property: decode never panics on arbitrary bytes
proptest! {
    #[test]
    fn prop_decode_arbitrary_bytes_never_panics(data in prop::collection::vec(any::<u8>(), 0..80)) {
        let token = RawToken::new(TokenKind::Number, &data);
        let result = U128Codec::default().decode(&token);

        if result.is_ok() {
            prop_assert!(!data.is_empty());
            prop_assert!(data.iter().all(u8::is_ascii_digit));
        }
    }
}

// Property: a sign, point, exponent or surrounding space always fails
proptest! {
    #[test]
    fn prop_decorated_literal_rejected(
        value in any::<u64>(),
        decoration in prop_oneof![
            Just("-{}"), Just("+{}"), Just("{}.0"), Just("{}e1"),
            Just(" {}"), Just("{} "), Just("{}\n"),
        ],
    ) {
        let text = decoration.replace("{}", &value.to_string());
        prop_assert!(U128Codec::default().decode_str(&text).is_err());
    }
}

// Property: values past u128::MAX are rejected, not wrapped
proptest! {
    #[test]
    fn prop_overflow_rejected(extra in 1u8..=9, value in any::<u128>()) {
        // value * 10 + extra overflows whenever value > u128::MAX / 10
        let value = value.max(u128::MAX / 10 + 1);
        let text = format!("{value}{extra}");
        prop_assert!(U128Codec::default().decode_str(&text).is_err());
    }
}
