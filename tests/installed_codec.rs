//! Process-wide codec installed from configuration
//!
//! Kept in its own test binary: the installed codec cannot be replaced, so
//! every assertion about it lives in one test.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use serde::{Deserialize, Serialize};
use u128_json::config::CodecConfig;
use u128_json::core::codec::MAX_DIGITS;
use u128_json::json::{self, u128_raw, JsonU128};
use u128_json::CodecError;

const MAX_TEXT: &str = "340282366920938463463374607431768211455";

#[derive(Debug, Serialize, Deserialize)]
struct Balance {
    #[serde(with = "u128_raw")]
    amount: u128,
}

fn balance_json(literal: &str) -> String {
    format!(r#"{{"amount":{literal}}}"#)
}

#[test]
fn test_installed_config_drives_decoding() {
    // 40 digits: past the range, and past a 39-digit cap
    let forty_digits = format!("1{}", "0".repeat(MAX_DIGITS));

    let err = serde_json::from_str::<Balance>(&balance_json(&forty_digits)).unwrap_err();
    assert!(
        err.to_string().contains("value exceeds 2^128 - 1"),
        "unexpected error: {err}"
    );
    assert_eq!("007".parse::<JsonU128>().unwrap(), JsonU128(7));

    let config = CodecConfig::from_toml(&format!(
        "allow_leading_zeros = false\nmax_literal_len = {MAX_DIGITS}"
    ))
    .expect("parse toml");
    json::install(&config).expect("first install");
    assert_eq!(json::codec().max_literal_len(), MAX_DIGITS);
    assert!(!json::codec().allows_leading_zeros());

    // The cap is now checked before the digits are parsed
    let err = serde_json::from_str::<Balance>(&balance_json(&forty_digits)).unwrap_err();
    assert!(
        err.to_string().contains("literal exceeds maximum length"),
        "unexpected error: {err}"
    );

    let balance: Balance = serde_json::from_str(&balance_json(MAX_TEXT)).expect("installed codec");
    assert_eq!(balance.amount, u128::MAX);

    assert!("007".parse::<JsonU128>().is_err());
    assert!(format!("0{MAX_TEXT}").parse::<JsonU128>().is_err());
    assert_eq!(MAX_TEXT.parse::<JsonU128>().unwrap(), JsonU128(u128::MAX));

    assert!(matches!(
        json::install(&CodecConfig::default()),
        Err(CodecError::ConfigError(_))
    ));
    assert_eq!(json::codec().max_literal_len(), MAX_DIGITS);
}
