//! Example: lossless u128 values in JSON
//!
//! Shows why u128 must not go through f64, and how the codec keeps every digit.
//!
//! Run with: `cargo run --example raw_u128`

#![allow(clippy::uninlined_format_args)]

use serde::{Deserialize, Serialize};
use u128_json::core::serialization::{MultiFormat, SerializationFormat};
use u128_json::json::u128_raw;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Partition {
    id: u32,
    #[serde(with = "u128_raw")]
    offset: u128,
}

impl MultiFormat for Partition {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Lossless u128 in JSON ===\n");

    let partition = Partition {
        id: 1,
        offset: 12_345_678_901_234_567_890_123_456_789_012_345_678,
    };

    // 1. What a float-backed reader sees
    println!("1. THROUGH f64");
    let as_float = partition.offset as f64;
    println!("   - Original: {}", partition.offset);
    println!("   - Via f64:  {}", as_float as u128);
    println!();

    // 2. Raw literal
    println!("2. RAW LITERAL");
    let json = partition.serialize_format(SerializationFormat::Json)?;
    let json_str = std::str::from_utf8(&json)?;
    println!("   - JSON: {}", json_str);

    let recovered = Partition::deserialize_format(&json, SerializationFormat::Json)?;
    println!(
        "   - Roundtrip: {}",
        if partition == recovered {
            "✓ Success"
        } else {
            "✗ Failed"
        }
    );
    println!();

    // 3. Rejected input
    println!("3. REJECTED INPUT");
    for doc in [
        r#"{"id":1,"offset":"42"}"#,
        r#"{"id":1,"offset":4.2e1}"#,
        r#"{"id":1,"offset":340282366920938463463374607431768211456}"#,
    ] {
        match Partition::deserialize_format(doc.as_bytes(), SerializationFormat::Json) {
            Ok(p) => println!("   - {} -> accepted {:?}", doc, p),
            Err(e) => println!("   - {} -> {}", doc, e),
        }
    }

    Ok(())
}
