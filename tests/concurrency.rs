use std::sync::Arc;
use tokio::task::JoinSet;
use u128_json::json::JsonU128;
use u128_json::U128Codec;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_encode_decode_heavy() {
    let iterations = 20_000u128;
    let seeds = [0u128, 1 << 53, 1 << 64, u128::MAX / 3, u128::MAX - 20_000];
    let codec = Arc::new(U128Codec::default());

    let mut tasks = JoinSet::new();
    for &seed in &seeds {
        let codec = codec.clone();
        tasks.spawn(async move {
            for i in 0..iterations {
                let value = seed.wrapping_add(i.wrapping_mul(0x9E37_79B9_7F4A_7C15));
                let text = codec.encode_to_string(value);
                assert_eq!(codec.decode_str(&text).unwrap(), value);

                let json = serde_json::to_string(&JsonU128(value)).unwrap();
                assert_eq!(json, text);
                let back: JsonU128 = serde_json::from_str(&json).unwrap();
                assert_eq!(back.0, value);
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }
}
