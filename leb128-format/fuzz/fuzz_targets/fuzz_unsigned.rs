#![no_main]

use leb128_format::{decode_u64_prefix, decode_u64_with, encode_u64, DecodeOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = decode_u64_with(data, &DecodeOptions::truncating());

    if let Ok((value, consumed)) = decode_u64_prefix(data) {
        assert!(consumed <= data.len());
        let reencoded = encode_u64(value);
        assert!(reencoded.len() <= consumed);
        assert_eq!(decode_u64_prefix(&reencoded), Ok((value, reencoded.len())));
    }
});
