#![no_main]

use leb128_format::{decode_big_signed_prefix, encode_big_signed};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((value, consumed)) = decode_big_signed_prefix(data) {
        assert!(consumed <= data.len());
        let reencoded = encode_big_signed(&value);
        assert!(reencoded.len() <= consumed);
        let (roundtrip, len) = decode_big_signed_prefix(&reencoded).expect("canonical decode");
        assert_eq!(roundtrip, value);
        assert_eq!(len, reencoded.len());
    }
});
