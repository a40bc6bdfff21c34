#![no_main]
use libfuzzer_sys::fuzz_target;

use basen::{BASE58, BASE62};

fuzz_target!(|data: &[u8]| {
    // leading zero bytes don't survive a roundtrip; compare without them
    let first_nonzero = data.iter().position(|&b| b != 0).unwrap_or(data.len());
    let significant = &data[first_nonzero..];

    for encoding in [&*BASE58, &*BASE62] {
        let encoded = encoding.encode(data);
        let decoded = encoding.decode(&encoded).unwrap();
        assert_eq!(significant, decoded.as_slice());
    }
});
