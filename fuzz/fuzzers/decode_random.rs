#![no_main]
use libfuzzer_sys::fuzz_target;

use basen::{BASE58, BASE62};

fuzz_target!(|data: &[u8]| {
    // decoding arbitrary text must either succeed or return an error,
    // never panic
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = BASE58.decode(s);
        let _ = BASE62.decode(s);
        let _ = BASE58.decode_i64(s);
        let _ = BASE62.decode_i64(s);
    }
});
