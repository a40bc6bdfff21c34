use rand::{Rng, SeedableRng};

use basen::{DecodeError, Encoding, BASE58, BASE62};

mod helpers;
use crate::helpers::*;

#[test]
fn encode_reference_vectors_base62() {
    compare_encode("5TP3P3v", b"Hello", &BASE62);
    compare_encode("W", b" ", &BASE62);
    compare_encode("AAwf93rvy4aWQVw", b"hello world", &BASE62);
}

#[test]
fn encode_reference_vectors_base58() {
    compare_encode("9Ajdvzr", b"Hello", &BASE58);
    compare_encode("Z", b" ", &BASE58);
    compare_encode("StV1DL6CwTryKyV", b"hello world", &BASE58);
}

#[test]
fn decode_reference_vectors_base62() {
    compare_decode("Hello", "5TP3P3v", &BASE62);
    compare_decode(" ", "W", &BASE62);
    compare_decode("hello world", "AAwf93rvy4aWQVw", &BASE62);
}

#[test]
fn decode_reference_vectors_base58() {
    compare_decode("Hello", "9Ajdvzr", &BASE58);
    compare_decode(" ", "Z", &BASE58);
    compare_decode("hello world", "StV1DL6CwTryKyV", &BASE58);
}

#[test]
fn decode_reference_errors() {
    assert_eq!(
        Err(DecodeError::InvalidCharacter {
            radix: 62,
            character: '-',
        }),
        BASE62.decode("-")
    );
    assert_eq!(
        Err(DecodeError::InvalidCharacter {
            radix: 58,
            character: '-',
        }),
        BASE58.decode("-")
    );
}

#[test]
fn int64_reference_vectors() {
    assert_eq!("W", BASE62.encode_i64(32));
    assert_eq!("Z", BASE58.encode_i64(32));
    assert_eq!(Ok(32), BASE62.decode_i64("W"));
    assert_eq!(Ok(32), BASE58.decode_i64("Z"));

    assert_eq!(
        Err(DecodeError::InvalidCharacter {
            radix: 62,
            character: '-',
        }),
        BASE62.decode_i64("-")
    );
    assert_eq!(
        Err(DecodeError::InvalidCharacter {
            radix: 58,
            character: '-',
        }),
        BASE58.decode_i64("-")
    );
}

#[test]
fn alphabet_bijection() {
    for (encoding, alphabet) in [
        (&*BASE58, basen::BASE58_ALPHABET),
        (&*BASE62, basen::BASE62_ALPHABET),
    ] {
        for (position, symbol) in alphabet.chars().enumerate() {
            let decoded = encoding.decode_biguint(&symbol.to_string()).unwrap();
            assert_eq!(basen::BigUint::from(position), decoded);
        }
    }
}

#[test]
fn leading_zero_bytes_collapse() {
    assert_eq!("", BASE62.encode(b""));
    assert_eq!("", BASE62.encode(&[0]));
    assert_eq!("", BASE62.encode(&[0, 0, 0]));
    assert_eq!(BASE62.encode(&[7, 7]), BASE62.encode(&[0, 0, 7, 7]));

    // decode(encode(b)) strips the leading zeros rather than restoring them
    let decoded = BASE62.decode(&BASE62.encode(&[0, 0, 7, 7])).unwrap();
    assert_eq!(vec![7, 7], decoded);
}

#[test]
fn encoded_length_grows_monotonically() {
    for encoding in [&*BASE58, &*BASE62] {
        let mut previous = 0;
        for len in 1..64 {
            let input = vec![0xff; len];
            let encoded = encoding.encode(&input);
            assert!(
                encoded.len() >= previous,
                "len {} encoded shorter than len {}",
                len,
                len - 1
            );
            assert!(encoded.len() <= encoding.encoded_len(len));
            previous = encoded.len();
        }
    }
}

// generate random contents of the specified length and test encode/decode
// roundtrip
fn roundtrip_random(
    byte_buf: &mut Vec<u8>,
    str_buf: &mut String,
    encoding: &Encoding,
    byte_len: usize,
    rounds: u64,
) {
    let mut r = rand::rngs::SmallRng::from_entropy();

    for _ in 0..rounds {
        byte_buf.clear();
        str_buf.clear();
        while byte_buf.len() < byte_len {
            byte_buf.push(r.gen::<u8>());
        }
        // keep the roundtrip exact: leading zero bytes don't survive encoding
        if byte_len > 0 && byte_buf[0] == 0 {
            byte_buf[0] = r.gen_range(1..=u8::MAX);
        }

        encoding.encode_buf(byte_buf, str_buf);
        let decoded = encoding.decode(str_buf).unwrap();

        assert_eq!(byte_buf, &decoded);
    }
}

#[test]
fn roundtrip_random_short() {
    let mut byte_buf: Vec<u8> = Vec::new();
    let mut str_buf = String::new();

    for encoding in [&*BASE58, &*BASE62] {
        for input_len in 0..20 {
            roundtrip_random(&mut byte_buf, &mut str_buf, encoding, input_len, 500);
        }
    }
}

#[test]
fn roundtrip_random_long() {
    let mut byte_buf: Vec<u8> = Vec::new();
    let mut str_buf = String::new();

    for encoding in [&*BASE58, &*BASE62] {
        for input_len in [32, 64, 200, 1024] {
            roundtrip_random(&mut byte_buf, &mut str_buf, encoding, input_len, 50);
        }
    }
}

#[test]
fn roundtrip_random_i64() {
    let mut r = rand::rngs::SmallRng::from_entropy();

    for _ in 0..10_000 {
        let n = r.gen_range(0..i64::MAX);
        assert_eq!(Ok(n), BASE58.decode_i64(&BASE58.encode_i64(n)));
        assert_eq!(Ok(n), BASE62.decode_i64(&BASE62.encode_i64(n)));
    }
}

#[test]
fn roundtrip_doubling_buffers() {
    // mirrors the original doubling-buffer suite: 1, 2, 4, ... 32 copies
    for seed in [0x01_u8, 0xaa, 0xff] {
        let mut expected = vec![seed];
        for _ in 0..5 {
            expected.extend_from_slice(&expected.clone());
            for encoding in [&*BASE58, &*BASE62] {
                let encoded = encoding.encode(&expected);
                assert_eq!(expected, encoding.decode(&encoded).unwrap());
            }
        }
    }
}

#[test]
fn roundtrip_powers_of_two_i64() {
    for i in 0..62 {
        let expected = (2_i64 << i) - 1;
        for encoding in [&*BASE58, &*BASE62] {
            let encoded = encoding.encode_i64(expected);
            assert_eq!(Ok(expected), encoding.decode_i64(&encoded));
        }
    }
}

#[test]
fn custom_alphabet_roundtrip() {
    let hex = Encoding::from("0123456789abcdef");
    assert_eq!("48656c6c6f", hex.encode(b"Hello"));
    assert_eq!(b"Hello".to_vec(), hex.decode("48656c6c6f").unwrap());

    let binary = Encoding::from("01");
    assert_eq!("100000", binary.encode(&[32]));
    assert_eq!(vec![32], binary.decode("100000").unwrap());
}
