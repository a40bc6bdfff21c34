//! Radix encoding and decoding of binary data with custom alphabets.
//!
//! An [Encoding] treats its alphabet as the digit set of a positional number
//! system: input bytes are read as one big-endian integer and written out in
//! base N, where N is the number of symbols in the alphabet. That produces
//! compact, transport-safe strings from ids, hashes and keys without padding
//! characters. [BASE58] and [BASE62] are provided ready-made; any other
//! alphabet of unique printable ASCII symbols works the same way.
//!
//! # Examples
//!
//! ```
//! let encoded = basen::BASE62.encode(b"Hello");
//! assert_eq!("5TP3P3v", encoded);
//!
//! let decoded = basen::BASE62.decode(&encoded).unwrap();
//! assert_eq!(b"Hello".to_vec(), decoded);
//! ```
//!
//! Numeric ids skip the arbitrary-precision machinery:
//!
//! ```
//! let slug = basen::BASE58.encode_i64(3429195);
//! assert_eq!(3429195, basen::BASE58.decode_i64(&slug).unwrap());
//! ```
//!
//! Decoding validates every character:
//!
//! ```
//! use basen::DecodeError;
//!
//! let err = basen::BASE58.decode("0 is not base58").unwrap_err();
//! assert_eq!(
//!     DecodeError::InvalidCharacter { radix: 58, character: '0' },
//!     err,
//! );
//! ```
//!
//! # Leading zero bytes
//!
//! A positional number has no notion of leading zeros, so `[0x00, 0x01]`
//! encodes identically to `[0x01]` and all-zero input encodes to the empty
//! string. Round trips are exact only for input without leading zero bytes;
//! this is inherent to the scheme, not an error, and is spelled out on the
//! affected operations.

#[macro_use]
extern crate lazy_static;

mod decode;
pub mod display;
mod encode;
mod encoding;
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::decode::DecodeError;
pub use crate::encoding::Encoding;

// BigUint is part of the public API (encode_biguint/decode_biguint), so
// re-export it rather than making callers match dependency versions.
pub use num_bigint::BigUint;

/// The base58 alphabet: the alphanumeric characters minus `0`, `O`, `I` and
/// `l`, which are easily confused with each other when printed.
pub const BASE58_ALPHABET: &str =
    "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The base62 alphabet: all the alphanumeric characters.
pub const BASE62_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

lazy_static! {
    /// The standard base58 encoding, built from [BASE58_ALPHABET].
    ///
    /// Designed for data that human users read, enter or copy from a visual
    /// source: no visually ambiguous characters, a double click selects the
    /// whole string, and the output is URL safe without escaping.
    pub static ref BASE58: Encoding = Encoding::from(BASE58_ALPHABET);

    /// The standard base62 encoding, built from [BASE62_ALPHABET].
    ///
    /// Useful for generating compact strings that are URL safe and survive
    /// copy and paste (a double click selects the whole string).
    pub static ref BASE62: Encoding = Encoding::from(BASE62_ALPHABET);
}
