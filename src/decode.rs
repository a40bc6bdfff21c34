use std::{error, fmt};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::encoding::Encoding;

/// Errors that can occur while decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// A character that is not part of the alphabet was found in the input.
    /// The radix of the rejecting encoding and the offending character are
    /// provided.
    ///
    /// The character is the full Unicode code point, so multi-byte characters
    /// in the input are reported intact rather than as a mangled byte.
    InvalidCharacter { radix: usize, character: char },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::InvalidCharacter { radix, character } => {
                write!(
                    f,
                    "string contains invalid base{} character: {:?}",
                    radix, character
                )
            }
        }
    }
}

impl error::Error for DecodeError {}

impl Encoding {
    /// Decode a radix string back into bytes.
    ///
    /// Returns the minimal big-endian byte representation of the decoded
    /// value: no leading zero bytes, and the empty string decodes to an empty
    /// `Vec`. Paired with [Encoding::encode]'s treatment of leading zero
    /// bytes, this means `decode(encode(b))` equals `b` with any leading zero
    /// bytes stripped.
    ///
    /// Fails on the first character that is not in the alphabet; nothing is
    /// returned on failure.
    ///
    /// # Example
    ///
    /// ```
    /// let decoded = basen::BASE58.decode("9Ajdvzr").unwrap();
    ///
    /// assert_eq!(b"Hello".to_vec(), decoded);
    /// ```
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let n = self.decode_biguint(input)?;
        if n.is_zero() {
            // BigUint renders zero as [0]; the minimal representation here is
            // no bytes at all.
            return Ok(Vec::new());
        }

        Ok(n.to_bytes_be())
    }

    /// Decode a radix string into a non-negative arbitrary-precision integer.
    ///
    /// The empty string decodes to zero.
    pub fn decode_biguint(&self, input: &str) -> Result<BigUint, DecodeError> {
        let mut n = BigUint::zero();

        for c in input.chars() {
            let digit = self.digit(c).ok_or(DecodeError::InvalidCharacter {
                radix: self.radix(),
                character: c,
            })?;
            n = n * self.big_radix() + digit as u32;
        }

        Ok(n)
    }

    /// Decode a radix string into a machine integer.
    ///
    /// The counterpart of [Encoding::encode_i64]. Input representing a value
    /// past 64 bits wraps; this path trades range checking for speed, so feed
    /// it strings produced by `encode_i64`.
    ///
    /// # Example
    ///
    /// ```
    /// assert_eq!(Ok(32), basen::BASE62.decode_i64("W"));
    /// ```
    pub fn decode_i64(&self, input: &str) -> Result<i64, DecodeError> {
        let radix = self.radix() as i64;
        let mut n: i64 = 0;

        for c in input.chars() {
            let digit = self.digit(c).ok_or(DecodeError::InvalidCharacter {
                radix: self.radix(),
                character: c,
            })?;
            n = n.wrapping_mul(radix).wrapping_add(digit as i64);
        }

        Ok(n)
    }
}
