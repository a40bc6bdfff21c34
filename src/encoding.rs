//! Provides [Encoding] and the machinery shared by the encode and decode
//! operations.

use num_bigint::BigUint;

/// Marks a byte that is not part of the alphabet in [Encoding::decode_table].
pub(crate) const NOT_A_DIGIT: i16 = -1;

/// A radix encoding/decoding scheme defined by an ordered alphabet of unique
/// symbols.
///
/// The position of a symbol in the alphabet is its digit value, and the number
/// of symbols is the radix of the positional number system used to interpret
/// input. [crate::BASE58] and [crate::BASE62] are provided as ready-made
/// instances, and custom alphabets can be made via the
/// [From](#impl-From<T>-for-Encoding) implementation.
///
/// ```
/// let flickr = basen::Encoding::from(
///     "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ",
/// );
///
/// assert_eq!("rTu1dk6cWsRYjYu", flickr.encode(b"hello world"));
/// ```
///
/// An `Encoding` is read-only once constructed; any number of threads may
/// share one and encode or decode concurrently without coordination.
#[derive(Clone, Debug)]
pub struct Encoding {
    /// Digit value -> symbol. Alphabet order is load-bearing.
    alphabet: Box<[u8]>,
    /// Symbol byte -> digit value, [NOT_A_DIGIT] for bytes outside the
    /// alphabet.
    decode_table: [i16; 256],
    /// The radix as a big integer, cached for the arbitrary-precision
    /// division/multiplication loops.
    radix: BigUint,
    /// log2(radix). Only used to estimate buffer capacities, never for
    /// correctness.
    bits_per_symbol: f64,
}

impl Encoding {
    /// The number of symbols in the alphabet, i.e. the base of the positional
    /// number system.
    pub fn radix(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the maximum number of symbols needed to encode `n` bytes of
    /// input.
    ///
    /// This is an upper bound, not an exact size: leading zero bytes collapse
    /// (see [Encoding::encode]), so the actual output can be shorter.
    pub fn encoded_len(&self, n: usize) -> usize {
        ((n * 8) as f64 / self.bits_per_symbol).ceil() as usize
    }

    /// Returns the maximum number of bytes that `n` symbols of encoded input
    /// can decode to.
    pub fn decoded_len(&self, n: usize) -> usize {
        (n as f64 * self.bits_per_symbol / 8.0).ceil() as usize
    }

    /// The symbol for digit value `digit`.
    ///
    /// Digits handed to this are always remainders of division by the radix,
    /// so the index is in bounds.
    pub(crate) fn symbol(&self, digit: usize) -> u8 {
        self.alphabet[digit]
    }

    pub(crate) fn big_radix(&self) -> &BigUint {
        &self.radix
    }

    /// The digit value of `c`, or `None` if `c` is not in the alphabet.
    ///
    /// Characters above U+00FF can never be alphabet members (symbols are
    /// single bytes) and always come back `None`.
    pub(crate) fn digit(&self, c: char) -> Option<usize> {
        let code_point = c as usize;
        if code_point >= self.decode_table.len() {
            return None;
        }

        match self.decode_table[code_point] {
            NOT_A_DIGIT => None,
            digit => Some(digit as usize),
        }
    }
}

impl<T: AsRef<str>> From<T> for Encoding {
    /// Create an `Encoding` from a string of at least 2 printable ASCII
    /// symbols. Each symbol must be unique.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid alphabet. Alphabets are likely to
    /// be hardcoded, so errors are generally unrecoverable programmer errors.
    fn from(string: T) -> Self {
        let alphabet = string.as_ref().as_bytes();
        assert!(
            alphabet.len() >= 2,
            "Alphabet must have at least 2 symbols"
        );

        for &byte in alphabet {
            // 127 (DEL) is commonly considered printable but is clearly
            // unsuitable for transport-safe output.
            assert!(
                (32_u8..127_u8).contains(&byte),
                "Symbols must be printable ASCII"
            );
        }

        // Building the inverse table doubles as the uniqueness check: a slot
        // that is already taken means a duplicate symbol.
        let mut decode_table = [NOT_A_DIGIT; 256];
        for (digit, &byte) in alphabet.iter().enumerate() {
            assert!(
                decode_table[byte as usize] == NOT_A_DIGIT,
                "Duplicate symbol {:?}",
                byte as char
            );
            decode_table[byte as usize] = digit as i16;
        }

        Encoding {
            alphabet: alphabet.into(),
            decode_table,
            radix: BigUint::from(alphabet.len()),
            bits_per_symbol: (alphabet.len() as f64).log2(),
        }
    }
}
