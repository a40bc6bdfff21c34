use std::str;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::encoding::Encoding;

impl Encoding {
    /// Encode arbitrary bytes as a radix string.
    ///
    /// The input is read as one big-endian unsigned integer, so leading zero
    /// bytes do not survive a roundtrip: `[0, 1]` encodes the same as `[1]`,
    /// and empty or all-zero input encodes to the empty string. Use a scheme
    /// with an explicit length or zero-count prefix if that matters to you.
    ///
    /// # Example
    ///
    /// ```
    /// let encoded = basen::BASE58.encode(b"Hello");
    ///
    /// assert_eq!("9Ajdvzr", encoded);
    /// ```
    pub fn encode(&self, input: &[u8]) -> String {
        self.encode_biguint(&BigUint::from_bytes_be(input))
    }

    /// Encode arbitrary bytes as a radix string, appending to `buf`.
    ///
    /// Useful to amortize allocations when encoding repeatedly. Identical to
    /// [Encoding::encode] otherwise, including the treatment of leading zero
    /// bytes.
    ///
    /// # Example
    ///
    /// ```
    /// let mut buf = String::from("id-");
    /// basen::BASE62.encode_buf(b"Hello", &mut buf);
    ///
    /// assert_eq!("id-5TP3P3v", buf);
    /// ```
    pub fn encode_buf(&self, input: &[u8], buf: &mut String) {
        self.encode_biguint_buf(&BigUint::from_bytes_be(input), buf)
    }

    /// Encode a non-negative arbitrary-precision integer as a radix string.
    ///
    /// Zero encodes to the empty string.
    pub fn encode_biguint(&self, n: &BigUint) -> String {
        let mut buf = String::new();
        self.encode_biguint_buf(n, &mut buf);
        buf
    }

    /// Encode a non-negative arbitrary-precision integer as a radix string,
    /// appending to `buf`.
    pub fn encode_biguint_buf(&self, n: &BigUint, buf: &mut String) {
        let byte_len = ((n.bits() + 7) / 8) as usize;
        let mut digits = Vec::with_capacity(self.encoded_len(byte_len));

        // Repeated division produces digits least significant first.
        let mut value = n.clone();
        while !value.is_zero() {
            let (quotient, remainder) = value.div_rem(self.big_radix());
            let digit = remainder
                .to_usize()
                .expect("remainder of division by the radix fits in usize");
            digits.push(self.symbol(digit));
            value = quotient;
        }

        digits.reverse();
        buf.push_str(str::from_utf8(&digits).expect("alphabet symbols are ASCII"));
    }

    /// Encode a machine integer as a radix string.
    ///
    /// Faster than [Encoding::encode] when the value already is a bounded
    /// numeric id (e.g. a database row id) rather than an opaque byte buffer.
    ///
    /// Values less than or equal to zero encode to the empty string, matching
    /// the zero-byte behavior of [Encoding::encode]; callers with possibly
    /// negative values must check before encoding.
    ///
    /// # Example
    ///
    /// ```
    /// assert_eq!("W", basen::BASE62.encode_i64(32));
    /// assert_eq!("", basen::BASE62.encode_i64(0));
    /// ```
    pub fn encode_i64(&self, n: i64) -> String {
        let radix = self.radix() as i64;
        let mut digits = Vec::with_capacity(self.encoded_len(8));

        let mut value = n;
        while value > 0 {
            digits.push(self.symbol((value % radix) as usize));
            value /= radix;
        }

        digits.reverse();
        String::from_utf8(digits).expect("alphabet symbols are ASCII")
    }
}
