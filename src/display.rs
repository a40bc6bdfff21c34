//! Enables radix-encoded display of byte data without an intermediate
//! variable.

use std::fmt::{self, Display, Formatter};

use crate::encoding::Encoding;

/// A convenience wrapper for encoding bytes into a format string.
///
/// The most significant digit depends on the entire value, so the whole
/// encoded form is produced in one pass when formatted (one transient
/// allocation per `fmt` call).
///
/// ```
/// use basen::display::EncodingDisplay;
///
/// let wrapped = EncodingDisplay::from(b"Hello", &basen::BASE58);
/// assert_eq!("key: 9Ajdvzr", format!("key: {}", wrapped));
/// ```
pub struct EncodingDisplay<'a> {
    bytes: &'a [u8],
    encoding: &'a Encoding,
}

impl<'a> EncodingDisplay<'a> {
    /// Create an `EncodingDisplay` formatting `bytes` with `encoding`.
    pub fn from(bytes: &'a [u8], encoding: &'a Encoding) -> EncodingDisplay<'a> {
        EncodingDisplay { bytes, encoding }
    }
}

impl<'a> Display for EncodingDisplay<'a> {
    fn fmt(&self, formatter: &mut Formatter) -> Result<(), fmt::Error> {
        formatter.write_str(&self.encoding.encode(self.bytes))
    }
}
