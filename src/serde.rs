//! Serialize byte fields as radix-encoded strings with
//! `#[serde(with = ...)]`.
//!
//! ```
//! # use serde::{Deserialize, Serialize};
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "basen::serde::base62")]
//!     payload: Vec<u8>,
//! }
//! ```
//!
//! Leading zero bytes in the field do not survive a serialize/deserialize
//! roundtrip; see [crate::Encoding::encode].

macro_rules! encoding_helper {
    ($mod_name:ident, $encoding:expr, $docname:literal) => {
        #[doc = concat!("Field helpers using the ", $docname, " encoding.")]
        pub mod $mod_name {
            use serde::{de, Deserialize, Deserializer, Serializer};

            pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&$encoding.encode(bytes))
            }

            pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = <&str>::deserialize(deserializer)?;
                $encoding.decode(s).map_err(de::Error::custom)
            }
        }
    };
}

encoding_helper!(base58, crate::BASE58, "base58");
encoding_helper!(base62, crate::BASE62, "base62");
