//! Binary-to-text codecs.
//!
//! Bytes are turned into printable symbols by one of three algorithm
//! families, each driven by an [`Alphabet`]:
//!
//! - [`BitGroupCodec`] for power-of-two alphabets (Base64, Base32 and kin)
//! - [`Ascii85Codec`] for 85-symbol tuple encodings (Ascii85, Z85)
//! - [`BigIntegerCodec`] for any other radix (Base58, Base62, Base52)
//!
//! [`RadixEncoder`] writes a single `i64` in positional notation.
//! [`Format`] names the built-in variants and [`CodecRegistry`] loads more
//! from TOML.
//!
//! ```
//! use base_codec::{Format, decode, encode};
//!
//! let codec = Format::Crockford.shared();
//! let text = encode(b"Test", codec);
//! assert_eq!(text, "AHJQ6X0");
//! assert_eq!(decode("ahjq6xo", codec).unwrap(), b"Test");
//! ```

pub mod convenience;
pub mod core;
pub mod encoders;
pub mod prelude;
mod value;

pub use crate::core::alphabet::{Alphabet, AlphabetBuilder};
pub use crate::core::config::{CodecConfig, CodecKind, CodecRegistry};
pub use crate::core::formats::Format;
pub use crate::encoders::algorithms::ascii85::Ascii85Codec;
pub use crate::encoders::algorithms::chunked::BitGroupCodec;
pub use crate::encoders::algorithms::errors::{
    ConfigError, DecodeError, FormatNotFoundError, find_closest_name,
};
pub use crate::encoders::algorithms::math::BigIntegerCodec;
pub use crate::encoders::algorithms::radix::RadixEncoder;
pub use crate::encoders::codec::{Codec, TextCodec};
pub use crate::value::Encoded;

/// Encodes `data` with `codec`.
pub fn encode(data: &[u8], codec: &Codec) -> String {
    codec.encode(data)
}

/// Decodes `encoded` with `codec`.
pub fn decode(encoded: &str, codec: &Codec) -> Result<Vec<u8>, DecodeError> {
    codec.decode(encoded)
}
