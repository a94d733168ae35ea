//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in base-codec.
//!
//! # Example
//!
//! ```
//! use base_codec::prelude::*;
//!
//! let codec = Format::Base64.build();
//! assert_eq!(codec.encode(b"Ma"), "TWE=");
//! ```

pub use crate::{
    // Building blocks
    Alphabet,
    Ascii85Codec,
    BigIntegerCodec,
    BitGroupCodec,
    Codec,
    // Config
    CodecKind,
    CodecRegistry,
    // Errors
    ConfigError,
    DecodeError,
    Encoded,
    // Named formats
    Format,
    FormatNotFoundError,
    RadixEncoder,
    TextCodec,
    // Convenience functions
    convenience::{decode_text, encode_text},
    // Core encoding/decoding
    decode,
    encode,
};
