//! Text helpers over the named formats.
//!
//! These route UTF-8 strings through the shared codec of a [`Format`].

use crate::core::formats::Format;
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::codec::TextCodec;

/// Encodes the UTF-8 bytes of `text`.
///
/// # Example
/// ```
/// use base_codec::{Format, convenience::encode_text};
///
/// assert_eq!(encode_text("Test", Format::Base58), "3A836b");
/// ```
pub fn encode_text(text: &str, format: Format) -> String {
    format.shared().encode_text(text)
}

/// Decodes `encoded` and interprets the bytes as UTF-8.
///
/// # Example
/// ```
/// use base_codec::{Format, convenience::decode_text};
///
/// assert_eq!(decode_text("<+U,m", Format::Ascii85).unwrap(), "Test");
/// ```
pub fn decode_text(encoded: &str, format: Format) -> Result<String, DecodeError> {
    format.shared().decode_text(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_round_trip() {
        for format in Format::ALL {
            let text = "héllo wörld";
            let encoded = encode_text(text, format);
            assert_eq!(decode_text(&encoded, format).unwrap(), text, "{}", format);
        }
    }

    #[test]
    fn test_invalid_utf8() {
        // 0xFF 0xFE is not UTF-8
        let encoded = Format::Base64.shared().encode(&[0xff, 0xfe]);
        assert!(matches!(
            decode_text(&encoded, Format::Base64),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }
}
