use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::ascii85::Ascii85Codec;
use crate::encoders::algorithms::chunked::BitGroupCodec;
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::algorithms::math::BigIntegerCodec;

/// Common surface of every byte codec.
///
/// Implementors supply `encode` and `decode`; the text helpers route UTF-8
/// strings through them.
pub trait TextCodec {
    fn encode(&self, data: &[u8]) -> String;

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError>;

    /// Encodes the UTF-8 bytes of `text`.
    fn encode_text(&self, text: &str) -> String {
        self.encode(text.as_bytes())
    }

    /// Decodes `encoded` and requires the result to be valid UTF-8.
    fn decode_text(&self, encoded: &str) -> Result<String, DecodeError> {
        String::from_utf8(self.decode(encoded)?).map_err(DecodeError::InvalidUtf8)
    }
}

impl TextCodec for BitGroupCodec {
    fn encode(&self, data: &[u8]) -> String {
        BitGroupCodec::encode(self, data)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        BitGroupCodec::decode(self, encoded)
    }
}

impl TextCodec for Ascii85Codec {
    fn encode(&self, data: &[u8]) -> String {
        Ascii85Codec::encode(self, data)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        Ascii85Codec::decode(self, encoded)
    }
}

impl TextCodec for BigIntegerCodec {
    fn encode(&self, data: &[u8]) -> String {
        BigIntegerCodec::encode(self, data)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        BigIntegerCodec::decode(self, encoded)
    }
}

/// A byte codec of any kind, chosen at runtime from a format or a
/// configuration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Codec {
    BitGroup(BitGroupCodec),
    Ascii85(Ascii85Codec),
    BigInteger(BigIntegerCodec),
}

impl Codec {
    pub fn alphabet(&self) -> &Alphabet {
        match self {
            Codec::BitGroup(codec) => codec.alphabet(),
            Codec::Ascii85(codec) => codec.alphabet(),
            Codec::BigInteger(codec) => codec.alphabet(),
        }
    }

    /// Short name of the algorithm family, as used in configuration files.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Codec::BitGroup(_) => "bit_group",
            Codec::Ascii85(_) => "ascii85",
            Codec::BigInteger(_) => "big_integer",
        }
    }
}

impl TextCodec for Codec {
    fn encode(&self, data: &[u8]) -> String {
        match self {
            Codec::BitGroup(codec) => codec.encode(data),
            Codec::Ascii85(codec) => codec.encode(data),
            Codec::BigInteger(codec) => codec.encode(data),
        }
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        match self {
            Codec::BitGroup(codec) => codec.decode(encoded),
            Codec::Ascii85(codec) => codec.decode(encoded),
            Codec::BigInteger(codec) => codec.decode(encoded),
        }
    }
}

impl From<BitGroupCodec> for Codec {
    fn from(codec: BitGroupCodec) -> Self {
        Codec::BitGroup(codec)
    }
}

impl From<Ascii85Codec> for Codec {
    fn from(codec: Ascii85Codec) -> Self {
        Codec::Ascii85(codec)
    }
}

impl From<BigIntegerCodec> for Codec {
    fn from(codec: BigIntegerCodec) -> Self {
        Codec::BigInteger(codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex() -> Codec {
        let alphabet = Alphabet::new("0123456789abcdef").unwrap();
        BitGroupCodec::new(alphabet).unwrap().into()
    }

    #[test]
    fn test_dispatch() {
        let codec = hex();
        assert_eq!(codec.kind_name(), "bit_group");
        assert_eq!(codec.encode(&[0xde, 0xad]), "dead");
        assert_eq!(codec.decode("beef").unwrap(), vec![0xbe, 0xef]);
    }

    #[test]
    fn test_text_helpers() {
        let codec = hex();
        assert_eq!(codec.encode_text("hi"), "6869");
        assert_eq!(codec.decode_text("6869").unwrap(), "hi");
    }

    #[test]
    fn test_decode_text_rejects_invalid_utf8() {
        let codec = hex();
        assert!(matches!(
            codec.decode_text("ff"),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_big_integer_dispatch() {
        let alphabet = Alphabet::new("0123456789").unwrap();
        let codec: Codec = BigIntegerCodec::new(alphabet).into();
        assert_eq!(codec.kind_name(), "big_integer");
        assert_eq!(codec.encode(&[1, 0]), "256");
        assert_eq!(codec.alphabet().radix(), 10);
    }
}
