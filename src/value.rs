//! Immutable encoded values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::formats::Format;
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::codec::TextCodec;

/// Bytes paired with their text form in a given [`Format`].
///
/// Two values are equal when format and text are equal. A parsed value
/// keeps the text exactly as given, so `"TWE"` and `"TWE="` are different
/// values even though they carry the same bytes.
///
/// Serializes as `{ "format": ..., "value": ... }`; deserializing decodes
/// `value` again and fails if it is not valid for `format`.
///
/// ```
/// use base_codec::{Encoded, Format};
///
/// let encoded = Encoded::new(b"Test".to_vec(), Format::Base32);
/// assert_eq!(encoded.value(), "KRSXG5A=");
///
/// let parsed = Encoded::parse("KRSXG5A=", Format::Base32).unwrap();
/// assert_eq!(parsed, encoded);
/// assert_eq!(parsed.raw(), b"Test");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EncodedRepr", into = "EncodedRepr")]
pub struct Encoded {
    format: Format,
    value: String,
    raw: Vec<u8>,
}

#[derive(Serialize, Deserialize)]
struct EncodedRepr {
    format: Format,
    value: String,
}

impl Encoded {
    /// Encodes `raw` with `format`.
    pub fn new(raw: impl Into<Vec<u8>>, format: Format) -> Self {
        let raw = raw.into();
        let value = format.shared().encode(&raw);
        Encoded { format, value, raw }
    }

    /// Decodes `text` with `format`.
    pub fn parse(text: &str, format: Format) -> Result<Self, DecodeError> {
        let raw = format.shared().decode(text)?;
        Ok(Encoded {
            format,
            value: text.to_string(),
            raw,
        })
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }
}

impl PartialEq for Encoded {
    fn eq(&self, other: &Self) -> bool {
        self.format == other.format && self.value == other.value
    }
}

impl Eq for Encoded {}

impl Hash for Encoded {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.format.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<EncodedRepr> for Encoded {
    type Error = DecodeError;

    fn try_from(repr: EncodedRepr) -> Result<Self, Self::Error> {
        Encoded::parse(&repr.value, repr.format)
    }
}

impl From<Encoded> for EncodedRepr {
    fn from(encoded: Encoded) -> Self {
        EncodedRepr {
            format: encoded.format,
            value: encoded.value,
        }
    }
}
