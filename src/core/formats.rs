//! Named codec variants.
//!
//! Every [`Format`] maps to one fixed codec. [`Format::build`] returns a
//! fresh owned codec; [`Format::shared`] returns a process-wide instance
//! that is built on first use and never rebuilt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::core::alphabet::{Alphabet, AlphabetBuilder};
use crate::encoders::algorithms::ascii85::Ascii85Codec;
use crate::encoders::algorithms::chunked::BitGroupCodec;
use crate::encoders::algorithms::errors::{FormatNotFoundError, find_closest_name};
use crate::encoders::algorithms::math::BigIntegerCodec;
use crate::encoders::codec::Codec;

/// Upper-case letters, lower-case letters, digits.
pub const BASE62_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const BASE58_SYMBOLS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const BASE52_LETTER_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const BASE52_CONSONANT_SYMBOLS: &str = "0123456789BCDFGHJKLMNPQRSTVWXYZbcdfghjklmnpqrstvwxyz";

pub const BASE32_RFC4648_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub const BASE32_HEX_SYMBOLS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
pub const ZBASE32_SYMBOLS: &str = "ybndrfg8ejkmcpqxot1uwisza345h769";
pub const CROCKFORD_SYMBOLS: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

pub const Z85_SYMBOLS: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

const PADDING: char = '=';
const ASCII85_ZERO_RUN: char = 'z';

/// Look-alike characters Crockford decoding folds onto digits.
const CROCKFORD_ALIASES: [(char, usize); 6] =
    [('O', 0), ('o', 0), ('I', 1), ('i', 1), ('L', 1), ('l', 1)];

/// The closed set of built-in codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// RFC 4648 Base64 with `+`, `/` and `=` padding
    Base64,
    Base64NoPadding,
    /// URL-safe Base64 (`-`, `_`), unpadded
    Base64Url,
    /// XML-name-safe Base64 (`_`, `:`), unpadded
    Base64Xml,
    /// Regular-expression-safe Base64 (`!`, `-`), unpadded
    Base64Regex,
    /// File-name-safe Base64 (`+`, `-`), unpadded
    Base64File,
    /// RFC 4648 Base32, padded
    Base32,
    /// RFC 4648 "extended hex" Base32, padded
    Base32Hex,
    /// Human-oriented Base32, unpadded
    Zbase32,
    /// Crockford Base32: unpadded, case-insensitive, look-alikes accepted
    Crockford,
    /// Classic Ascii85 with `z` zero-run and whitespace skipping
    Ascii85,
    /// ZeroMQ Z85
    Z85,
    Base58,
    Base62,
    /// Letters only
    Base52,
    /// Digits and consonants
    Base52NoVowels,
}

impl Format {
    pub const ALL: [Format; 16] = [
        Format::Base64,
        Format::Base64NoPadding,
        Format::Base64Url,
        Format::Base64Xml,
        Format::Base64Regex,
        Format::Base64File,
        Format::Base32,
        Format::Base32Hex,
        Format::Zbase32,
        Format::Crockford,
        Format::Ascii85,
        Format::Z85,
        Format::Base58,
        Format::Base62,
        Format::Base52,
        Format::Base52NoVowels,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Format::Base64 => "base64",
            Format::Base64NoPadding => "base64-no-padding",
            Format::Base64Url => "base64-url",
            Format::Base64Xml => "base64-xml",
            Format::Base64Regex => "base64-regex",
            Format::Base64File => "base64-file",
            Format::Base32 => "base32",
            Format::Base32Hex => "base32-hex",
            Format::Zbase32 => "zbase32",
            Format::Crockford => "crockford",
            Format::Ascii85 => "ascii85",
            Format::Z85 => "z85",
            Format::Base58 => "base58",
            Format::Base62 => "base62",
            Format::Base52 => "base52",
            Format::Base52NoVowels => "base52-no-vowels",
        }
    }

    /// Builds a new codec for this format.
    pub fn build(self) -> Codec {
        let alphabet = self.alphabet_builder().assemble();
        match self {
            Format::Ascii85 => Ascii85Codec::assemble(alphabet, Some(ASCII85_ZERO_RUN), true).into(),
            Format::Z85 => Ascii85Codec::assemble(alphabet, None, false).into(),
            Format::Base58 | Format::Base62 | Format::Base52 | Format::Base52NoVowels => {
                BigIntegerCodec::new(alphabet).into()
            }
            _ => BitGroupCodec::assemble(alphabet).into(),
        }
    }

    /// Returns the process-wide codec for this format, building it on first use.
    pub fn shared(self) -> &'static Codec {
        static SHARED: [OnceLock<Codec>; Format::ALL.len()] = [const { OnceLock::new() }; Format::ALL.len()];
        SHARED[self as usize].get_or_init(|| self.build())
    }

    /// The alphabet this format encodes with.
    pub fn alphabet(self) -> Alphabet {
        self.alphabet_builder().assemble()
    }

    pub(crate) fn alphabet_builder(self) -> AlphabetBuilder {
        let builder = Alphabet::builder();
        match self {
            Format::Base64 => builder.symbols(&base64_symbols('+', '/')).padding(PADDING),
            Format::Base64NoPadding => builder.symbols(&base64_symbols('+', '/')),
            Format::Base64Url => builder.symbols(&base64_symbols('-', '_')),
            Format::Base64Xml => builder.symbols(&base64_symbols('_', ':')),
            Format::Base64Regex => builder.symbols(&base64_symbols('!', '-')),
            Format::Base64File => builder.symbols(&base64_symbols('+', '-')),
            Format::Base32 => builder.symbols(BASE32_RFC4648_SYMBOLS).padding(PADDING),
            Format::Base32Hex => builder.symbols(BASE32_HEX_SYMBOLS).padding(PADDING),
            Format::Zbase32 => builder.symbols(ZBASE32_SYMBOLS),
            Format::Crockford => CROCKFORD_ALIASES
                .iter()
                .fold(builder.symbols(CROCKFORD_SYMBOLS), |b, &(alias, value)| {
                    b.alias(alias, value)
                })
                .fold_case(true),
            Format::Ascii85 => builder.symbol_vec(('!'..='u').collect()),
            Format::Z85 => builder.symbols(Z85_SYMBOLS),
            Format::Base58 => builder.symbols(BASE58_SYMBOLS),
            Format::Base62 => builder.symbols(BASE62_SYMBOLS),
            Format::Base52 => builder.symbols(BASE52_LETTER_SYMBOLS),
            Format::Base52NoVowels => builder.symbols(BASE52_CONSONANT_SYMBOLS),
        }
    }
}

fn base64_symbols(value62: char, value63: char) -> String {
    let mut symbols = String::with_capacity(64);
    symbols.push_str(BASE62_SYMBOLS);
    symbols.push(value62);
    symbols.push(value63);
    symbols
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatNotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Format::ALL.iter().map(|f| f.name()).collect();
                FormatNotFoundError::new(s, find_closest_name(&wanted, &names))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::codec::TextCodec;

    #[test]
    fn test_builtin_alphabets_are_valid() {
        for format in Format::ALL {
            let validated = format.alphabet_builder().build();
            assert_eq!(validated, Ok(format.alphabet()), "{}", format);
        }
    }

    #[test]
    fn test_builtin_codecs_accept_their_alphabets() {
        for format in Format::ALL {
            let alphabet = format.alphabet();
            let checked: Codec = match format.build() {
                Codec::BitGroup(_) => BitGroupCodec::new(alphabet).unwrap().into(),
                Codec::Ascii85(codec) => {
                    Ascii85Codec::new(alphabet, codec.zero_run(), codec.skips_whitespace())
                        .unwrap()
                        .into()
                }
                Codec::BigInteger(_) => BigIntegerCodec::new(alphabet).into(),
            };
            assert_eq!(checked, format.build(), "{}", format);
        }
    }

    #[test]
    fn test_radix_per_format() {
        assert_eq!(Format::Base64Url.alphabet().radix(), 64);
        assert_eq!(Format::Crockford.alphabet().radix(), 32);
        assert_eq!(Format::Ascii85.alphabet().radix(), 85);
        assert_eq!(Format::Z85.alphabet().radix(), 85);
        assert_eq!(Format::Base58.alphabet().radix(), 58);
        assert_eq!(Format::Base52NoVowels.alphabet().radix(), 52);
    }

    #[test]
    fn test_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
            assert_eq!(format.to_string(), format.name());
        }
        assert_eq!("Base64".parse::<Format>().unwrap(), Format::Base64);
    }

    #[test]
    fn test_unknown_name_suggests() {
        let err = "bas64".parse::<Format>().unwrap_err();
        assert_eq!(err.name, "bas64");
        assert_eq!(err.suggestion.as_deref(), Some("base64"));

        let err = "uuencode".parse::<Format>().unwrap_err();
        assert_eq!(err.suggestion, None);
    }

    #[test]
    fn test_serde_names_match() {
        for format in Format::ALL {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format.name()));
        }
    }

    #[test]
    fn test_shared_is_built_once() {
        let first = Format::Base58.shared();
        let second = Format::Base58.shared();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.encode(b"Test"), "3A836b");
    }

    #[test]
    fn test_shared_is_safe_under_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Format::Z85.shared() as *const Codec as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_base64_variants_differ_in_two_symbols() {
        let data = [0xfb, 0xff, 0xbf];
        assert_eq!(Format::Base64.build().encode(&data), "+/+/");
        assert_eq!(Format::Base64Url.build().encode(&data), "-_-_");
        assert_eq!(Format::Base64Xml.build().encode(&data), "_:_:");
        assert_eq!(Format::Base64Regex.build().encode(&data), "!-!-");
        assert_eq!(Format::Base64File.build().encode(&data), "+-+-");
    }
}
