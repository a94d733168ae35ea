use crate::core::alphabet::Alphabet;
use crate::core::formats::{BASE52_CONSONANT_SYMBOLS, BASE52_LETTER_SYMBOLS, BASE62_SYMBOLS};
use num_integer::Integer;

use super::errors::{ConfigError, DecodeError};

const DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SIGN: char = '-';

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// Positional notation for a single signed 64-bit integer.
///
/// Digits are written most significant first with a leading `-` for
/// negative values. The default alphabet is "0-9A-Z" truncated to the radix
/// and decodes case-insensitively; custom alphabets decode exactly.
///
/// ```
/// use base_codec::RadixEncoder;
///
/// let hex = RadixEncoder::new(16).unwrap();
/// assert_eq!(hex.encode(-255), "-FF");
/// assert_eq!(hex.decode("ff").unwrap(), 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixEncoder {
    alphabet: Alphabet,
}

impl RadixEncoder {
    /// Radix in `[2, 36]` over "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ".
    pub fn new(radix: u32) -> Result<Self, ConfigError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(ConfigError::RadixOutOfRange {
                radix: radix as usize,
                min: MIN_RADIX as usize,
                max: MAX_RADIX as usize,
            });
        }

        let alphabet = Alphabet::builder()
            .symbols(&DIGITS[..radix as usize])
            .fold_case(true)
            .assemble();
        Ok(RadixEncoder { alphabet })
    }

    /// Any alphabet that leaves the sign character free.
    pub fn with_alphabet(alphabet: Alphabet) -> Result<Self, ConfigError> {
        if alphabet.contains(SIGN) || alphabet.padding() == Some(SIGN) {
            return Err(ConfigError::ReservedSymbol(SIGN));
        }
        Ok(RadixEncoder { alphabet })
    }

    /// Base 62 over "A-Z a-z 0-9"; zero is "A".
    pub fn radix62() -> Self {
        Self::assemble(BASE62_SYMBOLS)
    }

    /// Base 52 over the ASCII letters.
    pub fn radix52_without_digits() -> Self {
        Self::assemble(BASE52_LETTER_SYMBOLS)
    }

    /// Base 52 over digits and consonants.
    pub fn radix52_without_vowels() -> Self {
        Self::assemble(BASE52_CONSONANT_SYMBOLS)
    }

    fn assemble(symbols: &str) -> Self {
        RadixEncoder {
            alphabet: Alphabet::builder().symbols(symbols).assemble(),
        }
    }

    pub fn radix(&self) -> u32 {
        self.alphabet.radix() as u32
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn encode(&self, value: i64) -> String {
        let radix = self.alphabet.radix() as u64;
        let mut magnitude = value.unsigned_abs();
        if magnitude == 0 {
            return self.alphabet.symbol(0).to_string();
        }

        // 64 binary digits plus the sign at most
        let mut reversed = Vec::with_capacity(65);
        while magnitude > 0 {
            let (quotient, remainder) = magnitude.div_rem(&radix);
            reversed.push(self.alphabet.symbol(remainder as usize));
            magnitude = quotient;
        }
        if value < 0 {
            reversed.push(SIGN);
        }

        reversed.iter().rev().collect()
    }

    /// Parses an optionally signed digit string.
    ///
    /// Whitespace is not skipped: blank input is `EmptyInput`, and a space
    /// anywhere else is an invalid character.
    pub fn decode(&self, encoded: &str) -> Result<i64, DecodeError> {
        if encoded.trim().is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let (negative, digits) = match encoded.strip_prefix(SIGN) {
            Some(rest) => (true, rest),
            None => (false, encoded),
        };
        if digits.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let offset = usize::from(negative);
        let radix = self.alphabet.radix() as u64;

        let mut magnitude: u64 = 0;
        for (index, c) in digits.chars().enumerate() {
            let digit = self.alphabet.value_of(c).ok_or_else(|| {
                DecodeError::invalid_character(
                    c,
                    offset + index,
                    encoded,
                    &self.alphabet.describe(),
                )
            })?;
            magnitude = magnitude
                .checked_mul(radix)
                .and_then(|m| m.checked_add(digit as u64))
                .ok_or(DecodeError::Overflow)?;
        }

        if negative {
            0i64.checked_sub_unsigned(magnitude).ok_or(DecodeError::Overflow)
        } else {
            i64::try_from(magnitude).map_err(|_| DecodeError::Overflow)
        }
    }
}
