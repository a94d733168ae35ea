use crate::core::alphabet::Alphabet;
use num_integer::Integer;

use super::errors::{ConfigError, DecodeError};

const TUPLE_BYTES: usize = 4;
const TUPLE_SYMBOLS: usize = 5;
const RADIX: u32 = 85;

/// Base-85 tuple codec: 4 bytes become 5 symbols.
///
/// Each tuple is read as a big-endian u32 and written as five base-85 digits,
/// most significant first. A final partial tuple of `k` bytes is zero-filled
/// and only its first `k + 1` symbols are kept; decoding refills the missing
/// symbols with the highest digit (84) and keeps `k` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ascii85Codec {
    alphabet: Alphabet,
    zero_run: Option<char>,
    skip_whitespace: bool,
}

impl Ascii85Codec {
    /// `zero_run` is the shortcut symbol for an all-zero tuple (`'z'` in
    /// classic Ascii85); `skip_whitespace` makes decoding ignore whitespace.
    pub fn new(
        alphabet: Alphabet,
        zero_run: Option<char>,
        skip_whitespace: bool,
    ) -> Result<Self, ConfigError> {
        if alphabet.radix() != RADIX as usize {
            return Err(ConfigError::UnsupportedAlphabet(format!(
                "ascii85 needs exactly 85 symbols, got {}",
                alphabet.radix()
            )));
        }
        if let Some(z) = zero_run {
            if alphabet.contains(z) || Some(z) == alphabet.padding() {
                return Err(ConfigError::ReservedSymbol(z));
            }
        }

        Ok(Self::assemble(alphabet, zero_run, skip_whitespace))
    }

    pub(crate) fn assemble(alphabet: Alphabet, zero_run: Option<char>, skip_whitespace: bool) -> Self {
        Ascii85Codec {
            alphabet,
            zero_run,
            skip_whitespace,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn zero_run(&self) -> Option<char> {
        self.zero_run
    }

    pub fn skips_whitespace(&self) -> bool {
        self.skip_whitespace
    }

    pub fn encode(&self, data: &[u8]) -> String {
        let mut result = String::with_capacity(data.len().div_ceil(TUPLE_BYTES) * TUPLE_SYMBOLS);

        let tuples = data.chunks_exact(TUPLE_BYTES);
        let remainder = tuples.remainder();

        for tuple in tuples {
            let value = u32::from_be_bytes([tuple[0], tuple[1], tuple[2], tuple[3]]);
            match self.zero_run {
                Some(z) if value == 0 => result.push(z),
                _ => self.push_tuple(&mut result, value, TUPLE_SYMBOLS),
            }
        }

        if !remainder.is_empty() {
            // Never shortcut a partial tuple, even when it is all zeros
            let mut padded = [0u8; TUPLE_BYTES];
            padded[..remainder.len()].copy_from_slice(remainder);
            self.push_tuple(
                &mut result,
                u32::from_be_bytes(padded),
                remainder.len() + 1,
            );
        }

        result
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let mut result = Vec::with_capacity(encoded.len() / TUPLE_SYMBOLS * TUPLE_BYTES + 3);
        let mut value: u64 = 0;
        let mut count = 0usize;

        for (position, c) in encoded.chars().enumerate() {
            if self.skip_whitespace && c.is_whitespace() {
                continue;
            }

            if count == 0 && Some(c) == self.zero_run {
                result.extend_from_slice(&[0; TUPLE_BYTES]);
                continue;
            }

            let digit = self.alphabet.value_of(c).ok_or_else(|| {
                DecodeError::invalid_character(c, position, encoded, &self.alphabet.describe())
            })?;

            value = value * RADIX as u64 + digit as u64;
            count += 1;

            if count == TUPLE_SYMBOLS {
                result.extend_from_slice(&tuple_bytes(value)?);
                value = 0;
                count = 0;
            }
        }

        match count {
            0 => {}
            1 => {
                return Err(DecodeError::truncated(1, "a final group of 2 to 5 symbols"));
            }
            _ => {
                // Simulate the missing symbols with the highest digit
                for _ in count..TUPLE_SYMBOLS {
                    value = value * RADIX as u64 + (RADIX - 1) as u64;
                }
                let bytes = tuple_bytes(value)?;
                result.extend_from_slice(&bytes[..count - 1]);
            }
        }

        Ok(result)
    }

    /// Writes the first `count` base-85 digits of `value`, most significant first.
    fn push_tuple(&self, result: &mut String, mut value: u32, count: usize) {
        let mut digits = [0u32; TUPLE_SYMBOLS];
        for digit in digits.iter_mut().rev() {
            let (quotient, remainder) = value.div_rem(&RADIX);
            *digit = remainder;
            value = quotient;
        }
        for &digit in &digits[..count] {
            result.push(self.alphabet.symbol(digit as usize));
        }
    }
}

/// Five base-85 digits can exceed u32::MAX ("s8W-!" is the largest valid tuple).
fn tuple_bytes(value: u64) -> Result<[u8; TUPLE_BYTES], DecodeError> {
    u32::try_from(value)
        .map(u32::to_be_bytes)
        .map_err(|_| DecodeError::Overflow)
}
