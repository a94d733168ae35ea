use crate::core::alphabet::Alphabet;
use num_integer::lcm;

use super::errors::{ConfigError, DecodeError};

/// Fixed-ratio codec for power-of-two alphabets (Base64, Base32 and kin).
///
/// Input is read as one big-endian bit stream and cut into groups of
/// `log2(radix)` bits. Work happens block by block, where a block is the
/// smallest run of whole bytes that splits into whole symbols
/// (3 bytes / 4 symbols for 6-bit groups, 5 bytes / 8 symbols for 5-bit
/// groups). The final partial block is zero-filled and, when the alphabet
/// has a padding symbol, padded out to a full block of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGroupCodec {
    alphabet: Alphabet,
    bits: usize,
    block_bytes: usize,
    block_symbols: usize,
}

impl BitGroupCodec {
    pub fn new(alphabet: Alphabet) -> Result<Self, ConfigError> {
        let radix = alphabet.radix();
        if !radix.is_power_of_two() || radix > 128 {
            return Err(ConfigError::UnsupportedAlphabet(format!(
                "bit-group codecs need a power-of-two radix between 2 and 128, got {}",
                radix
            )));
        }

        Ok(Self::assemble(alphabet))
    }

    /// Derives the block geometry; the radix must already be a power of two.
    pub(crate) fn assemble(alphabet: Alphabet) -> Self {
        let bits = (alphabet.radix().trailing_zeros() as usize).max(1);
        let block_bits = lcm(bits, 8);

        BitGroupCodec {
            alphabet,
            bits,
            block_bytes: block_bits / 8,
            block_symbols: block_bits / bits,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Bits carried by each symbol.
    pub fn bits_per_symbol(&self) -> usize {
        self.bits
    }

    /// Bytes and symbols in one full block.
    pub fn block_size(&self) -> (usize, usize) {
        (self.block_bytes, self.block_symbols)
    }

    /// Number of symbols `encode` produces for `len` input bytes.
    pub fn encoded_len(&self, len: usize) -> usize {
        let symbols = (len * 8).div_ceil(self.bits);
        if self.alphabet.padding().is_some() {
            symbols.div_ceil(self.block_symbols) * self.block_symbols
        } else {
            symbols
        }
    }

    pub fn encode(&self, data: &[u8]) -> String {
        let mut result = String::with_capacity(self.encoded_len(data.len()));

        let blocks = data.chunks_exact(self.block_bytes);
        let remainder = blocks.remainder();

        for block in blocks {
            self.push_symbols(&mut result, pack_bytes(block), self.block_symbols);
        }

        if !remainder.is_empty() {
            // Zero-fill the missing low bits of the last block
            let mut padded = [0u8; 8];
            padded[..remainder.len()].copy_from_slice(remainder);
            let buffer = pack_bytes(&padded[..self.block_bytes]);

            let used = (remainder.len() * 8).div_ceil(self.bits);
            self.push_symbols(&mut result, buffer, used);

            if let Some(pad) = self.alphabet.padding() {
                for _ in used..self.block_symbols {
                    result.push(pad);
                }
            }
        }

        result
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let chars: Vec<char> = encoded.chars().collect();
        let body_len = self.strip_padding(&chars)?;

        let mut values = Vec::with_capacity(body_len);
        for (position, &c) in chars[..body_len].iter().enumerate() {
            match self.alphabet.value_of(c) {
                Some(value) => values.push(value),
                None if Some(c) == self.alphabet.padding() => {
                    return Err(DecodeError::InvalidPadding);
                }
                None => {
                    return Err(DecodeError::invalid_character(
                        c,
                        position,
                        encoded,
                        &self.alphabet.describe(),
                    ));
                }
            }
        }

        let residue = values.len() % self.block_symbols;
        if residue > 0 && !self.is_valid_residue(residue) {
            return Err(DecodeError::truncated(residue, self.describe_residues()));
        }

        let mut result = Vec::with_capacity(values.len() * self.bits / 8);

        let blocks = values.chunks_exact(self.block_symbols);
        let remainder = blocks.remainder();

        for block in blocks {
            self.push_bytes(&mut result, self.pack_values(block), self.block_bytes);
        }

        if !remainder.is_empty() {
            // Trailing pad bits that do not complete a byte are dropped
            let produced = remainder.len() * self.bits / 8;
            self.push_bytes(&mut result, self.pack_values(remainder), produced);
        }

        Ok(result)
    }

    /// Returns the length of `chars` without its trailing padding, checking
    /// that any padding present completes the final block exactly.
    fn strip_padding(&self, chars: &[char]) -> Result<usize, DecodeError> {
        let Some(pad) = self.alphabet.padding() else {
            return Ok(chars.len());
        };

        let body_len = chars.iter().rposition(|&c| c != pad).map_or(0, |i| i + 1);
        let pad_count = chars.len() - body_len;
        if pad_count == 0 {
            return Ok(body_len);
        }

        let residue = body_len % self.block_symbols;
        if residue == 0 || pad_count != self.block_symbols - residue {
            return Err(DecodeError::InvalidPadding);
        }

        Ok(body_len)
    }

    /// A residue is valid when some count of trailing bytes encodes to it.
    fn is_valid_residue(&self, residue: usize) -> bool {
        (1..self.block_bytes).any(|bytes| (bytes * 8).div_ceil(self.bits) == residue)
    }

    fn describe_residues(&self) -> String {
        let valid: Vec<String> = (1..self.block_bytes)
            .map(|bytes| (bytes * 8).div_ceil(self.bits).to_string())
            .collect();
        format!(
            "0 or {} symbols after the last full block of {}",
            valid.join(", "),
            self.block_symbols
        )
    }

    /// Emits the first `count` symbols of a packed block, most significant first.
    fn push_symbols(&self, result: &mut String, buffer: u64, count: usize) {
        let block_bits = self.block_symbols * self.bits;
        let mask = (1u64 << self.bits) - 1;
        for i in 0..count {
            let shift = block_bits - self.bits * (i + 1);
            result.push(self.alphabet.symbol(((buffer >> shift) & mask) as usize));
        }
    }

    /// Emits the first `count` bytes of a packed block, most significant first.
    fn push_bytes(&self, result: &mut Vec<u8>, buffer: u64, count: usize) {
        let block_bits = self.block_bytes * 8;
        for i in 0..count {
            result.push((buffer >> (block_bits - 8 * (i + 1))) as u8);
        }
    }

    /// Packs up to one block of symbol values, left-aligned within the block.
    fn pack_values(&self, values: &[u8]) -> u64 {
        let packed = values
            .iter()
            .fold(0u64, |acc, &value| (acc << self.bits) | value as u64);
        packed << ((self.block_symbols - values.len()) * self.bits)
    }
}

/// Packs a block of bytes into the low bits of a u64, big-endian.
fn pack_bytes(block: &[u8]) -> u64 {
    block.iter().fold(0u64, |acc, &byte| (acc << 8) | byte as u64)
}
