use crate::core::alphabet::Alphabet;

use super::errors::{ConfigError, DecodeError};

/// Smallest radix the digit routines accept.
pub const MIN_DIGIT_RADIX: u32 = 2;
/// Largest radix the digit routines accept; every digit must fit a `u8`.
pub const MAX_DIGIT_RADIX: u32 = 256;

fn check_radix(radix: u32) -> Result<(), ConfigError> {
    if (MIN_DIGIT_RADIX..=MAX_DIGIT_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ConfigError::RadixOutOfRange {
            radix: radix as usize,
            min: MIN_DIGIT_RADIX as usize,
            max: MAX_DIGIT_RADIX as usize,
        })
    }
}

/// Multiplies the little-endian digit buffer by `multiplier` and adds
/// `addend`, propagating carry digit by digit and growing the buffer as
/// needed. Every digit stays below `radix`.
///
/// The buffer never gains a most-significant zero digit, so a buffer
/// built only through this function has no leading zeros. A `radix`
/// outside `[2, 256]` is rejected and leaves the buffer untouched.
///
/// ```
/// use base_codec::encoders::algorithms::math::multiply_add;
///
/// let mut digits = vec![5, 2]; // 25 in base 10
/// multiply_add(&mut digits, 256, 7, 10).unwrap(); // 25 * 256 + 7 = 6407
/// assert_eq!(digits, vec![7, 0, 4, 6]);
/// ```
pub fn multiply_add(
    digits: &mut Vec<u8>,
    multiplier: u32,
    addend: u32,
    radix: u32,
) -> Result<(), ConfigError> {
    check_radix(radix)?;
    multiply_add_digits(digits, multiplier, addend, radix);
    Ok(())
}

/// Re-expresses a big-endian number given in `from_radix` digits as
/// little-endian `to_radix` digits through repeated multiply-add.
///
/// Leading zero input digits vanish: zero converts to an empty buffer.
/// Both radices must lie in `[2, 256]`.
pub fn convert_radix<I>(
    digits: I,
    from_radix: u32,
    to_radix: u32,
    capacity: usize,
) -> Result<Vec<u8>, ConfigError>
where
    I: IntoIterator<Item = u8>,
{
    check_radix(from_radix)?;
    check_radix(to_radix)?;
    Ok(convert_digits(digits, from_radix, to_radix, capacity))
}

/// `radix` must already be in `[2, 256]`. The arithmetic runs in u64 and the
/// carry stays at most `256 * multiplier + addend`, so no u32 input overflows.
fn multiply_add_digits(digits: &mut Vec<u8>, multiplier: u32, addend: u32, radix: u32) {
    let radix = radix as u64;
    let multiplier = multiplier as u64;
    let mut carry = addend as u64;
    for digit in digits.iter_mut() {
        let value = *digit as u64 * multiplier + carry;
        *digit = (value % radix) as u8;
        carry = value / radix;
    }
    while carry > 0 {
        digits.push((carry % radix) as u8);
        carry /= radix;
    }
}

fn convert_digits<I>(digits: I, from_radix: u32, to_radix: u32, capacity: usize) -> Vec<u8>
where
    I: IntoIterator<Item = u8>,
{
    let mut result = Vec::with_capacity(capacity);
    for digit in digits {
        multiply_add_digits(&mut result, from_radix, digit as u32, to_radix);
    }
    result
}

/// Digits needed in `to_radix` for `len` digits of `from_radix`, plus one slack digit.
pub fn estimate_digits(len: usize, from_radix: u32, to_radix: u32) -> usize {
    let ratio = (from_radix as f64).ln() / (to_radix as f64).ln();
    ((len as f64 * ratio) as usize).saturating_add(1)
}

/// Codec treating the input as one big unsigned base-256 integer written
/// in the alphabet's radix (Base58, Base62, Base52 and the like).
///
/// Each leading zero byte becomes one copy of the zero-value symbol and
/// vice versa, so leading zeros survive the round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigIntegerCodec {
    alphabet: Alphabet,
}

impl BigIntegerCodec {
    pub fn new(alphabet: Alphabet) -> Self {
        BigIntegerCodec { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn encode(&self, data: &[u8]) -> String {
        let radix = self.alphabet.radix() as u32;
        let leading_zeros = data.iter().take_while(|&&b| b == 0).count();
        let significant = &data[leading_zeros..];

        let digits = convert_digits(
            significant.iter().copied(),
            256,
            radix,
            estimate_digits(significant.len(), 256, radix),
        );

        let zero = self.alphabet.symbol(0);
        let mut result = String::with_capacity(leading_zeros + digits.len());
        result.extend(std::iter::repeat_n(zero, leading_zeros));
        result.extend(digits.iter().rev().map(|&d| self.alphabet.symbol(d as usize)));
        result
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let radix = self.alphabet.radix() as u32;

        let mut values = Vec::with_capacity(encoded.len());
        for (position, c) in encoded.chars().enumerate() {
            let value = self.alphabet.value_of(c).ok_or_else(|| {
                DecodeError::invalid_character(c, position, encoded, &self.alphabet.describe())
            })?;
            values.push(value);
        }

        let leading_zeros = values.iter().take_while(|&&v| v == 0).count();
        let significant = &values[leading_zeros..];

        let bytes = convert_digits(
            significant.iter().copied(),
            radix,
            256,
            estimate_digits(significant.len(), radix, 256),
        );

        let mut result = Vec::with_capacity(leading_zeros + bytes.len());
        result.resize(leading_zeros, 0u8);
        result.extend(bytes.iter().rev());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::Zero;

    const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    fn base58() -> BigIntegerCodec {
        BigIntegerCodec::new(Alphabet::new(BASE58).unwrap())
    }

    #[test]
    fn test_multiply_add_grows_buffer() {
        let mut digits = Vec::new();
        multiply_add(&mut digits, 256, 0, 58).unwrap();
        assert!(digits.is_empty());

        multiply_add(&mut digits, 256, 255, 58).unwrap();
        assert_eq!(digits, vec![255 % 58, 255 / 58]);
    }

    #[test]
    fn test_out_of_range_radix_rejected() {
        for radix in [0, 1, 257, 300] {
            let expected = ConfigError::RadixOutOfRange {
                radix: radix as usize,
                min: 2,
                max: 256,
            };

            let mut digits = vec![1, 2];
            assert_eq!(multiply_add(&mut digits, 10, 3, radix).unwrap_err(), expected);
            assert_eq!(digits, vec![1, 2]);

            assert_eq!(convert_radix([1u8, 0], 256, radix, 0).unwrap_err(), expected);
            assert_eq!(convert_radix([1u8, 0], radix, 10, 0).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_radix_256_target_keeps_every_digit() {
        // 256 in base 10 is [6, 5, 2] little-endian
        assert_eq!(convert_radix([2u8, 5, 6], 10, 256, 0).unwrap(), vec![0, 1]);
        assert_eq!(convert_radix([1u8, 0], 256, 10, 0).unwrap(), vec![6, 5, 2]);
    }

    #[test]
    fn test_large_multiplier_does_not_overflow() {
        let mut digits = vec![255, 255];
        multiply_add(&mut digits, u32::MAX, u32::MAX, 256).unwrap();

        let expected = BigUint::from(0xFFFFu32) * BigUint::from(u32::MAX) + BigUint::from(u32::MAX);
        assert_eq!(digits, expected.to_bytes_le());
    }

    #[test]
    fn test_convert_radix_matches_bigint() {
        let inputs: [&[u8]; 4] = [b"Test", &[1, 0, 0, 0, 0], &[0xFF; 17], b"The quick brown fox"];
        for input in inputs {
            for radix in [2u32, 10, 36, 52, 58, 62, 85, 255] {
                let mut digits = convert_radix(input.iter().copied(), 256, radix, 0).unwrap();
                digits.reverse();

                let expected = BigUint::from_bytes_be(input).to_radix_be(radix);
                assert_eq!(digits, expected, "radix {}", radix);
            }
        }
    }

    #[test]
    fn test_convert_radix_back_and_forth() {
        let input = b"\x01\x02\x03\xfe\xff";
        let digits = convert_radix(input.iter().copied(), 256, 58, 0).unwrap();
        let mut bytes = convert_radix(digits.iter().rev().copied(), 58, 256, 0).unwrap();
        bytes.reverse();
        assert_eq!(bytes, input);
    }

    #[test]
    fn test_zero_converts_to_empty() {
        let digits = convert_radix([0u8, 0, 0], 256, 58, 0).unwrap();
        assert!(digits.is_empty());
        assert!(BigUint::from_bytes_be(&[0, 0, 0]).is_zero());
    }

    #[test]
    fn test_capacity_estimate() {
        assert_eq!(estimate_digits(0, 256, 58), 1);
        // 32 bytes need 44 base58 digits at most
        assert!(estimate_digits(32, 256, 58) >= 44);
        assert!(estimate_digits(44, 58, 256) >= 32);
    }

    #[test]
    fn test_underestimated_capacity_still_works() {
        let digits = convert_radix([0xFFu8; 64], 256, 2, 1).unwrap();
        assert_eq!(digits.len(), 512);
        assert!(digits.iter().all(|&d| d == 1));
    }

    #[test]
    fn test_base58_vectors() {
        let codec = base58();
        assert_eq!(codec.encode(b"A"), "28");
        assert_eq!(codec.encode(b"AB"), "5y3");
        assert_eq!(codec.encode(b"Test"), "3A836b");
        assert_eq!(codec.encode(b"TestTest"), "F7kVCJSZXKy");
        assert_eq!(
            codec.encode(b"The quick brown fox jumps over the lazy dog."),
            "USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z"
        );
        assert_eq!(codec.decode("2FwFnT").unwrap(), b"1234");
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let codec = base58();
        assert_eq!(codec.encode(&[0, 0, 1]), "112");
        assert_eq!(codec.encode(&[1]), "2");
        assert_eq!(codec.decode("112").unwrap(), vec![0, 0, 1]);
        assert_eq!(codec.encode(&[0, 0, 0, 0]), "1111");
        assert_eq!(codec.decode("1111").unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_empty() {
        let codec = base58();
        assert_eq!(codec.encode(&[]), "");
        assert_eq!(codec.decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_invalid_character() {
        // '0', 'O', 'I' and 'l' are not part of base58
        for (input, bad) in [("2F0FnT", '0'), ("O", 'O'), ("3AI", 'I'), ("l", 'l')] {
            match base58().decode(input) {
                Err(DecodeError::InvalidCharacter { char, .. }) => assert_eq!(char, bad),
                other => panic!("unexpected result for {}: {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_power_of_two_radix_is_true_base_conversion() {
        let codec = BigIntegerCodec::new(Alphabet::new("0123456789abcdef").unwrap());
        assert_eq!(codec.encode(&[0x01, 0x00]), "100");
        assert_eq!(codec.decode("100").unwrap(), vec![0x01, 0x00]);
    }
}
