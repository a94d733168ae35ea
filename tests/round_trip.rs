//! Round trips over random inputs for every named format.

use base_codec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

#[test]
fn test_random_round_trips() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for format in Format::ALL {
        let codec = format.build();
        for _ in 0..200 {
            let len = rng.random_range(0..64);
            let data = random_bytes(&mut rng, len);
            let encoded = encode(&data, &codec);
            let decoded = decode(&encoded, &codec).unwrap();
            assert_eq!(decoded, data, "{} failed on {:?}", format, data);
        }
    }
}

#[test]
fn test_leading_zeros_survive() {
    let mut rng = StdRng::seed_from_u64(7);

    for format in Format::ALL {
        let codec = format.build();
        for zeros in 0..6 {
            let mut data = vec![0u8; zeros];
            data.extend(random_bytes(&mut rng, 5));
            let decoded = decode(&encode(&data, &codec), &codec).unwrap();
            assert_eq!(decoded, data, "{}", format);
        }
    }
}

#[test]
fn test_all_zero_inputs() {
    for format in Format::ALL {
        let codec = format.build();
        for len in 0..12 {
            let data = vec![0u8; len];
            assert_eq!(decode(&encode(&data, &codec), &codec).unwrap(), data, "{}", format);
        }
    }
}

#[test]
fn test_encoded_text_stays_in_alphabet() {
    let mut rng = StdRng::seed_from_u64(99);

    for format in Format::ALL {
        let codec = format.build();
        let alphabet = codec.alphabet();
        let data = random_bytes(&mut rng, 40);
        for c in encode(&data, &codec).chars() {
            let allowed = alphabet.symbols().contains(&c)
                || Some(c) == alphabet.padding()
                || (format == Format::Ascii85 && c == 'z');
            assert!(allowed, "{} emitted {:?}", format, c);
        }
    }
}

#[test]
fn test_padded_output_is_block_aligned() {
    let mut rng = StdRng::seed_from_u64(3);

    for (format, block) in [(Format::Base64, 4), (Format::Base32, 8), (Format::Base32Hex, 8)] {
        let codec = format.build();
        for len in 0..30 {
            let encoded = encode(&random_bytes(&mut rng, len), &codec);
            assert_eq!(encoded.len() % block, 0, "{} len {}", format, len);
        }
    }
}

#[test]
fn test_random_radix_round_trips() {
    let mut rng = StdRng::seed_from_u64(0xabc);

    let mut encoders: Vec<RadixEncoder> = (2..=36).map(|r| RadixEncoder::new(r).unwrap()).collect();
    encoders.push(RadixEncoder::radix62());
    encoders.push(RadixEncoder::radix52_without_digits());
    encoders.push(RadixEncoder::radix52_without_vowels());

    for encoder in &encoders {
        for value in [0, 1, -1, i64::MAX, i64::MIN, i64::MIN + 1] {
            assert_eq!(encoder.decode(&encoder.encode(value)).unwrap(), value);
        }
        for _ in 0..100 {
            let value: i64 = rng.random();
            assert_eq!(encoder.decode(&encoder.encode(value)).unwrap(), value);
        }
    }
}

#[test]
fn test_shared_and_built_codecs_agree() {
    let mut rng = StdRng::seed_from_u64(11);
    let data = random_bytes(&mut rng, 33);

    for format in Format::ALL {
        assert_eq!(
            encode(&data, format.shared()),
            encode(&data, &format.build()),
            "{}",
            format
        );
    }
}
