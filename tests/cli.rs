//! CLI integration tests for base-codec
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn base_codec() -> Command {
    Command::cargo_bin("base-codec").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base_codec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encode and decode binary data"));
}

#[test]
fn test_version() {
    base_codec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-codec"));
}

#[test]
fn test_list_formats() {
    base_codec()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base64-url"))
        .stdout(predicate::str::contains("crockford"))
        .stdout(predicate::str::contains("big_integer"));
}

#[test]
fn test_list_json() {
    let output = base_codec()
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let entries: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let base58 = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["name"] == "base58")
        .unwrap();
    assert_eq!(base58["radix"], 58);
    assert_eq!(base58["kind"], "big_integer");
    assert!(base58["padding"].is_null());
}

// ============================================================================
// Encode/Decode
// ============================================================================

#[test]
fn test_encode_base64() {
    base_codec()
        .args(["encode", "base64"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=\n");
}

#[test]
fn test_decode_base64() {
    base_codec()
        .args(["decode", "base64"])
        .write_stdin("aGVsbG8gd29ybGQ=\n")
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn test_encode_base58() {
    base_codec()
        .args(["encode", "base58"])
        .write_stdin("Test")
        .assert()
        .success()
        .stdout("3A836b\n");
}

#[test]
fn test_roundtrip_ascii85() {
    let encoded = base_codec()
        .args(["encode", "ascii85"])
        .write_stdin("test data 123")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base_codec()
        .args(["decode", "ascii85"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("test data 123");
}

#[test]
fn test_hex_input_and_output() {
    base_codec()
        .args(["encode", "crockford", "--hex"])
        .write_stdin("54657374\n")
        .assert()
        .success()
        .stdout("AHJQ6X0\n");

    base_codec()
        .args(["decode", "crockford", "--hex"])
        .write_stdin("ahjq6xo")
        .assert()
        .success()
        .stdout("54657374\n");
}

#[test]
fn test_output_file() {
    let path = std::env::temp_dir().join(format!("base-codec-cli-{}.txt", std::process::id()));

    base_codec()
        .args(["encode", "z85", "-o"])
        .arg(&path)
        .write_stdin("Test")
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "raQb)\n");
    std::fs::remove_file(&path).unwrap();
}

// ============================================================================
// Radix
// ============================================================================

#[test]
fn test_radix_encode() {
    base_codec()
        .args(["radix", "encode", "--radix", "16", "-255"])
        .assert()
        .success()
        .stdout("-FF\n");
}

#[test]
fn test_radix_decode() {
    base_codec()
        .args(["radix", "decode", "--radix", "36", "1Y2P0IJ32E8E7"])
        .assert()
        .success()
        .stdout("9223372036854775807\n");
}

#[test]
fn test_radix_decode_trims_argument() {
    base_codec()
        .args(["radix", "decode", "--radix", "16", " -ff "])
        .assert()
        .success()
        .stdout("-255\n");
}

#[test]
fn test_radix_out_of_range() {
    base_codec()
        .args(["radix", "encode", "--radix", "37", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("radix must be between 2 and 36"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_format_suggests() {
    base_codec()
        .env("NO_COLOR", "1")
        .args(["encode", "bas64"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("format 'bas64' not found"))
        .stderr(predicate::str::contains("did you mean 'base64'?"));
}

#[test]
fn test_invalid_character() {
    base_codec()
        .env("NO_COLOR", "1")
        .args(["decode", "base58"])
        .write_stdin("3A0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '0' at position 2"));
}

#[test]
fn test_custom_config_file() {
    let path = std::env::temp_dir().join(format!("base-codec-config-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[codecs.binary]\nchars = \"01\"\n\n[codecs.dna]\nchars = \"ACGT\"\n",
    )
    .unwrap();

    base_codec()
        .args(["--config"])
        .arg(&path)
        .args(["encode", "dna"])
        .write_stdin("A")
        .assert()
        .success()
        .stdout("CAAC\n");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_config_file() {
    base_codec()
        .args(["--config", "/nonexistent/base-codec.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load config"));
}
