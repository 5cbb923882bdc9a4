//! End-to-end tests of the BB84 key exchange.

use qkdsim::protocols::qkd::bb84::{self, Bb84Config};
use std::fs;
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("qkdsim-{}-{}", std::process::id(), name))
}

#[test]
fn exchange_terminates_and_renders_fixed_width_hex() {
    let config = Bb84Config {
        key_bits: 8,
        seed: Some(42),
        key_path: None,
    };
    let result = bb84::run(&config).unwrap();

    assert!(result.key.is_complete());
    assert_eq!(result.key.len(), 8);

    let hex = result.key.to_hex();
    assert_eq!(hex.len(), 2, "8 bits must render as 2 hex digits");
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
}

#[test]
fn same_seed_reproduces_the_identical_key() {
    let config = Bb84Config {
        key_bits: 64,
        seed: Some(1234),
        key_path: None,
    };
    let first = bb84::run(&config).unwrap();
    let second = bb84::run(&config).unwrap();

    assert_eq!(first.key.to_hex(), second.key.to_hex());
    assert_eq!(first.rounds, second.rounds);
    assert_eq!(first.discarded, second.discarded);
}

#[test]
fn sender_writes_the_key_file_on_completion() {
    let path = scratch_path("keyfile");
    let config = Bb84Config {
        key_bits: 16,
        seed: Some(7),
        key_path: Some(path.clone()),
    };
    let result = bb84::run(&config).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(written, result.key.to_hex());
    assert_eq!(written.len(), 4);
}

#[test]
fn unseeded_exchange_completes() {
    let config = Bb84Config {
        key_bits: 8,
        seed: None,
        key_path: None,
    };
    let result = bb84::run(&config).unwrap();
    assert_eq!(result.key.len(), 8);
    assert_eq!(result.rounds, result.key.len() + result.discarded);
}

#[test]
fn discard_rate_is_roughly_half() {
    let config = Bb84Config {
        key_bits: 512,
        seed: Some(2024),
        key_path: None,
    };
    let result = bb84::run(&config).unwrap();

    // Bases agree with probability 1/2, so total rounds should sit near
    // twice the key length.
    let ratio = result.rounds as f64 / result.key.len() as f64;
    assert!((1.6..2.6).contains(&ratio), "rounds/key ratio was {ratio}");
}
