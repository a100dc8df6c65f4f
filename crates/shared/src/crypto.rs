//! Cryptographic utilities for admin API key generation and hashing.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Prefix carried by every admin API key.
pub const API_KEY_PREFIX: &str = "cms_";

/// Number of random characters following the prefix.
const API_KEY_RANDOM_LEN: usize = 32;

/// Length of the identifying prefix stored alongside the key hash.
const KEY_PREFIX_LEN: usize = 8;

/// Computes SHA-256 hash of the input and returns it as a hex string.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Extracts the identifying prefix from an API key (first 8 characters after "cms_").
pub fn extract_key_prefix(key: &str) -> Option<&str> {
    let rest = key.strip_prefix(API_KEY_PREFIX)?;
    rest.get(..KEY_PREFIX_LEN)
}

/// Generates a new admin API key: `cms_` followed by 32 alphanumeric characters.
pub fn generate_api_key() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();

    let key: String = (0..API_KEY_RANDOM_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("{}{}", API_KEY_PREFIX, key)
}

/// Minimum length a presented key must have before it is worth hashing.
pub fn min_api_key_len() -> usize {
    API_KEY_PREFIX.len() + KEY_PREFIX_LEN
}
