// src/core/engine.rs
use crate::core::alphabet::classify;
use crate::core::shift::shift;
use crate::core::types::{Key, Mode};

/// Encrypts `text` by shifting every English and Russian letter forward by
/// `key` within its own alphabet. Everything else is copied unchanged.
pub fn encrypt(text: &str, key: Key) -> String {
    process(text, key as i128)
}

/// Inverse of [`encrypt`]: the same walk with the key negated.
pub fn decrypt(text: &str, key: Key) -> String {
    // Widened first so that negating i64::MIN stays exact.
    process(text, -(key as i128))
}

/// Runs `text` through the cipher in the given direction.
pub fn apply(text: &str, key: Key, mode: Mode) -> String {
    match mode {
        Mode::Encrypt => encrypt(text, key),
        Mode::Decrypt => decrypt(text, key),
    }
}

fn process(text: &str, delta: i128) -> String {
    text.chars()
        .map(|c| match classify(c) {
            Some(script) => shift(c, script, delta),
            None => c,
        })
        .collect()
}
