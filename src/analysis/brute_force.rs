// File: src/analysis/brute_force.rs
use crate::core::alphabet::max_alphabet_len;
use crate::core::engine::decrypt;
use crate::core::types::Key;

/// Decrypts `cipher_text` under every key from 1 to one less than the longest
/// alphabet. Entry `i` is the decryption under key `i + 1`.
///
/// The range is shared by both scripts, so for English-only text the
/// candidates repeat with period 26 and the true key shows up more than once.
pub fn brute_force_decrypt(cipher_text: &str) -> Vec<String> {
    let max_key = max_alphabet_len() as Key;
    (1..max_key).map(|key| decrypt(cipher_text, key)).collect()
}
