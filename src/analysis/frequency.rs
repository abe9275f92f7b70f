// File: src/analysis/frequency.rs
use crate::core::engine::decrypt;
use crate::core::types::{FrequencyTable, Key};
use std::collections::HashMap;

/// Keeps the logarithm finite for letters that never occur.
const EPSILON: f64 = 1e-10;

/// Keys tried by [`statistical_analysis`], sized to the Russian alphabet
/// regardless of the script the text is in.
pub const SCAN_KEYS: std::ops::RangeInclusive<Key> = 0..=32;

/// Letter counts of a decryption, folded to lowercase.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LetterCounts {
    counts: HashMap<char, u64>,
    total: u64,
}

impl LetterCounts {
    /// Tallies every alphabetic character of `text`, whatever its script.
    /// O(n) in the length of `text`.
    pub fn tally(text: &str) -> Self {
        let mut tally = Self::default();
        for c in text.chars().filter(|c| c.is_alphabetic()) {
            let lower = c.to_lowercase().next().unwrap_or(c);
            *tally.counts.entry(lower).or_insert(0) += 1;
            tally.total += 1;
        }
        tally
    }

    pub fn get(&self, letter: char) -> u64 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Log-likelihood of these counts under `table`. Higher is a better fit.
    pub fn score(&self, table: &FrequencyTable) -> f64 {
        let denominator = self.total as f64 + EPSILON * table.len() as f64;
        table
            .iter()
            .map(|(&letter, &expected)| {
                let observed = self.get(letter) as f64;
                ((observed + EPSILON) / denominator).ln() * expected
            })
            .sum()
    }
}

/// Guesses the key of `cipher_text` by scoring the decryption under every key
/// in [`SCAN_KEYS`] against `table`.
///
/// Ties go to the lowest key, so an empty table or a text with no letters
/// yields 0.
pub fn statistical_analysis(cipher_text: &str, table: &FrequencyTable) -> Key {
    let mut best_key = 0;
    let mut best_score = f64::NEG_INFINITY;

    for key in SCAN_KEYS {
        let score = LetterCounts::tally(&decrypt(cipher_text, key)).score(table);
        if score > best_score {
            best_score = score;
            best_key = key;
        }
    }
    best_key
}
