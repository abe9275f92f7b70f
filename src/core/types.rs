// src/core/types.rs
use std::collections::BTreeMap;

/// A signed shift. Each character reduces it modulo the length of its own
/// alphabet, so one key means 3 for English and 3 for Russian, but 29 means
/// 3 for English and 29 for Russian.
pub type Key = i64;

/// Expected relative frequency of each lowercase letter.
/// Ordered so that scoring sums its terms in a fixed order.
pub type FrequencyTable = BTreeMap<char, f64>;

/// Which direction a text is pushed through the cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}
