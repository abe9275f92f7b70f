// src/core/shift.rs
use crate::core::alphabet::Script;

/// Moves `c` by `delta` positions inside the same-case alphabet of `script`.
///
/// The delta is reduced modulo that alphabet's length with a non-negative
/// result, so any delta is valid. If `c` is not actually in the variant its
/// case selects (e.g. dotless 'ı', which uppercases to 'I'), it is returned
/// as is.
pub fn shift(c: char, script: Script, delta: i128) -> char {
    let variant = script.alphabet().variant_for(c);
    let len = script.alphabet().len() as i128;

    let Some(index) = variant.chars().position(|letter| letter == c) else {
        return c;
    };

    let new_index = (index as i128 + delta).rem_euclid(len) as usize;
    variant.chars().nth(new_index).unwrap_or(c)
}
