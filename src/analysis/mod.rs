// src/analysis/mod.rs

pub mod brute_force;
pub mod frequency;
pub mod reference;
