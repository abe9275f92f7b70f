// src/core/mod.rs

pub mod alphabet;
pub mod engine;
pub mod shift;
pub mod types;
