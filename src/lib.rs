// src/lib.rs

pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod menu;
pub mod persistence;

pub use crate::analysis::brute_force::brute_force_decrypt;
pub use crate::analysis::frequency::statistical_analysis;
pub use crate::core::engine::{decrypt, encrypt};
pub use crate::core::types::{FrequencyTable, Key};
pub use crate::error::CipherError;
