//! Utility modules for Lexis.

pub mod levenshtein;

pub use levenshtein::*;
