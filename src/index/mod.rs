//! Index module for Lexis.
//!
//! The inverted index (term to per-document postings) and the builder that
//! produces an immutable [`IndexSnapshot`] from a corpus.

pub mod builder;
pub mod inverted;

pub use builder::{BuildStats, IndexBuilder, IndexSnapshot};
pub use inverted::{InvertedIndex, Posting, TermEntry};
