//! Text analysis for Lexis.
//!
//! Normalization, stop-word removal and prefix/suffix term expansion used
//! both when documents are indexed and when queries are parsed.

pub mod stop;
pub mod tokenizer;

pub use stop::StopWords;
pub use tokenizer::Tokenizer;
