//! # Lexis
//!
//! An in-memory full-text search engine for bilingual vocabulary and
//! grammar corpora.
//!
//! ## Features
//!
//! - Inverted index with prefix and suffix term expansion
//! - Cyrillic-aware normalization and multilingual stop words
//! - Levenshtein fuzzy matching for longer query terms
//! - Relevance ranking with type, difficulty, frequency and title boosts
//! - Snippets, highlights, zero-result suggestions and autocomplete
//! - Search analytics with a bounded query history

pub mod analysis;
pub mod analytics;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod search;
pub mod util;

pub use analytics::{HistoryEntry, SearchStats};
pub use config::{EngineConfig, FormatterConfig, FuzzyConfig, TokenizerConfig};
pub use document::{CorpusData, Document, DocumentType, GrammarDoc, TextEntry, VocabularyDoc};
pub use error::{LexisError, Result};
pub use search::{
    ContentType, Highlight, IndexInfo, SearchEngine, SearchOptions, SearchResponse, SearchResult,
    SortBy,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
