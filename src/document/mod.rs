//! Document module for Lexis.
//!
//! Input shapes (vocabulary items, grammar lessons), the normalized
//! [`Document`] the engine searches over, and the id-keyed store.

pub mod corpus;
#[allow(clippy::module_inception)]
pub mod document;
pub mod store;

pub use corpus::{CorpusData, GrammarDoc, TextEntry, VocabularyDoc};
pub use document::{Document, DocumentType};
pub use store::{DocOrd, DocumentStore};
