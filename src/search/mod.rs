//! Searching a built index: options, ranking, result formatting and the
//! engine that ties them together.

pub mod engine;
pub mod highlight;
pub mod options;
pub mod response;
pub mod scorer;
pub mod snippet;
pub mod suggest;

pub use self::engine::SearchEngine;
pub use self::highlight::{Highlight, Highlighter};
pub use self::options::{ContentType, LanguagePair, SearchFilters, SearchOptions, SortBy};
pub use self::response::{IndexInfo, SearchResponse, SearchResult};
pub use self::scorer::{RelevanceScorer, sort_matches};
pub use self::snippet::SnippetGenerator;
pub use self::suggest::{autocomplete, zero_result_suggestions};
