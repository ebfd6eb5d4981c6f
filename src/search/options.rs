//! Search options and document filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentType};
use crate::error::LexisError;

/// Which kinds of document a search considers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    All,
    Vocabulary,
    Grammar,
}

impl ContentType {
    pub fn accepts(&self, doc_type: DocumentType) -> bool {
        match self {
            ContentType::All => true,
            ContentType::Vocabulary => doc_type == DocumentType::Vocabulary,
            ContentType::Grammar => doc_type == DocumentType::Grammar,
        }
    }
}

impl FromStr for ContentType {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "" => Ok(ContentType::All),
            "vocabulary" => Ok(ContentType::Vocabulary),
            "grammar" => Ok(ContentType::Grammar),
            other => Err(LexisError::query(format!("Unknown content type: {other}"))),
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Descending score.
    #[default]
    Relevance,
    /// Title, case-insensitive.
    Alphabetical,
    /// Ascending difficulty.
    Difficulty,
}

impl FromStr for SortBy {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relevance" | "" => Ok(SortBy::Relevance),
            "alphabetical" => Ok(SortBy::Alphabetical),
            "difficulty" => Ok(SortBy::Difficulty),
            other => Err(LexisError::query(format!("Unknown sort order: {other}"))),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortBy::Relevance => "relevance",
            SortBy::Alphabetical => "alphabetical",
            SortBy::Difficulty => "difficulty",
        };
        f.write_str(name)
    }
}

/// Options accepted by [`SearchEngine::search`](crate::search::engine::SearchEngine::search).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub category: Option<String>,
    pub level: Option<String>,
    pub limit: usize,
    pub offset: usize,
    pub sort_by: SortBy,
    /// Language pair such as `"bg-de"`.
    pub direction: Option<String>,
    /// Matches scoring below this are dropped before sorting and paging.
    pub min_score: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            content_type: ContentType::All,
            category: None,
            level: None,
            limit: 50,
            offset: 0,
            sort_by: SortBy::Relevance,
            direction: None,
            min_score: 0.1,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn direction<S: Into<String>>(mut self, direction: S) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// The document filters implied by these options.
    pub fn filters(&self) -> SearchFilters<'_> {
        SearchFilters {
            content_type: self.content_type,
            category: non_empty(&self.category),
            level: non_empty(&self.level),
            direction: non_empty(&self.direction).map(LanguagePair::parse),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A `source-target` language pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair<'a> {
    pub source: &'a str,
    /// Missing when the direction has no `-`; then no document carrying a
    /// target language can match.
    pub target: Option<&'a str>,
}

impl<'a> LanguagePair<'a> {
    pub fn parse(direction: &'a str) -> Self {
        let mut parts = direction.split('-');
        LanguagePair {
            source: parts.next().unwrap_or_default(),
            target: parts.next(),
        }
    }
}

/// Predicates a document must satisfy to enter the match set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchFilters<'a> {
    pub content_type: ContentType,
    pub category: Option<&'a str>,
    pub level: Option<&'a str>,
    pub direction: Option<LanguagePair<'a>>,
}

impl SearchFilters<'_> {
    pub fn accepts(&self, doc: &Document) -> bool {
        if !self.content_type.accepts(doc.doc_type) {
            return false;
        }
        if let Some(category) = self.category {
            if doc.category != category {
                return false;
            }
        }
        if let Some(level) = self.level {
            if doc.level != level {
                return false;
            }
        }
        if let Some(pair) = self.direction {
            if doc.source_lang.as_deref() != Some(pair.source)
                || doc.target_lang.as_deref() != pair.target
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{GrammarDoc, VocabularyDoc};

    fn vocab(level: &str) -> Document {
        Document::from_vocabulary(
            VocabularyDoc::new("v1", "hello", "hallo", "greetings", level).with_languages("bg", "de"),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let options = SearchOptions::default();
        assert_eq!(options.content_type, ContentType::All);
        assert_eq!(options.limit, 50);
        assert_eq!(options.offset, 0);
        assert_eq!(options.sort_by, SortBy::Relevance);
        assert!((options.min_score - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("grammar".parse::<ContentType>().unwrap(), ContentType::Grammar);
        assert_eq!("ALL".parse::<ContentType>().unwrap(), ContentType::All);
        assert!("books".parse::<ContentType>().is_err());
        assert_eq!("difficulty".parse::<SortBy>().unwrap(), SortBy::Difficulty);
        assert!("random".parse::<SortBy>().is_err());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let options: SearchOptions =
            serde_json::from_str(r#"{"type": "vocabulary", "sortBy": "alphabetical", "limit": 5}"#)
                .unwrap();
        assert_eq!(options.content_type, ContentType::Vocabulary);
        assert_eq!(options.sort_by, SortBy::Alphabetical);
        assert_eq!(options.limit, 5);
        assert_eq!(options.offset, 0);
    }

    #[test]
    fn test_filters() {
        let a1 = vocab("A1");
        let grammar = Document::from_grammar(GrammarDoc::new("Articles")).unwrap();

        let options = SearchOptions::new().level("A1");
        assert!(options.filters().accepts(&a1));
        assert!(!SearchOptions::new().level("B1").filters().accepts(&a1));

        let vocab_only = SearchOptions::new().content_type(ContentType::Vocabulary);
        assert!(vocab_only.filters().accepts(&a1));
        assert!(!vocab_only.filters().accepts(&grammar));

        assert!(!SearchOptions::new().category("food").filters().accepts(&a1));
        // Empty strings mean "no filter".
        assert!(SearchOptions::new().category("").filters().accepts(&a1));
    }

    #[test]
    fn test_direction_filter() {
        let doc = vocab("A1");
        assert!(SearchOptions::new().direction("bg-de").filters().accepts(&doc));
        assert!(!SearchOptions::new().direction("de-bg").filters().accepts(&doc));
        assert!(!SearchOptions::new().direction("bg").filters().accepts(&doc));

        let grammar = Document::from_grammar(GrammarDoc::new("Articles")).unwrap();
        assert!(!SearchOptions::new().direction("bg-de").filters().accepts(&grammar));
    }
}
