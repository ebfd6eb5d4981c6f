//! Query string parsing.
//!
//! Double-quoted phrases are taken verbatim (lowercased and trimmed) and
//! bypass term expansion. Everything outside quotes goes through the
//! [`Tokenizer`] and contributes its expanded term set.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::Tokenizer;
use crate::error::{LexisError, Result};

const PHRASE_PATTERN: &str = r#""([^"]+)""#;

/// The terms extracted from one query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuery {
    /// Quoted phrases, in query order.
    pub phrases: Vec<String>,
    /// Phrases followed by the tokenizer's expanded terms.
    pub terms: Vec<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

/// Splits raw queries into phrases and expanded terms.
#[derive(Clone, Debug)]
pub struct QueryParser {
    tokenizer: Tokenizer,
    phrase: Arc<Regex>,
}

impl QueryParser {
    pub fn new(tokenizer: Tokenizer) -> Result<Self> {
        let phrase = Regex::new(PHRASE_PATTERN)
            .map_err(|e| LexisError::query(format!("Invalid phrase pattern: {e}")))?;
        Ok(QueryParser {
            tokenizer,
            phrase: Arc::new(phrase),
        })
    }

    /// Parse a query. Queries that yield no terms are valid and parse to an empty result.
    pub fn parse(&self, query: &str) -> ParsedQuery {
        let min_chars = self.tokenizer.config().min_token_chars;

        let phrases: Vec<String> = self
            .phrase
            .captures_iter(query)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_lowercase().trim().to_string())
            .filter(|phrase| phrase.chars().count() >= min_chars)
            .collect();

        let remainder = self.phrase.replace_all(query, "");
        let expanded = self.tokenizer.extract_terms(remainder.trim());

        let terms = phrases
            .iter()
            .cloned()
            .chain(expanded)
            .filter(|term| term.chars().count() >= min_chars)
            .collect();

        ParsedQuery { phrases, terms }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> QueryParser {
        QueryParser::new(Tokenizer::default()).unwrap()
    }

    #[test]
    fn test_plain_query_is_expanded() {
        let parsed = parser().parse("Hello");
        assert!(parsed.phrases.is_empty());
        assert_eq!(parsed.terms, vec!["hello", "he", "hel", "hell", "llo", "lo"]);
    }

    #[test]
    fn test_quoted_phrase_comes_first() {
        let parsed = parser().parse(r#"haus "Guten Morgen" katze"#);
        assert_eq!(parsed.phrases, vec!["guten morgen"]);
        assert_eq!(parsed.terms[0], "guten morgen");
        assert!(parsed.terms.contains(&"haus".to_string()));
        assert!(parsed.terms.contains(&"katze".to_string()));
        // Phrase words are not expanded on their own.
        assert!(!parsed.terms.contains(&"guten".to_string()));
    }

    #[test]
    fn test_empty_and_degenerate_queries() {
        let p = parser();
        assert!(p.parse("").is_empty());
        assert!(p.parse("   ").is_empty());
        assert!(p.parse("a").is_empty());
        assert!(p.parse("the and").is_empty());
        assert!(p.parse(r#""x""#).is_empty());
    }
}
