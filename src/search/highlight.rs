//! Highlighting of query terms in titles and content.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::Result;

/// The words of one document that a query term matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub term: String,
    pub title_matches: Vec<String>,
    pub content_matches: Vec<String>,
}

/// Compiled highlight patterns for one query.
///
/// Each term matches at a word boundary and extends over trailing word
/// characters, case-insensitively, so `hel` highlights `Hello`.
#[derive(Debug, Clone)]
pub struct Highlighter {
    patterns: Vec<(String, Regex)>,
    max_content_matches: usize,
}

impl Highlighter {
    pub fn new(terms: &[String], max_content_matches: usize) -> Result<Self> {
        let patterns = terms
            .iter()
            .map(|term| {
                let pattern = format!(r"\b{}\w*", regex::escape(term));
                let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
                Ok((term.clone(), regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Highlighter {
            patterns,
            max_content_matches,
        })
    }

    /// One entry per term that occurs in the title or content, in term order.
    pub fn highlight(&self, document: &Document) -> Vec<Highlight> {
        self.patterns
            .iter()
            .filter_map(|(term, regex)| {
                let title_matches = find_all(regex, &document.title, usize::MAX);
                let content_matches = find_all(regex, &document.content, self.max_content_matches);
                if title_matches.is_empty() && content_matches.is_empty() {
                    return None;
                }
                Some(Highlight {
                    term: term.clone(),
                    title_matches,
                    content_matches,
                })
            })
            .collect()
    }
}

fn find_all(regex: &Regex, text: &str, limit: usize) -> Vec<String> {
    regex
        .find_iter(text)
        .take(limit)
        .map(|m| m.as_str().to_string())
        .collect()
}
