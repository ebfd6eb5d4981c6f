//! Relevance scoring and result ordering.

use std::cmp::Ordering;

use crate::analysis::Tokenizer;
use crate::document::{Document, DocumentType};
use crate::query::DocumentMatch;
use crate::search::options::SortBy;

const VOCABULARY_BOOST: f64 = 1.2;
const TITLE_OVERLAP_BOOST: f64 = 1.5;
/// Difficulty is on a 1 to 5 scale; `(CEILING - difficulty) / 5` favours easy items.
const DIFFICULTY_CEILING: f64 = 6.0;

/// Turns aggregated term contributions into a final relevance score.
#[derive(Debug, Clone)]
pub struct RelevanceScorer<'a> {
    tokenizer: &'a Tokenizer,
}

impl<'a> RelevanceScorer<'a> {
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        RelevanceScorer { tokenizer }
    }

    /// Score one document given the raw sum of its term contributions.
    ///
    /// The raw score is boosted for vocabulary, easy and frequent items and
    /// for documents whose title overlaps the query, then divided by the
    /// number of query terms.
    pub fn score(&self, raw: f64, document: &Document, terms: &[String]) -> f64 {
        let mut score = raw;

        if document.doc_type == DocumentType::Vocabulary {
            score *= VOCABULARY_BOOST;
        }
        score *= (DIFFICULTY_CEILING - document.difficulty) / 5.0;
        score *= (document.frequency + 1.0).ln();

        if self.title_overlaps(document, terms) {
            score *= TITLE_OVERLAP_BOOST;
        }

        score / terms.len().max(1) as f64
    }

    /// Replace every match's raw score with its final score.
    pub fn score_all(&self, matches: &mut [DocumentMatch<'_>], terms: &[String]) {
        for m in matches.iter_mut() {
            m.score = self.score(m.score, m.document, terms);
        }
    }

    /// Whether any query term contains, or is contained in, a title term.
    pub fn title_overlaps(&self, document: &Document, terms: &[String]) -> bool {
        let title_terms = self.tokenizer.extract_terms(&document.title);
        terms.iter().any(|term| {
            title_terms
                .iter()
                .any(|title_term| title_term.contains(term.as_str()) || term.contains(title_term.as_str()))
        })
    }
}

/// Order matches in place. The sort is stable, so equal keys keep match order.
pub fn sort_matches(matches: &mut [DocumentMatch<'_>], sort_by: SortBy) {
    match sort_by {
        SortBy::Relevance => matches.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortBy::Alphabetical => matches.sort_by(|a, b| compare_titles(a.document, b.document)),
        SortBy::Difficulty => {
            matches.sort_by(|a, b| a.document.difficulty.total_cmp(&b.document.difficulty))
        }
    }
}

fn compare_titles(a: &Document, b: &Document) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}
