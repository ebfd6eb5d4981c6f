//! Resolution of query terms against an [`IndexSnapshot`].
//!
//! Each term is matched exactly and, when long enough, fuzzily against every
//! indexed term. Per term a document keeps the best of its exact and fuzzy
//! contributions; across terms the contributions add up.

use ahash::AHashMap;

use crate::config::FuzzyConfig;
use crate::document::{DocOrd, Document};
use crate::index::IndexSnapshot;
use crate::query::fuzzy::FuzzyMatcher;
use crate::search::options::SearchFilters;

/// Exact postings whose term occurs in the title count double.
const EXACT_TITLE_BOOST: f64 = 2.0;

/// One document that matched at least one query term.
#[derive(Debug, Clone)]
pub struct DocumentMatch<'a> {
    pub doc_ord: DocOrd,
    pub document: &'a Document,
    /// Sum of the per-term contributions; replaced by the final relevance
    /// score once the scorer has run.
    pub score: f64,
    /// Contribution of every query term that matched this document.
    pub term_scores: Vec<(String, f64)>,
}

impl<'a> DocumentMatch<'a> {
    fn new(doc_ord: DocOrd, document: &'a Document) -> Self {
        DocumentMatch {
            doc_ord,
            document,
            score: 0.0,
            term_scores: Vec::new(),
        }
    }

    /// The contribution recorded for `term`, if it matched.
    pub fn term_score(&self, term: &str) -> Option<f64> {
        self.term_scores
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, score)| *score)
    }
}

/// Per-document scores for a single query term, in first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct TermMatches {
    slots: AHashMap<DocOrd, usize>,
    scores: Vec<(DocOrd, f64)>,
}

impl TermMatches {
    fn set(&mut self, doc: DocOrd, score: f64) {
        match self.slots.get(&doc) {
            Some(&slot) => self.scores[slot].1 = score,
            None => {
                self.slots.insert(doc, self.scores.len());
                self.scores.push((doc, score));
            }
        }
    }

    fn keep_max(&mut self, doc: DocOrd, score: f64) {
        let current = self.get(doc).unwrap_or(0.0);
        self.set(doc, current.max(score));
    }

    pub fn get(&self, doc: DocOrd) -> Option<f64> {
        self.slots.get(&doc).map(|&slot| self.scores[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocOrd, f64)> + '_ {
        self.scores.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Matches query terms against one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    snapshot: &'a IndexSnapshot,
    fuzzy: &'a FuzzyConfig,
}

impl<'a> Matcher<'a> {
    pub fn new(snapshot: &'a IndexSnapshot, fuzzy: &'a FuzzyConfig) -> Self {
        Matcher { snapshot, fuzzy }
    }

    /// Score every document matching a single term.
    pub fn find_term_matches(&self, term: &str) -> TermMatches {
        let mut matches = TermMatches::default();
        let index = self.snapshot.index();

        if let Some(entry) = index.get(term) {
            for posting in entry.postings() {
                let boost = if posting.in_title { EXACT_TITLE_BOOST } else { 1.0 };
                matches.set(posting.doc, f64::from(posting.frequency) * boost);
            }
        }

        let fuzzy = FuzzyMatcher::new(term, self.fuzzy);
        if !fuzzy.is_enabled() {
            return matches;
        }

        for entry in index.entries() {
            if entry.term() == term {
                continue;
            }
            let Some(hit) = fuzzy.match_term(entry.term()) else {
                continue;
            };
            for posting in entry.postings() {
                let boost = if posting.in_title { self.fuzzy.title_boost } else { 1.0 };
                matches.keep_max(posting.doc, f64::from(posting.frequency) * hit.weight * boost);
            }
        }

        matches
    }

    /// Aggregate the matches of every term over the documents passing `filters`.
    ///
    /// Documents appear in the order they were first matched.
    pub fn find_matches(&self, terms: &[String], filters: &SearchFilters<'_>) -> Vec<DocumentMatch<'a>> {
        let documents = self.snapshot.documents();
        let mut slots: AHashMap<DocOrd, usize> = AHashMap::new();
        let mut matches: Vec<DocumentMatch<'a>> = Vec::new();

        for term in terms {
            for (ord, score) in self.find_term_matches(term).iter() {
                let Some(document) = documents.get(ord) else {
                    continue;
                };
                if !filters.accepts(document) {
                    continue;
                }

                let slot = *slots.entry(ord).or_insert_with(|| {
                    matches.push(DocumentMatch::new(ord, document));
                    matches.len() - 1
                });
                let entry = &mut matches[slot];
                entry.score += score;
                match entry.term_scores.iter_mut().find(|(t, _)| t == term) {
                    Some(existing) => existing.1 = score,
                    None => entry.term_scores.push((term.clone(), score)),
                }
            }
        }

        matches
    }
}
