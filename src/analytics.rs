//! Search analytics: counters, popular terms and a bounded query history.
//!
//! Analytics survive index rebuilds and are only cleared by
//! [`AnalyticsTracker::reset`].

use std::collections::{BTreeMap, VecDeque};

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::Tokenizer;

/// One recorded search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub query: String,
    /// Number of results on the returned page.
    pub result_count: usize,
    pub timestamp: DateTime<Utc>,
    /// Milliseconds.
    pub response_time: f64,
}

/// Snapshot of search statistics together with the state of the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub total_searches: u64,
    /// Running mean over every recorded search, in milliseconds.
    pub avg_response_time: f64,
    pub popular_terms: BTreeMap<String, u64>,
    /// Number of indexed terms.
    pub index_size: usize,
    pub document_count: usize,
    pub is_indexed: bool,
    /// Most recent first.
    pub recent_searches: Vec<HistoryEntry>,
}

/// Accumulates statistics over every search an engine serves.
#[derive(Debug, Clone)]
pub struct AnalyticsTracker {
    tokenizer: Tokenizer,
    capacity: usize,
    total_searches: u64,
    avg_response_time: f64,
    popular_terms: AHashMap<String, u64>,
    history: VecDeque<HistoryEntry>,
}

impl AnalyticsTracker {
    pub fn new(tokenizer: Tokenizer, capacity: usize) -> Self {
        AnalyticsTracker {
            tokenizer,
            capacity,
            total_searches: 0,
            avg_response_time: 0.0,
            popular_terms: AHashMap::new(),
            history: VecDeque::with_capacity(capacity),
        }
    }

    /// Record one completed search.
    pub fn record_search(&mut self, query: &str, response_time: f64, result_count: usize) {
        self.total_searches += 1;
        let n = self.total_searches as f64;
        self.avg_response_time = (self.avg_response_time * (n - 1.0) + response_time) / n;

        for term in self.tokenizer.extract_terms(query) {
            *self.popular_terms.entry(term).or_insert(0) += 1;
        }

        self.history.push_front(HistoryEntry {
            query: query.to_string(),
            result_count,
            timestamp: Utc::now(),
            response_time,
        });
        self.history.truncate(self.capacity);
    }

    pub fn total_searches(&self) -> u64 {
        self.total_searches
    }

    pub fn avg_response_time(&self) -> f64 {
        self.avg_response_time
    }

    /// History, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// The `n` most searched terms, most frequent first. Equal counts are
    /// ordered alphabetically.
    pub fn top_terms(&self, n: usize) -> Vec<String> {
        let mut terms: Vec<(&String, &u64)> = self.popular_terms.iter().collect();
        terms.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        terms.into_iter().take(n).map(|(term, _)| term.clone()).collect()
    }

    /// Statistics combined with the given index figures.
    pub fn stats(
        &self,
        index_size: usize,
        document_count: usize,
        is_indexed: bool,
        recent: usize,
    ) -> SearchStats {
        SearchStats {
            total_searches: self.total_searches,
            avg_response_time: self.avg_response_time,
            popular_terms: self
                .popular_terms
                .iter()
                .map(|(term, count)| (term.clone(), *count))
                .collect(),
            index_size,
            document_count,
            is_indexed,
            recent_searches: self.history.iter().take(recent).cloned().collect(),
        }
    }

    /// Forget every recorded search.
    pub fn reset(&mut self) {
        self.total_searches = 0;
        self.avg_response_time = 0.0;
        self.popular_terms.clear();
        self.history.clear();
    }
}
