//! Index building: corpus in, immutable snapshot out.
//!
//! A build always starts from empty structures. Documents are first
//! collected into the store (so a colliding id replaces the earlier item
//! before anything is indexed), then each stored document is tokenized and
//! its postings recorded, and finally overly common terms are pruned.

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::analysis::Tokenizer;
use crate::document::{CorpusData, Document, DocumentStore};
use crate::error::Result;
use crate::index::inverted::InvertedIndex;

/// Rough per-posting overhead used by [`IndexSnapshot::memory_usage`].
const POSTING_OVERHEAD_BYTES: usize = 50;

/// An immutable, fully built index and its document store.
#[derive(Debug, Clone)]
pub struct IndexSnapshot {
    index: InvertedIndex,
    documents: DocumentStore,
    stats: BuildStats,
}

impl IndexSnapshot {
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Estimated heap footprint in bytes.
    ///
    /// Strings are counted at two bytes per byte of UTF-8, postings at a flat
    /// overhead, documents at twice their JSON length.
    pub fn memory_usage(&self) -> usize {
        let index_bytes: usize = self
            .index
            .entries()
            .map(|entry| entry.term().len() * 2 + entry.doc_freq() * POSTING_OVERHEAD_BYTES)
            .sum();

        let document_bytes: usize = self
            .documents
            .iter()
            .map(|(_, doc)| serde_json::to_string(doc).map(|s| s.len() * 2).unwrap_or(0))
            .sum();

        index_bytes + document_bytes
    }
}

/// Summary of one build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildStats {
    pub documents: usize,
    pub replaced_documents: usize,
    pub terms: usize,
    pub pruned_terms: usize,
    pub elapsed_ms: f64,
    pub built_at: DateTime<Utc>,
}

/// Builds [`IndexSnapshot`]s from corpus data.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    tokenizer: Tokenizer,
    prune_ratio: f64,
    prune_min_documents: usize,
}

impl IndexBuilder {
    pub fn new(tokenizer: Tokenizer, prune_ratio: f64, prune_min_documents: usize) -> Self {
        IndexBuilder {
            tokenizer,
            prune_ratio,
            prune_min_documents,
        }
    }

    /// Index every vocabulary item and grammar lesson in `data`.
    ///
    /// Fails on the first item that cannot be turned into a document; nothing
    /// built so far escapes in that case.
    pub fn build(&self, data: CorpusData) -> Result<IndexSnapshot> {
        let start = Instant::now();
        let mut documents = DocumentStore::new();
        let mut replaced_documents = 0;

        for item in data.vocabulary {
            let (_, replaced) = documents.insert(Document::from_vocabulary(item)?);
            replaced_documents += usize::from(replaced);
        }
        for item in data.grammar {
            let (_, replaced) = documents.insert(Document::from_grammar(item)?);
            replaced_documents += usize::from(replaced);
        }

        let mut index = InvertedIndex::new();
        for (ord, doc) in documents.iter() {
            self.index_document(&mut index, ord, doc);
        }

        let pruned_terms = self.optimize(&mut index, documents.len());

        let stats = BuildStats {
            documents: documents.len(),
            replaced_documents,
            terms: index.len(),
            pruned_terms,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
            built_at: Utc::now(),
        };

        Ok(IndexSnapshot {
            index,
            documents,
            stats,
        })
    }

    fn index_document(&self, index: &mut InvertedIndex, ord: usize, doc: &Document) {
        let title = doc.title.to_lowercase();
        for (term, frequency) in self.tokenizer.term_frequencies(&doc.indexable_text()) {
            let in_title = title.contains(term.as_str());
            index.add_occurrences(&term, ord, frequency, in_title);
        }
    }

    /// Drop terms present in more than `prune_ratio` of all documents.
    ///
    /// Corpora with fewer than `prune_min_documents` documents (10 by default)
    /// are left untouched: in a corpus that small a single shared word already
    /// crosses the ratio. Returns the number of terms removed.
    fn optimize(&self, index: &mut InvertedIndex, doc_count: usize) -> usize {
        if doc_count < self.prune_min_documents {
            return 0;
        }
        index.prune_above(doc_count as f64 * self.prune_ratio)
    }
}
