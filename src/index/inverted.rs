//! Posting lists and the in-memory inverted index.
//!
//! Terms are kept in first-insertion order so term scans (fuzzy matching,
//! autocomplete, suggestions) visit them in a reproducible order.

use ahash::AHashMap;

use crate::document::DocOrd;

/// A single posting in a posting list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posting {
    /// Document ordinal in the document store.
    pub doc: DocOrd,
    /// Number of words in the document's title and content that produce the term.
    pub frequency: u32,
    /// Whether the term occurs literally in the lowercased title.
    pub in_title: bool,
}

impl Posting {
    /// Create a new posting.
    pub fn new(doc: DocOrd, in_title: bool) -> Self {
        Posting {
            doc,
            frequency: 1,
            in_title,
        }
    }

    /// Create a posting with frequency.
    pub fn with_frequency(doc: DocOrd, frequency: u32, in_title: bool) -> Self {
        Posting {
            doc,
            frequency: frequency.max(1),
            in_title,
        }
    }
}

/// A term together with the postings of every document containing it.
#[derive(Debug, Clone)]
pub struct TermEntry {
    term: String,
    postings: Vec<Posting>,
}

impl TermEntry {
    fn new(term: String) -> Self {
        TermEntry {
            term,
            postings: Vec::new(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Postings in document-ordinal order.
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    /// Number of documents containing this term.
    pub fn doc_freq(&self) -> usize {
        self.postings.len()
    }
}

/// Mapping from normalized term to per-document postings.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    lookup: AHashMap<String, usize>,
    entries: Vec<TermEntry>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `frequency` occurrences of `term` in `doc`.
    ///
    /// The first call for a (term, document) pair creates the posting and
    /// fixes its title flag; later calls only add to the frequency. Documents
    /// must be added in ascending ordinal order.
    pub fn add_occurrences(&mut self, term: &str, doc: DocOrd, frequency: u32, in_title: bool) {
        let slot = match self.lookup.get(term) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.lookup.insert(term.to_string(), slot);
                self.entries.push(TermEntry::new(term.to_string()));
                slot
            }
        };

        let postings = &mut self.entries[slot].postings;
        match postings.last_mut() {
            Some(posting) if posting.doc == doc => posting.frequency += frequency.max(1),
            _ => postings.push(Posting::with_frequency(doc, frequency, in_title)),
        }
    }

    /// Look up the exact term.
    pub fn get(&self, term: &str) -> Option<&TermEntry> {
        self.lookup.get(term).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, term: &str) -> bool {
        self.lookup.contains_key(term)
    }

    /// All entries in first-insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }

    /// All terms in first-insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.term.as_str())
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every term present in more than `max_doc_freq` documents.
    ///
    /// Returns the number of terms removed.
    pub fn prune_above(&mut self, max_doc_freq: f64) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|entry| (entry.postings.len() as f64) <= max_doc_freq);

        let removed = before - self.entries.len();
        if removed > 0 {
            self.lookup = self
                .entries
                .iter()
                .enumerate()
                .map(|(slot, entry)| (entry.term.clone(), slot))
                .collect();
        }
        removed
    }
}
