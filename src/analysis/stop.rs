//! Multilingual stop words.
//!
//! The corpus mixes German, Bulgarian and English text, so the default list
//! is the union of short function words from all three languages.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::stop::StopWords;
//!
//! let stop_words = StopWords::new();
//! assert!(stop_words.contains("und"));
//! assert!(stop_words.contains("това"));
//! assert!(!stop_words.contains("hallo"));
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

/// German function words.
const GERMAN_STOP_WORDS: &[&str] = &[
    "der", "die", "das", "und", "oder", "aber", "mit", "von", "zu", "in", "auf", "für", "ist",
    "sind", "war", "waren",
];

/// Bulgarian function words.
const BULGARIAN_STOP_WORDS: &[&str] = &[
    "и", "или", "но", "с", "от", "до", "в", "на", "за", "е", "са", "беше", "бяха", "това", "тази",
    "този",
];

/// English function words.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "with", "from", "to", "in", "on", "for", "is", "are", "was", "were",
];

/// Default stop words for all supported languages as a set.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    GERMAN_STOP_WORDS
        .iter()
        .chain(BULGARIAN_STOP_WORDS)
        .chain(ENGLISH_STOP_WORDS)
        .map(|&s| s.to_string())
        .collect()
});

/// A shared, immutable stop-word set.
#[derive(Clone, Debug)]
pub struct StopWords {
    words: Arc<AHashSet<String>>,
}

impl StopWords {
    /// Create the default German/Bulgarian/English set.
    pub fn new() -> Self {
        StopWords {
            words: Arc::new(DEFAULT_STOP_WORDS_SET.clone()),
        }
    }

    /// Create the default set extended with additional words.
    ///
    /// Extra words are lowercased so they compare against normalized tokens.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = DEFAULT_STOP_WORDS_SET.clone();
        words.extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        StopWords {
            words: Arc::new(words),
        }
    }

    /// Check whether a normalized word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}
