//! Engine configuration.
//!
//! Every tunable the engine recognizes lives in [`EngineConfig`]. The
//! defaults are 2-character minimum tokens,
//! prefixes up to 6 characters, fuzzy matching for terms of 4+ characters
//! within `floor(0.3 * len)` edits, pruning of terms present in more than
//! 80% of documents, 200-character snippets and a 100-entry search history.
//! Pruning only runs once the corpus has at least `prune_min_documents`
//! documents; below that every term would exceed the ratio.
//!
//! # Example
//!
//! ```
//! use lexis::config::EngineConfig;
//!
//! let config = EngineConfig::default()
//!     .history_capacity(20)
//!     .prune_ratio(0.9);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};

/// Configuration for term extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Words shorter than this (in characters) are dropped.
    pub min_token_chars: usize,
    /// Longest prefix materialized for each word.
    pub max_prefix_chars: usize,
    /// Words with at least this many characters also get suffix variants.
    pub suffix_min_word_chars: usize,
    /// How many trailing positions produce suffix variants.
    pub suffix_span: usize,
    /// Additional stop words on top of the built-in multilingual set.
    pub extra_stop_words: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            min_token_chars: 2,
            max_prefix_chars: 6,
            suffix_min_word_chars: 5,
            suffix_span: 3,
            extra_stop_words: Vec::new(),
        }
    }
}

/// Configuration for edit-distance matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Query terms shorter than this never take the fuzzy path.
    pub min_term_chars: usize,
    /// Candidates whose length differs by more than this are skipped.
    pub max_length_delta: usize,
    /// Allowed edits as a fraction of the longer term's length.
    pub distance_ratio: f64,
    /// Multiplier applied to the similarity of a fuzzy hit.
    pub weight: f64,
    /// Multiplier for fuzzy hits on terms that appear in the title.
    pub title_boost: f64,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        FuzzyConfig {
            min_term_chars: 4,
            max_length_delta: 2,
            distance_ratio: 0.3,
            weight: 0.7,
            title_boost: 1.5,
        }
    }
}

/// Configuration for snippets, highlights and suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Snippets longer than this many characters are cut and get `...`.
    pub snippet_max_chars: usize,
    /// Content matches kept per highlight entry.
    pub max_content_highlights: usize,
    /// Cap on suggestions returned with an empty response.
    pub max_suggestions: usize,
    /// How many popular historical terms are mixed into suggestions.
    pub popular_suggestions: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        FormatterConfig {
            snippet_max_chars: 200,
            max_content_highlights: 5,
            max_suggestions: 5,
            popular_suggestions: 5,
        }
    }
}

/// Top-level configuration for a [`SearchEngine`](crate::search::engine::SearchEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tokenizer: TokenizerConfig,
    pub fuzzy: FuzzyConfig,
    pub formatter: FormatterConfig,
    /// Terms present in more than this fraction of documents are pruned.
    pub prune_ratio: f64,
    /// Pruning is skipped for corpora smaller than this.
    pub prune_min_documents: usize,
    /// Number of history entries retained.
    pub history_capacity: usize,
    /// Number of history entries exposed through search stats.
    pub recent_searches: usize,
    /// Default number of autocomplete suggestions.
    pub autocomplete_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tokenizer: TokenizerConfig::default(),
            fuzzy: FuzzyConfig::default(),
            formatter: FormatterConfig::default(),
            prune_ratio: 0.8,
            prune_min_documents: 10,
            history_capacity: 100,
            recent_searches: 10,
            autocomplete_limit: 10,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokenizer configuration.
    pub fn tokenizer(mut self, tokenizer: TokenizerConfig) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the fuzzy matching configuration.
    pub fn fuzzy(mut self, fuzzy: FuzzyConfig) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Set the formatter configuration.
    pub fn formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the document-frequency ratio above which terms are pruned.
    pub fn prune_ratio(mut self, prune_ratio: f64) -> Self {
        self.prune_ratio = prune_ratio;
        self
    }

    /// Set the smallest corpus size at which pruning runs.
    pub fn prune_min_documents(mut self, prune_min_documents: usize) -> Self {
        self.prune_min_documents = prune_min_documents;
        self
    }

    /// Set the number of retained history entries.
    pub fn history_capacity(mut self, history_capacity: usize) -> Self {
        self.history_capacity = history_capacity;
        self
    }

    /// Set the default autocomplete limit.
    pub fn autocomplete_limit(mut self, autocomplete_limit: usize) -> Self {
        self.autocomplete_limit = autocomplete_limit;
        self
    }

    /// Load a configuration from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.prune_ratio > 0.0 && self.prune_ratio <= 1.0) {
            return Err(LexisError::invalid_config(format!(
                "prune_ratio must be in (0, 1], got {}",
                self.prune_ratio
            )));
        }
        if !(self.fuzzy.distance_ratio >= 0.0 && self.fuzzy.distance_ratio <= 1.0) {
            return Err(LexisError::invalid_config(format!(
                "fuzzy.distance_ratio must be in [0, 1], got {}",
                self.fuzzy.distance_ratio
            )));
        }
        if self.tokenizer.min_token_chars == 0 {
            return Err(LexisError::invalid_config(
                "tokenizer.min_token_chars must be at least 1",
            ));
        }
        if self.history_capacity == 0 {
            return Err(LexisError::invalid_config(
                "history_capacity must be at least 1",
            ));
        }
        Ok(())
    }
}
