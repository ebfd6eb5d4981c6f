//! Term extraction for indexing and querying.
//!
//! Text is lowercased, every character that is not whitespace, a word
//! character or Cyrillic is replaced by a space, and the result is split on
//! whitespace. Short words and stop words are dropped. Each surviving word is
//! then expanded into the word itself, its prefixes of 2 to 6 characters and,
//! for words of 5 or more characters, its last few suffixes. Materializing
//! those variants at build time lets most partial and inflected queries be
//! answered by a plain lookup instead of a fuzzy scan.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use regex::Regex;

use crate::analysis::stop::StopWords;
use crate::config::TokenizerConfig;
use crate::error::{LexisError, Result};

/// Characters that survive normalization: whitespace, word characters and
/// the Cyrillic block.
const NON_TERM_PATTERN: &str = r"[^\s\w\x{0400}-\x{04FF}]";

/// Suffix variants never start before this character offset.
const SUFFIX_MIN_START: usize = 2;

/// Tokenizer and normalizer shared by the index builder, the query parser
/// and the analytics tracker.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    config: TokenizerConfig,
    stop_words: StopWords,
    non_term: Arc<Regex>,
}

impl Tokenizer {
    /// Create a tokenizer from configuration.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let non_term = Regex::new(NON_TERM_PATTERN)
            .map_err(|e| LexisError::invalid_config(format!("Invalid term pattern: {e}")))?;
        let stop_words = StopWords::with_extra(&config.extra_stop_words);

        Ok(Tokenizer {
            config,
            stop_words,
            non_term: Arc::new(non_term),
        })
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Lowercase, strip punctuation and collapse whitespace.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.non_term.replace_all(&lowered, " ");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// The indexable words of `text`, in order, with duplicates kept.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .filter(|word| self.is_indexable(word))
            .map(str::to_string)
            .collect()
    }

    /// Extract the deduplicated set of terms for `text`.
    ///
    /// Terms are returned in first-seen order so callers that iterate them
    /// behave the same from run to run.
    pub fn extract_terms(&self, text: &str) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut terms = Vec::new();

        for word in self.words(text) {
            for variant in self.expand(&word) {
                if seen.insert(variant.clone()) {
                    terms.push(variant);
                }
            }
        }

        terms
    }

    /// Count, for every term, how many words of `text` produce it.
    ///
    /// The result lists each term once, in first-seen order.
    pub fn term_frequencies(&self, text: &str) -> Vec<(String, u32)> {
        let mut slots: AHashMap<String, usize> = AHashMap::new();
        let mut counts: Vec<(String, u32)> = Vec::new();

        for word in self.words(text) {
            for variant in self.expand(&word) {
                match slots.get(&variant) {
                    Some(&slot) => counts[slot].1 += 1,
                    None => {
                        slots.insert(variant.clone(), counts.len());
                        counts.push((variant, 1));
                    }
                }
            }
        }

        counts
    }

    /// Expand one normalized word into its distinct variants.
    pub fn expand(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        let min = self.config.min_token_chars;
        let mut variants = vec![word.to_string()];

        let max_prefix = len.min(self.config.max_prefix_chars);
        for end in min..=max_prefix {
            if end < len {
                variants.push(chars[..end].iter().collect());
            }
        }

        if len >= self.config.suffix_min_word_chars {
            let first = SUFFIX_MIN_START.max(len.saturating_sub(self.config.suffix_span));
            for start in first..len {
                if len - start >= min {
                    variants.push(chars[start..].iter().collect());
                }
            }
        }

        let mut seen = AHashSet::new();
        variants.retain(|v| seen.insert(v.clone()));
        variants
    }

    fn is_indexable(&self, word: &str) -> bool {
        word.chars().count() >= self.config.min_token_chars && !self.stop_words.contains(word)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default()).expect("Default term pattern should be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::default()
    }

    #[test]
    fn test_normalize() {
        let t = tokenizer();
        assert_eq!(t.normalize("  Hello,   World!  "), "hello world");
        assert_eq!(t.normalize("Здравей, свят!"), "здравей свят");
        assert_eq!(t.normalize("Straße (f.)"), "straße f");
    }

    #[test]
    fn test_words_drop_short_and_stop_words() {
        let t = tokenizer();
        assert_eq!(t.words("the cat and a dog"), vec!["cat", "dog"]);
        assert_eq!(t.words("и куче"), vec!["куче"]);
        assert!(t.words("a").is_empty());
        assert!(t.words("").is_empty());
    }

    #[test]
    fn test_expand_prefixes_and_suffixes() {
        let t = tokenizer();
        let variants = t.expand("hello");
        assert_eq!(variants, vec!["hello", "he", "hel", "hell", "llo", "lo"]);

        // Four characters: prefixes only.
        assert_eq!(t.expand("haus"), vec!["haus", "ha", "hau"]);

        // Prefixes stop at six characters.
        let variants = t.expand("wonderful");
        assert!(variants.contains(&"wonder".to_string()));
        assert!(!variants.contains(&"wonderf".to_string()));
        assert!(variants.contains(&"ful".to_string()));
        assert!(variants.contains(&"ul".to_string()));
    }

    #[test]
    fn test_expand_cyrillic_counts_characters() {
        let t = tokenizer();
        let variants = t.expand("здравей");
        assert!(variants.contains(&"зд".to_string()));
        assert!(variants.contains(&"здраве".to_string()));
        assert!(variants.contains(&"вей".to_string()));
        assert!(variants.iter().all(|v| v.chars().count() >= 2));
    }

    #[test]
    fn test_extract_terms_is_deduplicated() {
        let t = tokenizer();
        let terms = t.extract_terms("hello hello help");
        let hel = terms.iter().filter(|term| term.as_str() == "hel").count();
        assert_eq!(hel, 1);
        assert_eq!(terms[0], "hello");
        assert!(terms.contains(&"help".to_string()));
    }

    #[test]
    fn test_term_frequencies() {
        let t = tokenizer();
        let freqs: AHashMap<String, u32> = t.term_frequencies("hello hello help").into_iter().collect();
        assert_eq!(freqs["hello"], 2);
        assert_eq!(freqs["hel"], 3);
        assert_eq!(freqs["help"], 1);
    }

    #[test]
    fn test_extra_stop_words() {
        let config = TokenizerConfig {
            extra_stop_words: vec!["Hallo".to_string()],
            ..TokenizerConfig::default()
        };
        let t = Tokenizer::new(config).unwrap();
        assert!(t.extract_terms("hallo").is_empty());
    }
}
