//! Edit-distance matching of a query term against indexed terms.

use crate::config::FuzzyConfig;
use crate::util::levenshtein::{levenshtein_distance_threshold, levenshtein_similarity};

/// A candidate term accepted by a [`FuzzyMatcher`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyHit {
    /// Edit distance between the query term and the candidate.
    pub distance: usize,
    /// `similarity * config.weight`, in `[0, config.weight]`.
    pub weight: f64,
}

/// Decides whether indexed terms are close enough to one query term.
///
/// A candidate matches when its length differs from the query term's by at
/// most `max_length_delta` characters and the edit distance is at most
/// `floor(max_len * distance_ratio)`.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher<'a> {
    query: &'a str,
    query_len: usize,
    config: &'a FuzzyConfig,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(query: &'a str, config: &'a FuzzyConfig) -> Self {
        FuzzyMatcher {
            query,
            query_len: query.chars().count(),
            config,
        }
    }

    /// Whether the query term is long enough for fuzzy matching at all.
    pub fn is_enabled(&self) -> bool {
        self.query_len >= self.config.min_term_chars
    }

    /// The largest accepted distance against a candidate of `candidate_len` characters.
    pub fn max_distance(&self, candidate_len: usize) -> usize {
        let max_len = self.query_len.max(candidate_len);
        (max_len as f64 * self.config.distance_ratio).floor() as usize
    }

    /// Check a candidate term, returning its distance and weight on a match.
    pub fn match_term(&self, candidate: &str) -> Option<FuzzyHit> {
        let candidate_len = candidate.chars().count();
        if self.query_len.abs_diff(candidate_len) > self.config.max_length_delta {
            return None;
        }

        let distance =
            levenshtein_distance_threshold(self.query, candidate, self.max_distance(candidate_len))?;
        let weight = levenshtein_similarity(self.query, candidate, distance) * self.config.weight;

        Some(FuzzyHit { distance, weight })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_length() {
        let config = FuzzyConfig::default();
        assert!(FuzzyMatcher::new("helo", &config).is_enabled());
        assert!(!FuzzyMatcher::new("hel", &config).is_enabled());
        assert!(FuzzyMatcher::new("куче", &config).is_enabled());
    }

    #[test]
    fn test_match_within_ratio() {
        let config = FuzzyConfig::default();
        let matcher = FuzzyMatcher::new("helo", &config);

        // max(4, 5) * 0.3 = 1.5 -> 1 edit allowed
        let hit = matcher.match_term("hello").unwrap();
        assert_eq!(hit.distance, 1);
        assert!((hit.weight - 0.8 * 0.7).abs() < 1e-9);

        // Two edits against a 5-letter word is too many.
        assert!(matcher.match_term("hallo").is_none());
    }

    #[test]
    fn test_length_gate() {
        let config = FuzzyConfig::default();
        let matcher = FuzzyMatcher::new("abcdefghij", &config);
        // Distance 3 is allowed for 10 characters, but the length gap is too large.
        assert!(matcher.match_term("abcdefg").is_none());
        assert!(matcher.match_term("abcdefghxx").is_some());
    }

    #[test]
    fn test_short_pairs_allow_no_edits() {
        let config = FuzzyConfig::default();
        let matcher = FuzzyMatcher::new("haus", &config);
        // floor(4 * 0.3) = 1, so one substitution passes
        assert!(matcher.match_term("maus").is_some());
        // floor(3 * 0.3) = 0 would apply to three-letter pairs, but max length is 4 here
        assert_eq!(matcher.max_distance(3), 1);
        assert_eq!(FuzzyMatcher::new("abc", &config).max_distance(3), 0);
    }
}
