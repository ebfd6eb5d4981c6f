//! Query suggestions and autocomplete over indexed terms.

use ahash::AHashSet;

use crate::analysis::Tokenizer;
use crate::index::InvertedIndex;

/// Queries shorter than this get no autocomplete suggestions.
const MIN_AUTOCOMPLETE_CHARS: usize = 2;

/// Suggestions for a query that found nothing.
///
/// Indexed terms that contain, or are contained in, one of the query's
/// terms come first, in index order, followed by `popular` terms. The list
/// is deduplicated and capped at `max`.
pub fn zero_result_suggestions(
    index: &InvertedIndex,
    tokenizer: &Tokenizer,
    query: &str,
    popular: &[String],
    max: usize,
) -> Vec<String> {
    let query_terms = tokenizer.extract_terms(query);
    let mut seen = AHashSet::new();
    let mut suggestions = Vec::new();

    let related = index.terms().filter(|term| {
        query_terms
            .iter()
            .any(|q| term.contains(q.as_str()) || q.contains(*term))
    });

    for term in related.chain(popular.iter().map(String::as_str)) {
        if suggestions.len() >= max {
            break;
        }
        if seen.insert(term) {
            suggestions.push(term.to_string());
        }
    }

    suggestions
}

/// Indexed terms that extend `query`, in index order.
///
/// The query is lowercased; the query itself is never returned.
pub fn autocomplete(index: &InvertedIndex, query: &str, limit: usize) -> Vec<String> {
    if query.chars().count() < MIN_AUTOCOMPLETE_CHARS {
        return Vec::new();
    }

    let prefix = query.to_lowercase();
    index
        .terms()
        .filter(|term| term.starts_with(prefix.as_str()) && *term != prefix)
        .take(limit)
        .map(str::to_string)
        .collect()
}
