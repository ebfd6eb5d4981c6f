//! Snippet selection.

use std::sync::LazyLock;

use regex::Regex;

const ELLIPSIS: &str = "...";

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!.?]+").expect("Sentence pattern should be valid"));

/// Picks the sentence of a document that best represents a query.
#[derive(Debug, Clone, Copy)]
pub struct SnippetGenerator {
    max_chars: usize,
}

impl SnippetGenerator {
    pub fn new(max_chars: usize) -> Self {
        SnippetGenerator { max_chars }
    }

    /// Return the sentence of `content` containing the most query terms.
    ///
    /// Ties go to the earliest sentence. When no sentence contains any term
    /// the start of the content is used instead. The result never exceeds
    /// `max_chars` characters plus a trailing ellipsis.
    pub fn generate(&self, content: &str, terms: &[String]) -> String {
        let mut best = "";
        let mut best_hits = 0;

        for sentence in SENTENCE_BREAK.split(content) {
            let lowered = sentence.to_lowercase();
            let hits = terms
                .iter()
                .filter(|term| lowered.contains(term.to_lowercase().as_str()))
                .count();
            if hits > best_hits {
                best_hits = hits;
                best = sentence.trim();
            }
        }

        if best.is_empty() {
            self.truncate(content.trim())
        } else {
            self.truncate(best)
        }
    }

    fn truncate(&self, text: &str) -> String {
        match text.char_indices().nth(self.max_chars) {
            Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
            None => text.to_string(),
        }
    }
}

impl Default for SnippetGenerator {
    fn default() -> Self {
        SnippetGenerator::new(200)
    }
}
