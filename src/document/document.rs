//! The stored, searchable document.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::corpus::{GrammarDoc, VocabularyDoc};
use crate::error::{LexisError, Result};

const DEFAULT_SOURCE_LANG: &str = "bg";
const DEFAULT_TARGET_LANG: &str = "de";
const DEFAULT_GRAMMAR_CATEGORY: &str = "grammar";
const DEFAULT_GRAMMAR_LEVEL: &str = "A1";

/// Kind of content a document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Vocabulary,
    Grammar,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Vocabulary => "vocabulary",
            DocumentType::Grammar => "grammar",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of searchable content.
///
/// `content` is the flattened text assembled from every searchable field of
/// the source item; `data` is the source item itself, returned verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub title: String,
    pub content: String,
    pub category: String,
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
    /// Lower is easier. Defaults to 1.
    pub difficulty: f64,
    /// Corpus usage frequency, at least 1. Defaults to 1.
    pub frequency: f64,
    pub url: String,
    pub data: Value,
}

impl Document {
    /// Build a document from a vocabulary item.
    pub fn from_vocabulary(mut item: VocabularyDoc) -> Result<Self> {
        if item.id.trim().is_empty() {
            return Err(LexisError::invalid_document(format!(
                "vocabulary item '{}' has an empty id",
                item.word
            )));
        }
        if item.word.trim().is_empty() {
            return Err(LexisError::invalid_document(format!(
                "vocabulary item '{}' has an empty word",
                item.id
            )));
        }

        let mut parts: Vec<&str> = vec![item.word.as_str(), item.translation.as_str()];
        for optional in [
            &item.notes,
            &item.etymology,
            &item.cultural_note,
            &item.linguistic_note,
        ] {
            if let Some(text) = optional {
                parts.push(text);
            }
        }
        parts.extend(item.examples.iter().map(|e| e.text()));
        let content = join_non_empty(&parts);

        let data = match item.source.take() {
            Some(raw) => raw,
            None => serde_json::to_value(&item)?,
        };
        Ok(Document {
            id: item.id.clone(),
            doc_type: DocumentType::Vocabulary,
            url: format!("/vocabulary/{}/", item.word),
            title: item.word,
            content,
            category: item.category,
            level: item.level,
            source_lang: Some(
                non_empty(item.source_lang).unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string()),
            ),
            target_lang: Some(
                non_empty(item.target_lang).unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string()),
            ),
            difficulty: positive_or_one(item.difficulty),
            frequency: positive_or_one(item.frequency),
            data,
        })
    }

    /// Build a document from a grammar lesson.
    pub fn from_grammar(mut item: GrammarDoc) -> Result<Self> {
        if item.title.trim().is_empty() {
            return Err(LexisError::invalid_document(
                "grammar item has an empty title",
            ));
        }

        let mut parts: Vec<&str> = vec![item.title.as_str()];
        for optional in [&item.description, &item.content, &item.examples] {
            if let Some(text) = optional {
                parts.push(text);
            }
        }
        parts.extend(item.rules.iter().map(|r| r.text()));
        let content = join_non_empty(&parts);

        let data = match item.source.take() {
            Some(raw) => raw,
            None => serde_json::to_value(&item)?,
        };
        let id = non_empty(item.id).unwrap_or_else(|| format!("grammar-{}", item.title));
        let slug = non_empty(item.slug).unwrap_or_else(|| item.title.clone());

        Ok(Document {
            id,
            doc_type: DocumentType::Grammar,
            url: format!("/grammar/{slug}/"),
            title: item.title,
            content,
            category: non_empty(item.category)
                .unwrap_or_else(|| DEFAULT_GRAMMAR_CATEGORY.to_string()),
            level: non_empty(item.level).unwrap_or_else(|| DEFAULT_GRAMMAR_LEVEL.to_string()),
            source_lang: None,
            target_lang: None,
            difficulty: positive_or_one(item.difficulty),
            frequency: 1.0,
            data,
        })
    }

    /// The text that is tokenized for indexing.
    pub fn indexable_text(&self) -> String {
        format!("{} {}", self.content, self.title)
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Missing, zero and non-finite values fall back to 1.
fn positive_or_one(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => 1.0,
    }
}
