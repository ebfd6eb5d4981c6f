//! Input shapes handed to the engine by the data-loading layer.
//!
//! Unknown fields are preserved in `extra`. Items parsed through
//! [`CorpusData`] also keep the raw JSON they came from, so the payload
//! returned with each search result is the item exactly as it was supplied.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// An example sentence or rule: either a bare string or an object with a `text` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextEntry {
    Plain(String),
    Rich {
        text: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl TextEntry {
    /// The searchable text of this entry.
    pub fn text(&self) -> &str {
        match self {
            TextEntry::Plain(text) => text,
            TextEntry::Rich { text, .. } => text,
        }
    }
}

impl From<&str> for TextEntry {
    fn from(text: &str) -> Self {
        TextEntry::Plain(text.to_string())
    }
}

/// A vocabulary item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyDoc {
    pub id: String,
    pub word: String,
    pub translation: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<TextEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linguistic_note: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// The JSON object this item was parsed from, if any.
    #[serde(skip)]
    pub source: Option<Value>,
}

impl VocabularyDoc {
    /// Create a vocabulary item with the required fields set.
    pub fn new<S: Into<String>>(id: S, word: S, translation: S, category: S, level: S) -> Self {
        VocabularyDoc {
            id: id.into(),
            word: word.into(),
            translation: translation.into(),
            category: category.into(),
            level: level.into(),
            ..Default::default()
        }
    }

    pub fn with_languages<S: Into<String>>(mut self, source: S, target: S) -> Self {
        self.source_lang = Some(source.into());
        self.target_lang = Some(target.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_notes<S: Into<String>>(mut self, notes: S) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_example<E: Into<TextEntry>>(mut self, example: E) -> Self {
        self.examples.push(example.into());
        self
    }
}

/// A grammar lesson.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<TextEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// The JSON object this lesson was parsed from, if any.
    #[serde(skip)]
    pub source: Option<Value>,
}

impl GrammarDoc {
    /// Create a grammar lesson with only a title.
    pub fn new<S: Into<String>>(title: S) -> Self {
        GrammarDoc {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_content<S: Into<String>>(mut self, content: S) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_rule<E: Into<TextEntry>>(mut self, rule: E) -> Self {
        self.rules.push(rule.into());
        self
    }

    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

/// A full corpus: everything one index build consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusData {
    #[serde(default, deserialize_with = "with_source")]
    pub vocabulary: Vec<VocabularyDoc>,
    #[serde(default, deserialize_with = "with_source")]
    pub grammar: Vec<GrammarDoc>,
}

trait KeepSource {
    fn set_source(&mut self, source: Value);
}

impl KeepSource for VocabularyDoc {
    fn set_source(&mut self, source: Value) {
        self.source = Some(source);
    }
}

impl KeepSource for GrammarDoc {
    fn set_source(&mut self, source: Value) {
        self.source = Some(source);
    }
}

fn with_source<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + KeepSource,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(|raw| {
            let mut item = T::deserialize(&raw).map_err(D::Error::custom)?;
            item.set_source(raw);
            Ok(item)
        })
        .collect()
}

impl CorpusData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(mut self, vocabulary: Vec<VocabularyDoc>) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_grammar(mut self, grammar: Vec<GrammarDoc>) -> Self {
        self.grammar = grammar;
        self
    }

    /// Parse a corpus from JSON of the form `{"vocabulary": [...], "grammar": [...]}`.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len() + self.grammar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corpus_json() {
        let corpus = CorpusData::from_json(
            r#"{
                "vocabulary": [{
                    "id": "v1", "word": "Hallo", "translation": "Здравей",
                    "category": "greetings", "level": "A1",
                    "examples": ["Hallo, wie geht's?", {"text": "Hallo Welt", "note": "x"}],
                    "audio": "hallo.mp3"
                }],
                "grammar": [{"title": "Articles", "rules": ["der, die, das"]}]
            }"#,
        )
        .unwrap();

        assert_eq!(corpus.len(), 2);
        let vocab = &corpus.vocabulary[0];
        assert_eq!(vocab.examples[0].text(), "Hallo, wie geht's?");
        assert_eq!(vocab.examples[1].text(), "Hallo Welt");
        assert_eq!(vocab.extra["audio"], "hallo.mp3");
        assert_eq!(corpus.grammar[0].rules[0].text(), "der, die, das");
    }

    #[test]
    fn test_parsed_items_keep_their_source() {
        let raw = serde_json::json!({
            "id": "v1", "word": "hello", "translation": "hallo",
            "difficulty": 2, "notes": null
        });
        let corpus = CorpusData::from_json(
            &serde_json::json!({ "vocabulary": [raw.clone()], "grammar": [{"title": "Cases"}] })
                .to_string(),
        )
        .unwrap();

        assert_eq!(corpus.vocabulary[0].source.as_ref(), Some(&raw));
        assert_eq!(corpus.vocabulary[0].difficulty, Some(2.0));
        assert_eq!(
            corpus.grammar[0].source,
            Some(serde_json::json!({"title": "Cases"}))
        );
        assert!(VocabularyDoc::new("v2", "a", "b", "c", "A1").source.is_none());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let corpus = CorpusData::from_json("{}").unwrap();
        assert!(corpus.is_empty());
    }
}
