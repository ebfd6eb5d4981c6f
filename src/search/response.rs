//! Serializable search responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::DocumentType;
use crate::search::highlight::Highlight;

/// One ranked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub title: String,
    pub snippet: String,
    pub category: String,
    pub level: String,
    pub url: String,
    pub score: f64,
    pub highlights: Vec<Highlight>,
    /// The corpus item as supplied; verbatim when the corpus was parsed from JSON.
    pub data: Value,
}

/// The answer to one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The requested page.
    pub results: Vec<SearchResult>,
    /// Number of matches before paging.
    pub total: usize,
    pub query: String,
    /// Milliseconds.
    pub response_time: f64,
    /// Alternative terms, only offered when nothing matched.
    pub suggestions: Vec<String>,
}

impl SearchResponse {
    /// The response to a query that produced no search terms.
    pub fn empty<S: Into<String>>(query: S) -> Self {
        SearchResponse {
            results: Vec::new(),
            total: 0,
            query: query.into(),
            response_time: 0.0,
            suggestions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Ids of the returned results, in order.
    pub fn ids(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.id.as_str()).collect()
    }
}

/// Size and readiness of the published index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexInfo {
    pub term_count: usize,
    pub document_count: usize,
    pub is_indexed: bool,
    /// Estimated bytes.
    pub memory_usage: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_serializes_camel_case() {
        let response = SearchResponse::empty("a");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total"], 0);
        assert_eq!(json["query"], "a");
        assert_eq!(json["responseTime"], 0.0);
        assert!(json["results"].as_array().unwrap().is_empty());
        assert!(json["suggestions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_index_info_field_names() {
        let info = IndexInfo {
            term_count: 3,
            document_count: 1,
            is_indexed: true,
            memory_usage: 120,
        };
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["termCount"], 3);
        assert_eq!(json["isIndexed"], true);
        assert_eq!(json["memoryUsage"], 120);
    }
}
