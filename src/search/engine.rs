//! The search engine: index lifecycle, search and analytics.
//!
//! A [`SearchEngine`] owns one published [`IndexSnapshot`] at a time. Builds
//! run on the blocking thread pool into a fresh snapshot which replaces the
//! published one only when the build succeeds, so searches never see a
//! partially built index. Concurrent calls to
//! [`build_index`](SearchEngine::build_index) share a single in-flight build.

use std::sync::Arc;
use std::time::Instant;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::analysis::Tokenizer;
use crate::analytics::{AnalyticsTracker, SearchStats};
use crate::config::EngineConfig;
use crate::document::CorpusData;
use crate::error::{LexisError, Result};
use crate::index::{IndexBuilder, IndexSnapshot};
use crate::query::{DocumentMatch, Matcher, QueryParser};
use crate::search::highlight::Highlighter;
use crate::search::options::SearchOptions;
use crate::search::response::{IndexInfo, SearchResponse, SearchResult};
use crate::search::scorer::{RelevanceScorer, sort_matches};
use crate::search::snippet::SnippetGenerator;
use crate::search::suggest::{autocomplete, zero_result_suggestions};

type BuildOutcome = Result<Arc<IndexSnapshot>>;
type SharedBuild = Shared<BoxFuture<'static, BuildOutcome>>;

struct EngineInner {
    config: EngineConfig,
    tokenizer: Tokenizer,
    parser: QueryParser,
    snapshot: RwLock<Option<Arc<IndexSnapshot>>>,
    in_flight: Mutex<Option<SharedBuild>>,
    analytics: Mutex<AnalyticsTracker>,
}

/// A full-text search engine over a vocabulary and grammar corpus.
///
/// Cloning is cheap and every clone shares the same index and analytics.
///
/// # Examples
///
/// ```no_run
/// use lexis::{CorpusData, EngineConfig, SearchEngine, SearchOptions, VocabularyDoc};
///
/// # async fn run() -> lexis::Result<()> {
/// let engine = SearchEngine::new(EngineConfig::default())?;
/// engine
///     .build_index(CorpusData::new().with_vocabulary(vec![VocabularyDoc::new(
///         "v1", "hello", "hallo", "greetings", "A1",
///     )]))
///     .await?;
///
/// let response = engine.search("hel", SearchOptions::default()).await?;
/// assert_eq!(response.ids(), vec!["v1"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SearchEngine {
    inner: Arc<EngineInner>,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("config", &self.inner.config)
            .field("is_ready", &self.is_ready())
            .field("building", &self.inner.in_flight.lock().is_some())
            .finish()
    }
}

impl SearchEngine {
    /// Create an engine with no index.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::new(config.tokenizer.clone())?;
        let parser = QueryParser::new(tokenizer.clone())?;
        let analytics = AnalyticsTracker::new(tokenizer.clone(), config.history_capacity);

        Ok(SearchEngine {
            inner: Arc::new(EngineInner {
                config,
                tokenizer,
                parser,
                snapshot: RwLock::new(None),
                in_flight: Mutex::new(None),
                analytics: Mutex::new(analytics),
            }),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    /// Build a new index from `data` and publish it.
    ///
    /// If a build is already running, this waits for that build instead and
    /// `data` is discarded. On failure the previously published index, if
    /// any, stays in place. Must be called within a Tokio runtime.
    pub async fn build_index(&self, data: CorpusData) -> Result<()> {
        let build = {
            let mut slot = self.inner.in_flight.lock();
            match slot.as_ref() {
                Some(build) => {
                    debug!("Index build already in progress, joining it");
                    build.clone()
                }
                None => {
                    let build = self.spawn_build(data);
                    *slot = Some(build.clone());
                    build
                }
            }
        };

        build.await.map(|_| ())
    }

    fn spawn_build(&self, data: CorpusData) -> SharedBuild {
        let inner = Arc::clone(&self.inner);
        let builder = IndexBuilder::new(
            inner.tokenizer.clone(),
            inner.config.prune_ratio,
            inner.config.prune_min_documents,
        );

        info!(
            vocabulary = data.vocabulary.len(),
            grammar = data.grammar.len(),
            "Building search index"
        );

        let handle = tokio::spawn(async move {
            let outcome = match tokio::task::spawn_blocking(move || builder.build(data)).await {
                Ok(result) => result.map(Arc::new),
                Err(e) => Err(LexisError::build(format!("Index build task failed: {e}"))),
            };

            match &outcome {
                Ok(snapshot) => {
                    let stats = snapshot.stats();
                    info!(
                        documents = stats.documents,
                        terms = stats.terms,
                        pruned = stats.pruned_terms,
                        elapsed_ms = stats.elapsed_ms,
                        "Search index built"
                    );
                    *inner.snapshot.write() = Some(Arc::clone(snapshot));
                }
                Err(e) => warn!(error = %e, "Search index build failed"),
            }

            *inner.in_flight.lock() = None;
            outcome
        });

        async move {
            handle
                .await
                .map_err(|e| LexisError::build(format!("Index build task failed: {e}")))?
        }
        .boxed()
        .shared()
    }

    /// Drop the published index. Analytics are kept.
    pub fn clear_index(&self) {
        *self.inner.snapshot.write() = None;
        info!("Search index cleared");
    }

    /// The published snapshot, if any.
    pub fn snapshot(&self) -> Option<Arc<IndexSnapshot>> {
        self.inner.snapshot.read().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.snapshot.read().is_some()
    }

    pub fn document_count(&self) -> usize {
        self.snapshot().map_or(0, |s| s.documents().len())
    }

    pub fn term_count(&self) -> usize {
        self.snapshot().map_or(0, |s| s.index().len())
    }

    /// Search the published index.
    ///
    /// Fails with [`LexisError::IndexNotReady`] when no index is published.
    /// Queries that yield no terms return an empty response and are not
    /// recorded in the analytics.
    pub async fn search(&self, query: &str, options: SearchOptions) -> Result<SearchResponse> {
        let start = Instant::now();
        let snapshot = self.snapshot().ok_or_else(|| {
            warn!(query, "Search attempted before the index was built");
            LexisError::IndexNotReady
        })?;

        let parsed = self.inner.parser.parse(query);
        if parsed.is_empty() {
            debug!(query, "Query produced no search terms");
            return Ok(SearchResponse::empty(query));
        }
        let terms = parsed.terms;

        let config = &self.inner.config;
        let mut matches =
            Matcher::new(&snapshot, &config.fuzzy).find_matches(&terms, &options.filters());
        RelevanceScorer::new(&self.inner.tokenizer).score_all(&mut matches, &terms);
        matches.retain(|m| m.score >= options.min_score);
        sort_matches(&mut matches, options.sort_by);

        let total = matches.len();
        let highlighter = Highlighter::new(&terms, config.formatter.max_content_highlights)?;
        let snippets = SnippetGenerator::new(config.formatter.snippet_max_chars);
        let results: Vec<SearchResult> = matches
            .iter()
            .skip(options.offset)
            .take(options.limit)
            .map(|m| build_result(m, &terms, &highlighter, &snippets))
            .collect();

        let mut analytics = self.inner.analytics.lock();
        let suggestions = if total == 0 {
            let popular = analytics.top_terms(config.formatter.popular_suggestions);
            zero_result_suggestions(
                snapshot.index(),
                &self.inner.tokenizer,
                query,
                &popular,
                config.formatter.max_suggestions,
            )
        } else {
            Vec::new()
        };

        let response_time = start.elapsed().as_secs_f64() * 1000.0;
        analytics.record_search(query, response_time, results.len());
        drop(analytics);

        debug!(
            query,
            terms = terms.len(),
            total,
            returned = results.len(),
            response_time_ms = response_time,
            "Search completed"
        );

        Ok(SearchResponse {
            results,
            total,
            query: query.to_string(),
            response_time,
            suggestions,
        })
    }

    /// Indexed terms starting with `query`.
    ///
    /// Uses the configured default when `limit` is `None`. Returns nothing
    /// when no index is published.
    pub async fn get_autocomplete_suggestions(&self, query: &str, limit: Option<usize>) -> Vec<String> {
        let limit = limit.unwrap_or(self.inner.config.autocomplete_limit);
        match self.snapshot() {
            Some(snapshot) => autocomplete(snapshot.index(), query, limit),
            None => Vec::new(),
        }
    }

    /// Analytics together with the state of the published index.
    pub fn get_search_stats(&self) -> SearchStats {
        let snapshot = self.snapshot();
        self.inner.analytics.lock().stats(
            snapshot.as_ref().map_or(0, |s| s.index().len()),
            snapshot.as_ref().map_or(0, |s| s.documents().len()),
            snapshot.is_some(),
            self.inner.config.recent_searches,
        )
    }

    /// Forget all recorded searches.
    pub fn reset_analytics(&self) {
        self.inner.analytics.lock().reset();
    }

    pub fn index_info(&self) -> IndexInfo {
        match self.snapshot() {
            Some(snapshot) => IndexInfo {
                term_count: snapshot.index().len(),
                document_count: snapshot.documents().len(),
                is_indexed: true,
                memory_usage: snapshot.memory_usage(),
            },
            None => IndexInfo {
                term_count: 0,
                document_count: 0,
                is_indexed: false,
                memory_usage: 0,
            },
        }
    }
}

fn build_result(
    m: &DocumentMatch<'_>,
    terms: &[String],
    highlighter: &Highlighter,
    snippets: &SnippetGenerator,
) -> SearchResult {
    let doc = m.document;
    SearchResult {
        id: doc.id.clone(),
        doc_type: doc.doc_type,
        title: doc.title.clone(),
        snippet: snippets.generate(&doc.content, terms),
        category: doc.category.clone(),
        level: doc.level.clone(),
        url: doc.url.clone(),
        score: m.score,
        highlights: highlighter.highlight(doc),
        data: doc.data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{GrammarDoc, VocabularyDoc};

    fn corpus() -> CorpusData {
        CorpusData::new()
            .with_vocabulary(vec![
                VocabularyDoc::new("v1", "hello", "hallo", "greetings", "A1"),
                VocabularyDoc::new("v2", "house", "Haus", "home", "A2"),
            ])
            .with_grammar(vec![
                GrammarDoc::new("Definite articles").with_content("Articles attach to the noun."),
            ])
    }

    fn engine() -> SearchEngine {
        SearchEngine::new(EngineConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_not_ready_until_built() {
        let engine = engine();
        assert!(!engine.is_ready());
        let err = engine.search("hello", SearchOptions::default()).await.unwrap_err();
        assert!(err.is_not_ready());

        engine.build_index(corpus()).await.unwrap();
        assert!(engine.is_ready());
        assert_eq!(engine.document_count(), 3);
        assert!(engine.term_count() > 0);
    }

    #[tokio::test]
    async fn test_search_builds_results() {
        let engine = engine();
        engine.build_index(corpus()).await.unwrap();

        let response = engine.search("hello", SearchOptions::default()).await.unwrap();
        assert_eq!(response.ids(), vec!["v1"]);
        let result = &response.results[0];
        assert_eq!(result.url, "/vocabulary/hello/");
        assert_eq!(result.snippet, "hello hallo");
        assert!(result.score > 0.0);
        assert_eq!(result.highlights[0].term, "hello");
        assert_eq!(result.data["word"], "hello");
        assert!(response.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_empty_query_is_not_recorded() {
        let engine = engine();
        engine.build_index(corpus()).await.unwrap();

        let response = engine.search("a", SearchOptions::default()).await.unwrap();
        assert_eq!(response.total, 0);
        assert_eq!(engine.get_search_stats().total_searches, 0);
    }

    #[tokio::test]
    async fn test_zero_results_produce_suggestions() {
        let engine = engine();
        engine.build_index(corpus()).await.unwrap();

        let response = engine
            .search("hello", SearchOptions::new().category("nothing"))
            .await
            .unwrap();
        assert_eq!(response.total, 0);
        assert!(response.suggestions.contains(&"hello".to_string()));
    }

    #[tokio::test]
    async fn test_clear_index_keeps_analytics() {
        let engine = engine();
        engine.build_index(corpus()).await.unwrap();
        engine.search("hello", SearchOptions::default()).await.unwrap();

        engine.clear_index();
        assert!(!engine.is_ready());
        assert_eq!(engine.index_info().term_count, 0);
        let stats = engine.get_search_stats();
        assert_eq!(stats.total_searches, 1);
        assert!(!stats.is_indexed);

        engine.reset_analytics();
        assert_eq!(engine.get_search_stats().total_searches, 0);
    }

    #[tokio::test]
    async fn test_autocomplete() {
        let engine = engine();
        assert!(engine.get_autocomplete_suggestions("he", None).await.is_empty());

        engine.build_index(corpus()).await.unwrap();
        let suggestions = engine.get_autocomplete_suggestions("HO", None).await;
        assert!(suggestions.contains(&"house".to_string()));
        assert!(suggestions.iter().all(|s| s.starts_with("ho") && s != "ho"));
    }
}
