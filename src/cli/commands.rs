//! Command implementations for the Lexis CLI.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::document::CorpusData;
use crate::error::{LexisError, Result};
use crate::search::engine::SearchEngine;

/// Execute a CLI command and print its output.
pub async fn execute_command(args: LexisArgs) -> Result<()> {
    let output = run_command(&args).await?;
    print!("{output}");
    Ok(())
}

/// Execute a CLI command and return its rendered output.
pub async fn run_command(args: &LexisArgs) -> Result<String> {
    let config = load_config(args.config.as_deref())?;
    match &args.command {
        Command::Search(search_args) => search_corpus(search_args, config, args).await,
        Command::Suggest(suggest_args) => suggest_terms(suggest_args, config, args).await,
        Command::Stats(stats_args) => show_stats(stats_args, config, args).await,
    }
}

/// Load the engine configuration, falling back to defaults without a file.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading engine configuration");
            let json = fs::read_to_string(path)?;
            EngineConfig::from_json(&json)
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Read a corpus file.
pub fn load_corpus(path: &Path) -> Result<CorpusData> {
    if !path.exists() {
        return Err(LexisError::other(format!(
            "Corpus file not found: {}",
            path.display()
        )));
    }
    let json = fs::read_to_string(path)?;
    CorpusData::from_json(&json)
}

async fn open_engine(corpus: &Path, config: EngineConfig) -> Result<SearchEngine> {
    let data = load_corpus(corpus)?;
    let engine = SearchEngine::new(config)?;
    engine.build_index(data).await?;
    Ok(engine)
}

/// Search a corpus.
async fn search_corpus(args: &SearchArgs, config: EngineConfig, cli_args: &LexisArgs) -> Result<String> {
    let engine = open_engine(&args.corpus, config).await?;
    let response = engine.search(&args.query, args.to_options()).await?;

    render_result(
        &format!("Searched {}", args.corpus.display()),
        &response,
        cli_args,
    )
}

/// Autocomplete a prefix.
async fn suggest_terms(args: &SuggestArgs, config: EngineConfig, cli_args: &LexisArgs) -> Result<String> {
    let engine = open_engine(&args.corpus, config).await?;
    let suggestions = engine
        .get_autocomplete_suggestions(&args.prefix, args.limit)
        .await;

    render_result(
        "Autocomplete suggestions",
        &SuggestionReport {
            prefix: args.prefix.clone(),
            suggestions,
        },
        cli_args,
    )
}

/// Show index statistics.
async fn show_stats(args: &StatsArgs, config: EngineConfig, cli_args: &LexisArgs) -> Result<String> {
    let engine = open_engine(&args.corpus, config).await?;
    let snapshot = engine.snapshot().ok_or(LexisError::IndexNotReady)?;
    let stats = snapshot.stats();

    render_result(
        &format!("Index built from {}", args.corpus.display()),
        &StatsReport {
            index: engine.index_info(),
            replaced_documents: stats.replaced_documents,
            pruned_terms: stats.pruned_terms,
            build_time_ms: stats.elapsed_ms,
            built_at: stats.built_at,
        },
        cli_args,
    )
}
