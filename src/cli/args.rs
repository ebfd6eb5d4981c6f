//! Command line argument parsing for the Lexis CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::search::options::{ContentType, SearchOptions, SortBy};

/// Lexis - full-text search over vocabulary and grammar corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "Full-text search over bilingual vocabulary and grammar corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a corpus
    Search(SearchArgs),

    /// Autocomplete a prefix against a corpus
    Suggest(SuggestArgs),

    /// Show index statistics for a corpus
    Stats(StatsArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Corpus file (JSON with `vocabulary` and `grammar` arrays)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Query string; wrap words in double quotes to search for a phrase
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Restrict results to one kind of document
    #[arg(short = 't', long = "type", default_value = "all")]
    pub content_type: TypeFilter,

    /// Only documents in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only documents at this level (e.g. A1)
    #[arg(long)]
    pub level: Option<String>,

    /// Language direction, e.g. bg-de
    #[arg(short, long)]
    pub direction: Option<String>,

    /// Maximum number of results to return
    #[arg(short, long, default_value = "50")]
    pub limit: usize,

    /// Offset for pagination
    #[arg(short, long, default_value = "0")]
    pub offset: usize,

    /// Result ordering
    #[arg(short, long, default_value = "relevance")]
    pub sort_by: SortOrder,

    /// Minimum score threshold for results
    #[arg(long, default_value = "0.1")]
    pub min_score: f64,
}

impl SearchArgs {
    /// The engine options these arguments describe.
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            content_type: self.content_type.into(),
            category: self.category.clone(),
            level: self.level.clone(),
            limit: self.limit,
            offset: self.offset,
            sort_by: self.sort_by.into(),
            direction: self.direction.clone(),
            min_score: self.min_score,
        }
    }
}

/// Arguments for autocomplete
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of suggestions (defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,
}

/// Document kinds accepted by `--type`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    /// Vocabulary and grammar
    All,
    /// Vocabulary items only
    Vocabulary,
    /// Grammar lessons only
    Grammar,
}

impl From<TypeFilter> for ContentType {
    fn from(filter: TypeFilter) -> Self {
        match filter {
            TypeFilter::All => ContentType::All,
            TypeFilter::Vocabulary => ContentType::Vocabulary,
            TypeFilter::Grammar => ContentType::Grammar,
        }
    }
}

/// Orderings accepted by `--sort-by`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Highest score first
    Relevance,
    /// By title
    Alphabetical,
    /// Easiest first
    Difficulty,
}

impl From<SortOrder> for SortBy {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Relevance => SortBy::Relevance,
            SortOrder::Alphabetical => SortBy::Alphabetical,
            SortOrder::Difficulty => SortBy::Difficulty,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
