//! Output formatting for CLI commands.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cli::args::{LexisArgs, OutputFormat};
use crate::error::Result;
use crate::search::response::{IndexInfo, SearchResponse};

/// Result structure for autocomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    pub prefix: String,
    pub suggestions: Vec<String>,
}

/// Index statistics after a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    #[serde(flatten)]
    pub index: IndexInfo,
    pub replaced_documents: usize,
    pub pruned_terms: usize,
    pub build_time_ms: f64,
    pub built_at: DateTime<Utc>,
}

/// Something that can be printed for a person to read.
pub trait HumanOutput {
    fn render_human(&self, out: &mut String, verbosity: u8);
}

/// Render a result in the format selected on the command line.
pub fn render_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &LexisArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(render_human(message, result, args.verbosity())),
        OutputFormat::Json => render_json(result, args.pretty),
    }
}

fn render_human<T: HumanOutput>(message: &str, result: &T, verbosity: u8) -> String {
    let mut out = String::new();
    if verbosity > 1 {
        let _ = writeln!(out, "{message}");
        out.push('\n');
    }
    result.render_human(&mut out, verbosity);
    out
}

fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    json.push('\n');
    Ok(json)
}

impl HumanOutput for SearchResponse {
    fn render_human(&self, out: &mut String, verbosity: u8) {
        let _ = writeln!(out, "Search Results for \"{}\":", self.query);
        let _ = writeln!(out, "═══════════════");

        for (i, result) in self.results.iter().enumerate() {
            out.push('\n');
            let _ = writeln!(
                out,
                "Result {}: {} [{}] (Score: {:.3})",
                i + 1,
                result.title,
                result.doc_type,
                result.score
            );
            let _ = writeln!(out, "─────────────");
            let _ = writeln!(out, "{}", result.snippet);
            let _ = writeln!(out, "Category: {}  Level: {}  URL: {}", result.category, result.level, result.url);

            if verbosity > 1 {
                for highlight in &result.highlights {
                    let words: Vec<&str> = highlight
                        .title_matches
                        .iter()
                        .chain(&highlight.content_matches)
                        .map(String::as_str)
                        .collect();
                    let _ = writeln!(out, "  {}: {}", highlight.term, words.join(", "));
                }
            }
        }

        out.push('\n');
        let _ = writeln!(out, "Total hits: {}", self.total);
        let _ = writeln!(out, "Search time: {:.2}ms", self.response_time);

        if !self.suggestions.is_empty() {
            let _ = writeln!(out, "Did you mean: {}", self.suggestions.join(", "));
        }
    }
}

impl HumanOutput for SuggestionReport {
    fn render_human(&self, out: &mut String, _verbosity: u8) {
        if self.suggestions.is_empty() {
            let _ = writeln!(out, "No suggestions for \"{}\"", self.prefix);
            return;
        }
        for suggestion in &self.suggestions {
            let _ = writeln!(out, "{suggestion}");
        }
    }
}

impl HumanOutput for StatsReport {
    fn render_human(&self, out: &mut String, verbosity: u8) {
        let _ = writeln!(out, "Index Statistics:");
        let _ = writeln!(out, "════════════════");
        let _ = writeln!(out, "Documents: {}", self.index.document_count);
        let _ = writeln!(out, "Terms: {}", self.index.term_count);
        let _ = writeln!(out, "Estimated memory: {}", format_bytes(self.index.memory_usage as u64));

        if verbosity > 1 {
            let _ = writeln!(out, "Replaced documents: {}", self.replaced_documents);
            let _ = writeln!(out, "Pruned terms: {}", self.pruned_terms);
            let _ = writeln!(out, "Build time: {:.2}ms", self.build_time_ms);
            let _ = writeln!(out, "Built at: {}", self.built_at.to_rfc3339());
        }
    }
}

/// Format bytes into human-readable format.
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}
