//! Command line front end against corpus files on disk.

use std::fs;
use std::path::Path;

use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;

use lexis::cli::{LexisArgs, run_command};
use lexis::error::{LexisError, Result};

const CORPUS: &str = r#"{
    "vocabulary": [
        {"id": "v1", "word": "hello", "translation": "hallo", "category": "greetings", "level": "A1",
         "examples": ["Hello, how are you?", {"text": "Say hello to her."}]},
        {"id": "v2", "word": "house", "translation": "Haus", "category": "home", "level": "A2",
         "source_lang": "bg", "target_lang": "de", "difficulty": 2}
    ],
    "grammar": [
        {"title": "Definite articles", "description": "How articles attach to nouns.",
         "rules": ["Articles follow the noun."], "slug": "definite-articles"}
    ]
}"#;

fn write_corpus(dir: &TempDir) -> Result<String> {
    let path = dir.path().join("corpus.json");
    fs::write(&path, CORPUS)?;
    Ok(path.to_string_lossy().into_owned())
}

async fn run_json(args: &[&str]) -> Result<Value> {
    let mut argv = vec!["lexis", "--format", "json"];
    argv.extend_from_slice(args);
    let args = LexisArgs::try_parse_from(argv).map_err(|e| LexisError::other(e.to_string()))?;
    let output = run_command(&args).await?;
    Ok(serde_json::from_str(&output)?)
}

#[tokio::test]
async fn search_command_prints_response() -> Result<()> {
    let dir = TempDir::new()?;
    let corpus = write_corpus(&dir)?;

    let json = run_json(&["search", &corpus, "hello"]).await?;
    assert_eq!(json["total"], 1);
    assert_eq!(json["results"][0]["id"], "v1");
    assert_eq!(json["results"][0]["url"], "/vocabulary/hello/");
    assert_eq!(json["query"], "hello");

    let json = run_json(&["search", &corpus, "articles", "--type", "grammar"]).await?;
    assert_eq!(json["results"][0]["id"], "grammar-Definite articles");
    assert_eq!(json["results"][0]["url"], "/grammar/definite-articles/");
    Ok(())
}

#[tokio::test]
async fn search_command_applies_filters() -> Result<()> {
    let dir = TempDir::new()?;
    let corpus = write_corpus(&dir)?;

    let json = run_json(&["search", &corpus, "house", "--level", "C1"]).await?;
    assert_eq!(json["total"], 0);

    let json = run_json(&["search", &corpus, "house", "--direction", "bg-de"]).await?;
    assert_eq!(json["results"][0]["id"], "v2");
    Ok(())
}

#[tokio::test]
async fn suggest_and_stats_commands() -> Result<()> {
    let dir = TempDir::new()?;
    let corpus = write_corpus(&dir)?;

    let json = run_json(&["suggest", &corpus, "ho", "--limit", "3"]).await?;
    let suggestions = json["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty() && suggestions.len() <= 3);
    assert!(suggestions.iter().all(|s| s.as_str().unwrap().starts_with("ho")));

    let json = run_json(&["stats", &corpus]).await?;
    assert_eq!(json["documentCount"], 3);
    assert_eq!(json["isIndexed"], true);
    assert!(json["termCount"].as_u64().unwrap() > 0);
    Ok(())
}

#[tokio::test]
async fn human_output_lists_results() -> Result<()> {
    let dir = TempDir::new()?;
    let corpus = write_corpus(&dir)?;

    let args = LexisArgs::try_parse_from(["lexis", "search", corpus.as_str(), "hello"])
        .map_err(|e| LexisError::other(e.to_string()))?;
    let output = run_command(&args).await?;
    assert!(output.contains("Result 1: hello [vocabulary]"));
    assert!(output.contains("Total hits: 1"));
    Ok(())
}

#[tokio::test]
async fn config_file_is_applied() -> Result<()> {
    let dir = TempDir::new()?;
    let corpus = write_corpus(&dir)?;
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{"autocomplete_limit": 1}"#)?;
    let config = config_path.to_string_lossy().into_owned();

    let json = run_json(&["--config", &config, "suggest", &corpus, "ho"]).await?;
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn missing_corpus_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("missing.json");
    assert!(!Path::new(&missing).exists());

    let result = run_json(&["stats", &missing.to_string_lossy()]).await;
    assert!(result.is_err());
    Ok(())
}
