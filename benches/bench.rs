//! Criterion benchmarks for the Lexis search engine.
//!
//! Covers term extraction, index construction and the exact and fuzzy
//! matching paths over a generated vocabulary corpus.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexis::analysis::Tokenizer;
use lexis::config::FuzzyConfig;
use lexis::index::IndexBuilder;
use lexis::query::{Matcher, QueryParser};
use lexis::search::SearchOptions;
use lexis::{CorpusData, GrammarDoc, VocabularyDoc};
use std::hint::black_box;

const WORDS: &[&str] = &[
    "house", "garden", "window", "kitchen", "bread", "water", "morning", "evening", "doctor",
    "student", "market", "street", "weather", "holiday", "friend", "family", "letter", "number",
    "yellow", "summer", "winter", "mountain", "river", "forest",
];

/// Generate a mixed vocabulary and grammar corpus for benchmarking.
fn generate_corpus(count: usize) -> CorpusData {
    let levels = ["A1", "A2", "B1", "B2"];
    let vocabulary = (0..count)
        .map(|i| {
            let word = format!("{}{}", WORDS[i % WORDS.len()], i / WORDS.len());
            let translation = WORDS[(i * 7) % WORDS.len()];
            let example = format!(
                "The {} is next to the {}.",
                WORDS[(i * 3) % WORDS.len()],
                WORDS[(i * 11) % WORDS.len()]
            );
            VocabularyDoc::new(
                format!("v{i}"),
                word,
                translation.to_string(),
                "generated".to_string(),
                levels[i % levels.len()].to_string(),
            )
            .with_languages("bg", "de")
            .with_difficulty((i % 5 + 1) as f64)
            .with_example(example.as_str())
        })
        .collect();

    let grammar = (0..count / 10)
        .map(|i| {
            let content: Vec<&str> = (0..40).map(|j| WORDS[(i * 5 + j * 13) % WORDS.len()]).collect();
            GrammarDoc::new(format!("Lesson {i}"))
                .with_description("Word order in everyday sentences.")
                .with_content(content.join(" "))
                .with_level(levels[i % levels.len()])
        })
        .collect();

    CorpusData::new().with_vocabulary(vocabulary).with_grammar(grammar)
}

/// Benchmark term extraction.
fn bench_term_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("term_extraction");

    let tokenizer = Tokenizer::default();
    let text = WORDS.join(" ").repeat(4);

    group.bench_function("extract_terms", |b| {
        b.iter(|| {
            let terms = tokenizer.extract_terms(black_box(&text));
            black_box(terms)
        })
    });

    group.finish();
}

/// Benchmark index construction.
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.sample_size(20);

    for count in [100, 1000] {
        let corpus = generate_corpus(count);
        group.throughput(Throughput::Elements(corpus.len() as u64));
        group.bench_function(format!("build_{count}_documents"), |b| {
            b.iter_with_setup(
                || corpus.clone(),
                |data| {
                    let builder = IndexBuilder::new(Tokenizer::default(), 0.8, 10);
                    let snapshot = builder.build(data).unwrap();
                    black_box(snapshot)
                },
            )
        });
    }

    group.finish();
}

/// Benchmark exact and fuzzy term matching against a built index.
fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    let builder = IndexBuilder::new(Tokenizer::default(), 0.8, 10);
    let snapshot = builder.build(generate_corpus(1000)).unwrap();
    let parser = QueryParser::new(Tokenizer::default()).unwrap();
    let fuzzy = FuzzyConfig::default();
    let options = SearchOptions::default();
    let filters = options.filters();

    let exact = parser.parse("garden window");
    group.bench_function("exact_query", |b| {
        let matcher = Matcher::new(&snapshot, &fuzzy);
        b.iter(|| {
            let matches = matcher.find_matches(black_box(&exact.terms), &filters);
            black_box(matches.len())
        })
    });

    let misspelled = parser.parse("gardne windwo");
    group.bench_function("fuzzy_query", |b| {
        let matcher = Matcher::new(&snapshot, &fuzzy);
        b.iter(|| {
            let matches = matcher.find_matches(black_box(&misspelled.terms), &filters);
            black_box(matches.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_term_extraction, bench_index_build, bench_matching);
criterion_main!(benches);
