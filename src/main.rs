// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use postlens::{Explanation, Post, Scored, SearchConfig, SearchEngine, SearchResults, SynonymTable};

mod cli;
use cli::display::{self, Report};
use cli::{Cli, Commands};

#[derive(Serialize)]
struct ExplainedResult<'a> {
    #[serde(flatten)]
    result: &'a Scored<Post>,
    explanation: Option<Explanation>,
}

#[derive(Serialize)]
struct ExpansionOutput<'a> {
    query: &'a str,
    keywords: Vec<&'a str>,
    patterns: Vec<&'a str>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            json,
            explain,
            config,
            synonyms,
        } => run_search(
            &file,
            &query,
            limit,
            json,
            explain,
            config.as_deref(),
            synonyms.as_deref(),
        ),
        Commands::Expand {
            query,
            synonyms,
            json,
        } => run_expand(&query, synonyms.as_deref(), json),
    }
}

fn build_engine(config: Option<&Path>, synonyms: Option<&Path>) -> Result<SearchEngine> {
    let mut engine = SearchEngine::new();
    if let Some(path) = config {
        let config = SearchConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?;
        engine = engine.with_config(config);
    }
    if let Some(path) = synonyms {
        let table = SynonymTable::from_path(path)
            .with_context(|| format!("loading synonyms {}", path.display()))?;
        engine = engine.with_synonyms(table);
    }
    Ok(engine)
}

fn run_search(
    file: &Path,
    query: &str,
    limit: usize,
    json: bool,
    explain: bool,
    config: Option<&Path>,
    synonyms: Option<&Path>,
) -> Result<()> {
    let engine = build_engine(config, synonyms)?;
    let posts =
        Post::load_all(file).with_context(|| format!("loading posts {}", file.display()))?;

    let results = engine.search_top(query, posts, limit);

    let explanations: Vec<Option<Explanation>> = if explain {
        results.records().map(|p| engine.explain(query, p)).collect()
    } else {
        Vec::new()
    };

    if json {
        let out = match &results {
            SearchResults::Unfiltered(posts) => serde_json::to_string_pretty(posts)?,
            SearchResults::Ranked(scored) if explain => {
                let explained: Vec<ExplainedResult<'_>> = scored
                    .iter()
                    .zip(explanations)
                    .map(|(result, explanation)| ExplainedResult {
                        result,
                        explanation,
                    })
                    .collect();
                serde_json::to_string_pretty(&explained)?
            }
            SearchResults::Ranked(scored) => serde_json::to_string_pretty(scored)?,
        };
        println!("{}", out);
    } else {
        Report::new(io::stdout().lock(), display::colors_enabled())
            .results(query, &results, &explanations)?;
    }

    Ok(())
}

fn run_expand(query: &str, synonyms: Option<&Path>, json: bool) -> Result<()> {
    let engine = build_engine(None, synonyms)?;
    let patterns = engine.expand(query);

    if json {
        let out = patterns.as_ref().map(|set| ExpansionOutput {
            query: set.query(),
            keywords: set.keywords().iter().map(String::as_str).collect(),
            patterns: set.texts().collect(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        Report::new(io::stdout().lock(), display::colors_enabled())
            .expansion(patterns.as_ref())?;
    }

    Ok(())
}
