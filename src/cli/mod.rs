// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the postlens command-line interface.
//!
//! Two subcommands: `search` ranks a JSON file of posts against a query, and
//! `expand` shows what a query turns into before any scoring happens.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "postlens",
    about = "Search saved posts with synonym-expanded relevance ranking",
    version
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank posts from a JSON file against a query
    Search {
        /// JSON array of posts (id, content, author_name, author_username, topics)
        file: PathBuf,

        /// Search query; an empty query lists posts unfiltered
        query: String,

        /// Maximum number of results to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Show which patterns matched which fields
        #[arg(long)]
        explain: bool,

        /// JSON file overriding match bonuses and field weights
        #[arg(long)]
        config: Option<PathBuf>,

        /// JSON synonym table replacing the built-in one
        #[arg(long)]
        synonyms: Option<PathBuf>,
    },

    /// Show the keywords and expanded patterns for a query
    Expand {
        /// Query to expand
        query: String,

        /// JSON synonym table replacing the built-in one
        #[arg(long)]
        synonyms: Option<PathBuf>,

        /// Print the expansion as JSON
        #[arg(long)]
        json: bool,
    },
}
