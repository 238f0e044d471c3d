// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym-expanded lexical relevance search for saved posts.
//!
//! Give it a query and a list of records, get back the records that match,
//! best first. No index, no persistence: every call is a pure function of
//! its inputs and the read-only tables the engine was built with.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌─────────────┐   ┌─────────────┐
//! │ keywords.rs │──▶│ synonyms/    │──▶│ patterns.rs │──▶│ scoring/    │
//! │ (stop-words,│   │ (concept ⇄   │   │ (PatternSet,│   │ (core:      │
//! │  tokenize)  │   │  terms)      │   │  matchers)  │   │  points,    │
//! └─────────────┘   └──────────────┘   └─────────────┘   │  ranking)   │
//!                                                         └──────┬──────┘
//!                          ┌──────────────┐                      │
//!                          │  search.rs   │◀─────────────────────┘
//!                          │ (SearchEngine│
//!                          │   pipeline)  │
//!                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use postlens::{search, Post, SearchResults};
//!
//! let posts = vec![
//!     Post { id: "1".into(), content: "LeBron James had an amazing game".into(), ..Default::default() },
//!     Post { id: "2".into(), content: "Sourdough starter, day 3".into(), ..Default::default() },
//! ];
//!
//! let results = search("basketball", posts);
//! let ids: Vec<_> = results.records().map(|p| p.id.as_str()).collect();
//! assert_eq!(ids, vec!["1"]);
//! ```

pub mod config;
pub mod error;
pub mod keywords;
pub mod patterns;
pub mod scoring;
mod search;
pub mod synonyms;
pub mod testing;
mod types;
mod utils;

pub use config::SearchConfig;
pub use error::{Error, Result};
pub use keywords::{extract_keywords, StopWordSet};
pub use patterns::PatternSet;
pub use scoring::ranking::rank;
pub use scoring::{FieldMatch, FieldWeights, ScoringConfig};
pub use search::{search, Explanation, SearchEngine};
#[cfg(feature = "parallel")]
pub use search::PARALLEL_SCORING_THRESHOLD;
pub use synonyms::SynonymTable;
pub use types::{Candidate, FieldKind, Post, Scored, SearchResults};
pub use utils::normalize;
