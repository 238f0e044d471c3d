// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline, end to end.
//!
//! ```text
//! query ─▶ keywords ─▶ synonyms ─▶ PatternSet ─▶ score each candidate ─▶ rank
//! ```
//!
//! An empty query short-circuits before any of that and hands the input back
//! untouched. Searching for nothing is not a filter.
//!
//! [`SearchEngine`] owns its tables and config and is never mutated by a
//! search, so one engine can serve any number of threads at once. The free
//! function [`search`] uses a process-wide engine with the built-in tables.

use std::sync::LazyLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::SearchConfig;
use crate::keywords::StopWordSet;
use crate::patterns::PatternSet;
use crate::scoring::ranking::rank;
use crate::scoring::{explain_candidate, score_candidate, FieldMatch};
use crate::synonyms::SynonymTable;
use crate::types::{Candidate, Scored, SearchResults};

/// Candidate count above which scoring runs on the rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_SCORING_THRESHOLD: usize = 1000;

static DEFAULT_ENGINE: LazyLock<SearchEngine> = LazyLock::new(SearchEngine::new);

/// Rank `candidates` against `query` with the built-in tables and weights.
pub fn search<T: Candidate + Sync>(query: &str, candidates: Vec<T>) -> SearchResults<T> {
    DEFAULT_ENGINE.search(query, candidates)
}

/// Why a candidate scored what it did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub query: String,
    pub keywords: Vec<String>,
    pub patterns: Vec<String>,
    pub matches: Vec<FieldMatch>,
    pub score: f64,
}

/// Relevance search over caller-supplied candidates.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: SearchConfig,
    synonyms: SynonymTable,
    stop_words: StopWordSet,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Engine with the built-in synonym table, stop-words and weights.
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
            synonyms: SynonymTable::builtin().clone(),
            stop_words: StopWordSet::builtin().clone(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the synonym table.
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Replace the stop-word set.
    pub fn with_stop_words(mut self, stop_words: StopWordSet) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Keywords and expanded patterns for `query`; `None` if it is empty.
    pub fn expand(&self, query: &str) -> Option<PatternSet> {
        PatternSet::build(query, &self.stop_words, &self.synonyms)
    }

    /// Score one candidate against an already-built pattern set.
    pub fn score<C: Candidate + ?Sized>(&self, candidate: &C, patterns: &PatternSet) -> f64 {
        score_candidate(
            candidate,
            patterns,
            &self.config.scoring,
            &self.config.weights,
        )
    }

    /// Rank `candidates` against `query`.
    ///
    /// Empty or whitespace-only query: returns [`SearchResults::Unfiltered`]
    /// with the input in its original order. Otherwise returns
    /// [`SearchResults::Ranked`] holding only candidates with score > 0,
    /// highest first, ties in input order.
    pub fn search<T: Candidate + Sync>(&self, query: &str, candidates: Vec<T>) -> SearchResults<T> {
        let Some(patterns) = self.expand(query) else {
            debug!(candidates = candidates.len(), "empty query, returning input unchanged");
            return SearchResults::Unfiltered(candidates);
        };

        let total = candidates.len();
        let scores = self.score_all(&candidates, &patterns);
        let scored = candidates
            .into_iter()
            .zip(scores)
            .map(|(record, score)| Scored::new(record, score))
            .collect();
        let ranked = rank(scored);

        debug!(
            keywords = patterns.keywords().len(),
            patterns = patterns.len(),
            candidates = total,
            matched = ranked.len(),
            "search complete"
        );
        SearchResults::Ranked(ranked)
    }

    /// Like [`search`](Self::search); `None` behaves as the empty query.
    pub fn search_opt<T: Candidate + Sync>(
        &self,
        query: Option<&str>,
        candidates: Vec<T>,
    ) -> SearchResults<T> {
        self.search(query.unwrap_or_default(), candidates)
    }

    /// Like [`search`](Self::search), keeping at most `limit` results.
    pub fn search_top<T: Candidate + Sync>(
        &self,
        query: &str,
        candidates: Vec<T>,
        limit: usize,
    ) -> SearchResults<T> {
        let mut results = self.search(query, candidates);
        results.truncate(limit);
        results
    }

    /// Break down how `candidate` scores against `query`.
    ///
    /// `None` for an empty query, which has no score to explain.
    pub fn explain<C: Candidate + ?Sized>(&self, query: &str, candidate: &C) -> Option<Explanation> {
        let patterns = self.expand(query)?;
        let matches = explain_candidate(
            candidate,
            &patterns,
            &self.config.scoring,
            &self.config.weights,
        );
        Some(Explanation {
            query: patterns.query().to_string(),
            keywords: patterns.keywords().iter().cloned().collect(),
            patterns: patterns.texts().map(str::to_string).collect(),
            score: self.score(candidate, &patterns),
            matches,
        })
    }

    fn score_all<T: Candidate + Sync>(&self, candidates: &[T], patterns: &PatternSet) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        if candidates.len() > PARALLEL_SCORING_THRESHOLD {
            return candidates
                .par_iter()
                .map(|c| self.score(c, patterns))
                .collect();
        }

        candidates.iter().map(|c| self.score(c, patterns)).collect()
    }
}
