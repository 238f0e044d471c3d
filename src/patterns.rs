// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-query pattern set.
//!
//! Built fresh for every search and dropped when it returns. Holds the
//! keywords, every synonym they expand to, and the full lower-cased query so
//! that a multi-word phrase is still tested even when its words were all
//! stop-words. Each pattern also carries pre-compiled word-boundary matchers
//! for its words, so the per-candidate loop never compiles a regex.
//!
//! # Invariants
//!
//! - `keywords ⊆ patterns`
//! - `query ∈ patterns`
//! - patterns are unique and in lexicographic order

use std::collections::{BTreeSet, HashMap};

use regex::Regex;
use tracing::trace;

use crate::keywords::{extract_keywords, StopWordSet, SHORT_TOKEN_LEN};
use crate::synonyms::SynonymTable;
use crate::utils::{char_len, normalize};

/// One word of a pattern plus its boundary matcher.
#[derive(Debug, Clone)]
pub struct PatternWord {
    text: String,
    /// `\bword\b`. `None` if the word is too large to compile, in which case
    /// it can only earn the loose-containment bonus.
    boundary: Option<Regex>,
}

impl PatternWord {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if `haystack` contains this word with word boundaries on both sides.
    pub fn is_whole_word_in(&self, haystack: &str) -> bool {
        self.boundary
            .as_ref()
            .is_some_and(|re| re.is_match(haystack))
    }

    /// True if `haystack` contains this word anywhere.
    pub fn is_substring_of(&self, haystack: &str) -> bool {
        haystack.contains(self.text.as_str())
    }
}

/// A single search pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    char_len: usize,
    words: Vec<PatternWord>,
}

impl Pattern {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Words longer than two characters, in pattern order.
    pub fn words(&self) -> &[PatternWord] {
        &self.words
    }
}

/// Keywords and expanded patterns for one query.
#[derive(Debug, Clone)]
pub struct PatternSet {
    query: String,
    keywords: BTreeSet<String>,
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Build the pattern set for `query`.
    ///
    /// Returns `None` when the query is empty after trimming: there is
    /// nothing to match, and the caller should not filter at all.
    pub fn build(query: &str, stop_words: &StopWordSet, synonyms: &SynonymTable) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        let query = normalize(trimmed);
        let keywords = extract_keywords(&query, stop_words);

        let mut texts = synonyms.expand(keywords.iter().map(String::as_str));
        texts.insert(query.clone());

        let mut compiled: HashMap<String, Option<Regex>> = HashMap::new();
        let patterns = texts
            .into_iter()
            .map(|text| compile_pattern(text, &mut compiled))
            .collect();

        Some(Self {
            query,
            keywords,
            patterns,
        })
    }

    /// The full query, trimmed and lower-cased.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.patterns
            .binary_search_by(|p| p.text.as_str().cmp(text))
            .is_ok()
    }

    /// Pattern texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.text.as_str())
    }
}

fn compile_pattern(text: String, cache: &mut HashMap<String, Option<Regex>>) -> Pattern {
    let words = text
        .split_whitespace()
        .filter(|w| char_len(w) > SHORT_TOKEN_LEN)
        .map(|w| {
            let boundary = cache
                .entry(w.to_string())
                .or_insert_with(|| word_boundary(w))
                .clone();
            PatternWord {
                text: w.to_string(),
                boundary,
            }
        })
        .collect();

    Pattern {
        char_len: char_len(&text),
        text,
        words,
    }
}

fn word_boundary(word: &str) -> Option<Regex> {
    match Regex::new(&format!(r"\b{}\b", regex::escape(word))) {
        Ok(re) => Some(re),
        Err(err) => {
            trace!(%err, "word too large for a boundary matcher");
            None
        }
    }
}
