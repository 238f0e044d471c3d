// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! Every (field, pattern) pair earns points in three tiers, multiplied by
//! the field's weight:
//!
//! ```text
//! exact substring   pattern ⊂ field              10 if len(pattern) > 5 else 5
//! whole word        \bword\b in field, per word   3
//! loose word        word ⊂ field otherwise        1
//! ```
//!
//! Whole-word and loose bonuses are exclusive per word; the exact bonus
//! stacks on top of them. A candidate's score is the sum over all fields and
//! all patterns, uncapped, so matching more patterns in more places wins.
//!
//! # Constants
//!
//! | Name                   | Value | Meaning                                  |
//! |------------------------|-------|------------------------------------------|
//! | `GENERIC_PATTERN_LEN`  | 5     | Patterns this short or shorter are generic |
//! | `EXACT_SPECIFIC_SCORE` | 10.0  | Substring hit, specific pattern          |
//! | `EXACT_GENERIC_SCORE`  | 5.0   | Substring hit, generic pattern           |
//! | `WHOLE_WORD_SCORE`     | 3.0   | Per pattern word at word boundaries      |
//! | `PARTIAL_WORD_SCORE`   | 1.0   | Per pattern word inside a longer word    |
//!
//! These are tuning values, not law. [`ScoringConfig`] and [`FieldWeights`]
//! carry them at runtime and default to the constants.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::patterns::{Pattern, PatternSet};
use crate::types::{Candidate, FieldKind};
use crate::utils::normalize;

// =============================================================================
// MATCH BONUSES
// =============================================================================

/// Patterns of at most this many characters are "generic".
pub const GENERIC_PATTERN_LEN: usize = 5;

/// Exact substring hit for a pattern longer than `GENERIC_PATTERN_LEN`.
pub const EXACT_SPECIFIC_SCORE: f64 = 10.0;

/// Exact substring hit for a short pattern.
pub const EXACT_GENERIC_SCORE: f64 = 5.0;

/// Pattern word found at word boundaries.
pub const WHOLE_WORD_SCORE: f64 = 3.0;

/// Pattern word found only inside a longer word.
pub const PARTIAL_WORD_SCORE: f64 = 1.0;

// =============================================================================
// FIELD WEIGHTS
// =============================================================================

pub const CONTENT_WEIGHT: f64 = 1.0;
pub const AUTHOR_NAME_WEIGHT: f64 = 0.5;
pub const AUTHOR_USERNAME_WEIGHT: f64 = 0.5;
pub const LABEL_WEIGHT: f64 = 2.0;

/// Per-match bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub generic_pattern_len: usize,
    pub exact_specific: f64,
    pub exact_generic: f64,
    pub whole_word: f64,
    pub partial_word: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            generic_pattern_len: GENERIC_PATTERN_LEN,
            exact_specific: EXACT_SPECIFIC_SCORE,
            exact_generic: EXACT_GENERIC_SCORE,
            whole_word: WHOLE_WORD_SCORE,
            partial_word: PARTIAL_WORD_SCORE,
        }
    }
}

/// Multipliers applied to each field's raw points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub content: f64,
    pub author_name: f64,
    pub author_username: f64,
    pub label: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            content: CONTENT_WEIGHT,
            author_name: AUTHOR_NAME_WEIGHT,
            author_username: AUTHOR_USERNAME_WEIGHT,
            label: LABEL_WEIGHT,
        }
    }
}

impl FieldWeights {
    pub fn weight(&self, field: FieldKind) -> f64 {
        match field {
            FieldKind::Content => self.content,
            FieldKind::AuthorName => self.author_name,
            FieldKind::AuthorUsername => self.author_username,
            FieldKind::Label => self.label,
        }
    }
}

/// One non-zero (field, pattern) contribution to a candidate's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    pub field: FieldKind,
    pub pattern: String,
    /// Points before the field weight.
    pub raw: f64,
    /// Points after the field weight; these sum to the candidate score.
    pub weighted: f64,
}

/// Raw points one pattern earns against one lower-cased field.
pub fn pattern_score(field: &str, pattern: &Pattern, config: &ScoringConfig) -> f64 {
    let mut score = 0.0;

    if field.contains(pattern.text()) {
        score += if pattern.char_len() > config.generic_pattern_len {
            config.exact_specific
        } else {
            config.exact_generic
        };
    }

    for word in pattern.words() {
        if word.is_whole_word_in(field) {
            score += config.whole_word;
        } else if word.is_substring_of(field) {
            score += config.partial_word;
        }
    }

    score
}

/// Raw points every pattern earns against one field. Lower-cases `text`.
pub fn field_score(text: &str, patterns: &PatternSet, config: &ScoringConfig) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let field = normalize(text);
    patterns
        .patterns()
        .iter()
        .map(|p| pattern_score(&field, p, config))
        .sum()
}

/// Visit every (field, pattern) pair that earns points under a non-zero
/// weight, in field order then pattern order.
fn for_each_match<C, F>(
    candidate: &C,
    patterns: &PatternSet,
    config: &ScoringConfig,
    weights: &FieldWeights,
    mut visit: F,
) where
    C: Candidate + ?Sized,
    F: FnMut(FieldKind, &Pattern, f64, f64),
{
    for (kind, text) in candidate.fields() {
        let weight = weights.weight(kind);
        if text.is_empty() || weight == 0.0 {
            continue;
        }
        let field = normalize(text);
        for pattern in patterns.patterns() {
            let raw = pattern_score(&field, pattern, config);
            if raw > 0.0 {
                visit(kind, pattern, raw, raw * weight);
            }
        }
    }
}

/// Weighted score of a candidate across all of its fields.
///
/// Sums `raw * weight` per pattern in the same order as
/// [`explain_candidate`], so the two agree bit for bit.
pub fn score_candidate<C: Candidate + ?Sized>(
    candidate: &C,
    patterns: &PatternSet,
    config: &ScoringConfig,
    weights: &FieldWeights,
) -> f64 {
    let mut score = 0.0;
    for_each_match(candidate, patterns, config, weights, |_, _, _, weighted| {
        score += weighted;
    });
    trace!(score, "scored candidate");
    score
}

/// Break a candidate's score down into its non-zero contributions.
///
/// Entries follow field order, then pattern order. Summing their `weighted`
/// values left to right reproduces [`score_candidate`] exactly.
pub fn explain_candidate<C: Candidate + ?Sized>(
    candidate: &C,
    patterns: &PatternSet,
    config: &ScoringConfig,
    weights: &FieldWeights,
) -> Vec<FieldMatch> {
    let mut matches = Vec::new();
    for_each_match(candidate, patterns, config, weights, |field, pattern, raw, weighted| {
        matches.push(FieldMatch {
            field,
            pattern: pattern.text().to_string(),
            raw,
            weighted,
        });
    });
    matches
}
