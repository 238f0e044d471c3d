// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, non-negative, and deterministic, and an
//! explanation must add up to the score it explains.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use postlens::{Post, SearchEngine};

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    content: String,
    author_name: Option<String>,
    author_username: Option<String>,
    topics: Vec<String>,
}

fuzz_target!(|input: Input| {
    if input.query.len() > 200 || input.content.len() > 2_000 || input.topics.len() > 8 {
        return;
    }

    let engine = SearchEngine::new();
    let Some(patterns) = engine.expand(&input.query) else {
        assert!(input.query.trim().is_empty());
        return;
    };

    let post = Post {
        id: String::new(),
        content: input.content,
        author_name: input.author_name,
        author_username: input.author_username,
        topics: input.topics,
    };

    // INVARIANT 1: finite, non-negative, deterministic
    let first = engine.score(&post, &patterns);
    let second = engine.score(&post, &patterns);
    assert!(first.is_finite() && first >= 0.0, "bad score {}", first);
    assert_eq!(first, second, "score changed between runs");

    // INVARIANT 2: explanation contributions sum to exactly the score
    let Some(explanation) = engine.explain(&input.query, &post) else {
        panic!("non-blank query {:?} has no explanation", input.query);
    };
    let total: f64 = explanation.matches.iter().map(|m| m.weighted).sum();
    assert_eq!(total, first, "explanation {} != score {}", total, first);
});
