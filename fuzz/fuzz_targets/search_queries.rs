// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API as queries against a
//! fixed corpus. Emoji, RTL text, null bytes and regex metacharacters must
//! all come back as a well-formed ranking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use postlens::testing::{make_post, make_post_with_author, make_post_with_topics};
use postlens::{search, Post, SearchResults};

fn corpus() -> Vec<Post> {
    vec![
        make_post_with_author("0", "LeBron James had an amazing game", "Hoops Daily", "hoopsdaily"),
        make_post_with_topics("1", "New AI breakthroughs in machine learning", &["Technology"]),
        make_post("2", "Bitcoin just broke its all-time high again"),
        make_post("3", "(a+)+$ [unclosed \\b \\w* .*?"),
        make_post("4", "Café crème 🥐 مرحبا"),
        make_post("5", ""),
    ]
}

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);

    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    let input = corpus();
    let results = search(&query, input.clone());

    match results {
        // INVARIANT 1: blank queries pass the input through untouched
        SearchResults::Unfiltered(posts) => {
            assert!(query.trim().is_empty(), "non-blank query {:?} was not ranked", query);
            assert_eq!(posts, input);
        }
        SearchResults::Ranked(scored) => {
            assert!(!query.trim().is_empty());
            assert!(scored.len() <= input.len());

            // INVARIANT 2: every score is finite and positive
            for s in &scored {
                assert!(s.score.is_finite() && s.score > 0.0, "bad score {}", s.score);
            }

            // INVARIANT 3: score descending, ties in input order
            for pair in scored.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                assert!(
                    a.score > b.score || (a.score == b.score && a.record.id < b.record.id),
                    "results out of order: {} ({}) before {} ({})",
                    a.record.id,
                    a.score,
                    b.record.id,
                    b.score
                );
            }
        }
    }
});
