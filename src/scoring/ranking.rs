// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: filter out non-matches, highest score first.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Input position** - ascending, so equal scores keep caller order
//!
//! The position key makes the order independent of whether scores were
//! computed sequentially or in parallel.

use std::cmp::Ordering;

use crate::types::Scored;

/// Compare two `(input_index, score)` entries for ranking.
pub fn compare_ranked(a: (usize, f64), b: (usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Drop every entry with score ≤ 0 and sort the rest.
///
/// `scored` must be in input order; its positions become the tie-breaker.
pub fn rank<T>(scored: Vec<Scored<T>>) -> Vec<Scored<T>> {
    let mut kept: Vec<(usize, Scored<T>)> = scored
        .into_iter()
        .enumerate()
        .filter(|(_, s)| s.score > 0.0)
        .collect();

    kept.sort_by(|(ia, a), (ib, b)| compare_ranked((*ia, a.score), (*ib, b.score)));
    kept.into_iter().map(|(_, s)| s).collect()
}
