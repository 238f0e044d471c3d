// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Lowercase for matching. No diacritic stripping, no whitespace collapsing:
/// substring tests run against the text as the author wrote it.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Replace every character that is not a letter, digit, or whitespace with a
/// single space.
///
/// Replacing instead of deleting keeps `"rust,wasm"` as two words rather than
/// merging them into `"rustwasm"`.
pub fn strip_punctuation(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Length in characters, not bytes.
///
/// All length thresholds are character counts so that "café" and "cafe"
/// land on the same side of a cutoff.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
