// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query keyword extraction.
//!
//! Turns "Show me posts about LeBron's last game!" into `{game, last, lebron}`.
//! Lowercase, punctuation to spaces, split, then drop anything of two
//! characters or fewer and anything in the stop-word set. No stemming:
//! "running" and "run" stay distinct unless the synonym table links them.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use crate::utils::{char_len, normalize, strip_punctuation};

/// Tokens of at most this many characters are never keywords.
pub const SHORT_TOKEN_LEN: usize = 2;

/// Common words that carry no topical signal.
///
/// Besides ordinary English function words this includes the verbs and nouns
/// people use when *asking* for posts ("find", "show", "tweets"), since those
/// describe the search, not the topic.
pub const STOP_WORDS: &[&str] = &[
    // articles, conjunctions, prepositions
    "the", "and", "but", "for", "nor", "yet", "with", "from", "into", "onto", "upon", "about",
    "above", "below", "after", "before", "between", "during", "through", "under", "over",
    "until", "against", "among", "around", "without", "within", "via", "per", "off",
    "out", "than", "then", "also",
    // pronouns and determiners
    "you", "your", "yours", "our", "ours", "they", "them", "their", "theirs", "she", "her",
    "hers", "him", "his", "its", "this", "that", "these", "those", "who", "whom", "whose",
    "which", "what", "whatever", "any", "all", "each", "every", "some", "such", "both",
    "few", "more", "most", "other", "own", "same", "myself", "yourself", "themselves",
    // auxiliaries
    "are", "was", "were", "been", "being", "has", "have", "had", "having", "does", "did",
    "doing", "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    // adverbs and fillers
    "not", "only", "very", "too", "just", "here", "there", "when", "where", "why", "how",
    "again", "once", "further", "while", "because", "really", "maybe", "please",
    // search phrasing
    "find", "show", "search", "look", "looking", "tell", "give", "get", "want", "need",
    "posts", "post", "tweets", "tweet", "saved", "bookmarks", "something", "anything",
    "stuff", "things", "thing",
];

static BUILTIN_STOP_WORDS: LazyLock<StopWordSet> =
    LazyLock::new(|| StopWordSet::from_words(STOP_WORDS.iter().copied()));

/// A fixed set of words excluded from keyword extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// The built-in English set, constructed once per process.
    pub fn builtin() -> &'static StopWordSet {
        &BUILTIN_STOP_WORDS
    }

    /// Build a set from arbitrary words. Entries are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| normalize(w.as_ref())).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Extract the deduplicated keyword set of a query.
///
/// Returns an empty set for empty or whitespace-only input, and for input
/// made entirely of stop-words or short tokens.
pub fn extract_keywords(query: &str, stop_words: &StopWordSet) -> BTreeSet<String> {
    strip_punctuation(&normalize(query))
        .split_whitespace()
        .filter(|token| char_len(token) > SHORT_TOKEN_LEN && !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}
