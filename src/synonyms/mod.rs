// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym expansion: how "tech" finds a post about "software".
//!
//! The table maps concept keys to related terms. Lookup runs both ways:
//!
//! ```text
//! keyword == key        → key's terms
//! keyword ∈ key's terms → key + every sibling term
//! ```
//!
//! Expansion stops after one hop. "software" pulls in "tech" and its
//! siblings, but not the siblings of "programming" even though "programming"
//! is itself a concept key. Chasing chains drifts off topic fast.
//!
//! The reverse direction (term → owning keys) is precomputed when the table
//! is built, so a lookup is one hash probe instead of a scan over concepts.

mod builtin;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::error::{read_json, Error, Result};
use crate::utils::normalize;

pub use builtin::BUILTIN_SYNONYMS;

static BUILTIN_TABLE: LazyLock<SynonymTable> =
    LazyLock::new(|| SynonymTable::from_static(BUILTIN_SYNONYMS));

/// Read-only concept → synonyms table with a precomputed reverse index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    /// concept key → related terms (deduplicated, insertion order kept)
    concepts: BTreeMap<String, Vec<String>>,

    /// term → concept keys whose list contains it
    reverse: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// The built-in table, constructed once per process.
    pub fn builtin() -> &'static SynonymTable {
        &BUILTIN_TABLE
    }

    /// A table with no concepts. Expansion returns keywords unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_static(entries: &[(&str, &[&str])]) -> Self {
        let mut table = Self::default();
        for (key, terms) in entries {
            table.insert(normalize(key), terms.iter().map(|t| normalize(t)));
        }
        table
    }

    /// Build a table from owned entries.
    ///
    /// Keys and terms are trimmed and lowercased. Entries whose keys collide
    /// after that are merged. An empty key is an error; empty terms are
    /// dropped.
    pub fn from_entries<I, K, V, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (key, terms) in entries {
            let key = normalize(key.as_ref().trim());
            if key.is_empty() {
                return Err(Error::InvalidSynonyms("empty concept key".to_string()));
            }
            if table.concepts.contains_key(&key) {
                warn!(concept = %key, "duplicate concept key, merging term lists");
            }
            let terms = terms
                .into_iter()
                .map(|t| normalize(t.as_ref().trim()))
                .filter(|t| !t.is_empty());
            table.insert(key, terms);
        }
        Ok(table)
    }

    /// Load a JSON object of the form `{"concept": ["term", ...], ...}`.
    ///
    /// The loaded table replaces the built-in one; it is not merged with it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw: BTreeMap<String, Vec<String>> = read_json(path)?;
        let table = Self::from_entries(raw)?;
        debug!(
            path = %path.display(),
            concepts = table.len(),
            "loaded synonym table"
        );
        Ok(table)
    }

    fn insert(&mut self, key: String, terms: impl IntoIterator<Item = String>) {
        let list = self.concepts.entry(key.clone()).or_default();
        for term in terms {
            if list.contains(&term) {
                continue;
            }
            let owners = self.reverse.entry(term.clone()).or_default();
            if !owners.contains(&key) {
                owners.push(key.clone());
            }
            list.push(term);
        }
    }

    /// Number of concept keys.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Terms listed under `key`, if it is a concept key.
    pub fn synonyms_of(&self, key: &str) -> Option<&[String]> {
        self.concepts.get(key).map(Vec::as_slice)
    }

    /// Concept keys whose lists contain `term`.
    pub fn concepts_containing(&self, term: &str) -> &[String] {
        self.reverse.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate concepts in key order.
    pub fn concepts(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.concepts.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Add `keyword` and everything one hop away from it to `out`.
    pub fn expand_into(&self, keyword: &str, out: &mut BTreeSet<String>) {
        out.insert(keyword.to_string());

        if let Some(terms) = self.synonyms_of(keyword) {
            out.extend(terms.iter().cloned());
        }

        for key in self.concepts_containing(keyword) {
            out.insert(key.clone());
            if let Some(siblings) = self.synonyms_of(key) {
                out.extend(siblings.iter().cloned());
            }
        }
    }

    /// Expand every keyword and union the results.
    pub fn expand<'a, I>(&self, keywords: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = BTreeSet::new();
        for keyword in keywords {
            self.expand_into(keyword, &mut out);
        }
        out
    }
}
