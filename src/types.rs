// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the engine reads and the wrappers it hands back.
//!
//! The engine never owns a schema for the caller's data. Anything that can
//! answer the [`Candidate`] accessors can be ranked, and the result wraps the
//! untouched record in [`Scored`] instead of writing a score into it.
//!
//! # Field roles
//!
//! | Field            | Weight | Why it is there                          |
//! |------------------|--------|------------------------------------------|
//! | `Content`        | 1.0    | The post body, always present            |
//! | `AuthorName`     | 0.5    | Display name, weak identity signal       |
//! | `AuthorUsername` | 0.5    | Handle, weak identity signal             |
//! | `Label`          | 2.0    | Topic/tag label, strongest topical signal|
//!
//! Weights live in [`crate::FieldWeights`]; the table shows the defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read_json, Result};

/// Which part of a candidate a match landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Content,
    AuthorName,
    AuthorUsername,
    Label,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Content => "content",
            FieldKind::AuthorName => "author_name",
            FieldKind::AuthorUsername => "author_username",
            FieldKind::Label => "label",
        };
        f.write_str(name)
    }
}

/// A record that can be scored against a query.
///
/// Only `content` is required. Missing optional fields contribute nothing,
/// which is the same as an empty string.
pub trait Candidate {
    /// Primary text (the post body).
    fn content(&self) -> &str;

    /// Author display name.
    fn author_name(&self) -> Option<&str> {
        None
    }

    /// Author handle, without any leading `@` requirement.
    fn author_username(&self) -> Option<&str> {
        None
    }

    /// Category or tag labels attached to the record.
    fn labels(&self) -> &[String] {
        &[]
    }

    /// Every scorable field with its role, in a fixed order.
    fn fields(&self) -> Vec<(FieldKind, &str)> {
        let mut fields = vec![(FieldKind::Content, self.content())];
        if let Some(name) = self.author_name() {
            fields.push((FieldKind::AuthorName, name));
        }
        if let Some(username) = self.author_username() {
            fields.push((FieldKind::AuthorUsername, username));
        }
        fields.extend(self.labels().iter().map(|l| (FieldKind::Label, l.as_str())));
        fields
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn content(&self) -> &str {
        (**self).content()
    }

    fn author_name(&self) -> Option<&str> {
        (**self).author_name()
    }

    fn author_username(&self) -> Option<&str> {
        (**self).author_username()
    }

    fn labels(&self) -> &[String] {
        (**self).labels()
    }
}

/// A saved post, the record shape the CLI reads from JSON.
///
/// `topics` also accepts `tags` or `categories` so exports from different
/// tools load without a conversion step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    #[serde(default, alias = "tags", alias = "categories")]
    pub topics: Vec<String>,
}

impl Post {
    /// Load a JSON array of posts.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Post>> {
        read_json(path.as_ref())
    }
}

impl Candidate for Post {
    fn content(&self) -> &str {
        &self.content
    }

    fn author_name(&self) -> Option<&str> {
        self.author_name.as_deref()
    }

    fn author_username(&self) -> Option<&str> {
        self.author_username.as_deref()
    }

    fn labels(&self) -> &[String] {
        &self.topics
    }
}

/// A candidate with its relevance score attached.
///
/// Serializes flat, so a `Scored<Post>` looks like the post plus a `score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub record: T,
    pub score: f64,
}

impl<T> Scored<T> {
    pub fn new(record: T, score: f64) -> Self {
        Self { record, score }
    }

    pub fn into_record(self) -> T {
        self.record
    }
}

/// Output of one search call.
///
/// An empty query is not a filter, so it gets its input back untouched and
/// without scores. Everything else is ranked.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults<T> {
    /// Empty or absent query: the input list, original order.
    Unfiltered(Vec<T>),
    /// Candidates with score > 0, highest first.
    Ranked(Vec<Scored<T>>),
}

impl<T> SearchResults<T> {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Unfiltered(records) => records.len(),
            SearchResults::Ranked(scored) => scored.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, SearchResults::Ranked(_))
    }

    /// Keep only the first `n` results.
    pub fn truncate(&mut self, n: usize) {
        match self {
            SearchResults::Unfiltered(records) => records.truncate(n),
            SearchResults::Ranked(scored) => scored.truncate(n),
        }
    }

    /// Records in result order, scores dropped.
    pub fn records(&self) -> impl Iterator<Item = &T> + '_ {
        let (plain, ranked) = match self {
            SearchResults::Unfiltered(records) => (Some(records.iter()), None),
            SearchResults::Ranked(scored) => (None, Some(scored.iter().map(|s| &s.record))),
        };
        plain.into_iter().flatten().chain(ranked.into_iter().flatten())
    }

    /// Scores in result order, or `None` for an unfiltered pass-through.
    pub fn scores(&self) -> Option<Vec<f64>> {
        match self {
            SearchResults::Unfiltered(_) => None,
            SearchResults::Ranked(scored) => Some(scored.iter().map(|s| s.score).collect()),
        }
    }

    pub fn into_records(self) -> Vec<T> {
        match self {
            SearchResults::Unfiltered(records) => records,
            SearchResults::Ranked(scored) => scored.into_iter().map(Scored::into_record).collect(),
        }
    }
}
