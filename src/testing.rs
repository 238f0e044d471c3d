// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::Post;

/// A post with only id and content.
pub fn make_post(id: &str, content: &str) -> Post {
    Post {
        id: id.to_string(),
        content: content.to_string(),
        author_name: None,
        author_username: None,
        topics: vec![],
    }
}

/// A post with topic labels.
pub fn make_post_with_topics(id: &str, content: &str, topics: &[&str]) -> Post {
    Post {
        topics: topics.iter().map(|t| t.to_string()).collect(),
        ..make_post(id, content)
    }
}

/// A post with author fields.
pub fn make_post_with_author(id: &str, content: &str, name: &str, username: &str) -> Post {
    Post {
        author_name: Some(name.to_string()),
        author_username: Some(username.to_string()),
        ..make_post(id, content)
    }
}
