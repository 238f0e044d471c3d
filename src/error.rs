// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the parts of the crate that touch the filesystem.
//!
//! Scoring itself never fails. Only loading a config file, a custom synonym
//! table, or a posts file can go wrong, and those paths return [`Result`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading external inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but is not the JSON shape we expect.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A bonus or weight would let a score go negative or non-finite.
    #[error("invalid search config: {0}")]
    InvalidConfig(String),

    /// Synonym table has an unusable entry.
    #[error("invalid synonym table: {0}")]
    InvalidSynonyms(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read a JSON file into `T`, tagging errors with the path.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    let file = std::fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(std::io::BufReader::new(file)).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
