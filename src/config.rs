// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tuning loaded from JSON.
//!
//! Every field is optional; anything left out keeps its default. A file that
//! only bumps the label weight looks like:
//!
//! ```json
//! { "weights": { "label": 3.0 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{read_json, Error, Result};
use crate::scoring::{FieldWeights, ScoringConfig};

/// Bonuses and field weights for one engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub scoring: ScoringConfig,
    pub weights: FieldWeights,
}

impl SearchConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: SearchConfig = read_json(path)?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "loaded search config");
        Ok(config)
    }

    /// Reject values that would let a score go negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("scoring.exact_specific", self.scoring.exact_specific),
            ("scoring.exact_generic", self.scoring.exact_generic),
            ("scoring.whole_word", self.scoring.whole_word),
            ("scoring.partial_word", self.scoring.partial_word),
            ("weights.content", self.weights.content),
            ("weights.author_name", self.weights.author_name),
            ("weights.author_username", self.weights.author_username),
            ("weights.label", self.weights.label),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}
