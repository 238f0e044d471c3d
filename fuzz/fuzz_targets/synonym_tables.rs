// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for user-supplied synonym tables.
//!
//! Any JSON object of string lists either loads or is rejected with an
//! error. A loaded table must expand one hop in both directions.

#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;
use postlens::SynonymTable;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = serde_json::from_slice::<BTreeMap<String, Vec<String>>>(data) else {
        return;
    };
    let Ok(table) = SynonymTable::from_entries(raw) else {
        return;
    };

    for (key, terms) in table.concepts() {
        // INVARIANT 1: keys and terms are trimmed and lower-cased
        assert_eq!(key, key.trim());
        assert_eq!(key, key.to_lowercase());
        assert!(!key.is_empty());

        let expanded = table.expand([key]);
        for term in terms {
            assert_eq!(term.as_str(), term.trim());
            assert_eq!(*term, term.to_lowercase());

            // INVARIANT 2: key reaches term, term reaches key
            assert!(expanded.contains(term), "{:?} does not reach {:?}", key, term);
            assert!(
                table.expand([term.as_str()]).contains(key),
                "{:?} does not reach {:?}",
                term,
                key
            );
        }
    }
});
