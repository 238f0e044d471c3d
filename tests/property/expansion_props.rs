//! Keyword extraction and synonym expansion invariants.

use super::query_strategy;
use postlens::{extract_keywords, PatternSet, StopWordSet, SynonymTable};
use proptest::prelude::*;

fn builtin_patterns(query: &str) -> Option<PatternSet> {
    PatternSet::build(query, StopWordSet::builtin(), SynonymTable::builtin())
}

/// A term that would survive keyword extraction as itself.
fn is_keyword(term: &str) -> bool {
    extract_keywords(term, StopWordSet::builtin())
        .into_iter()
        .eq(std::iter::once(term.to_string()))
}

/// Built-in (key, term) pairs where both sides are standalone keywords.
fn keyword_pairs() -> Vec<(String, String)> {
    SynonymTable::builtin()
        .concepts()
        .filter(|(key, _)| is_keyword(key))
        .flat_map(|(key, terms)| {
            terms
                .iter()
                .filter(|t| is_keyword(t))
                .map(move |t| (key.to_string(), t.clone()))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every keyword and the full query appear among the patterns.
    #[test]
    fn prop_keywords_subset_of_patterns(query in query_strategy()) {
        let set = builtin_patterns(&query).expect("non-blank query");
        prop_assert!(set.contains(set.query()));
        for keyword in set.keywords() {
            prop_assert!(set.contains(keyword), "keyword {:?} missing", keyword);
        }
    }

    /// Property: keywords are lower-case, longer than two chars, not stop-words.
    #[test]
    fn prop_keywords_well_formed(query in "[A-Za-z ,.!?']{0,40}") {
        for keyword in extract_keywords(&query, StopWordSet::builtin()) {
            prop_assert_eq!(keyword.clone(), keyword.to_lowercase());
            prop_assert!(keyword.chars().count() > 2);
            prop_assert!(!StopWordSet::builtin().contains(&keyword));
            prop_assert!(keyword.chars().all(char::is_alphanumeric));
        }
    }

    /// Property: a key's query reaches the term and the term's query reaches the key.
    #[test]
    fn prop_builtin_expansion_symmetric(pick in any::<prop::sample::Index>()) {
        let pairs = keyword_pairs();
        let (key, term) = pick.get(&pairs);

        let from_key = builtin_patterns(key).unwrap();
        prop_assert!(from_key.contains(term), "{:?} does not reach {:?}", key, term);

        let from_term = builtin_patterns(term).unwrap();
        prop_assert!(from_term.contains(key), "{:?} does not reach {:?}", term, key);
    }

    /// Property: expanding more keywords never loses patterns.
    #[test]
    fn prop_expansion_monotone(a in query_strategy(), b in query_strategy()) {
        let table = SynonymTable::builtin();
        let ka = extract_keywords(&a, StopWordSet::builtin());
        let kb = extract_keywords(&b, StopWordSet::builtin());

        let small = table.expand(ka.iter().map(String::as_str));
        let large = table.expand(ka.iter().chain(kb.iter()).map(String::as_str));
        prop_assert!(small.is_subset(&large));
    }

    /// Property: custom tables expand one hop in both directions.
    #[test]
    fn prop_custom_table_symmetric(
        key in "[a-z]{3,8}",
        terms in prop::collection::vec("[a-z]{3,8}", 1..5),
    ) {
        let table = SynonymTable::from_entries([(key.clone(), terms.clone())]).unwrap();
        let from_key = table.expand([key.as_str()]);
        for term in &terms {
            prop_assert!(from_key.contains(term));
            let from_term = table.expand([term.as_str()]);
            prop_assert!(from_term.contains(&key));
            prop_assert!(terms.iter().all(|sibling| from_term.contains(sibling)));
        }
    }
}

#[test]
fn test_builtin_has_symmetric_pairs() {
    // Guards the proptest above against an empty pair list.
    assert!(keyword_pairs().len() > 20);
}
