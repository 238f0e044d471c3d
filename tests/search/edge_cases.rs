//! Odd queries and sparse records.

use super::common::{ids, make_post, make_post_with_topics, sample_posts};
use postlens::{search, Candidate, Post, SearchEngine, SearchResults};

#[test]
fn test_whitespace_query_is_identity() {
    let input = sample_posts();
    for query in ["", " ", "\t\n", "   \u{00a0}  "] {
        let results = search(query, input.clone());
        assert_eq!(results, SearchResults::Unfiltered(input.clone()), "query {query:?}");
    }
}

#[test]
fn test_absent_query_is_identity() {
    let input = sample_posts();
    let results = SearchEngine::new().search_opt(None, input.clone());
    assert_eq!(results.into_records(), input);
}

#[test]
fn test_stop_word_query_matches_phrase() {
    // No keywords survive, but the full query is still a pattern.
    let posts = vec![
        make_post("phrase", "what are the odds"),
        make_post("other", "coffee time"),
    ];
    assert_eq!(ids(&search("What are the", posts)), vec!["phrase"]);
}

#[test]
fn test_punctuation_only_query() {
    let posts = vec![make_post("bang", "wow!!!"), make_post("calm", "ok then")];
    assert_eq!(ids(&search("!!!", posts)), vec!["bang"]);
}

#[test]
fn test_query_case_insensitive() {
    let posts = vec![make_post("p", "LeBron James")];
    let a = search("LEBRON", posts.clone());
    let b = search("lebron", posts);
    assert_eq!(a.scores(), b.scores());
    assert_eq!(a.len(), 1);
}

#[test]
fn test_unicode_query() {
    let posts = vec![
        make_post("cafe", "Best café in Lisbon"),
        make_post("plain", "Best cafe in Porto"),
    ];
    assert_eq!(ids(&search("café", posts)), vec!["cafe"]);
}

#[test]
fn test_no_matches_is_empty_ranked() {
    let results = search("zyzzyva", sample_posts());
    assert!(results.is_ranked());
    assert!(results.is_empty());
}

#[test]
fn test_empty_candidates() {
    assert!(search("tech", Vec::<Post>::new()).is_empty());
    assert!(search("", Vec::<Post>::new()).is_empty());
}

#[test]
fn test_record_with_only_content() {
    struct Note(&'static str);

    impl Candidate for Note {
        fn content(&self) -> &str {
            self.0
        }
    }

    let notes = vec![Note("rust borrow checker"), Note("garden update")];
    let results = search("rust", notes);
    assert_eq!(results.records().map(|n| n.0).collect::<Vec<_>>(), vec!["rust borrow checker"]);
}

#[test]
fn test_empty_content_with_label() {
    let posts = vec![make_post_with_topics("label-only", "", &["Rust"])];
    assert_eq!(ids(&search("rust", posts)), vec!["label-only"]);
}

#[test]
fn test_long_query_does_not_panic() {
    let query = "supercalifragilistic ".repeat(2_000);
    let results = search(&query, sample_posts());
    assert!(results.is_empty());
}

#[test]
fn test_inputs_not_mutated() {
    let input = sample_posts();
    let before = input.clone();
    let _ = search("tech", input.iter().collect::<Vec<_>>());
    assert_eq!(input, before);
}
