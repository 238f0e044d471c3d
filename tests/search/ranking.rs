//! Ranking order: filtering, sort direction, and what earns more points.

use super::common::{ids, make_post, make_post_with_author, make_post_with_topics, sample_posts};
use postlens::{search, FieldWeights, SearchConfig, SearchEngine};

fn assert_ranked_properly(query: &str) {
    let results = search(query, sample_posts());
    let scores = results.scores().expect("non-empty query should rank");
    for score in &scores {
        assert!(*score > 0.0, "query {query:?} returned score {score}");
    }
    for pair in scores.windows(2) {
        assert!(
            pair[0] >= pair[1],
            "query {query:?} not sorted: {} before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_results_positive_and_descending() {
    for query in [
        "tech",
        "LeBron basketball",
        "crypto",
        "game night",
        "rust parser release",
        "the",
        "food recipe",
    ] {
        assert_ranked_properly(query);
    }
}

#[test]
fn test_label_match_outranks_content_match() {
    let posts = vec![
        make_post("content", "thoughts on kubernetes"),
        make_post_with_topics("label", "weekend thoughts", &["kubernetes"]),
    ];
    let results = search("kubernetes", posts);
    assert_eq!(ids(&results), vec!["label", "content"]);
}

#[test]
fn test_content_match_outranks_author_match() {
    let posts = vec![
        make_post_with_author("author", "unrelated", "Kubernetes Weekly", "k8sweekly"),
        make_post("content", "kubernetes operators explained"),
    ];
    let results = search("kubernetes", posts);
    assert_eq!(ids(&results), vec!["content", "author"]);
}

#[test]
fn test_whole_word_beats_fragment() {
    let posts = vec![
        make_post("fragment", "rustaceans unite"),
        make_post("word", "rust is fun"),
    ];
    let results = search("rust", posts);
    assert_eq!(ids(&results), vec!["word", "fragment"]);
}

#[test]
fn test_matching_more_patterns_ranks_higher() {
    let posts = vec![
        make_post("one", "the playoffs start today"),
        make_post("three", "nba playoffs dunk contest"),
    ];
    let results = search("basketball", posts);
    assert_eq!(ids(&results), vec!["three", "one"]);
}

#[test]
fn test_custom_weights_change_order() {
    let posts = vec![
        make_post("content", "thoughts on kubernetes"),
        make_post_with_topics("label", "weekend thoughts", &["kubernetes"]),
    ];
    let config = SearchConfig {
        weights: FieldWeights {
            content: 3.0,
            ..FieldWeights::default()
        },
        ..SearchConfig::default()
    };
    let results = SearchEngine::new()
        .with_config(config)
        .search("kubernetes", posts);
    assert_eq!(ids(&results), vec!["content", "label"]);
}
