//! End-to-end scenarios from the product: the queries people actually type.

use super::common::{ids, make_post, make_post_with_topics, sample_posts, score_of};
use postlens::{search, Post, SearchEngine, SearchResults};

#[test]
fn test_tech_query_finds_technology_label() {
    let results = search("tech", sample_posts());
    assert!(results.is_ranked());
    assert_eq!(ids(&results), vec!["ai-label"]);
}

#[test]
fn test_tech_query_does_not_chase_ai_synonyms() {
    // "tech" expands one hop. Nothing in that hop appears in the unlabeled
    // copy of the post, so it stays out.
    let results = search("tech", vec![make_post("plain", "New AI breakthroughs in machine learning")]);
    assert!(results.is_empty());
}

#[test]
fn test_empty_query_returns_same_five() {
    let input: Vec<Post> = sample_posts().into_iter().take(5).collect();
    let results = search("", input.clone());
    assert_eq!(results, SearchResults::Unfiltered(input));
}

#[test]
fn test_lebron_basketball() {
    let results = search("LeBron basketball", sample_posts());
    let found = ids(&results);
    assert!(found.contains(&"lebron".to_string()));
    assert!(found.contains(&"nba".to_string()));
    assert!(score_of(&results, "lebron").unwrap() > 0.0);
    assert!(!found.contains(&"pasta".to_string()));
}

#[test]
fn test_label_scores_four_times_username() {
    let mut by_username = make_post("user", "nothing to see");
    by_username.author_username = Some("rustacean".to_string());
    let by_label = make_post_with_topics("label", "nothing to see", &["rustacean"]);

    let results = SearchEngine::new().search("rustacean", vec![by_username, by_label]);
    let user = score_of(&results, "user").unwrap();
    let label = score_of(&results, "label").unwrap();

    assert!(label > user);
    assert_eq!(label, user * 4.0);
    assert_eq!(ids(&results), vec!["label", "user"]);
}

#[test]
fn test_bitcoin_question_finds_crypto_post() {
    let results = search("What is happening with crypto?", sample_posts());
    assert_eq!(ids(&results), vec!["btc"]);
}

#[test]
fn test_space_launch() {
    let results = search("nasa", sample_posts());
    // "nasa" → space + siblings, "launch" and "rocket" are in the post
    assert_eq!(ids(&results), vec!["launch"]);
}
