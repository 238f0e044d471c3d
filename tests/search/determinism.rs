//! Same inputs, same outputs; ties keep caller order.

use super::common::{ids, make_post, sample_posts};
use postlens::{search, SearchEngine};

#[test]
fn test_search_is_idempotent() {
    for query in ["tech", "LeBron basketball", "the", "game night"] {
        let first = search(query, sample_posts());
        let second = search(query, sample_posts());
        assert_eq!(first, second, "query {query:?}");
    }
}

#[test]
fn test_ties_keep_input_order() {
    let posts = vec![
        make_post("a", "great game"),
        make_post("b", "gardening"),
        make_post("c", "great game"),
        make_post("d", "great game"),
    ];
    assert_eq!(ids(&search("game", posts.clone())), vec!["a", "c", "d"]);

    let reversed: Vec<_> = posts.into_iter().rev().collect();
    assert_eq!(ids(&search("game", reversed)), vec!["d", "c", "a"]);
}

#[test]
fn test_concurrent_searches_agree() {
    let engine = SearchEngine::new();
    let expected = engine.search("LeBron basketball", sample_posts());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.search("LeBron basketball", sample_posts())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
