//! Synonym expansion seen through search results.

use super::common::{ids, make_post};
use postlens::{search, SearchEngine, SynonymTable};

#[test]
fn test_term_surfaces_concept_key() {
    let posts = vec![make_post("key", "big tech earnings"), make_post("other", "gardening")];
    assert_eq!(ids(&search("software", posts)), vec!["key"]);
}

#[test]
fn test_concept_key_surfaces_term() {
    let posts = vec![make_post("term", "new software release"), make_post("other", "gardening")];
    assert_eq!(ids(&search("tech", posts)), vec!["term"]);
}

#[test]
fn test_sibling_terms_surface_each_other() {
    // hardware and software share the "tech" concept
    let posts = vec![make_post("sibling", "a hardware startup"), make_post("other", "gardening")];
    assert_eq!(ids(&search("software", posts)), vec!["sibling"]);
}

#[test]
fn test_expansion_stops_after_one_hop() {
    // software → tech → programming (a tech term) but not programming's own
    // terms such as "developer".
    let posts = vec![make_post("two-hops", "hiring a developer")];
    assert!(search("software", posts).is_empty());
}

#[test]
fn test_shared_term_pulls_every_concept() {
    // "game" sits under sports, basketball and gaming.
    let posts = vec![
        make_post("xbox", "new xbox console"),
        make_post("nba", "nba trade rumors"),
        make_post("league", "league standings"),
        make_post("other", "gardening"),
    ];
    let mut found = ids(&search("game", posts));
    found.sort();
    assert_eq!(found, vec!["league", "nba", "xbox"]);
}

#[test]
fn test_custom_table_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("synonyms.json");
    std::fs::write(&path, r#"{"Gardening": ["plants", "Compost"]}"#).unwrap();

    let table = SynonymTable::from_path(&path).unwrap();
    assert_eq!(table.len(), 1);

    let engine = SearchEngine::new().with_synonyms(table);
    let posts = vec![
        make_post("compost", "turning the compost pile"),
        make_post("tech", "software update"),
    ];
    assert_eq!(ids(&engine.search("gardening", posts.clone())), vec!["compost"]);
    // The built-in table is replaced, so "tech" no longer reaches "software".
    assert!(engine.search("tech", posts).is_empty());
}
