//! End-to-end flow: populate a library, persist it, reload it, and run
//! queries through the same pipeline the CLI uses.

use shelfmark::{
    Library, Score, Source,
    cli::SearchArgs,
    persist,
    query::parse_query,
    search::{execute_search, search},
};

fn seeded_library() -> Library {
    let mut library = Library::new();
    library.add(
        "Effective Go".to_string(),
        vec![],
        vec![],
        vec![],
        String::new(),
    );
    library.add(
        "The Go Programming Language".to_string(),
        vec![],
        vec![],
        vec![],
        String::new(),
    );
    library.add(
        "Structure and Interpretation of Computer Programs".to_string(),
        vec!["Harold Abelson".to_string(), "Gerald Sussman".to_string()],
        vec![Source::Url("https://mitpress.mit.edu/sicp".to_string())],
        vec!["lisp".to_string(), "textbook".to_string()],
        "en".to_string(),
    );
    library
}

fn search_args(tokens: &[&str]) -> SearchArgs {
    SearchArgs {
        query: tokens.iter().map(ToString::to_string).collect(),
        exact: false,
        count: 10,
        all: false,
        json: false,
        ids: false,
    }
}

#[test]
fn free_text_query_returns_both_go_books() {
    let library = seeded_library();
    let query = parse_query(&["go"]).unwrap();
    let hits = search(&query, false, &library);

    let ids: Vec<u64> = hits.iter().map(|(d, _)| d.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&0) && ids.contains(&1));
    for (_, score) in &hits {
        assert_eq!(*score, Score { exact: 0.0, fuzzy: 1.0 });
    }
}

#[test]
fn scoped_title_query_returns_only_the_matching_book() {
    let library = seeded_library();
    let query = parse_query(&["title:effective"]).unwrap();
    let hits = search(&query, false, &library);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.id, 0);
    assert_eq!(hits[0].1, Score { exact: 0.0, fuzzy: 1.0 });
}

#[test]
fn id_query_returns_exactly_one_document_with_exact_score() {
    let library = seeded_library();
    let query = parse_query(&["id:1"]).unwrap();
    let hits = search(&query, false, &library);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.id, 1);
    assert_eq!(hits[0].1, Score { exact: 1.0, fuzzy: 0.0 });
}

#[test]
fn typo_still_finds_the_document() {
    let library = seeded_library();
    // "interpetation" is one edit away from "interpretation".
    let query = parse_query(&["interpetation"]).unwrap();
    let hits = search(&query, false, &library);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.id, 2);
    assert!(hits[0].1.fuzzy > 0.0);
    assert_eq!(hits[0].1.exact, 0.0);
}

#[test]
fn multi_element_query_is_conjunctive() {
    let library = seeded_library();

    // Both elements match doc 2 only.
    let query = parse_query(&["au:abelson", "tag:lisp"]).unwrap();
    let hits = search(&query, false, &library);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.id, 2);

    // One element matching nothing gates everything out.
    let query = parse_query(&["au:abelson", "tag:zzzzz"]).unwrap();
    assert!(search(&query, false, &library).is_empty());
}

#[test]
fn round_trip_then_search_behaves_identically() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("library.json");

    let library = seeded_library();
    persist::save(&path, &library).unwrap();
    let reloaded = persist::load(&path).unwrap();

    let query = parse_query(&["go"]).unwrap();
    let before: Vec<u64> =
        search(&query, false, &library).iter().map(|(d, _)| d.id).collect();
    let after: Vec<u64> =
        search(&query, false, &reloaded).iter().map(|(d, _)| d.id).collect();
    assert_eq!(before, after);

    // Adding after a reload never reuses an id.
    let mut reloaded = reloaded;
    reloaded.remove(1);
    let doc = reloaded.add(
        "new entry".to_string(),
        vec![],
        vec![],
        vec![],
        String::new(),
    );
    assert_eq!(doc.id, 3);
}

#[test]
fn pipeline_assigns_sequential_ranks_best_first() {
    let mut library = seeded_library();
    library.add("go".to_string(), vec![], vec![], vec![], String::new());

    let hits = execute_search(&search_args(&["go"]), &library).unwrap();
    assert_eq!(hits.len(), 3);
    // The whole-string match leads on exact evidence.
    assert_eq!(hits[0].document.name, "go");
    assert!(hits[0].exact > 0.0);
    for (i, hit) in hits.iter().enumerate() {
        assert_eq!(hit.rank, i + 1);
    }
    for pair in hits.windows(2) {
        let a = Score { exact: pair[0].exact, fuzzy: pair[0].fuzzy };
        let b = Score { exact: pair[1].exact, fuzzy: pair[1].fuzzy };
        assert_ne!(a.cmp_rank(b), std::cmp::Ordering::Less);
    }
}

#[test]
fn exact_only_pipeline_keeps_whole_string_matches_only() {
    let mut library = seeded_library();
    library.add("go".to_string(), vec![], vec![], vec![], String::new());

    let mut args = search_args(&["go"]);
    args.exact = true;
    let hits = execute_search(&args, &library).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.name, "go");
}

#[test]
fn bad_query_token_aborts_the_search() {
    let library = seeded_library();
    let result = execute_search(&search_args(&["autor:abelson"]), &library);
    assert!(result.is_err());
}
