//! End-to-end search behavior over realistic lead collections.

use leadscan::{LeadRecord, LeadSearch, Searchable, levenshtein_distance};

fn lead(id: &str, name: &str, email: &str) -> LeadRecord {
    LeadRecord {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        ..Default::default()
    }
}

fn ids<'a>(results: impl IntoIterator<Item = &'a LeadRecord>) -> Vec<&'a str> {
    results.into_iter().map(|l| l.search_key()).collect()
}

#[test]
fn short_query_returns_input_unchanged() {
    let leads = vec![
        lead("1", "John Doe", "a@x.com"),
        lead("2", "Jon Dough", "b@x.com"),
    ];
    let mut engine = LeadSearch::with_defaults();

    let outcome = engine.search("a", &leads);
    assert_eq!(ids(outcome.results), vec!["1", "2"]);
    assert!(outcome.stats.is_none());
}

#[test]
fn john_ranks_exact_over_fuzzy_and_excludes_unrelated() {
    let leads = vec![
        lead("1", "John Doe", "a@x.com"),
        lead("2", "Jon Dough", "b@x.com"),
        lead("3", "Unrelated Person", "c@x.com"),
    ];
    let mut engine = LeadSearch::with_defaults();
    engine.build_index(&leads);

    let ranked = engine.search_ranked("john", &leads);
    let order: Vec<&str> = ranked.matches.iter().map(|m| m.record.search_key()).collect();
    assert_eq!(order, vec!["1", "2"]);
    assert!(ranked.matches[0].score > ranked.matches[1].score);

    let stats = ranked.stats.unwrap();
    assert_eq!(stats.total_results, 2);
    assert_eq!(stats.query, "john");
}

#[test]
fn exact_email_outranks_prefix_match() {
    let leads = vec![
        lead("1", "Pat Prefix", "jane.doe@firm.com.au"),
        lead("2", "Jane Exact", "jane.doe@firm.com"),
    ];
    let mut engine = LeadSearch::with_defaults();
    engine.build_index(&leads);

    let ranked = engine.search_ranked("jane.doe@firm.com", &leads);
    assert_eq!(ranked.matches[0].record.search_key(), "2");
    assert!(ranked.matches[0].score >= 18);
    assert!(ranked.matches[0].score > ranked.matches[1].score);
}

#[test]
fn typo_finds_indexed_spelling() {
    assert_eq!(levenshtein_distance("smith", "smyth"), 1);

    let leads = vec![lead("1", "Anna Smith", "anna@x.com"), lead("2", "Bo Li", "bo@x.com")];
    let mut engine = LeadSearch::with_defaults();
    engine.build_index(&leads);

    let outcome = engine.search("smyth", &leads);
    assert_eq!(ids(outcome.results), vec!["1"]);
}

#[test]
fn multi_term_scores_accumulate() {
    let leads = vec![
        LeadRecord {
            id: Some("1".into()),
            name: Some("Maria Garcia".into()),
            city: Some("Houston".into()),
            ..Default::default()
        },
        LeadRecord {
            id: Some("2".into()),
            name: Some("Maria Lopez".into()),
            city: Some("Dallas".into()),
            ..Default::default()
        },
    ];
    let mut engine = LeadSearch::with_defaults();
    engine.build_index(&leads);

    let ranked = engine.search_ranked("maria houston", &leads);
    assert_eq!(ranked.matches[0].record.search_key(), "1");
    assert_eq!(ranked.matches[0].matched_terms, vec!["maria", "houston"]);
    assert_eq!(ranked.matches[1].matched_terms, vec!["maria"]);
}

#[test]
fn every_field_is_searchable() {
    let lead = LeadRecord {
        id: Some("L-100".into()),
        phone: Some("512-555-0100".into()),
        zip: Some("78701".into()),
        vendor_code: Some("ACME42".into()),
        category: Some("Workers Comp".into()),
        status: Some("Retained".into()),
        location: Some("I-35 overpass".into()),
        notes: Some("prefers evening calls".into()),
        ..Default::default()
    };
    let leads = vec![lead];
    let mut engine = LeadSearch::with_defaults();
    engine.build_index(&leads);

    for query in ["l-100", "512-555-0100", "78701", "acme42", "workers", "retained", "overpass", "evening"] {
        assert_eq!(engine.search(query, &leads).results.len(), 1, "query {query}");
    }
}

#[test]
fn missing_fields_do_not_break_indexing() {
    let leads = vec![
        LeadRecord::default(),
        LeadRecord {
            id: Some("2".into()),
            notes: Some("only notes here".into()),
            ..Default::default()
        },
    ];
    let mut engine = LeadSearch::with_defaults();
    engine.build_index(&leads);

    let outcome = engine.search("notes", &leads);
    assert_eq!(ids(outcome.results), vec!["2"]);
}

#[test]
fn rebuild_reflects_only_new_collection() {
    let first = vec![lead("1", "John Doe", "a@x.com")];
    let second = vec![lead("7", "Johnny Cash", "cash@x.com")];
    let mut engine = LeadSearch::with_defaults();

    engine.build_index(&first);
    assert_eq!(ids(engine.search("john", &first).results), vec!["1"]);

    engine.build_index(&second);
    assert!(engine.search("john", &first).results.is_empty());
    assert_eq!(ids(engine.search("john", &second).results), vec!["7"]);
    assert!(!engine.is_indexed("1"));
    assert_eq!(engine.index_len(), 1);
}

#[test]
fn regex_metacharacters_in_query_are_literal() {
    let leads = vec![
        lead("1", "Ann (Nan) Lee", "ann@x.com"),
        lead("2", "Bob Stone", "bob@x.com"),
    ];
    let mut engine = LeadSearch::with_defaults();
    engine.build_index(&leads);

    assert_eq!(ids(engine.search("(nan)", &leads).results), vec!["1"]);
    assert!(engine.search(".*", &leads).results.is_empty());
    assert!(engine.search("[a-z]+", &leads).results.is_empty());
}

#[test]
fn searches_feed_history_and_suggestions() {
    let leads = vec![lead("1", "John Doe", "a@x.com")];
    let mut engine = LeadSearch::with_defaults();
    engine.build_index(&leads);

    engine.search("alpha", &leads);
    engine.search("beta", &leads);
    engine.search("alpha", &leads);
    assert_eq!(engine.history().to_vec(), vec!["alpha", "beta"]);

    let suggestions = engine.suggestions("a");
    let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["alpha", "beta", "name", "email", "state", "status"]);
}

#[test]
fn highlight_escapes_before_marking() {
    let mut engine = LeadSearch::with_defaults();
    let html = engine.highlight("<script>bad</script> John", &["john"]);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;bad&lt;/script&gt;"));
    assert!(html.contains("<mark class=\"search-highlight\">John</mark>"));
    assert_eq!(engine.highlight(None::<&str>, &["john"]), "");
}
