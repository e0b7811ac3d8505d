#![no_main]

use arbitrary::Arbitrary;
use leadscan::{LeadRecord, LeadSearch};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    query: &'a str,
    names: Vec<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    // Arbitrary queries against arbitrary names must never panic, and
    // scores must come back in descending order
    let leads: Vec<LeadRecord> = input
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| LeadRecord {
            id: Some(i.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        })
        .collect();

    let mut engine = LeadSearch::with_defaults();
    engine.build_index(&leads);
    let ranked = engine.search_ranked(input.query, &leads);
    assert!(ranked.matches.windows(2).all(|w| w[0].score >= w[1].score));
    let _ = engine.suggestions(input.query);
});
