#![no_main]

use leadscan::Highlighter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, Vec<&str>)| {
    // Output must never carry a raw '<' other than the mark tags
    let (text, terms) = data;
    let mut hl = Highlighter::default();
    let html = hl.highlight(text, &terms);
    let stripped = html
        .replace("<mark class=\"search-highlight\">", "")
        .replace("</mark>", "");
    assert!(!stripped.contains('<'));
});
