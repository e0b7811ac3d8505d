//! Terminal and JSON rendering of search results

use crate::engine::{MatchResult, SearchStats};
use crate::highlight::Highlighter;
use crate::lead::LeadRecord;
use crate::suggest::{Suggestion, SuggestionKind};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// One-line summary of a lead: name, email, phone, city/state, vendor, status
pub fn summary_line(lead: &LeadRecord) -> String {
    let place = [lead.city.as_deref(), lead.state.as_deref()]
        .into_iter()
        .flatten()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let name = lead.display_name();

    [
        Some(name.as_str()),
        lead.email.as_deref(),
        lead.phone.as_deref(),
        Some(place.as_str()),
        lead.vendor_code.as_deref(),
        lead.status.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.trim().is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

/// Print ranked leads, one per line, with matched terms highlighted
pub fn print_matches<W: WriteColor>(
    out: &mut W,
    matches: &[MatchResult<'_, LeadRecord>],
    highlighter: &mut Highlighter,
    limit: Option<usize>,
) -> io::Result<()> {
    let shown = limit.unwrap_or(matches.len()).min(matches.len());

    for (rank, m) in matches.iter().take(shown).enumerate() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>3}.", rank + 1)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, " [{:>3}]", m.score)?;
        out.reset()?;
        write!(out, " ")?;

        let line = summary_line(m.record);
        let ranges = highlighter.match_ranges(&line, &m.matched_terms);
        print_highlighted(out, &line, &ranges)?;
        writeln!(out)?;
    }

    if shown < matches.len() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(out, "... {} more", matches.len() - shown)?;
        out.reset()?;
    }

    Ok(())
}

/// Print `text` with the given byte ranges in bold red
fn print_highlighted<W: WriteColor>(
    out: &mut W,
    text: &str,
    ranges: &[std::ops::Range<usize>],
) -> io::Result<()> {
    let mut last = 0;
    for range in ranges {
        write!(out, "{}", &text[last..range.start])?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", &text[range.clone()])?;
        out.reset()?;
        last = range.end;
    }
    write!(out, "{}", &text[last..])
}

/// Print the stats line, or a pass-through note when there are none
pub fn print_stats<W: WriteColor>(
    out: &mut W,
    stats: Option<&SearchStats>,
    total_leads: usize,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    match stats {
        Some(stats) => writeln!(
            out,
            "{} result{} in {:.2} ms for \"{}\"",
            stats.total_results,
            if stats.total_results == 1 { "" } else { "s" },
            stats.search_time_ms,
            stats.query
        )?,
        None => writeln!(out, "query too short, showing all {} leads", total_leads)?,
    }
    out.reset()
}

/// Print suggestions as `kind  text` rows
pub fn print_suggestions<W: WriteColor>(out: &mut W, suggestions: &[Suggestion]) -> io::Result<()> {
    for s in suggestions {
        let (label, color) = match s.kind {
            SuggestionKind::Recent => ("Recent", Color::Yellow),
            SuggestionKind::Field => ("Field ", Color::Blue),
        };
        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(out, "{}", label)?;
        out.reset()?;
        writeln!(out, "  {}", s.text)?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMatch<'a> {
    score: u32,
    matched_terms: &'a [String],
    lead: &'a LeadRecord,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: Vec<JsonMatch<'a>>,
    stats: Option<&'a SearchStats>,
}

/// Write `{results, stats}` as pretty JSON
pub fn write_json<W: Write>(
    out: &mut W,
    matches: &[MatchResult<'_, LeadRecord>],
    stats: Option<&SearchStats>,
    limit: Option<usize>,
) -> io::Result<()> {
    let output = JsonOutput {
        results: matches
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|m| JsonMatch {
                score: m.score,
                matched_terms: &m.matched_terms,
                lead: m.record,
            })
            .collect(),
        stats,
    };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn sample() -> LeadRecord {
        LeadRecord {
            id: Some("7".into()),
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            email: Some("a@x.com".into()),
            city: Some("Austin".into()),
            state: Some("TX".into()),
            status: Some("New".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_line_skips_missing_parts() {
        assert_eq!(summary_line(&sample()), "John Doe | a@x.com | Austin, TX | New");
        assert_eq!(summary_line(&LeadRecord::default()), "");
    }

    #[test]
    fn test_print_matches_plain() {
        let lead = sample();
        let matches = vec![MatchResult {
            record: &lead,
            score: 20,
            matched_terms: vec!["john".to_string()],
        }];
        let mut out = NoColor::new(Vec::new());
        print_matches(&mut out, &matches, &mut Highlighter::default(), None).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "  1. [ 20] John Doe | a@x.com | Austin, TX | New\n");
    }

    #[test]
    fn test_print_matches_limit() {
        let lead = sample();
        let matches: Vec<_> = (0..3)
            .map(|_| MatchResult {
                record: &lead,
                score: 1,
                matched_terms: Vec::new(),
            })
            .collect();
        let mut out = NoColor::new(Vec::new());
        print_matches(&mut out, &matches, &mut Highlighter::default(), Some(1)).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("... 2 more\n"));
    }

    #[test]
    fn test_print_stats() {
        let stats = SearchStats {
            total_results: 1,
            search_time_ms: 0.5,
            query: "john".into(),
        };
        let mut out = NoColor::new(Vec::new());
        print_stats(&mut out, Some(&stats), 3).unwrap();
        print_stats(&mut out, None, 3).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(
            text,
            "1 result in 0.50 ms for \"john\"\nquery too short, showing all 3 leads\n"
        );
    }

    #[test]
    fn test_write_json() {
        let lead = sample();
        let matches = vec![MatchResult {
            record: &lead,
            score: 20,
            matched_terms: vec!["john".to_string()],
        }];
        let mut out = Vec::new();
        write_json(&mut out, &matches, None, None).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["results"][0]["score"], 20);
        assert_eq!(value["results"][0]["matchedTerms"][0], "john");
        assert_eq!(value["results"][0]["lead"]["firstName"], "John");
        assert!(value["stats"].is_null());
    }
}
