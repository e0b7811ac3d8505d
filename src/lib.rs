//! # leadscan - Lead Search & Ranking
//!
//! Client-side search over an in-memory collection of CRM leads: fuzzy
//! matching with edit-distance typo tolerance, weighted ranking, HTML-safe
//! highlighting, and autocomplete from recent queries.
//!
//! ## Architecture
//!
//! - [`index`] - Per-record searchable content and word sets
//! - [`query`] - Query terms and relevance scoring
//! - [`highlight`] - Escaped HTML with `<mark>`-wrapped matches
//! - [`suggest`] - Search history and autocomplete suggestions
//! - [`engine`] - [`LeadSearch`], the context owning all of the above
//! - [`lead`] - The [`LeadRecord`] type and leads-file loading
//! - [`output`] / [`shell`] - Terminal rendering and the interactive session
//! - [`utils`] - Config, tokenizer, edit distance, pattern cache
//!
//! ## Quick Start
//!
//! ```
//! use leadscan::{LeadRecord, LeadSearch};
//!
//! let leads = vec![
//!     LeadRecord { id: Some("1".into()), name: Some("John Doe".into()), ..Default::default() },
//!     LeadRecord { id: Some("2".into()), name: Some("Jon Dough".into()), ..Default::default() },
//! ];
//!
//! let mut engine = LeadSearch::with_defaults();
//! engine.build_index(&leads);
//!
//! let outcome = engine.search("john", &leads);
//! assert_eq!(outcome.results.len(), 2);
//! assert_eq!(outcome.results[0].name.as_deref(), Some("John Doe"));
//!
//! let html = engine.highlight(outcome.results[0].name.as_deref(), &["john"]);
//! assert_eq!(html, "<mark class=\"search-highlight\">John</mark> Doe");
//! ```
//!
//! The index is not tracked against the lead collection: rebuild it with
//! [`LeadSearch::build_index`] whenever the leads change.

pub mod engine;
pub mod highlight;
pub mod index;
pub mod lead;
pub mod output;
pub mod query;
pub mod shell;
pub mod suggest;
pub mod utils;

pub use engine::{LeadSearch, MatchResult, RankedOutcome, SearchOutcome, SearchStats};
pub use highlight::{Highlighter, escape_html};
pub use index::{IndexEntry, SearchIndex, Searchable};
pub use lead::{LeadRecord, load_leads};
pub use query::ScoringWeights;
pub use suggest::{SearchHistory, Suggestion, SuggestionKind};
pub use utils::{AppConfig, SearchConfig, levenshtein_distance};
