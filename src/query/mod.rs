pub mod parser;
pub mod scorer;

pub use parser::{ParsedQuery, QueryTerm, compile_terms, parse_query};
pub use scorer::{Scorer, ScoringWeights};
