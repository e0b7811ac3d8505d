//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file and application data directory
//! - [`levenshtein`] - Edit distance for typo tolerance
//! - [`patterns`] - LRU cache of compiled, escaped search patterns
//! - [`tokenizer`] - Index word sets and query terms
//!
//! ## Key Functions
//!
//! ```
//! use leadscan::utils::{extract_tokens, levenshtein_distance};
//!
//! let tokens = extract_tokens("john smith a@x.com");
//! assert!(tokens.contains("a@x.com"));
//!
//! assert_eq!(levenshtein_distance("smith", "smyth"), 1);
//! ```

pub mod app_data;
pub mod levenshtein;
pub mod patterns;
pub mod tokenizer;

pub use app_data::*;
pub use levenshtein::*;
pub use patterns::*;
pub use tokenizer::*;
