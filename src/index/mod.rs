pub mod build;
pub mod types;

pub use build::SearchIndex;
pub use types::{IndexEntry, Searchable};
