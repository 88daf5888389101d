//! Search module for keyword search over rule metadata.
//!
//! Rules are scored by the number of metadata fields (title, tags,
//! concepts, keywords) that contain a query token.

mod index;
mod query;
mod service;

pub use index::{ScoredRule, SearchIndex};
pub use query::tokenize_query;
pub use service::SearchService;
