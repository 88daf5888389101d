//! Rule store: discovery, parsing and lookup of rule documents.
//!
//! The store is built once at startup from a rules directory and is
//! immutable afterwards, so it can be shared behind an `Arc` without
//! locking.

mod frontmatter;
mod loader;
mod queries;
mod walker;

pub use frontmatter::{extract_markers, parse_rule, split_front_matter};
pub use loader::{LoadFailure, LoadReport, RuleStore};
pub use queries::{RelatedGroup, RelatedTarget};
pub use walker::{rule_id, RuleWalker};
