//! Keyword search over rule metadata.
//!
//! This module provides the SearchService that scores rules by how
//! many of their metadata fields mention the query.

use super::index::SearchIndex;
use super::query::tokenize_query;
use crate::core::store::RuleStore;
use crate::core::types::{Category, SearchHit};
use std::sync::Arc;
use std::time::Instant;

/// Metadata search service
pub struct SearchService {
    store: Arc<RuleStore>,
    index: SearchIndex,
    max_limit: usize,
}

impl SearchService {
    /// Create a new search service, indexing every rule in `store`
    pub fn new(store: Arc<RuleStore>, max_limit: usize) -> Self {
        let index = SearchIndex::build(&store);
        tracing::debug!("Search index built over {} rules", index.len());
        Self {
            store,
            index,
            max_limit,
        }
    }

    /// Execute a keyword search
    ///
    /// A blank query returns every rule (filtered by `category`) in id
    /// order. `limit` truncates after ordering and is capped at the
    /// configured maximum; without it all matches are returned.
    pub fn search(
        &self,
        query: &str,
        category: Option<Category>,
        limit: Option<usize>,
    ) -> Vec<SearchHit> {
        let start = Instant::now();
        let tokens = tokenize_query(query);

        let hits: Vec<SearchHit> = self
            .index
            .score(&tokens, category)
            .into_iter()
            .take(limit.map(|l| l.min(self.max_limit)).unwrap_or(usize::MAX))
            .filter_map(|scored| {
                let score = scored.score();
                self.store.get(scored.id).ok().map(|rule| SearchHit {
                    score,
                    matched: scored.matched,
                    rule: rule.summary(),
                })
            })
            .collect();

        tracing::debug!(
            "Search '{}' returned {} hits in {}us",
            query,
            hits.len(),
            start.elapsed().as_micros()
        );
        hits
    }

    pub fn max_limit(&self) -> usize {
        self.max_limit
    }
}
