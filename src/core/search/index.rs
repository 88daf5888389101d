//! In-memory search index over rule metadata.
//!
//! Built once from the store. Each rule keeps lowercased copies of the
//! four searchable fields, and rules are grouped by category so a
//! filtered query only visits that category.

use crate::core::store::RuleStore;
use crate::core::types::{Category, Rule, SearchField};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct IndexedRule {
    id: String,
    title: String,
    tags: Vec<String>,
    concepts: Vec<String>,
    keywords: Vec<String>,
}

impl IndexedRule {
    fn from_rule(rule: &Rule) -> Self {
        Self {
            id: rule.id.clone(),
            title: rule.title.to_lowercase(),
            tags: lower_all(&rule.tags),
            concepts: lower_all(&rule.concepts),
            keywords: lower_all(&rule.keywords),
        }
    }

    /// A token matches a list field when it is a substring of one entry
    fn field_matches(&self, field: SearchField, token: &str) -> bool {
        let entries = match field {
            SearchField::Title => return self.title.contains(token),
            SearchField::Tags => &self.tags,
            SearchField::Concepts => &self.concepts,
            SearchField::Keywords => &self.keywords,
        };
        entries.iter().any(|e| e.contains(token))
    }

    fn matched_fields(&self, tokens: &[String]) -> Vec<SearchField> {
        SearchField::ALL
            .into_iter()
            .filter(|field| tokens.iter().any(|t| self.field_matches(*field, t)))
            .collect()
    }
}

fn lower_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

/// A rule that matched a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRule<'a> {
    pub id: &'a str,
    pub matched: Vec<SearchField>,
}

impl ScoredRule<'_> {
    pub fn score(&self) -> usize {
        self.matched.len()
    }
}

/// Scored view of every rule, in identifier order
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexedRule>,
    /// Positions in `entries`, ascending, per category
    by_category: BTreeMap<Category, Vec<usize>>,
}

impl SearchIndex {
    pub fn build(store: &RuleStore) -> Self {
        let mut entries = Vec::with_capacity(store.len());
        let mut by_category: BTreeMap<Category, Vec<usize>> = BTreeMap::new();
        for (pos, rule) in store.rules().enumerate() {
            by_category.entry(rule.category).or_default().push(pos);
            entries.push(IndexedRule::from_rule(rule));
        }
        Self {
            entries,
            by_category,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every rule matching at least one token
    ///
    /// An empty token list matches every rule with no matched fields.
    /// Results are ordered by score descending, then id ascending.
    pub fn score(&self, tokens: &[String], category: Option<Category>) -> Vec<ScoredRule<'_>> {
        let candidates: Box<dyn Iterator<Item = &IndexedRule> + '_> = match category {
            Some(c) => Box::new(
                self.by_category
                    .get(&c)
                    .into_iter()
                    .flatten()
                    .map(|&p| &self.entries[p]),
            ),
            None => Box::new(self.entries.iter()),
        };

        let mut scored: Vec<ScoredRule<'_>> = candidates
            .filter_map(|e| {
                let matched = e.matched_fields(tokens);
                if matched.is_empty() && !tokens.is_empty() {
                    return None;
                }
                Some(ScoredRule {
                    id: e.id.as_str(),
                    matched,
                })
            })
            .collect();

        // candidates are already in id order, so a stable sort keeps the tiebreak
        scored.sort_by(|a, b| b.score().cmp(&a.score()));
        scored
    }
}
