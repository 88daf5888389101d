//! Read-only lookups over a loaded `RuleStore`.

use super::loader::RuleStore;
use crate::core::error::{Result, RulesError};
use crate::core::types::{Category, EdgeKind, Rule, RuleSummary};

/// One edge target, resolved against the store when possible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedTarget {
    pub id: String,
    /// `None` when the target is not a loaded rule
    pub title: Option<String>,
}

/// Edge targets of one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedGroup {
    pub kind: EdgeKind,
    pub targets: Vec<RelatedTarget>,
}

/// Normalize a caller-supplied identifier to the store's form
fn normalize_id(id: &str) -> String {
    let id = id.trim().replace('\\', "/");
    let id = id.trim_start_matches("./").trim_start_matches('/');
    id.to_string()
}

impl RuleStore {
    /// Find a rule by identifier
    ///
    /// Accepts `./`-prefixed or backslash-separated forms and ids
    /// without the `.md` extension.
    pub fn get(&self, id: &str) -> Result<&Rule> {
        let normalized = normalize_id(id);
        if let Some(rule) = self.rules.get(&normalized) {
            return Ok(rule);
        }
        if !normalized.ends_with(".md") {
            if let Some(rule) = self.rules.get(&format!("{normalized}.md")) {
                return Ok(rule);
            }
        }
        Err(RulesError::RuleNotFound(id.to_string()))
    }

    /// Full markdown body of a rule
    pub fn get_rule(&self, id: &str) -> Result<&str> {
        self.get(id).map(|rule| rule.body.as_str())
    }

    /// `(id, title)` listing grouped by category, then sorted by id
    pub fn list(&self, category: Option<Category>) -> Vec<RuleSummary> {
        let mut summaries: Vec<RuleSummary> = self
            .rules()
            .filter(|r| category.map(|c| r.category == c).unwrap_or(true))
            .map(Rule::summary)
            .collect();
        summaries.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.id.cmp(&b.id)));
        summaries
    }

    /// Rules whose category is in `languages` and which carry a topic in `topics`
    ///
    /// An empty slice leaves its dimension unconstrained; both empty is an
    /// invalid request. Ordered by category, then phase, then id.
    pub fn context(&self, languages: &[Category], topics: &[String]) -> Result<Vec<&Rule>> {
        let topics: Vec<&str> = topics
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();

        if languages.is_empty() && topics.is_empty() {
            return Err(RulesError::InvalidArgument(
                "At least one language or topic is required".to_string(),
            ));
        }

        let mut matched: Vec<&Rule> = self
            .rules()
            .filter(|r| languages.is_empty() || languages.contains(&r.category))
            .filter(|r| topics.is_empty() || topics.iter().any(|t| r.has_topic(t)))
            .collect();
        matched.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then(a.phase.cmp(&b.phase))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(matched)
    }

    /// Rules of one category ordered by phase, then id
    ///
    /// With `phase` set only that phase is returned. An empty result
    /// is a not-found error.
    pub fn learning_path(&self, scope: Category, phase: Option<u32>) -> Result<Vec<&Rule>> {
        let mut path: Vec<&Rule> = self
            .rules()
            .filter(|r| r.category == scope)
            .filter(|r| phase.map(|p| r.phase == p).unwrap_or(true))
            .collect();

        if path.is_empty() {
            let scope = match phase {
                Some(p) => format!("{scope} (phase {p})"),
                None => scope.to_string(),
            };
            return Err(RulesError::EmptyScope(scope));
        }

        path.sort_by(|a, b| a.phase.cmp(&b.phase).then_with(|| a.id.cmp(&b.id)));
        Ok(path)
    }

    /// Edges of a rule grouped by kind; kinds without targets are omitted
    pub fn related(&self, id: &str) -> Result<Vec<RelatedGroup>> {
        let rule = self.get(id)?;
        let groups = EdgeKind::ALL
            .iter()
            .filter(|kind| !rule.edges.get(**kind).is_empty())
            .map(|kind| RelatedGroup {
                kind: *kind,
                targets: rule
                    .edges
                    .get(*kind)
                    .iter()
                    .map(|target| RelatedTarget {
                        id: target.clone(),
                        title: self.get(target).ok().map(|r| r.title.clone()),
                    })
                    .collect(),
            })
            .collect();
        Ok(groups)
    }

    /// Categories that have at least one rule, with their rule counts
    pub fn categories(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.rules().filter(|r| r.category == *c).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Total `RULE:` and `BANNED:` markers across all rules
    pub fn marker_totals(&self) -> (usize, usize) {
        self.rules().fold((0, 0), |(rules, banned), r| {
            (rules + r.markers.rules.len(), banned + r.markers.banned.len())
        })
    }
}
