//! Core data types for the rules server.
//!
//! This module defines the rule document model shared by the store,
//! the search index and the MCP tools.

use crate::core::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phase assigned to rules whose front-matter omits `phase`
pub const DEFAULT_PHASE: u32 = 4;

/// Fixed top-level grouping of rules
///
/// Declaration order is the sort order used for grouped listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Global,
    ProjectFiles,
    Automation,
    Devops,
    Ipc,
    PlatformUx,
    Python,
    Js,
    Css,
    Cpp,
    Rust,
    Kotlin,
}

impl Category {
    /// All categories in sort order
    pub const ALL: [Category; 12] = [
        Category::Global,
        Category::ProjectFiles,
        Category::Automation,
        Category::Devops,
        Category::Ipc,
        Category::PlatformUx,
        Category::Python,
        Category::Js,
        Category::Css,
        Category::Cpp,
        Category::Rust,
        Category::Kotlin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Global => "global",
            Category::ProjectFiles => "project-files",
            Category::Automation => "automation",
            Category::Devops => "devops",
            Category::Ipc => "ipc",
            Category::PlatformUx => "platform-ux",
            Category::Python => "python",
            Category::Js => "js",
            Category::Css => "css",
            Category::Cpp => "cpp",
            Category::Rust => "rust",
            Category::Kotlin => "kotlin",
        }
    }

    /// Names of every category, for error messages and schemas
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }

    /// Parse a user-supplied category name (case-insensitive)
    pub fn parse(value: &str) -> Result<Self, RulesError> {
        let needle = value.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| RulesError::InvalidCategory {
                value: value.to_string(),
                valid: Self::names(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Kind of link between two rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeKind {
    Requires,
    RequiredBy,
    Feeds,
    FedBy,
    Related,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 5] = [
        EdgeKind::Requires,
        EdgeKind::RequiredBy,
        EdgeKind::Feeds,
        EdgeKind::FedBy,
        EdgeKind::Related,
    ];

    /// The edge that must exist on the target for the graph to be symmetric
    pub fn inverse(&self) -> EdgeKind {
        match self {
            EdgeKind::Requires => EdgeKind::RequiredBy,
            EdgeKind::RequiredBy => EdgeKind::Requires,
            EdgeKind::Feeds => EdgeKind::FedBy,
            EdgeKind::FedBy => EdgeKind::Feeds,
            EdgeKind::Related => EdgeKind::Related,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::Requires => "Depends on (must read first)",
            EdgeKind::RequiredBy => "Depended on by",
            EdgeKind::Feeds => "Feeds into",
            EdgeKind::FedBy => "Fed by",
            EdgeKind::Related => "Related",
        }
    }
}

/// Links from one rule to others, keyed by relationship
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEdges {
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub required_by: Vec<String>,
    #[serde(default)]
    pub feeds: Vec<String>,
    #[serde(default)]
    pub fed_by: Vec<String>,
    #[serde(default)]
    pub related: Vec<String>,
}

impl RuleEdges {
    pub fn get(&self, kind: EdgeKind) -> &[String] {
        match kind {
            EdgeKind::Requires => &self.requires,
            EdgeKind::RequiredBy => &self.required_by,
            EdgeKind::Feeds => &self.feeds,
            EdgeKind::FedBy => &self.fed_by,
            EdgeKind::Related => &self.related,
        }
    }

    /// Add a target unless it is already present
    pub fn insert(&mut self, kind: EdgeKind, target: &str) {
        let list = match kind {
            EdgeKind::Requires => &mut self.requires,
            EdgeKind::RequiredBy => &mut self.required_by,
            EdgeKind::Feeds => &mut self.feeds,
            EdgeKind::FedBy => &mut self.fed_by,
            EdgeKind::Related => &mut self.related,
        };
        if !list.iter().any(|t| t == target) {
            list.push(target.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        EdgeKind::ALL.iter().all(|k| self.get(*k).is_empty())
    }
}

/// `RULE:` and `BANNED:` lines extracted from a rule body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    pub rules: Vec<String>,
    pub banned: Vec<String>,
}

impl Markers {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.banned.is_empty()
    }
}

/// A single markdown standards document with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Path relative to the rules root, `/`-separated
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub concepts: Vec<String>,
    pub keywords: Vec<String>,
    /// Ordering hint for learning paths (lower reads first)
    pub phase: u32,
    pub edges: RuleEdges,
    pub markers: Markers,
    /// Markdown after the front-matter
    pub body: String,
}

impl Rule {
    /// True when any tag or concept equals `topic` (case-insensitive)
    pub fn has_topic(&self, topic: &str) -> bool {
        let topic = topic.trim().to_lowercase();
        self.tags
            .iter()
            .chain(self.concepts.iter())
            .any(|t| t.to_lowercase() == topic)
    }

    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category,
            phase: self.phase,
            tags: self.tags.clone(),
        }
    }
}

/// Lightweight view of a rule used in listings and search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub phase: u32,
    pub tags: Vec<String>,
}

/// Metadata field that contributes to a search score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Tags,
    Concepts,
    Keywords,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Tags,
        SearchField::Concepts,
        SearchField::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Tags => "tags",
            SearchField::Concepts => "concepts",
            SearchField::Keywords => "keywords",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A search match; `score` is the number of fields in `matched`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub score: usize,
    pub matched: Vec<SearchField>,
    pub rule: RuleSummary,
}
