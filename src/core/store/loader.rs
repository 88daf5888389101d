//! Rule store: loads the rules tree once and keeps it immutable.

use super::frontmatter::parse_rule;
use super::walker::{rule_id, RuleWalker};
use crate::core::config::RulesConfig;
use crate::core::error::{LoadError, Result, RulesError};
use crate::core::types::{EdgeKind, Rule};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A file that was skipped during load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub id: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: LoadError,
}

/// Outcome of loading the rules tree
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub root: PathBuf,
    pub files_scanned: usize,
    pub rules_loaded: usize,
    pub failures: Vec<LoadFailure>,
    pub duration_ms: u64,
}

/// In-memory collection of every loaded rule, keyed by identifier
#[derive(Debug, Clone)]
pub struct RuleStore {
    pub(super) rules: BTreeMap<String, Rule>,
    report: LoadReport,
    loaded_at: DateTime<Utc>,
}

impl RuleStore {
    /// Load every rule file under `config.dir`
    ///
    /// Malformed files are logged and skipped. A missing root
    /// directory is the only error.
    pub fn load(config: &RulesConfig) -> Result<Self> {
        Self::load_from(&config.dir, config)
    }

    /// Load rules from an explicit root using `config` for filtering
    pub fn load_from(root: &Path, config: &RulesConfig) -> Result<Self> {
        if !root.is_dir() {
            return Err(RulesError::SourceMissing(root.to_path_buf()));
        }

        let start = Instant::now();
        let walker = RuleWalker::new(
            &config.include_patterns,
            &config.exclude_patterns,
            config.max_file_size_kb,
        )?;
        let files = walker.collect_files(root);
        tracing::debug!("Found {} candidate rule files under {:?}", files.len(), root);

        let mut parsed = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for path in &files {
            let Some(id) = rule_id(root, path) else {
                tracing::warn!("Skipping file with non UTF-8 path: {:?}", path);
                continue;
            };

            let result = fs::read_to_string(path)
                .map_err(|e| LoadError::Unreadable(e.to_string()))
                .and_then(|content| parse_rule(&id, &content));

            match result {
                Ok(rule) => parsed.push(rule),
                Err(error) => failures.push(LoadFailure { id, error }),
            }
        }

        let mut store = Self::assemble(parsed, failures);
        store.report.root = root.to_path_buf();
        store.report.files_scanned = files.len();
        store.report.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Loaded {} rules from {:?} in {}ms ({} skipped)",
            store.report.rules_loaded,
            root,
            store.report.duration_ms,
            store.report.failures.len()
        );
        if store.is_empty() {
            tracing::warn!("No rules found under {:?}", root);
        }

        Ok(store)
    }

    /// Build a store from already parsed rules
    ///
    /// Later duplicates of an identifier are reported as failures.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        let count = rules.len();
        let mut store = Self::assemble(rules, Vec::new());
        store.report.files_scanned = count;
        store
    }

    fn assemble(rules: Vec<Rule>, mut failures: Vec<LoadFailure>) -> Self {
        let mut map = BTreeMap::new();
        for rule in rules {
            if map.contains_key(&rule.id) {
                failures.push(LoadFailure {
                    id: rule.id.clone(),
                    error: LoadError::DuplicateId,
                });
                continue;
            }
            map.insert(rule.id.clone(), rule);
        }

        for failure in &failures {
            let err = RulesError::Load {
                id: failure.id.clone(),
                source: failure.error.clone(),
            };
            tracing::warn!("Skipping rule file: {}", err);
        }

        link_inverse_edges(&mut map);

        let report = LoadReport {
            rules_loaded: map.len(),
            failures,
            ..LoadReport::default()
        };

        Self {
            rules: map,
            report,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in identifier order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Make `requires`/`required_by`, `feeds`/`fed_by` and `related` symmetric
fn link_inverse_edges(rules: &mut BTreeMap<String, Rule>) {
    let mut pending = Vec::new();
    for rule in rules.values() {
        for kind in EdgeKind::ALL {
            for target in rule.edges.get(kind) {
                if target != &rule.id {
                    pending.push((target.clone(), kind.inverse(), rule.id.clone()));
                }
            }
        }
    }

    for (target, kind, source) in pending {
        if let Some(rule) = rules.get_mut(&target) {
            rule.edges.insert(kind, &source);
        }
    }
}

fn serialize_display<S>(error: &LoadError, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(error)
}
