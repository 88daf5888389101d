//! Rule store integration tests

use crate::common::{test_config, RuleRepo};
use rules_mcp::core::error::{LoadError, RulesError};
use rules_mcp::core::store::RuleStore;
use rules_mcp::core::types::{Category, DEFAULT_PHASE};

fn load(repo: &RuleRepo) -> RuleStore {
    RuleStore::load(&test_config(repo).rules).unwrap()
}

#[test]
fn test_load_sample_corpus() {
    let repo = RuleRepo::sample();
    let store = load(&repo);

    assert_eq!(store.len(), 7);
    let report = store.report();
    assert_eq!(report.files_scanned, 7);
    assert_eq!(report.rules_loaded, 7);
    assert!(report.failures.is_empty());
    assert_eq!(report.root, repo.path());
}

#[test]
fn test_malformed_files_are_skipped_and_reported() {
    let repo = RuleRepo::with_malformed();
    let store = load(&repo);

    assert_eq!(store.len(), 7);
    let report = store.report();
    assert_eq!(report.files_scanned, 11);
    assert_eq!(report.failures.len(), 4);

    let error_for = |id: &str| {
        report
            .failures
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.error.clone())
            .unwrap_or_else(|| panic!("no failure recorded for {id}"))
    };
    assert_eq!(error_for("README.md"), LoadError::MissingFrontMatter);
    assert_eq!(error_for("css/unterminated.md"), LoadError::UnclosedFrontMatter);
    assert_eq!(
        error_for("kotlin/unknown.md"),
        LoadError::UnknownCategory("cobol".to_string())
    );
    assert!(matches!(error_for("js/broken.md"), LoadError::InvalidYaml(_)));
}

#[test]
fn test_missing_root_is_fatal() {
    let repo = RuleRepo::sample();
    let mut config = test_config(&repo);
    config.rules.dir = repo.path().join("does-not-exist");

    let err = RuleStore::load(&config.rules).unwrap_err();
    assert!(matches!(err, RulesError::SourceMissing(_)));
    assert!(err.is_fatal());
}

#[test]
fn test_root_that_is_a_file_is_fatal() {
    let repo = RuleRepo::sample();
    let file = repo.path().join("python/naming.md");
    let config = test_config(&repo);

    let err = RuleStore::load_from(&file, &config.rules).unwrap_err();
    assert!(matches!(err, RulesError::SourceMissing(_)));
}

#[test]
fn test_every_listed_id_resolves() {
    let repo = RuleRepo::with_malformed();
    let store = load(&repo);

    for summary in store.list(None) {
        let body = store.get_rule(&summary.id).unwrap();
        assert!(!body.is_empty(), "{} has an empty body", summary.id);
    }
}

#[test]
fn test_title_falls_back_to_heading_and_phase_defaults() {
    let repo = RuleRepo::sample();
    let store = load(&repo);

    let rule = store.get("rust/errors.md").unwrap();
    assert_eq!(rule.title, "Error Handling");
    assert_eq!(rule.phase, DEFAULT_PHASE);
    assert!(rule.body.starts_with("# Error Handling"));
}

#[test]
fn test_list_cpp_only_sorted() {
    let repo = RuleRepo::sample();
    let store = load(&repo);

    let ids: Vec<String> = store
        .list(Some(Category::Cpp))
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["cpp/naming.md", "cpp/raii.md"]);
}

#[test]
fn test_learning_path_phase_is_monotonic() {
    let repo = RuleRepo::generated(60);
    let store = load(&repo);

    for category in [Category::Python, Category::Js, Category::Rust] {
        let path = store.learning_path(category, None).unwrap();
        assert_eq!(path.len(), 10);
        assert!(path.windows(2).all(|w| w[0].phase <= w[1].phase));
        assert!(path
            .windows(2)
            .all(|w| w[0].phase < w[1].phase || w[0].id < w[1].id));
    }
}

#[test]
fn test_context_is_union_of_single_pairs() {
    let repo = RuleRepo::sample();
    let store = load(&repo);

    let languages = [Category::Python, Category::Cpp, Category::Global];
    let topics = vec!["naming".to_string(), "style".to_string(), "memory".to_string()];
    let combined: Vec<String> = store
        .context(&languages, &topics)
        .unwrap()
        .into_iter()
        .map(|r| r.id.clone())
        .collect();

    let mut singles = Vec::new();
    for language in languages {
        for topic in &topics {
            for rule in store.context(&[language], std::slice::from_ref(topic)).unwrap() {
                singles.push(rule.id.clone());
            }
        }
    }

    assert!(!combined.is_empty());
    for id in &combined {
        assert!(singles.contains(id), "{id} not produced by any single pair");
    }
    let mut deduped = combined.clone();
    deduped.dedup();
    assert_eq!(deduped, combined, "context returned a rule twice");
}

#[test]
fn test_edges_are_symmetric_after_load() {
    let repo = RuleRepo::sample();
    let store = load(&repo);

    let principles = store.get("global/principles.md").unwrap();
    assert_eq!(principles.edges.required_by, vec!["python/types.md"]);

    let types = store.get("python/types.md").unwrap();
    assert_eq!(types.edges.fed_by, vec!["global/principles.md"]);

    let naming = store.get("python/naming.md").unwrap();
    assert_eq!(naming.edges.related, vec!["python/types.md"]);
}

#[test]
fn test_exclude_patterns_respected() {
    let repo = RuleRepo::sample();
    repo.write(
        "node_modules/pkg/rule.md",
        "---\ntitle: Vendored\ncategory: js\n---\n# Vendored\n",
    );
    let store = load(&repo);

    assert!(store.get("node_modules/pkg/rule.md").is_err());
    assert_eq!(store.len(), 7);
}
