// Test fixtures for integration testing

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Well-formed rule files used by most integration tests
#[allow(dead_code)] // Used in integration tests
pub const SAMPLE_RULES: &[(&str, &str)] = &[
    (
        "global/principles.md",
        r#"---
title: Engineering Principles
category: global
tags: [architecture, style]
concepts: [layering]
phase: 0
edges:
  feeds: [python/types.md]
---
# Engineering Principles

RULE: Keep modules small and focused.
"#,
    ),
    (
        "python/naming.md",
        r#"---
title: Naming
category: python
tags: [naming, style]
concepts: [identifiers]
keywords: [snake_case, pep8]
phase: 1
---
# Naming

RULE: Use snake_case for functions and variables.
- **BANNED:** Hungarian notation
"#,
    ),
    (
        "python/types.md",
        r#"---
title: Type Hints
category: python
tags: [types]
concepts: [typing]
keywords: [mypy]
phase: 1
edges:
  requires: [global/principles.md]
  related: [python/naming.md]
---
# Type Hints

RULE: Annotate every public function.
"#,
    ),
    (
        "python/testing.md",
        r#"---
title: Testing
category: python
tags: [testing]
keywords: [pytest]
phase: 2
---
# Testing

BANNED: Tests that depend on execution order
"#,
    ),
    (
        "cpp/raii.md",
        r#"---
title: RAII and Ownership
category: cpp
tags: [memory]
concepts: [ownership]
phase: 2
---
# RAII and Ownership
"#,
    ),
    (
        "cpp/naming.md",
        r#"---
title: C++ Naming
category: cpp
tags: [naming]
phase: 1
---
# C++ Naming
"#,
    ),
    (
        "rust/errors.md",
        r#"---
category: rust
tags: [errors]
keywords: [thiserror, anyhow]
---

# Error Handling

Use `?` for propagation.
"#,
    ),
];

/// Temporary rules directory fixture
#[allow(dead_code)] // Used in integration tests
pub struct RuleRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl RuleRepo {
    /// The well-formed sample corpus (7 rules, 4 categories)
    #[allow(dead_code)] // Used in integration tests
    pub fn sample() -> Self {
        Self::with_files(SAMPLE_RULES)
    }

    /// Sample corpus plus files that fail to parse
    #[allow(dead_code)] // Used in integration tests
    pub fn with_malformed() -> Self {
        let repo = Self::sample();
        repo.write("README.md", "# Rules repository\n");
        repo.write("js/broken.md", "---\ntitle: Broken\ncategory: js\ntags: [unclosed\n---\n");
        repo.write("kotlin/unknown.md", "---\ntitle: X\ncategory: cobol\n---\n# X\n");
        repo.write("css/unterminated.md", "---\ntitle: Layout\ncategory: css\n");
        repo
    }

    /// A synthetic corpus of `count` rules spread across categories
    #[allow(dead_code)] // Used in integration tests
    pub fn generated(count: usize) -> Self {
        const CATEGORIES: [&str; 6] = ["python", "js", "css", "cpp", "rust", "kotlin"];
        let files: Vec<(String, String)> = (0..count)
            .map(|i| {
                let category = CATEGORIES[i % CATEGORIES.len()];
                let id = format!("{category}/rule_{i:04}.md");
                let content = format!(
                    "---\ntitle: Rule {i}\ncategory: {category}\ntags: [topic{t}, shared]\n\
                     keywords: [kw{i}]\nphase: {p}\n---\n# Rule {i}\n\nRULE: Do thing {i}.\n",
                    t = i % 10,
                    p = i % 5
                );
                (id, content)
            })
            .collect();
        let refs: Vec<(&str, &str)> = files
            .iter()
            .map(|(id, content)| (id.as_str(), content.as_str()))
            .collect();
        Self::with_files(&refs)
    }

    /// Create a rules directory with custom files
    #[allow(dead_code)] // Used in integration tests
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut repo = Self {
            dir,
            files: Vec::new(),
        };
        for (path, content) in files {
            let full = repo.write(path, content);
            repo.files.push(full);
        }
        repo
    }

    /// Write one file below the root, creating parent directories
    #[allow(dead_code)] // Used in integration tests
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write rule file");
        path
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
