//! Strict parsing of rule files: YAML front-matter plus markdown body.
//!
//! Every file either becomes a complete `Rule` or a `LoadError`
//! naming what is wrong. Nothing is coerced: a `phase` written as a
//! string or a category outside the fixed set is rejected.

use crate::core::error::LoadError;
use crate::core::types::{Category, Markers, Rule, RuleEdges, DEFAULT_PHASE};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:[-*+]\s+)?(?:\*\*)?(RULE|BANNED):(?:\*\*)?[ \t]*(\S.*?)\s*$").unwrap()
});

static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*\r?$").unwrap());

/// Raw front-matter as written in the file
#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    title: Option<String>,
    subtitle: Option<String>,
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    concepts: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    phase: Option<u32>,
    #[serde(default)]
    edges: RuleEdges,
}

/// Split a document into its YAML front-matter and markdown body
///
/// The opening `---` must be the first line. The closing `---` must
/// start at column 0, so indented `---` inside YAML block scalars
/// does not end the front-matter.
pub fn split_front_matter(content: &str) -> Result<(&str, &str), LoadError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().ok_or(LoadError::MissingFrontMatter)?;
    if first.trim() != "---" {
        return Err(LoadError::MissingFrontMatter);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == "---" {
            let yaml = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }

    Err(LoadError::UnclosedFrontMatter)
}

/// Parse one rule file into a `Rule`
///
/// `id` is the path of the file relative to the rules root.
pub fn parse_rule(id: &str, content: &str) -> Result<Rule, LoadError> {
    let (yaml, body) = split_front_matter(content)?;

    let front: FrontMatter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| LoadError::InvalidYaml(e.to_string()))?
    };

    let category_name = front
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(LoadError::MissingField("category"))?;
    let category = Category::parse(category_name)
        .map_err(|_| LoadError::UnknownCategory(category_name.to_string()))?;

    let title = front
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| first_heading(body))
        .ok_or(LoadError::MissingField("title"))?;

    Ok(Rule {
        id: id.to_string(),
        title,
        subtitle: front
            .subtitle
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        category,
        tags: clean_list(front.tags),
        concepts: clean_list(front.concepts),
        keywords: clean_list(front.keywords),
        phase: front.phase.unwrap_or(DEFAULT_PHASE),
        edges: front.edges,
        markers: extract_markers(body),
        body: body.trim_start_matches(['\r', '\n']).to_string(),
    })
}

/// Collect `RULE:` and `BANNED:` lines from a markdown body
pub fn extract_markers(body: &str) -> Markers {
    let mut markers = Markers::default();
    for caps in MARKER_PATTERN.captures_iter(body) {
        let text = caps[2].trim_end_matches("**").trim().to_string();
        if text.is_empty() {
            continue;
        }
        match &caps[1] {
            "RULE" => markers.rules.push(text),
            _ => markers.banned.push(text),
        }
    }
    markers
}

fn first_heading(body: &str) -> Option<String> {
    HEADING_PATTERN
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Trim entries, drop blanks and duplicates, keep first-seen order
fn clean_list(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if value.is_empty() || out.iter().any(|v| v.eq_ignore_ascii_case(value)) {
            continue;
        }
        out.push(value.to_string());
    }
    out
}
