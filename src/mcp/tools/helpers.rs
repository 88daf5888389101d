//! Helper functions for MCP tools

use crate::core::types::{Category, Rule};
use crate::mcp::error::McpError;

/// Parse an optional category argument; blank counts as absent
pub fn parse_category(value: Option<&str>) -> Result<Option<Category>, McpError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(name) => Ok(Some(Category::parse(name)?)),
        None => Ok(None),
    }
}

/// Parse a list of category names, dropping duplicates
pub fn parse_categories(values: &[String]) -> Result<Vec<Category>, McpError> {
    let mut categories = Vec::with_capacity(values.len());
    for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        let category = Category::parse(value)?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(categories)
}

/// `" [RULES: n, BANNED: m]"`, or empty when the rule has no markers
pub fn marker_counts(rule: &Rule) -> String {
    let mut parts = Vec::new();
    if !rule.markers.rules.is_empty() {
        parts.push(format!("RULES: {}", rule.markers.rules.len()));
    }
    if !rule.markers.banned.is_empty() {
        parts.push(format!("BANNED: {}", rule.markers.banned.len()));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" [{}]", parts.join(", "))
    }
}

/// Comma-separated category names that have at least one loaded rule
pub fn available_categories(categories: &[(Category, usize)]) -> String {
    categories
        .iter()
        .map(|(c, _)| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
