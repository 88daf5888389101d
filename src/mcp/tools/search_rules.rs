//! Search rules tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::parse_category;
use crate::core::services::Services;
use crate::core::types::SearchHit;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Tags shown per hit
const MAX_TAGS_SHOWN: usize = 5;

pub struct SearchRulesHandler {
    services: Arc<Services>,
}

impl SearchRulesHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_results(&self, hits: &[SearchHit]) -> String {
        if hits.is_empty() {
            return "No matching rules found.".to_string();
        }

        let mut lines = Vec::with_capacity(hits.len() * 3);
        for hit in hits {
            lines.push(format!("- **{}**: {}", hit.rule.id, hit.rule.title));
            if !hit.matched.is_empty() {
                let fields: Vec<&str> = hit.matched.iter().map(|f| f.as_str()).collect();
                lines.push(format!("  matched: {}", fields.join(", ")));
            }
            if !hit.rule.tags.is_empty() {
                let tags: Vec<&str> = hit
                    .rule
                    .tags
                    .iter()
                    .take(MAX_TAGS_SHOWN)
                    .map(String::as_str)
                    .collect();
                lines.push(format!("  tags: {}", tags.join(", ")));
            }
        }
        lines.join("\n")
    }
}

#[async_trait]
impl McpToolHandler for SearchRulesHandler {
    fn name(&self) -> &str {
        "search_rules"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_rules".to_string(),
            description: "Search rules by keyword. Matches title, tags, concepts and keywords \
                         (case-insensitive substring). Results are ranked by the number of \
                         matching fields, then by rule path. An empty query lists every rule."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search terms (e.g. \"ownership threading types\")"
                    },
                    "category": {
                        "type": "string",
                        "description": "Optional category filter (e.g. python, js, cpp, rust, global)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results (omit for all)",
                        "minimum": 1,
                        "maximum": self.services.config.search.max_limit
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SearchArgs {
            #[serde(alias = "keyword")]
            query: String,
            #[serde(default)]
            category: Option<String>,
            #[serde(default)]
            limit: Option<usize>,
        }

        let args: SearchArgs = parse_args(args)?;

        if args.limit == Some(0) {
            return Err(McpError::InvalidParams(
                "limit must be at least 1".to_string(),
            ));
        }

        let category = parse_category(args.category.as_deref())?;
        let hits = self.services.search.search(&args.query, category, args.limit);

        Ok(text_content(self.format_results(&hits)))
    }
}
