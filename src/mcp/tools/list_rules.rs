//! List rules tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::{available_categories, parse_category};
use crate::core::services::Services;
use crate::core::types::RuleSummary;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListRulesHandler {
    services: Arc<Services>,
}

impl ListRulesHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_listing(&self, summaries: &[RuleSummary]) -> String {
        if summaries.is_empty() {
            let available = available_categories(&self.services.store.categories());
            return format!("No rules found. Available categories: {available}");
        }

        let mut lines = Vec::new();
        let mut current = None;
        for summary in summaries {
            if current != Some(summary.category) {
                current = Some(summary.category);
                lines.push(format!("\n### {}", summary.category));
            }
            lines.push(format!("- {}: {}", summary.id, summary.title));
        }
        lines.join("\n")
    }
}

#[async_trait]
impl McpToolHandler for ListRulesHandler {
    fn name(&self) -> &str {
        "list_rules"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_rules".to_string(),
            description: "List available rule files grouped by category, optionally \
                         filtered to one category."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Optional category (python, js, css, cpp, rust, kotlin, \
                                        global, project-files, automation, devops, ipc, platform-ux)"
                    }
                }
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ListArgs {
            #[serde(default)]
            category: Option<String>,
        }

        let args: ListArgs = parse_args(args)?;
        let category = parse_category(args.category.as_deref())?;

        let summaries = self.services.store.list(category);
        Ok(text_content(self.format_listing(&summaries)))
    }
}
