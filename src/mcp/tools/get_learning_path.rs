//! Get learning path tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::marker_counts;
use crate::core::services::Services;
use crate::core::types::{Category, Rule};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetLearningPathHandler {
    services: Arc<Services>,
}

impl GetLearningPathHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// Rules are already sorted by phase; each run of equal phase is a group
    fn format_path(&self, scope: Category, rules: &[&Rule]) -> String {
        let mut groups: Vec<(u32, Vec<&Rule>)> = Vec::new();
        for rule in rules {
            match groups.last_mut() {
                Some((phase, members)) if *phase == rule.phase => members.push(rule),
                _ => groups.push((rule.phase, vec![rule])),
            }
        }

        let mut lines = vec![format!(
            "# Learning Path: {} - {} rules in {} phases\n",
            scope,
            rules.len(),
            groups.len()
        )];

        for (phase, members) in &groups {
            lines.push(format!("## Phase {}: {} rules", phase, members.len()));
            for rule in members {
                lines.push(format!("- {}: {}{}", rule.id, rule.title, marker_counts(rule)));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

#[async_trait]
impl McpToolHandler for GetLearningPathHandler {
    fn name(&self) -> &str {
        "get_learning_path"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_learning_path".to_string(),
            description: "Get the rules of one category in reading order: foundational \
                         phases first, dependent rules later. Pass phase to get only that \
                         stage and avoid loading every rule at once."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "scope": {
                        "type": "string",
                        "description": "Category (e.g. \"python\", \"cpp\", \"global\")"
                    },
                    "phase": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Optional phase number; omit for the full path"
                    }
                },
                "required": ["scope"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct PathArgs {
            #[serde(alias = "language", alias = "category")]
            scope: String,
            #[serde(default)]
            phase: Option<u32>,
        }

        let args: PathArgs = parse_args(args)?;
        let scope = Category::parse(&args.scope)?;

        match self.services.store.learning_path(scope, args.phase) {
            Ok(rules) => Ok(text_content(self.format_path(scope, &rules))),
            Err(e) if e.is_not_found() => Ok(text_content(e.message())),
            Err(e) => Err(e.into()),
        }
    }
}
