//! Get context tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::parse_categories;
use crate::core::services::Services;
use crate::core::types::Rule;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const NO_MATCH: &str = "No rules found for the given languages/topics.";

pub struct GetContextHandler {
    services: Arc<Services>,
}

impl GetContextHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// One section per rule: header, marker summaries, body, separator
    fn format_context(&self, rules: &[&Rule]) -> String {
        let mut sections: Vec<String> = Vec::with_capacity(rules.len() * 4);
        for rule in rules {
            sections.push(format!("## {}", rule.id));
            if !rule.markers.rules.is_empty() {
                sections.push(format!("**RULES:** {}", rule.markers.rules.join(" | ")));
            }
            if !rule.markers.banned.is_empty() {
                sections.push(format!("**BANNED:** {}", rule.markers.banned.join(" | ")));
            }
            sections.push(rule.body.trim_end().to_string());
            sections.push("---".to_string());
        }
        sections.join("\n\n")
    }
}

#[async_trait]
impl McpToolHandler for GetContextHandler {
    fn name(&self) -> &str {
        "get_context"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_context".to_string(),
            description: "Get the combined content of every rule in the given language \
                         categories that also covers one of the given topics (tag or concept). \
                         Omit topics to get all rules for the languages; omit languages to get \
                         a topic across all categories. Ordered by category, phase, then path."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "languages": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Language categories (e.g. [\"python\", \"js\"])"
                    },
                    "topics": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Topic tags or concepts (e.g. [\"types\", \"testing\"])"
                    }
                }
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ContextArgs {
            #[serde(default)]
            languages: Vec<String>,
            #[serde(default)]
            topics: Vec<String>,
        }

        let args: ContextArgs = parse_args(args)?;
        let languages = parse_categories(&args.languages)?;

        let rules = self.services.store.context(&languages, &args.topics)?;
        if rules.is_empty() {
            return Ok(text_content(NO_MATCH.to_string()));
        }

        tracing::debug!("get_context matched {} rules", rules.len());
        Ok(text_content(self.format_context(&rules)))
    }
}
