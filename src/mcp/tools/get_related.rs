//! Get related tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::services::Services;
use crate::core::store::RelatedGroup;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetRelatedHandler {
    services: Arc<Services>,
}

impl GetRelatedHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_edges(&self, id: &str, groups: &[RelatedGroup]) -> String {
        let mut lines = vec![format!("# Edges for {id}\n")];
        for group in groups {
            lines.push(format!("## {}", group.kind.label()));
            for target in &group.targets {
                let title = target.title.as_deref().unwrap_or("(not found)");
                lines.push(format!("- {}: {}", target.id, title));
            }
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

#[async_trait]
impl McpToolHandler for GetRelatedHandler {
    fn name(&self) -> &str {
        "get_related"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_related".to_string(),
            description: "Follow the links of one rule: what it depends on, what depends on \
                         it, what it feeds into, what feeds it and loosely related rules."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "file": {
                        "type": "string",
                        "description": "Rule path relative to the rules root (e.g. \"python/types.md\")"
                    }
                },
                "required": ["file"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct RelatedArgs {
            #[serde(alias = "id")]
            file: String,
        }

        let args: RelatedArgs = parse_args(args)?;

        let groups = match self.services.store.related(&args.file) {
            Ok(groups) => groups,
            Err(e) if e.is_not_found() => return Ok(text_content(e.message())),
            Err(e) => return Err(e.into()),
        };

        if groups.is_empty() {
            return Ok(text_content(format!("No edges found for {}", args.file)));
        }

        Ok(text_content(self.format_edges(&args.file, &groups)))
    }
}
