//! Get rule tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetRuleHandler {
    services: Arc<Services>,
}

impl GetRuleHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GetRuleHandler {
    fn name(&self) -> &str {
        "get_rule"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_rule".to_string(),
            description: "Get the full markdown content of one rule file. \
                         Use the paths returned by search_rules or list_rules."
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
        struct GetRuleArgs {
            #[serde(alias = "id")]
            file: String,
        }

        let args: GetRuleArgs = parse_args(args)?;

        match self.services.store.get_rule(&args.file) {
            Ok(body) => Ok(text_content(body.to_string())),
            Err(e) if e.is_not_found() => Ok(text_content(e.message())),
            Err(e) => Err(e.into()),
        }
    }
}
