//! Help tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::available_categories;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

const TOOLS_TABLE: &str = "\
| Tool | Purpose | Example |
|------|---------|---------|
| `help()` | This overview | - |
| `search_rules(query)` | Find rules by keyword | `search_rules(\"testing\")` |
| `get_rule(file)` | Read full rule content | `get_rule(\"python/types.md\")` |
| `get_context(languages, topics)` | Rules for languages and topics | `get_context([\"python\"], [\"types\"])` |
| `get_learning_path(scope)` | Phased reading order | `get_learning_path(\"cpp\", phase=1)` |
| `list_rules(category)` | Browse available rules | `list_rules(\"rust\")` |
| `get_related(file)` | Follow edges to related rules | `get_related(\"python/types.md\")` |";

const QUICK_START: &str = "\
- **App architecture / folder layout**: `get_context([\"global\"])`
- **New project setup**: `get_context([\"global\", \"project-files\"])`
- **Learn a language's rules**: `get_learning_path(\"python\", phase=1)`
- **Search a topic**: `search_rules(\"error handling\")`
- **Browse everything**: `list_rules()`";

pub struct HelpHandler {
    services: Arc<Services>,
}

impl HelpHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_help(&self) -> String {
        let store = &self.services.store;
        let categories = store.categories();
        let (rule_markers, banned_markers) = store.marker_totals();
        let report = store.report();

        let mut output = String::from("# Rules MCP - coding standards lookup\n\n");
        output.push_str(&format!(
            "**{} rules** across **{} categories** ({} RULE markers, {} BANNED markers)\n\n",
            store.len(),
            categories.len(),
            rule_markers,
            banned_markers
        ));

        output.push_str("## Tools\n\n");
        output.push_str(TOOLS_TABLE);
        output.push_str("\n\n## Quick start\n\n");
        output.push_str(QUICK_START);

        output.push_str("\n\n## Categories\n\n");
        if categories.is_empty() {
            output.push_str("(none loaded)\n");
        } else {
            output.push_str(&available_categories(&categories));
            output.push('\n');
            for (category, count) in &categories {
                output.push_str(&format!("- {category}: {count}\n"));
            }
        }

        output.push_str("\n## Source\n\n");
        output.push_str(&format!("- **Rules dir:** {}\n", report.root.display()));
        output.push_str(&format!("- **Skipped files:** {}\n", report.failures.len()));
        output.push_str(&format!(
            "- **Loaded at:** {}\n",
            store.loaded_at().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output
    }
}

#[async_trait]
impl McpToolHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "help".to_string(),
            description: "Get started with the rules server. Shows rule counts, categories, \
                         the available tools and quick start examples."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        Ok(text_content(self.format_help()))
    }
}
