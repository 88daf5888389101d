//! MCP tool implementations
//!
//! This module contains the MCP tool handlers that expose the rule
//! store and search service to MCP clients.

pub mod get_context;
pub mod get_learning_path;
pub mod get_related;
pub mod get_rule;
pub mod handler;
pub mod help;
pub mod helpers;
pub mod list_rules;
pub mod registry;
pub mod search_rules;

pub use get_context::GetContextHandler;
pub use get_learning_path::GetLearningPathHandler;
pub use get_related::GetRelatedHandler;
pub use get_rule::GetRuleHandler;
pub use handler::{parse_args, text_content, McpToolHandler};
pub use help::HelpHandler;
pub use helpers::{marker_counts, parse_categories, parse_category};
pub use list_rules::ListRulesHandler;
pub use registry::ToolRegistry;
pub use search_rules::SearchRulesHandler;
