//! MCP-specific error types

use crate::mcp::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, PARSE_ERROR, RULE_NOT_FOUND,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC code and message for an error response
    pub fn code_and_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

impl From<crate::core::error::RulesError> for McpError {
    fn from(err: crate::core::error::RulesError) -> Self {
        use crate::core::error::RulesError;
        match err {
            RulesError::RuleNotFound(_) | RulesError::EmptyScope(_) => {
                McpError::ToolError(RULE_NOT_FOUND, err.to_string())
            }
            RulesError::InvalidCategory { .. } | RulesError::InvalidArgument(_) => {
                McpError::InvalidParams(err.to_string())
            }
            RulesError::ConfigError(s) => {
                McpError::InvalidParams(format!("Configuration error: {s}"))
            }
            RulesError::Load { .. } | RulesError::SourceMissing(_) => {
                McpError::InternalError(err.to_string())
            }
            RulesError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            RulesError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            RulesError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
