// Test helper functions

use super::fixtures::RuleRepo;
use rules_mcp::core::config::Config;
use rules_mcp::core::services::Services;
use rules_mcp::mcp::handlers::ProtocolHandlers;
use rules_mcp::mcp::protocol::{JsonRpcRequest, JsonRpcResponse};
use serde_json::{json, Value};
use std::sync::Arc;

/// Config pointing at a fixture rules directory
#[allow(dead_code)] // Used in integration tests
pub fn test_config(repo: &RuleRepo) -> Config {
    let mut config = Config::default();
    config.rules.dir = repo.path().to_path_buf();
    config
}

/// Load services over a fixture rules directory
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(repo: &RuleRepo) -> Arc<Services> {
    Arc::new(Services::new(test_config(repo)).expect("Failed to load rules"))
}

/// Protocol handlers over a fixture rules directory
#[allow(dead_code)] // Used in integration tests
pub fn create_test_handlers(repo: &RuleRepo) -> ProtocolHandlers {
    ProtocolHandlers::new(create_test_services(repo))
}

/// Build a tools/call request
#[allow(dead_code)] // Used in integration tests
pub fn tool_call_request(id: i64, name: &str, arguments: Value) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(id)),
        method: "tools/call".to_string(),
        params: Some(json!({ "name": name, "arguments": arguments })),
    }
}

/// Call a tool and return the full response
#[allow(dead_code)] // Used in integration tests
pub async fn call_tool(handlers: &ProtocolHandlers, name: &str, arguments: Value) -> JsonRpcResponse {
    handlers
        .handle_tools_call(tool_call_request(1, name, arguments))
        .await
        .expect("tools/call should always produce a response")
}

/// Text of the first content block of a successful tool response
#[allow(dead_code)] // Used in integration tests
pub fn response_text(response: &JsonRpcResponse) -> String {
    assert!(
        response.error.is_none(),
        "Expected success, got error: {:?}",
        response.error
    );
    let result = response.result.as_ref().expect("missing result");
    assert_eq!(result["content"][0]["type"], "text");
    result["content"][0]["text"]
        .as_str()
        .expect("missing text")
        .to_string()
}
