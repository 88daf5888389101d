//! MCP handler unit tests

#[cfg(test)]
mod tests {
    use crate::common::{call_tool, create_test_handlers, response_text, RuleRepo};
    use rules_mcp::mcp::process_message;
    use rules_mcp::mcp::protocol::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_initialize_handler() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {"name": "test", "version": "1.0"}
            })),
        };

        let response = handlers.handle_initialize(request).await.unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "rules-mcp");
        assert_eq!(result["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_initialize_without_params() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: None,
        };

        let response = handlers.handle_initialize(request).await.unwrap();
        assert!(response.result.is_some());
    }

    #[tokio::test]
    async fn test_initialize_invalid_params_keeps_request_id() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let line = r#"{"jsonrpc":"2.0","id":42,"method":"initialize","params":{"protocolVersion":7}}"#;
        let response = process_message(&handlers, line).await.unwrap();

        assert_eq!(response.id, Some(json!(42)));
        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tool_call_without_id_is_not_answered() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let line = r#"{"jsonrpc":"2.0","method":"tools/call","params":{"name":"help"}}"#;
        let response = process_message(&handlers, line).await.unwrap();

        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_initialized_notification_has_no_reply() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);
        assert!(!handlers.is_initialized());

        for method in ["initialized", "notifications/initialized"] {
            let line = json!({"jsonrpc": "2.0", "method": method}).to_string();
            let response = process_message(&handlers, &line).await.unwrap();

            assert!(response.id.is_none());
            assert!(response.result.is_none());
            assert!(response.error.is_none());
        }
        assert!(handlers.is_initialized());
    }

    #[tokio::test]
    async fn test_tools_list_has_all_tools() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(2)),
            method: "tools/list".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_list(request).await.unwrap();
        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();

        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "get_context",
                "get_learning_path",
                "get_related",
                "get_rule",
                "help",
                "list_rules",
                "search_rules",
            ]
        );
        for tool in tools {
            assert_eq!(tool["inputSchema"]["type"], "object");
            assert!(!tool["description"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(3)),
            method: "tools/call".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_call(request).await.unwrap();

        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("Missing params"));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let response = call_tool(&handlers, "delete_rule", json!({})).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("delete_rule"));
    }

    #[tokio::test]
    async fn test_tools_call_invalid_category_is_invalid_params() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let response = call_tool(&handlers, "list_rules", json!({"category": "cobol"})).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("cobol"));
        assert!(error.message.contains("platform-ux"));
    }

    #[tokio::test]
    async fn test_tools_call_wrong_argument_type() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let response = call_tool(&handlers, "get_rule", json!({"file": 42})).await;
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_preserves_request_id() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let line = json!({
            "jsonrpc": "2.0",
            "id": "req-7",
            "method": "tools/call",
            "params": {"name": "get_rule", "arguments": {"file": "python/naming.md"}}
        })
        .to_string();

        let response = process_message(&handlers, &line).await.unwrap();
        assert_eq!(response.id, Some(json!("req-7")));
        assert!(response_text(&response).starts_with("# Naming"));
    }

    #[tokio::test]
    async fn test_ping_handler() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let line = r#"{"jsonrpc":"2.0","id":6,"method":"ping"}"#;
        let response = process_message(&handlers, line).await.unwrap();

        assert!(response.error.is_none());
        assert_eq!(response.result, Some(json!({})));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let line = r#"{"jsonrpc":"2.0","id":8,"method":"prompts/list"}"#;
        let response = process_message(&handlers, line).await.unwrap();
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let repo = RuleRepo::sample();
        let handlers = create_test_handlers(&repo);

        let err = process_message(&handlers, "{\"jsonrpc\": ").await.unwrap_err();
        assert_eq!(err.code_and_message().0, PARSE_ERROR);
    }
}
