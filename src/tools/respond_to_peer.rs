//! Peer response tool - acknowledge another guru's analysis

use crate::gurus::GuruAgent;
use crate::tool::{Tool, ToolDefinition, ToolResult};
use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, JsonSchema)]
struct Args {
    /// Display name of the responding guru
    guru_name: String,
    /// Display name of the guru being responded to
    peer_name: String,
    /// The peer's analysis payload
    peer_analysis: serde_json::Value,
}

pub struct RespondToPeerTool;

impl RespondToPeerTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RespondToPeerTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for RespondToPeerTool {
    fn name(&self) -> &str {
        "respond_to_peer"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "respond_to_peer".to_string(),
            description: "Respond to another guru's analysis".to_string(),
            parameters: serde_json::to_value(schema_for!(Args))
                .unwrap_or_else(|_| json!({"type": "object"})),
        }
    }

    async fn execute(&self, args: serde_json::Value) -> ToolResult {
        let args: Args = match serde_json::from_value(args) {
            Ok(a) => a,
            Err(e) => return ToolResult::error(format!("Invalid arguments: {}", e)),
        };

        let agent = GuruAgent::for_display_name(&args.guru_name);
        let response = agent.respond_to_peer(&args.peer_name, &args.peer_analysis);

        match serde_json::to_string_pretty(&response) {
            Ok(text) => ToolResult::success(text),
            Err(e) => ToolResult::error(format!("Failed to serialize response: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_respond_to_peer() {
        let tool = RespondToPeerTool::new();
        let result = tool
            .execute(json!({
                "guru_name": "캐시 우드",
                "peer_name": "워렌 버핏",
                "peer_analysis": {"top_picks": []},
            }))
            .await;
        assert!(!result.is_error);

        let parsed: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(parsed["responding_guru"], "캐시 우드");
        assert_eq!(parsed["target_guru"], "워렌 버핏");
        assert!(parsed["agreement_points"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_peer_analysis_is_error() {
        let tool = RespondToPeerTool::new();
        let result = tool
            .execute(json!({"guru_name": "캐시 우드", "peer_name": "워렌 버핏"}))
            .await;
        assert!(result.is_error);
    }
}
