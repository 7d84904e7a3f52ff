//! Market analysis tool - canned recommendations in a guru's style

use crate::gurus::GuruAgent;
use crate::tool::{Tool, ToolDefinition, ToolResult};
use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, JsonSchema)]
struct Args {
    /// Display name of the guru whose style to analyze with
    guru_name: String,
}

pub struct AnalyzeMarketTool;

impl AnalyzeMarketTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnalyzeMarketTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for AnalyzeMarketTool {
    fn name(&self) -> &str {
        "analyze_market"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "analyze_market".to_string(),
            description: "Generate investment recommendations based on a specific guru's style"
                .to_string(),
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
        let analysis = agent.analysis();

        match serde_json::to_string_pretty(&analysis) {
            Ok(text) => ToolResult::success(text),
            Err(e) => ToolResult::error(format!("Failed to serialize analysis: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_known_guru() {
        let tool = AnalyzeMarketTool::new();
        let result = tool.execute(json!({"guru_name": "워렌 버핏"})).await;
        assert!(!result.is_error);

        let parsed: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(parsed["guru"], "워렌 버핏");
        assert_eq!(parsed["top_picks"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_analyze_unknown_guru_returns_empty_picks() {
        let tool = AnalyzeMarketTool::new();
        let result = tool.execute(json!({"guru_name": "무명 투자자"})).await;
        assert!(!result.is_error);

        let parsed: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(parsed["guru"], "무명 투자자");
        assert!(parsed["top_picks"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let tool = AnalyzeMarketTool::new();
        let result = tool.execute(json!({"wrong": true})).await;
        assert!(result.is_error);
    }

    #[test]
    fn test_definition_has_schema() {
        let def = AnalyzeMarketTool::new().definition();
        assert_eq!(def.name, "analyze_market");
        assert!(def.parameters.to_string().contains("guru_name"));
    }
}
