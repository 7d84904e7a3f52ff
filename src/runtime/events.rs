//! Streamed session event types
//!
//! Events decoded from the runtime's response stream and consumed by the
//! output adapter (CLI + transcript). This is the only way the runtime
//! communicates back to this process.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events emitted by the runtime during a discussion session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A segment of generated text
    Text { text: String },
    /// The orchestrator invoked a tool (e.g. delegated to a sub-agent)
    ToolUse { name: String, input: Value },
    /// Stream finished
    Done,
}

impl SessionEvent {
    /// Decode one SSE data payload into an event.
    ///
    /// Unknown payloads decode to None rather than aborting the stream.
    pub fn decode(data: &str) -> Option<Self> {
        serde_json::from_str(data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_text() {
        let event = SessionEvent::decode(r#"{"type":"text","text":"hello"}"#).unwrap();
        assert!(matches!(event, SessionEvent::Text { text } if text == "hello"));
    }

    #[test]
    fn test_decode_tool_use() {
        let raw = r#"{"type":"tool_use","name":"Task","input":{"subagent_type":"warren_buffett"}}"#;
        let event = SessionEvent::decode(raw).unwrap();
        match event {
            SessionEvent::ToolUse { name, input } => {
                assert_eq!(name, "Task");
                assert_eq!(input["subagent_type"], json!("warren_buffett"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_decode_unknown_payload() {
        assert!(SessionEvent::decode(r#"{"type":"heartbeat"}"#).is_none());
        assert!(SessionEvent::decode("not json").is_none());
    }
}
