//! Discussion transcript
//!
//! Append-only markdown log of one discussion: a header (topic, date,
//! participants), then streamed text and tool-usage annotations in emission
//! order. Saved to a timestamped file when the session completes.

use chrono::Local;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};

pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new(topic: &str, participants: &[String]) -> Self {
        let mut lines = Vec::new();
        lines.push(format!("# Investment Guru Discussion: {}\n", topic));
        lines.push(format!(
            "**Date:** {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        lines.push(format!(
            "**Participants:** {}\n\n",
            participants.join(", ")
        ));
        lines.push("---\n\n".to_string());
        Self { lines }
    }

    /// Append a streamed text segment
    pub fn push_text(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    /// Append a tool-usage annotation and return it for live display
    pub fn push_tool_use(&mut self, name: &str, input: &Value) -> String {
        let annotation = tool_annotation(name, input);
        self.lines.push(annotation.clone());
        annotation
    }

    pub fn contents(&self) -> String {
        self.lines.concat()
    }

    /// Write the transcript to a timestamped markdown file in `dir`
    pub fn save(&self, dir: &Path) -> io::Result<PathBuf> {
        let filename = format!(
            "discussion_result_{}.md",
            Local::now().format("%Y%m%d_%H%M%S")
        );
        let path = dir.join(filename);
        std::fs::write(&path, self.contents())?;
        Ok(path)
    }
}

/// Markdown annotation for a tool invocation.
///
/// Sub-agent delegation and web search get dedicated phrasing; every other
/// tool gets a generic line. Only the declared tool name is interpreted,
/// never the result.
pub fn tool_annotation(name: &str, input: &Value) -> String {
    match name {
        "Task" => {
            let subagent = input
                .get("subagent_type")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown Agent");
            format!(
                "\n\n> 🎤 **[Social] Passing the microphone to:** `{}`...\n\n",
                subagent
            )
        }
        "WebSearch" => {
            let query = input
                .get("query")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown Query");
            format!(
                "\n\n> 🔍 **[System] Searching the web for:** `'{}'`...\n\n",
                query
            )
        }
        _ => format!("\n\n> 🛠️ **[System] Using tool:** `{}`\n\n", name),
    }
}

/// Strip markdown decoration from an annotation for console display
pub fn console_line(annotation: &str) -> String {
    annotation
        .replace('>', "")
        .replace('*', "")
        .replace('`', "")
        .trim()
        .to_string()
}
