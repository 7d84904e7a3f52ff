//! Guru Panel - a multi-agent investment discussion CLI
//!
//! This crate provides:
//! - Persona prompts and tool allow-lists for a panel of investment gurus
//! - An orchestrator configuration builder (sub-agent registry) consumed by
//!   the hosted agent runtime that executes the actual discussion
//! - A streaming session client and a markdown transcript writer

pub mod orchestrator;
pub mod templates;
pub mod transcript;

// Guru system
pub mod gurus;
pub mod runtime;
pub mod tool;
pub mod tools;

pub use gurus::{guru_prompt, guru_tools, GuruAgent, GuruProfile, Recommendation, AVAILABLE_GURUS};
pub use orchestrator::{
    create_panel_options, orchestrator_prompt, orchestrator_tools, PanelOptions, PermissionMode,
    SubagentDefinition,
};
pub use runtime::{RuntimeClient, RuntimeConfig, RuntimeError, SessionEvent};
pub use tool::{Tool, ToolDefinition, ToolRegistry, ToolResult};
pub use transcript::Transcript;
