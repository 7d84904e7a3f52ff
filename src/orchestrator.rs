//! Orchestrator configuration builder
//!
//! Builds the options object handed to the hosted agent runtime: the
//! orchestrator's system prompt, its tool allow-list, a permission mode, and
//! the sub-agent registry mapping each guru identifier to its persona prompt
//! and tools. The runtime does the actual coordination; this module only
//! assembles configuration.

use crate::gurus;
use crate::templates::{self, OrchestratorPromptData};
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Registry entry for one guru sub-agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubagentDefinition {
    pub description: String,
    pub prompt: String,
    pub tools: Vec<String>,
}

/// Permission mode forwarded to the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PermissionMode {
    Default,
    #[default]
    AcceptEdits,
    BypassPermissions,
}

/// Options consumed by the hosted agent runtime.
///
/// Constructed once per run and read-only afterward. `agents` preserves
/// insertion order for display; correctness only requires unique keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelOptions {
    pub system_prompt: String,
    pub allowed_tools: Vec<String>,
    pub permission_mode: PermissionMode,
    pub agents: IndexMap<String, SubagentDefinition>,
}

/// Render the orchestrator's system prompt for the given participants
pub fn orchestrator_prompt(guru_names: &[String]) -> Result<String> {
    let data = OrchestratorPromptData {
        gurus: guru_names.to_vec(),
    };
    templates::global().render("orchestrator_prompt.hbs", &data)
}

/// Tools allowed for the orchestrator
pub fn orchestrator_tools() -> Vec<String> {
    ["Bash", "Read", "Write", "WebSearch", "Task"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Build panel options with the specified gurus registered as sub-agents.
///
/// Accepts ANY guru name and creates a definition for each, whether
/// predefined or dynamic. Duplicate identifiers keep the last definition.
pub fn create_panel_options(guru_names: &[String]) -> Result<PanelOptions> {
    let mut agents: IndexMap<String, SubagentDefinition> = IndexMap::new();

    for name in guru_names {
        let clean_name = name.trim();

        let definition = SubagentDefinition {
            description: format!("Investment Guru: {}", display_title(clean_name)),
            prompt: gurus::guru_prompt(clean_name),
            tools: gurus::guru_tools(clean_name),
        };

        if agents.insert(clean_name.to_string(), definition).is_some() {
            warn!(
                "duplicate guru identifier '{}', keeping the last definition",
                clean_name
            );
        }
    }

    Ok(PanelOptions {
        system_prompt: orchestrator_prompt(guru_names)?,
        allowed_tools: orchestrator_tools(),
        permission_mode: PermissionMode::AcceptEdits,
        agents,
    })
}

/// Title-case an identifier for display: `warren_buffett` -> `Warren Buffett`
fn display_title(name: &str) -> String {
    name.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestrator_prompt_lists_participants() {
        let gurus = vec!["warren_buffett".to_string(), "elon_musk".to_string()];
        let prompt = orchestrator_prompt(&gurus).unwrap();
        assert!(prompt.contains("Orchestrator"));
        for guru in &gurus {
            assert!(prompt.contains(guru.as_str()));
        }
        // Must mention the delegation capability
        assert!(prompt.contains("Task"));
    }

    #[test]
    fn test_orchestrator_tools() {
        let tools = orchestrator_tools();
        assert!(tools.contains(&"Task".to_string()));
        assert!(tools.contains(&"WebSearch".to_string()));
    }

    #[test]
    fn test_create_panel_options() {
        let gurus = vec!["warren_buffett".to_string(), "cathie_wood".to_string()];
        let options = create_panel_options(&gurus).unwrap();

        assert_eq!(options.permission_mode, PermissionMode::AcceptEdits);
        assert_eq!(options.agents.len(), 2);

        let buffett = &options.agents["warren_buffett"];
        assert!(!buffett.description.is_empty());
        assert!(!buffett.prompt.is_empty());
        assert!(!buffett.tools.is_empty());
        assert_eq!(buffett.description, "Investment Guru: Warren Buffett");

        let wood = &options.agents["cathie_wood"];
        assert!(wood.prompt.contains("Cathie Wood"));
    }

    #[test]
    fn test_create_panel_options_trims_names() {
        let gurus = vec![" warren_buffett ".to_string()];
        let options = create_panel_options(&gurus).unwrap();
        assert!(options.agents.contains_key("warren_buffett"));
    }

    #[test]
    fn test_duplicate_identifiers_keep_last() {
        let gurus = vec!["warren_buffett".to_string(), "warren_buffett".to_string()];
        let options = create_panel_options(&gurus).unwrap();
        assert_eq!(options.agents.len(), 1);
    }

    #[test]
    fn test_dynamic_guru_registered() {
        let gurus = vec!["elon_musk".to_string()];
        let options = create_panel_options(&gurus).unwrap();
        let entry = &options.agents["elon_musk"];
        assert_eq!(entry.description, "Investment Guru: Elon Musk");
        assert!(entry.prompt.contains("elon_musk"));
    }

    #[test]
    fn test_permission_mode_wire_format() {
        let encoded = serde_json::to_string(&PermissionMode::AcceptEdits).unwrap();
        assert_eq!(encoded, "\"acceptEdits\"");
    }

    #[test]
    fn test_agent_registry_preserves_insertion_order() {
        let gurus = vec![
            "ray_dalio".to_string(),
            "benjamin_graham".to_string(),
            "peter_lynch".to_string(),
        ];
        let options = create_panel_options(&gurus).unwrap();
        let keys: Vec<&String> = options.agents.keys().collect();
        assert_eq!(keys, vec!["ray_dalio", "benjamin_graham", "peter_lynch"]);
    }
}
