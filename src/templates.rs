//! Handlebars templates for the orchestrator and fallback guru prompts

use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;
use std::sync::{Arc, OnceLock};

const ORCHESTRATOR_PROMPT_TEMPLATE: &str = include_str!("templates/orchestrator_prompt.hbs");
const GENERIC_GURU_TEMPLATE: &str = include_str!("templates/generic_guru.hbs");

/// Holds the handlebars templates
pub struct Templates {
    handlebars: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Arc<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string("orchestrator_prompt.hbs", ORCHESTRATOR_PROMPT_TEMPLATE)
            .expect("Failed to register orchestrator prompt template");
        handlebars
            .register_template_string("generic_guru.hbs", GENERIC_GURU_TEMPLATE)
            .expect("Failed to register generic guru template");

        Arc::new(Self { handlebars })
    }

    /// Render a template by name with the given data
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render(template_name, data)?)
    }
}

/// Shared template instance, registered once at first use
pub fn global() -> &'static Arc<Templates> {
    static TEMPLATES: OnceLock<Arc<Templates>> = OnceLock::new();
    TEMPLATES.get_or_init(Templates::new)
}

/// Data for rendering the orchestrator system prompt
#[derive(Serialize, Clone, Debug)]
pub struct OrchestratorPromptData {
    pub gurus: Vec<String>,
}

/// Data for rendering the generic guru persona
#[derive(Serialize, Clone, Debug)]
pub struct GenericGuruData {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestrator_prompt_template() {
        let data = OrchestratorPromptData {
            gurus: vec!["warren_buffett".to_string(), "cathie_wood".to_string()],
        };
        let rendered = global().render("orchestrator_prompt.hbs", &data).unwrap();
        assert!(rendered.contains("Orchestrator"));
        assert!(rendered.contains("`warren_buffett`"));
        assert!(rendered.contains("`cathie_wood`"));
        assert!(rendered.contains("Task"));
    }

    #[test]
    fn test_generic_guru_template() {
        let data = GenericGuruData {
            name: "elon_musk".to_string(),
        };
        let rendered = global().render("generic_guru.hbs", &data).unwrap();
        assert!(rendered.contains("elon_musk"));
        assert!(rendered.contains("WebSearch"));
    }
}
