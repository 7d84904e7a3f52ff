//! Runtime endpoint configuration

use serde::{Deserialize, Serialize};

/// Configuration for the hosted agent runtime endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Display name for the runtime
    pub name: String,
    /// API base URL
    pub base_url: String,
    /// Environment variable name for the API key
    pub api_key_env: String,
}

impl RuntimeConfig {
    /// Create the default Anthropic-hosted runtime config
    pub fn anthropic() -> Self {
        Self {
            name: "Anthropic".to_string(),
            base_url: "https://api.anthropic.com/v1".to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
        }
    }

    /// Create a custom runtime config (e.g., a local gateway)
    pub fn custom(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key_env: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            api_key_env: api_key_env.into(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::anthropic()
    }
}
