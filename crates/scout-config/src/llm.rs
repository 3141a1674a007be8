//! Language-model endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible endpoint.
fn default_base_url() -> String {
    String::from("https://openrouter.ai/api/v1")
}

fn default_model() -> String {
    String::from("mistralai/mistral-7b-instruct:free")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Bearer token for the chat-completions endpoint.
    /// Also read from the plain `OPENAI_API_KEY` variable.
    #[serde(default)]
    pub api_key: String,

    /// Base URL; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    /// Check if an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
