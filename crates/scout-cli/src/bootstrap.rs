use std::time::Duration;

use scout_config::ScoutConfig;
use scout_llm::ChatClient;

use crate::cli::GlobalFlags;

/// Load `.env.local`, `.env` and the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ScoutConfig> {
    if let Some(path) = flags.config.as_deref().filter(|path| !path.exists()) {
        anyhow::bail!("config file '{}' does not exist", path.display());
    }
    ScoutConfig::load_with_dotenv(flags.config.as_deref()).map_err(anyhow::Error::from)
}

/// Build the chat client, failing early when no API key is configured.
pub fn chat_client(config: &ScoutConfig) -> anyhow::Result<ChatClient> {
    let llm = config.require_llm()?;
    tracing::debug!(model = %llm.model, base_url = %llm.base_url, "using chat model");
    Ok(ChatClient::new(
        llm.api_key.trim(),
        &llm.base_url,
        llm.model.clone(),
        Duration::from_secs(llm.timeout_secs),
    )?)
}
