//! # scout-config
//!
//! Layered configuration loading for Scout using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCOUT_*` prefix, `__` as separator)
//! 2. The plain variables `OPENAI_API_KEY` and `ENCRYPTION_KEY`
//! 3. An explicit config file (`--config`), else project-level `.scout/config.toml`
//! 4. User-level `~/.config/scout/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `SCOUT_LLM__MODEL` -> `llm.model`, `SCOUT_VAULT__OUTPUT_DIR` -> `vault.output_dir`,
//! `SCOUT_SCREENING__MAX_QUESTIONS` -> `screening.max_questions`.
//! `OPENAI_API_KEY` -> `llm.api_key` and `ENCRYPTION_KEY` -> `vault.encryption_key`.
//!
//! # Usage
//!
//! ```no_run
//! use scout_config::ScoutConfig;
//!
//! let config = ScoutConfig::load_with_dotenv(None).expect("config");
//! let llm = config.require_llm().expect("OPENAI_API_KEY must be set");
//! println!("model: {}", llm.model);
//! ```

mod error;
mod llm;
mod screening;
mod vault;

pub use error::ConfigError;
pub use llm::LlmConfig;
pub use screening::ScreeningConfig;
pub use vault::VaultConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Plain environment variables honoured alongside the `SCOUT_` prefix.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "llm.api_key"),
    ("ENCRYPTION_KEY", "vault.encryption_key"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub vault: VaultConfig,
    #[serde(default)]
    pub screening: ScreeningConfig,
}

impl ScoutConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    /// `config_file` replaces the project-level `.scout/config.toml` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the merged
    /// values are invalid.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(config_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env.local` and `.env` from the
    /// current directory. Variables already set in the process win.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::dotenv();
        Self::load(config_file)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = config_file.map_or_else(
            || PathBuf::from(".scout/config.toml"),
            Path::to_path_buf,
        );
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        for &(variable, key) in LEGACY_ENV_KEYS {
            figment = figment.merge(Env::raw().only(&[variable]).map(move |_| key.into()));
        }

        figment.merge(Env::prefixed("SCOUT_").split("__"))
    }

    /// Reject values no screening can run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for empty question bounds or a
    /// blank output directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.screening.bounds()?;
        if self.vault.output_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "vault.output_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// The model endpoint settings, failing if no API key is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] naming the variable to set.
    pub fn require_llm(&self) -> Result<&LlmConfig, ConfigError> {
        if self.llm.is_configured() {
            Ok(&self.llm)
        } else {
            Err(ConfigError::NotConfigured {
                section: "llm".into(),
                hint: "set OPENAI_API_KEY (or SCOUT_LLM__API_KEY)".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scout").join("config.toml"))
    }
}
