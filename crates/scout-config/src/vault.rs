//! Submission storage configuration.

use serde::{Deserialize, Serialize};

fn default_output_dir() -> String {
    String::from("submissions")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VaultConfig {
    /// Base64url of 32 raw bytes. Also read from the plain `ENCRYPTION_KEY`
    /// variable. When empty every save uses a throwaway key.
    #[serde(default)]
    pub encryption_key: String,

    /// Directory submission files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            encryption_key: String::new(),
            output_dir: default_output_dir(),
        }
    }
}

impl VaultConfig {
    /// The configured key text, if any.
    #[must_use]
    pub fn encryption_key(&self) -> Option<&str> {
        let key = self.encryption_key.trim();
        (!key.is_empty()).then_some(key)
    }
}
