//! Screening flow configuration.

use scout_core::questions::QuestionBounds;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_min_questions() -> usize {
    3
}

const fn default_max_questions() -> usize {
    5
}

/// Conversation turns included in follow-up prompts.
const fn default_history_window() -> usize {
    6
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScreeningConfig {
    #[serde(default = "default_min_questions")]
    pub min_questions: usize,

    #[serde(default = "default_max_questions")]
    pub max_questions: usize,

    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            min_questions: default_min_questions(),
            max_questions: default_max_questions(),
            history_window: default_history_window(),
        }
    }
}

impl ScreeningConfig {
    /// Question-count bounds per technology.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `min_questions` exceeds
    /// `max_questions`.
    pub fn bounds(&self) -> Result<QuestionBounds, ConfigError> {
        QuestionBounds::new(self.min_questions, self.max_questions).map_err(|error| {
            ConfigError::InvalidValue {
                field: "screening.min_questions".into(),
                reason: error.to_string(),
            }
        })
    }
}
