//! The technology → questions mapping and its length bounds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Ordered mapping from technology name to its screening questions.
///
/// Iteration order is the order technologies were requested in, which is
/// also the order they are shown to the candidate and persisted.
pub type QuestionSet = IndexMap<String, Vec<String>>;

/// Inclusive range `[min, max]` every question list is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBounds {
    min: usize,
    max: usize,
}

impl Default for QuestionBounds {
    fn default() -> Self {
        Self { min: 3, max: 5 }
    }
}

impl QuestionBounds {
    /// Build bounds, rejecting an empty range.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, CoreError> {
        if min > max {
            return Err(CoreError::Validation(format!(
                "question bounds are empty: min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Whether a list of `len` questions already satisfies the bounds.
    #[must_use]
    pub const fn contains(self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}
