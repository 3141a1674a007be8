use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::CandidateProfile;
use crate::questions::QuestionSet;

/// Snapshot written once when a screening conversation ends.
///
/// This is the plaintext of every `.enc` submission file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub candidate: CandidateProfile,
    pub questions: QuestionSet,
    pub ts: DateTime<Utc>,
}

impl SubmissionRecord {
    #[must_use]
    pub fn new(candidate: CandidateProfile, questions: QuestionSet, ts: DateTime<Utc>) -> Self {
        Self {
            candidate,
            questions,
            ts,
        }
    }
}
