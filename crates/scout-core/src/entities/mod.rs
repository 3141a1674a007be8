//! Entity structs for the Scout screening domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation of the persisted submission format.

mod candidate;
mod conversation;
mod submission;

pub use candidate::CandidateProfile;
pub use conversation::ConversationTurn;
pub use submission::SubmissionRecord;
