//! # scout-vault
//!
//! Write-once, encrypted persistence of screening submissions.
//!
//! A [`SubmissionWriter`] serializes a [`SubmissionRecord`] to pretty JSON,
//! seals it with AES-256-GCM and writes the token atomically to
//! `<out_dir>/submission_<YYYYMMDDTHHMMSS>.enc`. An existing file is never
//! replaced.
//!
//! Keys come from a [`KeySource`]: either configured key text (base64url of
//! 32 bytes) or a fresh key generated for one save. Ephemeral keys are never
//! stored, so anything sealed with one cannot be decrypted again. The
//! returned [`SavedSubmission`] carries the [`KeyOrigin`] so callers can
//! surface that.
//!
//! [`SubmissionRecord`]: scout_core::entities::SubmissionRecord

mod cipher;
mod error;
mod key;
mod reader;
mod writer;

pub use cipher::{open, seal};
pub use error::VaultError;
pub use key::{ConfiguredKey, EphemeralKey, KeyOrigin, KeySource, SubmissionKey, key_source};
pub use reader::open_submission;
pub use writer::{SavedSubmission, SubmissionWriter, submission_file_name};
