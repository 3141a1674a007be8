//! Write-once submission files.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use scout_core::entities::{CandidateProfile, SubmissionRecord};
use scout_core::questions::QuestionSet;
use tempfile::NamedTempFile;

use crate::cipher::seal;
use crate::error::VaultError;
use crate::key::{KeyOrigin, KeySource, key_source};

/// Default directory for submission files, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "submissions";

/// File name for a submission created at `ts`, second granularity.
#[must_use]
pub fn submission_file_name(ts: DateTime<Utc>) -> String {
    ts.format("submission_%Y%m%dT%H%M%S.enc").to_string()
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSubmission {
    pub path: PathBuf,
    pub key_origin: KeyOrigin,
    pub ts: DateTime<Utc>,
}

impl SavedSubmission {
    /// Whether the file can be decrypted with configured key material.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.key_origin, KeyOrigin::Configured)
    }
}

/// Seals and writes submission records into one directory.
pub struct SubmissionWriter {
    out_dir: PathBuf,
    keys: Box<dyn KeySource>,
}

impl SubmissionWriter {
    pub fn new(out_dir: impl Into<PathBuf>, keys: Box<dyn KeySource>) -> Self {
        Self {
            out_dir: out_dir.into(),
            keys,
        }
    }

    /// Writer for `out_dir` using the configured key, or ephemeral keys when
    /// none is configured.
    pub fn from_config(out_dir: impl Into<PathBuf>, encryption_key: Option<&str>) -> Self {
        Self::new(out_dir, key_source(encryption_key))
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Persist one submission.
    ///
    /// Creates the output directory if needed, stamps the record with the
    /// current UTC time, seals its pretty JSON and writes it atomically. Two
    /// saves within the same second map to the same file name; the second one
    /// fails with [`VaultError::AlreadyExists`] rather than replacing the first.
    ///
    /// # Errors
    ///
    /// Any directory, key, encryption or write failure is returned unchanged;
    /// nothing is retried.
    pub fn save(
        &self,
        candidate: &CandidateProfile,
        questions: &QuestionSet,
    ) -> Result<SavedSubmission, VaultError> {
        std::fs::create_dir_all(&self.out_dir).map_err(|source| VaultError::CreateDir {
            path: self.out_dir.clone(),
            source,
        })?;

        let ts = Utc::now();
        let record = SubmissionRecord::new(candidate.clone(), questions.clone(), ts);
        let plaintext = serde_json::to_vec_pretty(&record)?;

        let key = self.keys.resolve()?;
        if !key.is_recoverable() {
            tracing::warn!(
                "no encryption key configured; sealing with an ephemeral key that is not stored, this submission will be unreadable"
            );
        }

        let token = seal(&key, &plaintext, ts)?;
        let path = self.out_dir.join(submission_file_name(ts));
        write_new_file(&self.out_dir, &path, token.as_bytes())?;

        tracing::info!(path = %path.display(), origin = ?key.origin(), "submission saved");
        Ok(SavedSubmission {
            path,
            key_origin: key.origin(),
            ts,
        })
    }
}

/// Write `contents` to `path` via a temp file in `dir` and a no-clobber rename,
/// so a crash never leaves a partial file under the final name.
fn write_new_file(dir: &Path, path: &Path, contents: &[u8]) -> Result<(), VaultError> {
    let write_err = |source| VaultError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(contents).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    temp.persist_noclobber(path).map_err(|error| {
        if error.error.kind() == std::io::ErrorKind::AlreadyExists {
            VaultError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            write_err(error.error)
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn file_name_uses_compact_utc_stamp() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 7).unwrap();
        assert_eq!(submission_file_name(ts), "submission_20261018T090507.enc");
    }

    #[test]
    fn write_new_file_refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submission_x.enc");
        write_new_file(dir.path(), &path, b"first").unwrap();

        let err = write_new_file(dir.path(), &path, b"second").unwrap_err();
        assert!(matches!(err, VaultError::AlreadyExists { .. }));
        assert_eq!(std::fs::read(&path).unwrap(), b"first");

        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "temp file should be cleaned up");
    }
}
