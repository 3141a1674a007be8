use std::path::Path;

use scout_core::entities::SubmissionRecord;

use crate::cipher::open;
use crate::error::VaultError;
use crate::key::SubmissionKey;

/// Read, decrypt and parse one submission file.
///
/// # Errors
///
/// Returns [`VaultError::Read`] if the file cannot be read,
/// [`VaultError::Decrypt`] / [`VaultError::MalformedToken`] if the token does
/// not open under `key`, and [`VaultError::Json`] if the plaintext is not a
/// submission record.
pub fn open_submission(path: &Path, key: &SubmissionKey) -> Result<SubmissionRecord, VaultError> {
    let token = std::fs::read_to_string(path).map_err(|source| VaultError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let plaintext = open(key, &token)?;
    Ok(serde_json::from_slice(&plaintext)?)
}
