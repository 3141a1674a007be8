//! Vault error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while sealing, writing or reading submissions.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The output directory could not be created.
    #[error("failed to create submission directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing or renaming the submission file failed.
    #[error("failed to write submission {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading a submission file failed.
    #[error("failed to read submission {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A submission with the same timestamped name is already on disk.
    #[error("submission {} already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    /// Configured key material is not base64url of exactly 32 bytes.
    #[error("invalid encryption key: {0}")]
    InvalidKey(String),

    /// The operating system RNG failed.
    #[error("random number generator unavailable: {0}")]
    Random(String),

    #[error("encryption failed")]
    Encrypt,

    /// Authentication failed: wrong key or tampered token.
    #[error("decryption failed: wrong key or corrupted token")]
    Decrypt,

    /// The token is not in the expected envelope format.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
