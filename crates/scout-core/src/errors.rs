//! Cross-cutting error types for Scout.
//!
//! Domain-specific errors (`VaultError`, `LlmError`, `ConfigError`) live in
//! their own crates and converge in `scout-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Scout crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (missing required fields, bad ranges).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The session was used after it had already ended.
    #[error("Session already finished")]
    SessionFinished,
}
