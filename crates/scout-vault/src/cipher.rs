//! Authenticated token format.
//!
//! A token is padded base64url text of:
//!
//! ```text
//! version[1] || created_at[8, big-endian unix seconds] || nonce[12] || ciphertext+tag
//! ```
//!
//! The version byte and timestamp are bound as AES-GCM associated data, so
//! they cannot be altered without failing authentication. A fresh random nonce
//! per token makes sealing the same plaintext twice produce different output.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use chrono::{DateTime, Utc};

use crate::error::VaultError;
use crate::key::SubmissionKey;

const VERSION: u8 = 0x01;
const NONCE_SIZE: usize = 12;
const HEADER_SIZE: usize = 1 + 8;
const TAG_SIZE: usize = 16;

fn cipher_for(key: &SubmissionKey) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.bytes()))
}

/// Encrypt `plaintext` into a token stamped with `created_at`.
///
/// # Errors
///
/// Returns [`VaultError::Random`] if no nonce can be drawn, or
/// [`VaultError::Encrypt`] if the cipher rejects the input.
pub fn seal(
    key: &SubmissionKey,
    plaintext: &[u8],
    created_at: DateTime<Utc>,
) -> Result<String, VaultError> {
    let mut header = [0u8; HEADER_SIZE];
    header[0] = VERSION;
    header[1..].copy_from_slice(&created_at.timestamp().to_be_bytes());

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    getrandom::fill(&mut nonce_bytes).map_err(|error| VaultError::Random(error.to_string()))?;

    let ciphertext = cipher_for(key)
        .encrypt(
            Nonce::from_slice(&nonce_bytes),
            Payload {
                msg: plaintext,
                aad: &header,
            },
        )
        .map_err(|_| VaultError::Encrypt)?;

    let mut combined = Vec::with_capacity(HEADER_SIZE + NONCE_SIZE + ciphertext.len());
    combined.extend_from_slice(&header);
    combined.extend_from_slice(&nonce_bytes);
    combined.extend_from_slice(&ciphertext);

    Ok(URL_SAFE.encode(combined))
}

/// Decrypt a token produced by [`seal`].
///
/// # Errors
///
/// Returns [`VaultError::MalformedToken`] for bad base64, a short token or an
/// unknown version, and [`VaultError::Decrypt`] when authentication fails.
pub fn open(key: &SubmissionKey, token: &str) -> Result<Vec<u8>, VaultError> {
    let data = URL_SAFE
        .decode(token.trim())
        .map_err(|error| VaultError::MalformedToken(format!("not base64url: {error}")))?;

    if data.len() < HEADER_SIZE + NONCE_SIZE + TAG_SIZE {
        return Err(VaultError::MalformedToken(format!(
            "token too short ({} bytes)",
            data.len()
        )));
    }
    if data[0] != VERSION {
        return Err(VaultError::MalformedToken(format!(
            "unsupported version {:#04x}",
            data[0]
        )));
    }

    let (header, rest) = data.split_at(HEADER_SIZE);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

    cipher_for(key)
        .decrypt(
            Nonce::from_slice(nonce_bytes),
            Payload {
                msg: ciphertext,
                aad: header,
            },
        )
        .map_err(|_| VaultError::Decrypt)
}
