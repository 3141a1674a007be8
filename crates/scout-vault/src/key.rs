//! Encryption key sourcing.

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::VaultError;

/// AES-256 key length in bytes.
pub(crate) const KEY_SIZE: usize = 32;

/// Accepts base64url key text with or without `=` padding.
const KEY_TEXT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Where a key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// Supplied by configuration; data sealed with it can be decrypted later.
    Configured,
    /// Generated for a single save and discarded; sealed data is unrecoverable.
    Ephemeral,
}

/// A 256-bit symmetric key tagged with its origin.
#[derive(Clone)]
pub struct SubmissionKey {
    bytes: [u8; KEY_SIZE],
    origin: KeyOrigin,
}

impl fmt::Debug for SubmissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionKey")
            .field("bytes", &"<redacted>")
            .field("origin", &self.origin)
            .finish()
    }
}

impl SubmissionKey {
    /// Decode configured key text (base64url of 32 raw bytes).
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidKey`] for bad base64 or a wrong length.
    pub fn from_text(text: &str) -> Result<Self, VaultError> {
        let decoded = KEY_TEXT
            .decode(text.trim())
            .map_err(|error| VaultError::InvalidKey(format!("not base64url: {error}")))?;
        let bytes: [u8; KEY_SIZE] = decoded.try_into().map_err(|raw: Vec<u8>| {
            VaultError::InvalidKey(format!(
                "expected {KEY_SIZE} bytes after decoding, got {}",
                raw.len()
            ))
        })?;
        Ok(Self {
            bytes,
            origin: KeyOrigin::Configured,
        })
    }

    /// Generate a fresh random key from the OS RNG.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Random`] if the RNG is unavailable.
    pub fn generate() -> Result<Self, VaultError> {
        let mut bytes = [0u8; KEY_SIZE];
        getrandom::fill(&mut bytes).map_err(|error| VaultError::Random(error.to_string()))?;
        Ok(Self {
            bytes,
            origin: KeyOrigin::Ephemeral,
        })
    }

    /// Padded base64url text, the format accepted by [`Self::from_text`].
    #[must_use]
    pub fn to_text(&self) -> String {
        URL_SAFE.encode(self.bytes)
    }

    #[must_use]
    pub const fn origin(&self) -> KeyOrigin {
        self.origin
    }

    /// Whether data sealed with this key can ever be opened again.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.origin, KeyOrigin::Configured)
    }

    pub(crate) const fn bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

/// Strategy for obtaining the key a save is sealed with.
pub trait KeySource: Send + Sync {
    /// Produce the key for one save.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] when key material is invalid or cannot be
    /// generated. Implementations must not fall back to weaker behaviour.
    fn resolve(&self) -> Result<SubmissionKey, VaultError>;
}

/// Key text supplied by configuration.
#[derive(Clone)]
pub struct ConfiguredKey(String);

impl ConfiguredKey {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl KeySource for ConfiguredKey {
    fn resolve(&self) -> Result<SubmissionKey, VaultError> {
        SubmissionKey::from_text(&self.0)
    }
}

/// A new random key per save, never stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EphemeralKey;

impl KeySource for EphemeralKey {
    fn resolve(&self) -> Result<SubmissionKey, VaultError> {
        SubmissionKey::generate()
    }
}

/// Pick the key source for an optional configured key.
///
/// Blank text counts as absent.
#[must_use]
pub fn key_source(configured: Option<&str>) -> Box<dyn KeySource> {
    match configured.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => Box::new(ConfiguredKey::new(text)),
        None => Box::new(EphemeralKey),
    }
}
