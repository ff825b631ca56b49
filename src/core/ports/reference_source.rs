//! Reference data port
//!
//! Defines where the power-word table comes from and the fallback rule
//! applied when it cannot be loaded.

use thiserror::Error;

use super::super::models::ReferenceData;

/// Reasons a power-word list could not be loaded
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Transport-level failure (DNS, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("unexpected status {0}")]
    Status(u16),

    /// Body was not a JSON array of strings
    #[error("malformed word list: {0}")]
    Malformed(String),

    /// The list was empty
    #[error("word list is empty")]
    Empty,

    /// This source never loads anything remotely
    #[error("no remote source configured")]
    Unavailable,
}

/// Provider of the power-word table
pub trait ReferenceSource {
    /// Fetch the power-word list
    fn fetch_power_words(&self) -> Result<Vec<String>, ReferenceError>;

    /// Load reference data, falling back to the built-in tables on any failure
    fn load(&self) -> ReferenceData {
        match self.fetch_power_words() {
            Ok(words) if words.iter().any(|w| !w.trim().is_empty()) => {
                log::debug!("Loaded {} power words", words.len());
                ReferenceData::with_power_words(words)
            },
            Ok(_) => {
                log::warn!("Power word list is empty, using built-in list");
                ReferenceData::builtin()
            },
            Err(ReferenceError::Unavailable) => ReferenceData::builtin(),
            Err(e) => {
                log::warn!("Could not load power words ({e}), using built-in list");
                ReferenceData::builtin()
            },
        }
    }
}
