//! Title findings
//!
//! A finding is one line of the SEO checklist produced while scoring a title.

use serde::{Deserialize, Serialize};

use super::Severity;

/// The part of the title a finding is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    /// Title emptiness
    Title,
    /// Character count
    Length,
    /// Target keyword placement
    Keyword,
    /// Click-through power words
    PowerWords,
    /// Digit runs
    Numbers,
    /// Viral emoji
    Emoji,
    /// Question marks, brackets and the current year
    Structure,
    /// All-caps penalty
    Caps,
}

/// A single categorized finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// How the finding should be presented
    pub severity: Severity,
    /// What the finding is about
    pub aspect: Aspect,
    /// Human-readable explanation
    pub message: String,
}

impl Finding {
    /// Create a finding
    #[must_use]
    pub fn new(severity: Severity, aspect: Aspect, message: impl Into<String>) -> Self {
        Self {
            severity,
            aspect,
            message: message.into(),
        }
    }

    /// Create a success finding
    #[must_use]
    pub fn success(aspect: Aspect, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, aspect, message)
    }

    /// Create a warning finding
    #[must_use]
    pub fn warning(aspect: Aspect, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, aspect, message)
    }

    /// Create an info finding
    #[must_use]
    pub fn info(aspect: Aspect, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, aspect, message)
    }

    /// Create an error finding
    #[must_use]
    pub fn error(aspect: Aspect, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, aspect, message)
    }
}
