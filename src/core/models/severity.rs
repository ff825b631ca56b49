//! Finding severity levels
//!
//! Defines how a single title finding should be presented.

use serde::{Deserialize, Serialize};

/// Finding severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The title already does this well
    Success,
    /// Acceptable, but there is room to improve
    Warning,
    /// Optional improvement
    #[default]
    Info,
    /// Hurts the title's ranking or click-through
    Error,
}

impl Severity {
    /// Marker printed in front of a finding in human output
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Info => "💡",
            Self::Error => "❌",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "error" => Ok(Self::Error),
            _ => Err(format!("Invalid severity: {s}. Use: success, warning, info, error")),
        }
    }
}
