//! Score reports
//!
//! The immutable result of scoring one title.

use serde::{Deserialize, Serialize};

use super::Finding;

/// Highest score a title can reach
pub const MAX_SCORE: u8 = 100;

/// Points awarded per scoring component, before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Length band points (max 25)
    pub length: u8,
    /// Keyword placement points (max 20)
    pub keyword: u8,
    /// Power word points (max 15)
    pub power_words: u8,
    /// Number points (max 15)
    pub numbers: u8,
    /// Emoji points (max 10)
    pub emoji: u8,
    /// Question/bracket/year bonus points (max 15)
    pub structure: u8,
    /// All-caps penalty (0 or 10)
    pub penalty: u8,
}

impl ScoreBreakdown {
    /// Sum of all components minus the penalty, not yet clamped
    #[must_use]
    pub fn raw_total(&self) -> i32 {
        i32::from(self.length)
            + i32::from(self.keyword)
            + i32::from(self.power_words)
            + i32::from(self.numbers)
            + i32::from(self.emoji)
            + i32::from(self.structure)
            - i32::from(self.penalty)
    }
}

/// Letter grade shown next to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Score 80 and above
    A,
    /// Score 60 to 79
    B,
    /// Everything below 60
    C,
}

impl Grade {
    /// Grade for a score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::A
        } else if score >= 60 {
            Self::B
        } else {
            Self::C
        }
    }

    /// Short verdict for the grade
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::A => "Excellent!",
            Self::B => "Good",
            Self::C => "Needs Work",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Result of scoring a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Final score, always within 0..=100
    pub score: u8,
    /// Per-component points
    pub breakdown: ScoreBreakdown,
    /// Findings in evaluation order
    pub findings: Vec<Finding>,
}

impl ScoreReport {
    /// Build a report from a breakdown, clamping the total into 0..=100
    #[must_use]
    pub fn from_breakdown(breakdown: ScoreBreakdown, findings: Vec<Finding>) -> Self {
        let clamped = breakdown.raw_total().clamp(0, i32::from(MAX_SCORE));
        Self {
            score: u8::try_from(clamped).unwrap_or(0),
            breakdown,
            findings,
        }
    }

    /// Letter grade for this report
    #[must_use]
    pub const fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }
}
