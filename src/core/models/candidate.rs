//! Generated title candidates

use serde::{Deserialize, Serialize};

/// The template a candidate title was produced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// "🔥 7 Keyword BEST Tips You NEED to Know - Theme (2025)"
    Listicle,
    /// "How to Keyword: BEST Guide | Theme 2025 🔥"
    HowTo,
    /// "Keyword Tutorial - Theme | BEST Strategy 2025 🔥"
    Tutorial,
    /// "theme | Keyword BEST Tips [2025] 🔥"
    Benefit,
    /// "Is This the BEST Keyword? theme [7 Tips 2025] 🔥"
    Question,
}

impl TemplateKind {
    /// All templates, in the order candidates are produced
    pub const ALL: [Self; 5] = [
        Self::Listicle,
        Self::HowTo,
        Self::Tutorial,
        Self::Benefit,
        Self::Question,
    ];
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Listicle => write!(f, "listicle"),
            Self::HowTo => write!(f, "how_to"),
            Self::Tutorial => write!(f, "tutorial"),
            Self::Benefit => write!(f, "benefit"),
            Self::Question => write!(f, "question"),
        }
    }
}

/// A generated title and the template that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCandidate {
    /// Template identity
    pub template: TemplateKind,
    /// The generated title
    pub title: String,
}

/// A candidate re-scored against the original title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The candidate
    pub candidate: TitleCandidate,
    /// Its score
    pub score: u8,
    /// Whether it beats the original title
    pub better: bool,
}
