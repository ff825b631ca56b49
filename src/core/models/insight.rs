//! Keyword research and trend results

use serde::{Deserialize, Serialize};

use super::VideoRecord;

/// How crowded a keyword's top results are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Median views above 500k
    High,
    /// Median views above 100k
    Medium,
    /// Everything else
    Low,
}

impl Difficulty {
    /// Classify by median view count of the top results
    #[must_use]
    pub fn from_median_views(median_views: f64) -> Self {
        if median_views > 500_000.0 {
            Self::High
        } else if median_views > 100_000.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Ease percentage shown next to the difficulty
    #[must_use]
    pub const fn ease(self) -> u8 {
        match self {
            Self::High => 30,
            Self::Medium => 60,
            Self::Low => 90,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// One-hour upload slot (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadWindow {
    /// Starting hour, 0..=23
    pub hour: u8,
}

impl std::fmt::Display for UploadWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00 - {:02}:00 UTC", self.hour, (u16::from(self.hour) + 1) % 24)
    }
}

/// A term and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    /// The word or tag
    pub term: String,
    /// Number of occurrences
    pub count: usize,
}

/// Result of researching one keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// The researched keyword
    pub keyword: String,
    /// Median views of videos with at least one view
    pub median_views: f64,
    /// Mean views of videos with at least one view
    pub average_views: f64,
    /// Mean engagement rate of videos with non-zero engagement
    pub average_engagement: f64,
    /// Opportunity score, 0..=100
    pub opportunity_score: u8,
    /// Competition level
    pub difficulty: Difficulty,
    /// Most used competitor tags
    pub trending_tags: Vec<String>,
    /// Most common upload hour
    pub best_upload_window: Option<UploadWindow>,
    /// Number of videos analyzed
    pub total_videos: usize,
    /// The analyzed videos, in platform order
    pub competitors: Vec<VideoRecord>,
}

impl KeywordReport {
    /// One-line advice derived from the opportunity score
    #[must_use]
    pub const fn tip(&self) -> &'static str {
        if self.opportunity_score > 70 {
            "Great keyword! Low competition, good volume"
        } else if self.opportunity_score > 40 {
            "Moderate difficulty. Create unique content to stand out"
        } else {
            "High competition. Consider long-tail keywords"
        }
    }
}

/// What is trending in a niche
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    /// The searched niche
    pub niche: String,
    /// Most frequent title words
    pub keywords: Vec<TermCount>,
    /// Most frequent tags
    pub tags: Vec<TermCount>,
    /// Leading videos
    pub top_videos: Vec<VideoRecord>,
    /// Number of videos analyzed
    pub total_videos: usize,
}
