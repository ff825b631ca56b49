//! Channel audit models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Grade, TitleCandidate};

/// Channel identity and totals
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelProfile {
    /// Channel ID (starts with `UC`)
    pub id: String,
    /// Display name
    pub title: String,
    /// Channel description
    #[serde(default)]
    pub description: String,
    /// Subscriber count
    #[serde(default)]
    pub subscribers: u64,
    /// Lifetime views
    #[serde(default)]
    pub views: u64,
    /// Number of public videos
    #[serde(default)]
    pub video_count: u64,
    /// Playlist holding the channel's uploads
    #[serde(default)]
    pub uploads_playlist: String,
}

/// A recent upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    /// Video title
    pub title: String,
    /// Publication time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Overall advice for a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Average score 80 and above
    Excellent,
    /// Average score 60 to 79
    Good,
    /// Everything below
    NeedsWork,
}

impl Recommendation {
    /// Recommendation tier for an average score
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average >= 80.0 {
            Self::Excellent
        } else if average >= 60.0 {
            Self::Good
        } else {
            Self::NeedsWork
        }
    }

    /// Advice text
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Your channel has excellent SEO! Keep up the great work.",
            Self::Good => {
                "Good SEO but room for improvement. Focus on adding keywords and power words."
            },
            Self::NeedsWork => {
                "Your channel needs SEO optimization. Use the title optimizer for each video."
            },
        }
    }
}

/// One audited upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedVideo {
    /// The upload
    pub upload: UploadRecord,
    /// Keyword the title was scored against
    pub keyword: String,
    /// Title score
    pub score: u8,
    /// Letter grade
    pub grade: Grade,
    /// Alternatives, only for titles scoring below 80
    pub suggestions: Vec<TitleCandidate>,
}

/// Result of auditing a channel's recent uploads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAudit {
    /// The audited channel
    pub channel: ChannelProfile,
    /// Per-video results, newest first
    pub videos: Vec<AuditedVideo>,
    /// Mean score across audited videos
    pub average_score: f64,
    /// Videos scoring 70+ when scored without a keyword
    pub well_optimized: usize,
    /// `100 - average_score`
    pub improvement_potential: f64,
    /// Overall advice
    pub recommendation: Recommendation,
}
