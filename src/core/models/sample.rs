//! Competitor samples
//!
//! Normalized video records returned by the video platform. The scoring
//! core only reads them.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// One video from a search result, with its statistics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Platform video ID
    #[serde(default)]
    pub id: String,
    /// Video title
    pub title: String,
    /// Channel display name
    #[serde(default)]
    pub channel_title: String,
    /// Uploader-supplied tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Publication time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// View count
    #[serde(default)]
    pub views: u64,
    /// Like count
    #[serde(default)]
    pub likes: u64,
    /// Comment count
    #[serde(default)]
    pub comments: u64,
}

impl VideoRecord {
    /// Record with only a title, as used when a caller has no statistics
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// UTC hour of publication, if known
    #[must_use]
    pub fn published_hour(&self) -> Option<u8> {
        self.published_at.and_then(|t| u8::try_from(t.hour()).ok())
    }
}

/// Ordered competitor sample; the first record is the top result
pub type CompetitorSample = [VideoRecord];
