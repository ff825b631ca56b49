//! Video platform port
//!
//! Search and statistics lookups against a third-party video platform.
//! The scoring core never calls this; the research, trend and audit
//! services do, and hand the normalized records to the core.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::super::models::{ChannelProfile, UploadRecord, VideoRecord};

/// Shortest credential accepted before any request is made
pub const MIN_CREDENTIAL_LEN: usize = 30;

/// Errors from the video platform
#[derive(Debug, Error)]
pub enum PlatformError {
    /// No API key was supplied
    #[error("API key is missing (pass --api-key or set YOUTUBE_API_KEY)")]
    MissingCredential,

    /// The API key is malformed or was rejected by the platform
    #[error("API key is not valid")]
    InvalidCredential,

    /// The daily quota is used up
    #[error("API quota exceeded")]
    QuotaExceeded,

    /// Keyword or niche was empty
    #[error("search query is empty")]
    EmptyQuery,

    /// Search returned nothing
    #[error("no videos found for '{0}'")]
    NoResults(String),

    /// Channel IDs start with `UC`
    #[error("invalid channel ID: {0}")]
    InvalidChannel(String),

    /// No channel with this ID
    #[error("channel not found: {0}")]
    ChannelNotFound(String),

    /// Transport-level failure
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success response from the platform
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the error body
        message: String,
    },

    /// Response body could not be decoded
    #[error("failed to parse API response: {0}")]
    Parse(String),
}

/// An API key that passed local pre-validation
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Validate a caller-supplied key. This is a length check, not authentication.
    pub fn parse(raw: &str) -> Result<Self, PlatformError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(PlatformError::MissingCredential);
        }
        if key.chars().count() < MIN_CREDENTIAL_LEN {
            return Err(PlatformError::InvalidCredential);
        }
        Ok(Self(key.to_string()))
    }

    /// The raw key
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let skip = self.0.chars().count().saturating_sub(4);
        let tail: String = self.0.chars().skip(skip).collect();
        write!(f, "Credential(…{tail})")
    }
}

/// Result ordering for a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Platform relevance ranking
    #[default]
    Relevance,
    /// Most viewed first
    ViewCount,
}

impl SearchOrder {
    /// Wire value of the ordering
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::ViewCount => "viewCount",
        }
    }
}

/// A video search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text query
    pub text: String,
    /// Maximum number of results
    pub max_results: u32,
    /// Result ordering
    pub order: SearchOrder,
    /// Region to bias results towards
    pub region_code: Option<String>,
    /// Only videos published after this instant
    pub published_after: Option<DateTime<Utc>>,
}

impl SearchQuery {
    /// Relevance-ordered query with the given result cap
    #[must_use]
    pub fn new(text: impl Into<String>, max_results: u32) -> Self {
        Self {
            text: text.into(),
            max_results,
            order: SearchOrder::Relevance,
            region_code: None,
            published_after: None,
        }
    }
}

/// Video platform queries
pub trait VideoPlatform {
    /// Search videos, returning their IDs in result order
    fn search(&self, query: &SearchQuery) -> Result<Vec<String>, PlatformError>;

    /// Fetch titles, tags and statistics for the given IDs
    fn videos(&self, ids: &[String]) -> Result<Vec<VideoRecord>, PlatformError>;

    /// Fetch a channel profile
    fn channel(&self, channel_id: &str) -> Result<ChannelProfile, PlatformError>;

    /// Most recent uploads of a channel, newest first
    fn recent_uploads(
        &self,
        channel: &ChannelProfile,
        max_results: u32,
    ) -> Result<Vec<UploadRecord>, PlatformError>;
}
