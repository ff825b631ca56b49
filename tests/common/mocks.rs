//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::cell::RefCell;

use tubeseo::core::models::{ChannelProfile, UploadRecord, VideoRecord};
use tubeseo::core::ports::{
    PlatformError, RandomSource, ReferenceError, ReferenceSource, SearchQuery, VideoPlatform,
};

/// In-memory video platform
#[derive(Default)]
pub struct MockPlatform {
    videos: Vec<VideoRecord>,
    channel: Option<ChannelProfile>,
    uploads: Vec<UploadRecord>,
    fail_with_quota: bool,
    queries: RefCell<Vec<SearchQuery>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search returns these videos, in order
    pub fn with_videos(mut self, videos: Vec<VideoRecord>) -> Self {
        self.videos = videos;
        self
    }

    pub fn with_channel(mut self, channel: ChannelProfile, uploads: Vec<UploadRecord>) -> Self {
        self.channel = Some(channel);
        self.uploads = uploads;
        self
    }

    /// Every call fails with a quota error
    pub fn exhausted() -> Self {
        Self {
            fail_with_quota: true,
            ..Self::default()
        }
    }

    /// Queries received so far
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.borrow().clone()
    }

    fn check_quota(&self) -> Result<(), PlatformError> {
        if self.fail_with_quota {
            Err(PlatformError::QuotaExceeded)
        } else {
            Ok(())
        }
    }
}

impl VideoPlatform for MockPlatform {
    fn search(&self, query: &SearchQuery) -> Result<Vec<String>, PlatformError> {
        self.check_quota()?;
        self.queries.borrow_mut().push(query.clone());
        let limit = usize::try_from(query.max_results).unwrap_or(usize::MAX);
        Ok(self.videos.iter().take(limit).map(|v| v.id.clone()).collect())
    }

    fn videos(&self, ids: &[String]) -> Result<Vec<VideoRecord>, PlatformError> {
        self.check_quota()?;
        Ok(ids
            .iter()
            .filter_map(|id| self.videos.iter().find(|v| &v.id == id).cloned())
            .collect())
    }

    fn channel(&self, channel_id: &str) -> Result<ChannelProfile, PlatformError> {
        self.check_quota()?;
        self.channel
            .clone()
            .filter(|c| c.id == channel_id)
            .ok_or_else(|| PlatformError::ChannelNotFound(channel_id.to_string()))
    }

    fn recent_uploads(
        &self,
        _channel: &ChannelProfile,
        max_results: u32,
    ) -> Result<Vec<UploadRecord>, PlatformError> {
        self.check_quota()?;
        let limit = usize::try_from(max_results).unwrap_or(usize::MAX);
        Ok(self.uploads.iter().take(limit).cloned().collect())
    }
}

/// Random source replaying a fixed sequence of indices
pub struct SequenceRandom {
    values: Vec<usize>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: &[usize]) -> Self {
        Self {
            values: values.to_vec(),
            position: 0,
        }
    }

    /// Always index 0
    pub fn zeros() -> Self {
        Self::new(&[0])
    }

    /// Number of draws made
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, len: usize) -> usize {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % len
    }
}

/// Reference source with a canned outcome
pub struct StubReference {
    outcome: Result<Vec<String>, fn() -> ReferenceError>,
}

impl StubReference {
    pub fn words(words: &[&str]) -> Self {
        Self {
            outcome: Ok(words.iter().map(ToString::to_string).collect()),
        }
    }

    pub fn failing(error: fn() -> ReferenceError) -> Self {
        Self { outcome: Err(error) }
    }
}

impl ReferenceSource for StubReference {
    fn fetch_power_words(&self) -> Result<Vec<String>, ReferenceError> {
        match &self.outcome {
            Ok(words) => Ok(words.clone()),
            Err(make) => Err(make()),
        }
    }
}
