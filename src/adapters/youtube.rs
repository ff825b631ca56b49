//! YouTube Data API v3 client
//!
//! Implements [`VideoPlatform`] over HTTPS. Requests run on a private
//! current-thread runtime so callers stay synchronous.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::core::models::{ChannelProfile, UploadRecord, VideoRecord};
use crate::core::ports::{Credential, PlatformError, SearchQuery, VideoPlatform};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_PAGE_SIZE: u32 = 50;

/// Video platform backed by the YouTube Data API
#[derive(Debug)]
pub struct YouTubeClient {
    credential: Credential,
    base_url: String,
    client: Client,
    runtime: Runtime,
}

impl YouTubeClient {
    /// Client against the production API
    pub fn new(credential: Credential) -> Result<Self, PlatformError> {
        Self::with_base_url(credential, DEFAULT_BASE_URL)
    }

    /// Client against another API root, such as a local stub
    pub fn with_base_url(
        credential: Credential,
        base_url: impl Into<String>,
    ) -> Result<Self, PlatformError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        Ok(Self {
            credential,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            runtime,
        })
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, PlatformError> {
        let mut pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        pairs.push(("key", self.credential.expose()));
        let url = Url::parse_with_params(&format!("{}/{endpoint}", self.base_url), &pairs)
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        debug!("GET {}/{endpoint}", self.base_url);

        let (status, body) = self.runtime.block_on(async {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        })
        .map_err(|e| PlatformError::Transport(e.to_string()))?;

        if !status.is_success() {
            let error = api_error(status, &body);
            warn!("{endpoint} request failed: {error}");
            return Err(error);
        }
        serde_json::from_str(&body).map_err(|e| PlatformError::Parse(e.to_string()))
    }
}

impl VideoPlatform for YouTubeClient {
    fn search(&self, query: &SearchQuery) -> Result<Vec<String>, PlatformError> {
        let mut params = vec![
            ("part", "id".to_string()),
            ("type", "video".to_string()),
            ("q", query.text.clone()),
            ("maxResults", query.max_results.min(MAX_PAGE_SIZE).to_string()),
            ("order", query.order.as_str().to_string()),
        ];
        if let Some(region) = &query.region_code {
            params.push(("regionCode", region.clone()));
        }
        if let Some(after) = query.published_after {
            params.push(("publishedAfter", after.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }

        let page: Page<SearchItem> = self.get("search", &params)?;
        Ok(search_ids(page))
    }

    fn videos(&self, ids: &[String]) -> Result<Vec<VideoRecord>, PlatformError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let params = [("part", "snippet,statistics".to_string()), ("id", ids.join(","))];
        let page: Page<VideoItem> = self.get("videos", &params)?;
        Ok(page.items.into_iter().map(VideoItem::into_record).collect())
    }

    fn channel(&self, channel_id: &str) -> Result<ChannelProfile, PlatformError> {
        let params = [
            ("part", "snippet,statistics,contentDetails".to_string()),
            ("id", channel_id.to_string()),
        ];
        let page: Page<ChannelItem> = self.get("channels", &params)?;
        page.items
            .into_iter()
            .next()
            .map(ChannelItem::into_profile)
            .ok_or_else(|| PlatformError::ChannelNotFound(channel_id.to_string()))
    }

    fn recent_uploads(
        &self,
        channel: &ChannelProfile,
        max_results: u32,
    ) -> Result<Vec<UploadRecord>, PlatformError> {
        if channel.uploads_playlist.is_empty() {
            return Ok(Vec::new());
        }
        let params = [
            ("part", "snippet".to_string()),
            ("playlistId", channel.uploads_playlist.clone()),
            ("maxResults", max_results.min(MAX_PAGE_SIZE).to_string()),
        ];
        let page: Page<PlaylistItem> = self.get("playlistItems", &params)?;
        Ok(page
            .items
            .into_iter()
            .map(|item| UploadRecord {
                title: item.snippet.title,
                published_at: parse_time(item.snippet.published_at.as_deref()),
            })
            .collect())
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(default)]
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
}

impl VideoItem {
    fn into_record(self) -> VideoRecord {
        VideoRecord {
            id: self.id,
            title: self.snippet.title,
            channel_title: self.snippet.channel_title,
            tags: self.snippet.tags,
            published_at: parse_time(self.snippet.published_at.as_deref()),
            views: self.statistics.view_count.value(),
            likes: self.statistics.like_count.value(),
            comments: self.statistics.comment_count.value(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    #[serde(default)]
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
    #[serde(default)]
    content_details: ContentDetails,
}

impl ChannelItem {
    fn into_profile(self) -> ChannelProfile {
        ChannelProfile {
            id: self.id,
            title: self.snippet.title,
            description: self.snippet.description,
            subscribers: self.statistics.subscriber_count.value(),
            views: self.statistics.view_count.value(),
            video_count: self.statistics.video_count.value(),
            uploads_playlist: self.content_details.related_playlists.uploads,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Snippet {
    title: String,
    description: String,
    channel_title: String,
    tags: Vec<String>,
    published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Statistics {
    view_count: Count,
    like_count: Count,
    comment_count: Count,
    subscriber_count: Count,
    video_count: Count,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RelatedPlaylists {
    uploads: String,
}

/// Statistics arrive as decimal strings; hidden counters are absent
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum Count {
    Number(u64),
    Text(String),
    #[default]
    Missing,
}

impl Count {
    fn value(&self) -> u64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or(0),
            Self::Missing => 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorReason>,
}

#[derive(Debug, Deserialize)]
struct ErrorReason {
    #[serde(default)]
    reason: String,
}

fn search_ids(page: Page<SearchItem>) -> Vec<String> {
    page.items.into_iter().filter_map(|item| item.id.video_id).collect()
}

fn parse_time(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok()).map(|t| t.with_timezone(&Utc))
}

fn api_error(status: StatusCode, body: &str) -> PlatformError {
    let (message, reasons) = serde_json::from_str::<ErrorBody>(body).map_or_else(
        |_| (body.trim().to_string(), Vec::new()),
        |b| (b.error.message, b.error.errors.into_iter().map(|r| r.reason).collect()),
    );

    if message.contains("API key not valid") || reasons.iter().any(|r| r == "keyInvalid") {
        return PlatformError::InvalidCredential;
    }
    if reasons.iter().any(|r| r.contains("quota") || r.contains("Quota"))
        || message.to_lowercase().contains("quota")
    {
        return PlatformError::QuotaExceeded;
    }
    PlatformError::Api {
        status: status.as_u16(),
        message,
    }
}
