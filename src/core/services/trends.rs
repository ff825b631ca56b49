//! Trend finder
//!
//! What is working in a niche this week: frequent title words, hot tags
//! and the most viewed recent videos.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use log::info;
use regex::Regex;

use crate::core::models::{ReferenceData, TrendReport, VideoRecord};
use crate::core::ports::{PlatformError, SearchOrder, SearchQuery, VideoPlatform};

use super::metrics::count_terms;

/// How far back the trend search looks
pub const TREND_WINDOW_DAYS: i64 = 7;
/// Search results analyzed for trends
pub const TREND_RESULTS: u32 = 15;
/// Keywords and tags kept in the report
pub const TOP_TERMS: usize = 10;
/// Videos kept in the report
pub const TOP_VIDEOS: usize = 5;

static TREND_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("valid regex"));

/// Extract trending words and tags from a set of videos
#[must_use]
pub fn trend_insights(
    niche: &str,
    records: Vec<VideoRecord>,
    reference: &ReferenceData,
) -> TrendReport {
    let words: Vec<String> = records
        .iter()
        .flat_map(|r| {
            let lower = r.title.to_lowercase();
            TREND_WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect::<Vec<_>>()
        })
        .filter(|w| !reference.is_stop_word(w))
        .collect();

    let mut keywords = count_terms(&words);
    keywords.truncate(TOP_TERMS);

    let mut tags = count_terms(records.iter().flat_map(|r| r.tags.iter()));
    tags.truncate(TOP_TERMS);

    let total_videos = records.len();
    let top_videos = records.into_iter().take(TOP_VIDEOS).collect();

    TrendReport {
        niche: niche.to_string(),
        keywords,
        tags,
        top_videos,
        total_videos,
    }
}

/// Search the niche for the most viewed videos of the past week
pub fn find_trends<P: VideoPlatform + ?Sized>(
    platform: &P,
    niche: &str,
    now: DateTime<Utc>,
    reference: &ReferenceData,
) -> Result<TrendReport, PlatformError> {
    let niche = niche.trim();
    if niche.is_empty() {
        return Err(PlatformError::EmptyQuery);
    }

    let mut query = SearchQuery::new(niche, TREND_RESULTS);
    query.order = SearchOrder::ViewCount;
    query.published_after = Some(now - Duration::days(TREND_WINDOW_DAYS));

    let ids = platform.search(&query)?;
    if ids.is_empty() {
        return Err(PlatformError::NoResults(niche.to_string()));
    }

    let records = platform.videos(&ids)?;
    info!("Found {} trending videos for '{niche}'", records.len());
    Ok(trend_insights(niche, records, reference))
}
