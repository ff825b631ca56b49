//! Competitor metrics
//!
//! Engagement, view statistics, tag frequencies, upload timing and the
//! opportunity score, computed from normalized video records.

use std::collections::HashMap;

use crate::core::models::{Difficulty, KeywordReport, TermCount, UploadWindow, VideoRecord};

/// Trending tags kept in a keyword report
pub const REPORT_TRENDING_TAGS: usize = 15;

/// View count at which the volume and competition scales saturate
const VIEW_SCALE: f64 = 1_000_000.0;
const HALF_SCORE: f64 = 50.0;

/// (likes + comments) / views × 100, rounded to 2 decimals; 0 when views is 0
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn engagement_rate(views: u64, likes: u64, comments: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    let engagement = (likes.saturating_add(comments)) as f64 / views as f64 * 100.0;
    round2(engagement)
}

/// Engagement rate of a record
#[must_use]
pub fn record_engagement(record: &VideoRecord) -> f64 {
    engagement_rate(record.views, record.likes, record.comments)
}

/// Median of the values; 0 for an empty slice
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Arithmetic mean; 0 for an empty slice
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// View counts of records with at least one view
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn nonzero_views(records: &[VideoRecord]) -> Vec<f64> {
    records.iter().filter(|r| r.views > 0).map(|r| r.views as f64).collect()
}

/// Count terms, most frequent first; ties keep first-appearance order
#[must_use]
pub fn count_terms<I, S>(terms: I) -> Vec<TermCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<TermCount> = Vec::new();
    for term in terms {
        let term = term.as_ref();
        if let Some(&i) = index.get(term) {
            counts[i].count += 1;
        } else {
            index.insert(term.to_string(), counts.len());
            counts.push(TermCount {
                term: term.to_string(),
                count: 1,
            });
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Most used tags across all records, at most `limit`
#[must_use]
pub fn trending_tags(records: &[VideoRecord], limit: usize) -> Vec<String> {
    count_terms(records.iter().flat_map(|r| r.tags.iter()))
        .into_iter()
        .take(limit)
        .map(|t| t.term)
        .collect()
}

/// Most common UTC publication hour; ties go to the hour seen first
#[must_use]
pub fn best_upload_hour(records: &[VideoRecord]) -> Option<u8> {
    let hours = records.iter().filter_map(VideoRecord::published_hour).map(|h| h.to_string());
    count_terms(hours).first().and_then(|t| t.term.parse().ok())
}

/// Keyword opportunity score, 0..=100.
///
/// Volume earns up to 50 points (saturating at one million views) and low
/// competition earns up to 50 more. Non-finite input scores a neutral 50.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn opportunity_score(volume: f64, competition: f64) -> u8 {
    let volume_score = (volume / VIEW_SCALE * HALF_SCORE).min(HALF_SCORE);
    let competition_score =
        (HALF_SCORE - competition / VIEW_SCALE * HALF_SCORE).clamp(0.0, HALF_SCORE);
    let total = volume_score + competition_score;
    if total.is_finite() {
        total.clamp(0.0, 100.0) as u8
    } else {
        50
    }
}

/// Summarize a keyword's competitor videos into a report
#[must_use]
pub fn summarize(keyword: &str, records: Vec<VideoRecord>) -> KeywordReport {
    let views = nonzero_views(&records);
    let engagement: Vec<f64> =
        records.iter().map(record_engagement).filter(|e| *e > 0.0).collect();

    let median_views = median(&views);
    let average_views = mean(&views);

    KeywordReport {
        keyword: keyword.to_string(),
        median_views,
        average_views,
        average_engagement: mean(&engagement),
        opportunity_score: opportunity_score(average_views, median_views),
        difficulty: Difficulty::from_median_views(median_views),
        trending_tags: trending_tags(&records, REPORT_TRENDING_TAGS),
        best_upload_window: best_upload_hour(&records).map(|hour| UploadWindow { hour }),
        total_videos: records.len(),
        competitors: records,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
