//! Channel audit
//!
//! Scores a channel's recent upload titles and summarizes how well the
//! channel is optimized overall.

use log::{debug, info};

use crate::core::models::{
    AuditedVideo, ChannelAudit, ChannelProfile, Grade, Recommendation, UploadRecord,
};
use crate::core::ports::{PlatformError, RandomSource, VideoPlatform};

use super::scorer::TitleScorer;
use super::suggester::SuggestionGenerator;

/// Uploads fetched per audit
pub const AUDIT_UPLOADS: u32 = 10;
/// Titles scoring below this get suggestions
pub const SUGGEST_BELOW: u8 = 80;
/// Suggestions shown per weak title
pub const SUGGESTIONS_PER_VIDEO: usize = 2;
/// Keyword-less score at which a title counts as well optimized
pub const WELL_OPTIMIZED_SCORE: u8 = 70;
/// Keyword used when a title has no tokens
pub const FALLBACK_KEYWORD: &str = "video";

const CHANNEL_PREFIX: &str = "UC";

/// Audit a list of uploads against the channel
pub fn audit_titles<R: RandomSource + ?Sized>(
    scorer: &TitleScorer<'_>,
    generator: &SuggestionGenerator<'_>,
    channel: ChannelProfile,
    uploads: Vec<UploadRecord>,
    rng: &mut R,
) -> ChannelAudit {
    let mut well_optimized = 0;
    let mut total = 0u32;

    let videos: Vec<AuditedVideo> = uploads
        .into_iter()
        .map(|upload| {
            let keyword = upload
                .title
                .split_whitespace()
                .next()
                .unwrap_or(FALLBACK_KEYWORD)
                .to_string();
            let score = scorer.score(&upload.title, &keyword).score;
            total += u32::from(score);
            if scorer.score(&upload.title, "").score >= WELL_OPTIMIZED_SCORE {
                well_optimized += 1;
            }

            let suggestions = if score < SUGGEST_BELOW {
                let mut all = generator.suggest(&upload.title, &keyword, &[], &mut *rng);
                all.truncate(SUGGESTIONS_PER_VIDEO);
                all
            } else {
                Vec::new()
            };

            debug!("Audited '{}': {score}", upload.title);
            AuditedVideo {
                upload,
                keyword,
                score,
                grade: Grade::from_score(score),
                suggestions,
            }
        })
        .collect();

    let average_score = if videos.is_empty() {
        0.0
    } else {
        f64::from(total) / f64::from(u32::try_from(videos.len()).unwrap_or(u32::MAX))
    };

    ChannelAudit {
        channel,
        videos,
        average_score,
        well_optimized,
        improvement_potential: 100.0 - average_score,
        recommendation: Recommendation::from_average(average_score),
    }
}

/// Fetch a channel and its recent uploads, then audit them
pub fn audit_channel<P, R>(
    platform: &P,
    channel_id: &str,
    scorer: &TitleScorer<'_>,
    generator: &SuggestionGenerator<'_>,
    rng: &mut R,
) -> Result<ChannelAudit, PlatformError>
where
    P: VideoPlatform + ?Sized,
    R: RandomSource + ?Sized,
{
    let channel_id = channel_id.trim();
    if !channel_id.starts_with(CHANNEL_PREFIX) {
        return Err(PlatformError::InvalidChannel(channel_id.to_string()));
    }

    let channel = platform.channel(channel_id)?;
    let uploads = platform.recent_uploads(&channel, AUDIT_UPLOADS)?;
    info!("Auditing {} uploads of '{}'", uploads.len(), channel.title);

    Ok(audit_titles(scorer, generator, channel, uploads, rng))
}
