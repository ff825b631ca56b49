//! Title optimization flow
//!
//! Scores a title, proposes alternatives when it falls short, and ranks
//! them against the original. Also assembles tags and a description.

use serde::Serialize;

use crate::core::models::{CompetitorSample, ScoreReport, ScoredCandidate, TitleCandidate};
use crate::core::ports::RandomSource;

use super::description::generate_description;
use super::metrics::{REPORT_TRENDING_TAGS, trending_tags};
use super::scorer::TitleScorer;
use super::suggester::SuggestionGenerator;
use super::tags::generate_tags;

/// Titles scoring below this get alternatives
pub const DEFAULT_SUGGESTION_THRESHOLD: u8 = 85;

/// Everything the optimizer produces for one title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Optimization {
    /// The title as given
    pub title: String,
    /// Keyword it was scored against
    pub keyword: String,
    /// Score of the original title
    pub report: ScoreReport,
    /// Alternatives, best first; empty when none were needed
    pub candidates: Vec<ScoredCandidate>,
    /// Suggested tags
    pub tags: Vec<String>,
    /// Suggested description
    pub description: String,
}

/// Tunables for [`optimize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeOptions<'a> {
    /// Score below which alternatives are generated
    pub threshold: u8,
    /// Video length as `MM:SS`
    pub video_length: &'a str,
}

impl Default for OptimizeOptions<'_> {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SUGGESTION_THRESHOLD,
            video_length: super::description::DEFAULT_VIDEO_LENGTH,
        }
    }
}

/// Score candidates against the original score, best first.
///
/// Equal scores keep template order.
#[must_use]
pub fn rank_candidates(
    scorer: &TitleScorer<'_>,
    keyword: &str,
    original_score: u8,
    candidates: Vec<TitleCandidate>,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let score = scorer.score(&candidate.title, keyword).score;
            ScoredCandidate {
                candidate,
                score,
                better: score > original_score,
            }
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Run the full optimization flow for one title
pub fn optimize<R: RandomSource + ?Sized>(
    scorer: &TitleScorer<'_>,
    generator: &SuggestionGenerator<'_>,
    title: &str,
    keyword: &str,
    competitors: &CompetitorSample,
    options: OptimizeOptions<'_>,
    rng: &mut R,
) -> Optimization {
    let keyword = keyword.trim();
    let report = scorer.score(title, keyword);

    let candidates = if report.score < options.threshold && !keyword.is_empty() {
        let generated = generator.suggest(title, keyword, competitors, rng);
        rank_candidates(scorer, keyword, report.score, generated)
    } else {
        Vec::new()
    };

    let trending = trending_tags(competitors, REPORT_TRENDING_TAGS);
    let tags = generate_tags(title, keyword, &trending, scorer.reference(), scorer.year());
    let description =
        generate_description(title, keyword, &tags, options.video_length, scorer.year());

    Optimization {
        title: title.to_string(),
        keyword: keyword.to_string(),
        report,
        candidates,
        tags,
        description,
    }
}
