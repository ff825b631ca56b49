//! Business logic services
//!
//! Scoring, generation and analysis over domain models. Everything except
//! the orchestration helpers in [`research`], [`trends`] and [`audit`] is
//! pure; those reach the platform only through the
//! [`VideoPlatform`](super::ports::VideoPlatform) port.
//!
//! - [`scorer`] - Score a title
//! - [`suggester`] - Generate alternative titles
//! - [`tags`] / [`description`] - Upload metadata
//! - [`metrics`] - Statistics over competitor videos
//! - [`optimize`] - Score, suggest and rank in one pass

pub mod audit;
pub mod budget;
pub mod description;
pub mod metrics;
pub mod optimize;
pub mod research;
pub mod scorer;
pub mod suggester;
pub mod tags;
pub mod text;
pub mod trends;

pub use audit::{audit_channel, audit_titles};
pub use budget::SegmentBudget;
pub use description::{DEFAULT_VIDEO_LENGTH, TimestampLadder, generate_description};
pub use metrics::{opportunity_score, summarize};
pub use optimize::{
    DEFAULT_SUGGESTION_THRESHOLD, OptimizeOptions, Optimization, optimize, rank_candidates,
};
pub use research::{ResearchSettings, research_keyword};
pub use scorer::TitleScorer;
pub use suggester::{SuggestionGenerator, TITLE_BUDGET, TrendSignals, extract_theme};
pub use tags::{MAX_TAGS, generate_tags};
pub use text::truncate;
pub use trends::{find_trends, trend_insights};
