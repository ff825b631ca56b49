//! Domain models for tubeseo
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ScoreReport`] - A title's score and its checklist
//! - [`Finding`] - One checklist line
//! - [`Severity`] - How a finding is presented
//! - [`ReferenceData`] - Power words, viral emoji and stop words
//! - [`VideoRecord`] - A competitor video
//! - [`TitleCandidate`] - A generated alternative title

mod candidate;
mod channel;
mod finding;
mod insight;
mod reference;
mod report;
mod sample;
mod severity;

pub use candidate::{ScoredCandidate, TemplateKind, TitleCandidate};
pub use channel::{AuditedVideo, ChannelAudit, ChannelProfile, Recommendation, UploadRecord};
pub use finding::{Aspect, Finding};
pub use insight::{Difficulty, KeywordReport, TermCount, TrendReport, UploadWindow};
pub use reference::{
    FALLBACK_POWER_WORDS, ReferenceData, ReferenceOrigin, STOP_WORDS, VIRAL_EMOJIS,
};
pub use report::{Grade, MAX_SCORE, ScoreBreakdown, ScoreReport};
pub use sample::{CompetitorSample, VideoRecord};
pub use severity::Severity;
