//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{
    ChannelAudit, Finding, Grade, KeywordReport, Recommendation, ReferenceData, ReferenceOrigin,
    ScoreReport, Severity, TitleCandidate, TrendReport,
};
use crate::core::services::Optimization;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A command result that can be printed in either mode
pub trait Render: Serialize {
    /// Human-readable text
    fn human(&self) -> String;

    /// Pretty-printed JSON
    fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Print the result based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => println!("{}", self.json()),
        }
    }
}

/// Result of scoring a single title
#[derive(Debug, Serialize)]
pub struct ScoreResult {
    /// The scored title
    pub title: String,
    /// Keyword it was scored against
    pub keyword: String,
    /// Letter grade
    pub grade: Grade,
    /// Score and findings
    #[serde(flatten)]
    pub report: ScoreReport,
}

impl ScoreResult {
    /// Wrap a report for output
    #[must_use]
    pub fn new(title: &str, keyword: &str, report: ScoreReport) -> Self {
        Self {
            title: title.to_string(),
            keyword: keyword.trim().to_string(),
            grade: report.grade(),
            report,
        }
    }
}

/// Generated alternative titles
#[derive(Debug, Serialize)]
pub struct SuggestResult {
    /// Title the alternatives are based on
    pub title: String,
    /// Target keyword
    pub keyword: String,
    /// One candidate per template
    pub candidates: Vec<TitleCandidate>,
}

/// Generated tags
#[derive(Debug, Serialize)]
pub struct TagsResult {
    /// Tags in priority order
    pub tags: Vec<String>,
}

/// Generated description
#[derive(Debug, Serialize)]
pub struct DescriptionResult {
    /// Description text
    pub description: String,
}

/// Summary of the loaded reference tables
#[derive(Debug, Serialize)]
pub struct ReferenceSummary {
    /// Where the power words came from
    pub origin: ReferenceOrigin,
    /// Power words
    pub power_words: Vec<String>,
    /// Viral emojis
    pub viral_emojis: Vec<String>,
    /// Stop words
    pub stop_words: Vec<String>,
}

impl From<&ReferenceData> for ReferenceSummary {
    fn from(data: &ReferenceData) -> Self {
        Self {
            origin: data.origin(),
            power_words: data.power_words().to_vec(),
            viral_emojis: data.viral_emojis().to_vec(),
            stop_words: data.stop_words().to_vec(),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

// =============================================================================
// Formatting helpers
// =============================================================================

fn paint(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Success => text.green(),
        Severity::Warning => text.yellow(),
        Severity::Info => text.cyan(),
        Severity::Error => text.red(),
    }
}

const fn grade_severity(grade: Grade) -> Severity {
    match grade {
        Grade::A => Severity::Success,
        Grade::B => Severity::Warning,
        Grade::C => Severity::Error,
    }
}

const fn recommendation_severity(recommendation: Recommendation) -> Severity {
    match recommendation {
        Recommendation::Excellent => Severity::Success,
        Recommendation::Good => Severity::Warning,
        Recommendation::NeedsWork => Severity::Error,
    }
}

fn finding_line(finding: &Finding) -> String {
    format!("  {} {}", finding.severity.icon(), paint(finding.severity, &finding.message))
}

fn score_line(score: u8) -> String {
    let grade = Grade::from_score(score);
    let text = format!("{score}/100 ({grade}: {})", grade.verdict());
    paint(grade_severity(grade), &text).bold().to_string()
}

/// Format a count with thousands separators
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 { value.round() as u64 } else { 0 }
}

// =============================================================================
// Renderers
// =============================================================================

impl Render for ScoreResult {
    fn human(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Title:".bold(), self.title),
            format!("{} {}", "Score:".bold(), score_line(self.report.score)),
            String::new(),
        ];
        lines.extend(self.report.findings.iter().map(finding_line));
        lines.join("\n")
    }
}

impl Render for SuggestResult {
    fn human(&self) -> String {
        if self.candidates.is_empty() {
            return "No suggestions.".to_string();
        }
        let mut lines = vec![format!("Suggestions for '{}':", self.keyword), String::new()];
        lines.extend(
            self.candidates
                .iter()
                .enumerate()
                .map(|(i, c)| format!("  {}. [{}] {}", i + 1, c.template, c.title)),
        );
        lines.join("\n")
    }
}

impl Render for TagsResult {
    fn human(&self) -> String {
        self.tags.join(", ")
    }
}

impl Render for DescriptionResult {
    fn human(&self) -> String {
        self.description.clone()
    }
}

impl Render for Optimization {
    fn human(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Title:".bold(), self.title),
            format!("{} {}", "Score:".bold(), score_line(self.report.score)),
            String::new(),
        ];
        lines.extend(self.report.findings.iter().map(finding_line));

        if !self.candidates.is_empty() {
            lines.push(String::new());
            lines.push("Suggested titles:".bold().to_string());
            for scored in &self.candidates {
                let marker = if scored.better { "↑".green() } else { " ".normal() };
                lines.push(format!(
                    "  {marker} {:>3}  {}",
                    scored.score, scored.candidate.title
                ));
            }
        }

        lines.push(String::new());
        lines.push("Tags:".bold().to_string());
        lines.push(format!("  {}", self.tags.join(", ")));
        lines.push(String::new());
        lines.push("Description:".bold().to_string());
        lines.push(self.description.clone());
        lines.join("\n")
    }
}

impl Render for KeywordReport {
    fn human(&self) -> String {
        let ease = self.difficulty.ease();
        let mut lines = vec![
            format!("{} {}", "Keyword:".bold(), self.keyword),
            format!("  Videos analyzed:    {}", self.total_videos),
            format!("  Median views:       {}", group_thousands(whole(self.median_views))),
            format!("  Average views:      {}", group_thousands(whole(self.average_views))),
            format!("  Avg engagement:     {:.2}%", self.average_engagement),
            format!("  Difficulty:         {} (ease {ease}/100)", self.difficulty),
            format!("  Opportunity score:  {}/100", self.opportunity_score),
        ];
        if let Some(window) = self.best_upload_window {
            lines.push(format!("  Best upload time:   {window}"));
        }
        lines.push(format!("  {}", self.tip().cyan()));

        if !self.trending_tags.is_empty() {
            lines.push(String::new());
            lines.push("Trending tags:".bold().to_string());
            lines.push(format!("  {}", self.trending_tags.join(", ")));
        }

        if !self.competitors.is_empty() {
            lines.push(String::new());
            lines.push("Top competitors:".bold().to_string());
            for video in self.competitors.iter().take(10) {
                lines.push(format!(
                    "  {:>12}  {}  ({})",
                    group_thousands(video.views),
                    video.title,
                    video.channel_title
                ));
            }
        }
        lines.join("\n")
    }
}

impl Render for TrendReport {
    fn human(&self) -> String {
        let mut lines = vec![format!(
            "{} {} ({} videos this week)",
            "Niche:".bold(),
            self.niche,
            self.total_videos
        )];

        lines.push(String::new());
        lines.push("Trending keywords:".bold().to_string());
        lines.extend(self.keywords.iter().map(|k| format!("  {:<20} {}", k.term, k.count)));

        if !self.tags.is_empty() {
            lines.push(String::new());
            lines.push("Hot tags:".bold().to_string());
            lines.extend(self.tags.iter().map(|t| format!("  {:<20} {}", t.term, t.count)));
        }

        if !self.top_videos.is_empty() {
            lines.push(String::new());
            lines.push("Top videos:".bold().to_string());
            lines.extend(self.top_videos.iter().map(|v| {
                format!("  {:>12}  {}", group_thousands(v.views), v.title)
            }));
        }
        lines.join("\n")
    }
}

impl Render for ChannelAudit {
    fn human(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Channel:".bold(), self.channel.title),
            format!("  Subscribers:  {}", group_thousands(self.channel.subscribers)),
            format!("  Total views:  {}", group_thousands(self.channel.views)),
            format!("  Videos:       {}", group_thousands(self.channel.video_count)),
            String::new(),
            "Recent videos:".bold().to_string(),
        ];

        for video in &self.videos {
            let date = video
                .upload
                .published_at
                .map_or_else(String::new, |t| t.format("%Y-%m-%d").to_string());
            lines.push(format!("  {}  {}", date, video.upload.title));
            lines.push(format!("      SEO score: {}", score_line(video.score)));
            for suggestion in &video.suggestions {
                lines.push(format!("      {} {}", Severity::Info.icon(), suggestion.title));
            }
        }

        if !self.videos.is_empty() {
            let tier = recommendation_severity(self.recommendation);
            lines.push(String::new());
            lines.push("Summary:".bold().to_string());
            lines.push(format!("  Average SEO score:      {:.0}/100", self.average_score.trunc()));
            lines.push(format!(
                "  Well-optimized videos:  {}/{}",
                self.well_optimized,
                self.videos.len()
            ));
            lines.push(format!(
                "  Improvement potential:  +{:.0}%",
                self.improvement_potential.trunc()
            ));
            lines.push(format!("  {} {}", tier.icon(), paint(tier, self.recommendation.message())));
        }
        lines.join("\n")
    }
}

impl Render for ReferenceSummary {
    fn human(&self) -> String {
        let origin = match self.origin {
            ReferenceOrigin::Online => "online".green(),
            ReferenceOrigin::Builtin => "built-in".yellow(),
        };
        [
            format!("{} {origin}", "Power words:".bold()),
            format!("  {}", self.power_words.join(", ")),
            format!("{} {}", "Viral emojis:".bold(), self.viral_emojis.join(" ")),
            format!("{} {}", "Stop words:".bold(), self.stop_words.join(", ")),
        ]
        .join("\n")
    }
}

impl Render for OperationResult {
    fn human(&self) -> String {
        self.message.clone()
    }
}
