//! Title scorer - rates a title against a fixed SEO heuristic
//!
//! Pure function of (title, keyword, reference data, year). Components are
//! evaluated in a fixed order and each contributes at most one finding,
//! except the structural bonuses which may contribute several.

use crate::core::models::{Aspect, Finding, ReferenceData, ScoreBreakdown, ScoreReport};

use super::text::{char_len, digit_runs, is_all_caps};

const LENGTH_OPTIMAL: (usize, usize) = (40, 70);
const LENGTH_ACCEPTABLE: (usize, usize) = (30, 90);

const KEYWORD_AT_START: u8 = 20;
const KEYWORD_EARLY: u8 = 15;
const KEYWORD_PRESENT: u8 = 10;
/// Keyword must end within this many chars to count as "early"
const KEYWORD_EARLY_WINDOW: usize = 30;

const POWER_WORD_POINTS: u8 = 15;
const NUMBER_POINTS: u8 = 15;
const EMOJI_POINTS: u8 = 10;
const STRUCTURE_BONUS: u8 = 5;
const STRUCTURE_CAP: u8 = 15;
const ALL_CAPS_PENALTY: u8 = 10;

/// Power words quoted back in the finding
const POWER_WORDS_SHOWN: usize = 3;

/// Scores titles against the reference tables for a given year
#[derive(Debug, Clone, Copy)]
pub struct TitleScorer<'a> {
    reference: &'a ReferenceData,
    year: i32,
}

impl<'a> TitleScorer<'a> {
    /// Scorer using `reference` that treats `year` as the current year
    #[must_use]
    pub const fn new(reference: &'a ReferenceData, year: i32) -> Self {
        Self { reference, year }
    }

    /// The reference tables in use
    #[must_use]
    pub const fn reference(&self) -> &'a ReferenceData {
        self.reference
    }

    /// The year treated as current
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Score a title. An empty `keyword` earns the keyword points unconditionally.
    ///
    /// Never fails: an empty title scores 0 with a single error finding.
    #[must_use]
    pub fn score(&self, title: &str, keyword: &str) -> ScoreReport {
        if title.trim().is_empty() {
            return ScoreReport::from_breakdown(
                ScoreBreakdown::default(),
                vec![Finding::error(Aspect::Title, "Title is empty")],
            );
        }

        let mut findings = Vec::new();
        let mut breakdown = ScoreBreakdown::default();

        let (points, finding) = length_component(title);
        breakdown.length = points;
        findings.push(finding);

        let (points, finding) = keyword_component(title, keyword);
        breakdown.keyword = points;
        findings.extend(finding);

        let (points, finding) = self.power_word_component(title);
        breakdown.power_words = points;
        findings.push(finding);

        let (points, finding) = number_component(title);
        breakdown.numbers = points;
        findings.push(finding);

        let (points, finding) = self.emoji_component(title);
        breakdown.emoji = points;
        findings.push(finding);

        breakdown.structure = self.structure_component(title, &mut findings);

        if is_all_caps(title) {
            breakdown.penalty = ALL_CAPS_PENALTY;
            findings.push(Finding::error(
                Aspect::Caps,
                "ALL CAPS - looks spammy, use mixed case",
            ));
        }

        ScoreReport::from_breakdown(breakdown, findings)
    }

    fn power_word_component(&self, title: &str) -> (u8, Finding) {
        let found = self.reference.power_words_in(title);
        if found.is_empty() {
            (
                0,
                Finding::warning(
                    Aspect::PowerWords,
                    "No power words - add words like 'BEST', 'ULTIMATE', 'SECRET'",
                ),
            )
        } else {
            let shown: Vec<&str> = found.into_iter().take(POWER_WORDS_SHOWN).collect();
            (
                POWER_WORD_POINTS,
                Finding::success(
                    Aspect::PowerWords,
                    format!("Power words found: {}", shown.join(", ")),
                ),
            )
        }
    }

    fn emoji_component(&self, title: &str) -> (u8, Finding) {
        let found = self.reference.emojis_in(title);
        if found.is_empty() {
            (0, Finding::info(Aspect::Emoji, "Add an emoji - increases visibility in search"))
        } else {
            (
                EMOJI_POINTS,
                Finding::success(
                    Aspect::Emoji,
                    format!("Emoji used: {} - catches attention", found.join(" ")),
                ),
            )
        }
    }

    fn structure_component(&self, title: &str, findings: &mut Vec<Finding>) -> u8 {
        let mut bonus: u8 = 0;

        if title.contains('?') {
            bonus += STRUCTURE_BONUS;
            findings.push(Finding::success(Aspect::Structure, "Question format - creates curiosity"));
        }

        if title.contains('[') || title.contains('(') {
            bonus += STRUCTURE_BONUS;
            findings.push(Finding::success(
                Aspect::Structure,
                "Brackets used - adds context and increases CTR",
            ));
        }

        if title.contains(&self.year.to_string()) {
            bonus += STRUCTURE_BONUS;
            findings.push(Finding::success(
                Aspect::Structure,
                format!("Current year ({}) - signals fresh content", self.year),
            ));
        }

        bonus.min(STRUCTURE_CAP)
    }
}

fn length_component(title: &str) -> (u8, Finding) {
    let len = char_len(title);
    if (LENGTH_OPTIMAL.0..=LENGTH_OPTIMAL.1).contains(&len) {
        (25, Finding::success(Aspect::Length, format!("Perfect length ({len}/100) - sweet spot")))
    } else if (LENGTH_ACCEPTABLE.0..=LENGTH_ACCEPTABLE.1).contains(&len) {
        (20, Finding::warning(Aspect::Length, format!("Good length ({len}/100) - can improve")))
    } else if len < LENGTH_ACCEPTABLE.0 {
        (10, Finding::error(Aspect::Length, format!("Too short ({len}/100) - add more context")))
    } else {
        (5, Finding::error(Aspect::Length, format!("Too long ({len}/100) - will be cut off")))
    }
}

fn number_component(title: &str) -> (u8, Finding) {
    let numbers = digit_runs(title);
    if numbers.is_empty() {
        (0, Finding::info(Aspect::Numbers, "Add numbers - titles with numbers get more clicks"))
    } else {
        (
            NUMBER_POINTS,
            Finding::success(
                Aspect::Numbers,
                format!("Numbers used: {} - increases CTR", numbers.join(", ")),
            ),
        )
    }
}

fn keyword_component(title: &str, keyword: &str) -> (u8, Option<Finding>) {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return (KEYWORD_AT_START, None);
    }

    let lower = title.to_lowercase();
    let Some(pos) = lower.find(&keyword) else {
        return (
            0,
            Some(Finding::error(Aspect::Keyword, "Keyword missing - critical for ranking")),
        );
    };

    let not_alnum = |c: char| !c.is_ascii_alphanumeric();
    let title_core = lower.trim_start_matches(not_alnum);
    let keyword_core = match keyword.trim_start_matches(not_alnum) {
        "" => keyword.as_str(),
        core => core,
    };

    if title_core.starts_with(keyword_core) {
        return (
            KEYWORD_AT_START,
            Some(Finding::success(Aspect::Keyword, "Keyword at start - perfect for SEO")),
        );
    }

    let keyword_end = char_len(&lower[..pos]) + char_len(&keyword);
    if keyword_end <= KEYWORD_EARLY_WINDOW {
        (
            KEYWORD_EARLY,
            Some(Finding::success(
                Aspect::Keyword,
                format!("Keyword within the first {KEYWORD_EARLY_WINDOW} characters - good placement"),
            )),
        )
    } else {
        (
            KEYWORD_PRESENT,
            Some(Finding::warning(
                Aspect::Keyword,
                "Keyword present - move it to the start for better SEO",
            )),
        )
    }
}
