//! Suggestion generator - builds alternative titles from fixed templates
//!
//! Each template is filled with the title's theme, the keyword, a power
//! word, an emoji, a hook number and the year. The theme segment is
//! truncated so every candidate fits the title budget.

use serde::{Deserialize, Serialize};

use crate::core::models::{CompetitorSample, ReferenceData, TemplateKind, TitleCandidate};
use crate::core::ports::{RandomSource, pick};

use super::budget::SegmentBudget;
use super::text::{
    char_len, clean_tokens, collapse_whitespace, digit_runs, remove_case_insensitive,
    strip_separators, title_case,
};

/// Maximum length of a generated title, in chars
pub const TITLE_BUDGET: usize = 100;

/// Theme used when nothing meaningful is left of the original title
pub const FALLBACK_THEME: &str = "Complete Guide";

/// A keyword-stripped remainder shorter than this is not a usable theme
const MIN_THEME_LEN: usize = 3;

/// Tokens kept when rebuilding a theme from title words
const THEME_TOKENS: usize = 5;

const HOOK_NUMBERS: &[&str] = &["5", "7", "10"];
const COMPETITOR_HOOK_NUMBERS: &[&str] = &["5", "7", "10", "15"];

/// The trend signals interpolated into every template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSignals {
    /// Power word, upper-cased
    pub power_word: String,
    /// Emoji
    pub emoji: String,
    /// Hook number
    pub number: String,
}

/// Generates alternative titles
#[derive(Debug, Clone, Copy)]
pub struct SuggestionGenerator<'a> {
    reference: &'a ReferenceData,
    year: i32,
    budget: SegmentBudget,
}

impl<'a> SuggestionGenerator<'a> {
    /// Generator using `reference` that treats `year` as the current year
    #[must_use]
    pub const fn new(reference: &'a ReferenceData, year: i32) -> Self {
        Self {
            reference,
            year,
            budget: SegmentBudget::new(TITLE_BUDGET),
        }
    }

    /// Generate one candidate per template, in template order.
    ///
    /// `competitors` may be empty; when present, the top result's numbers
    /// and power words override the random picks.
    pub fn suggest<R: RandomSource + ?Sized>(
        &self,
        original_title: &str,
        keyword: &str,
        competitors: &CompetitorSample,
        rng: &mut R,
    ) -> Vec<TitleCandidate> {
        let theme = extract_theme(original_title, keyword, self.reference);
        let signals = self.select_signals(competitors, rng);
        self.instantiate(keyword, &theme, &signals)
    }

    /// Pick the power word, emoji and hook number.
    ///
    /// Draws happen in that order regardless of overrides, so a seeded
    /// source yields the same emoji with or without competitors.
    pub fn select_signals<R: RandomSource + ?Sized>(
        &self,
        competitors: &CompetitorSample,
        rng: &mut R,
    ) -> TrendSignals {
        let mut power_word = pick(rng, self.reference.power_words())
            .map_or_else(String::new, |w| w.to_uppercase());
        let emoji = pick(rng, self.reference.viral_emojis()).cloned().unwrap_or_default();

        let pool = if competitors.is_empty() {
            HOOK_NUMBERS
        } else {
            COMPETITOR_HOOK_NUMBERS
        };
        let mut number = pick(rng, pool).map_or_else(String::new, |n| (*n).to_string());

        if let Some(top) = competitors.first() {
            if let Some(first) = digit_runs(&top.title).first() {
                number = (*first).to_string();
            }
            if let Some(word) = self.reference.power_words_in(&top.title).first() {
                power_word = word.to_uppercase();
            }
        }

        TrendSignals {
            power_word,
            emoji,
            number,
        }
    }

    /// Fill every template with the given theme and signals
    #[must_use]
    pub fn instantiate(
        &self,
        keyword: &str,
        theme: &str,
        signals: &TrendSignals,
    ) -> Vec<TitleCandidate> {
        let slots = Slots {
            keyword: title_case(keyword.trim()),
            power: &signals.power_word,
            emoji: &signals.emoji,
            number: &signals.number,
            year: self.year,
        };

        TemplateKind::ALL
            .into_iter()
            .map(|template| {
                let themed = if title_cases_theme(template) {
                    title_case(theme)
                } else {
                    theme.to_string()
                };
                let rendered = self.budget.fit(&themed, |t| render(template, &slots, t));
                TitleCandidate {
                    template,
                    title: collapse_whitespace(&rendered),
                }
            })
            .collect()
    }
}

/// The semantic remainder of `title` once `keyword` is removed.
///
/// Falls back to the first few non-stop-word title tokens when the
/// remainder is too short or only punctuation, and to [`FALLBACK_THEME`]
/// when none survive.
#[must_use]
pub fn extract_theme(title: &str, keyword: &str, reference: &ReferenceData) -> String {
    let keyword = keyword.trim();
    let remainder = remove_case_insensitive(title, keyword);
    let remainder = collapse_whitespace(strip_separators(&remainder));
    if remainder.chars().any(char::is_alphanumeric) && char_len(&remainder) >= MIN_THEME_LEN {
        return remainder;
    }

    let keyword_lower = keyword.to_lowercase();
    let keyword_tokens = clean_tokens(keyword);
    let tokens: Vec<String> = clean_tokens(title)
        .into_iter()
        .filter(|t| !reference.is_stop_word(t))
        .filter(|t| *t != keyword_lower && !keyword_tokens.contains(t))
        .take(THEME_TOKENS)
        .collect();

    if tokens.is_empty() {
        FALLBACK_THEME.to_string()
    } else {
        title_case(&tokens.join(" "))
    }
}

struct Slots<'s> {
    keyword: String,
    power: &'s str,
    emoji: &'s str,
    number: &'s str,
    year: i32,
}

const fn title_cases_theme(template: TemplateKind) -> bool {
    matches!(
        template,
        TemplateKind::Listicle | TemplateKind::HowTo | TemplateKind::Tutorial
    )
}

fn render(template: TemplateKind, s: &Slots<'_>, theme: &str) -> String {
    let Slots {
        keyword,
        power,
        emoji,
        number,
        year,
    } = s;
    match template {
        TemplateKind::Listicle => {
            format!("{emoji} {number} {keyword} {power} Tips You NEED to Know - {theme} ({year})")
        },
        TemplateKind::HowTo => format!("How to {keyword}: {power} Guide | {theme} {year} {emoji}"),
        TemplateKind::Tutorial => {
            format!("{keyword} Tutorial - {theme} | {power} Strategy {year} {emoji}")
        },
        TemplateKind::Benefit => format!("{theme} | {keyword} {power} Tips [{year}] {emoji}"),
        TemplateKind::Question => {
            format!("Is This the {power} {keyword}? {theme} [{number} Tips {year}] {emoji}")
        },
    }
}
