//! Suggestion generator tests

use tubeseo::core::models::{ReferenceData, TemplateKind, VideoRecord};
use tubeseo::core::services::{SuggestionGenerator, TITLE_BUDGET, extract_theme};

use crate::common::fixtures::{YEAR, jazz_competitors};
use crate::common::mocks::SequenceRandom;

fn titles(candidates: &[tubeseo::core::models::TitleCandidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.title.as_str()).collect()
}

#[test]
fn test_all_templates_with_first_picks() {
    let reference = ReferenceData::builtin();
    let generator = SuggestionGenerator::new(&reference, YEAR);
    let mut rng = SequenceRandom::zeros();
    let candidates = generator.suggest("Relaxing Jazz for Studying", "jazz", &[], &mut rng);

    assert_eq!(
        titles(&candidates),
        vec![
            "🔥 5 Jazz SECRET Tips You NEED to Know - Relaxing For Studying (2025)",
            "How to Jazz: SECRET Guide | Relaxing For Studying 2025 🔥",
            "Jazz Tutorial - Relaxing For Studying | SECRET Strategy 2025 🔥",
            "Relaxing for Studying | Jazz SECRET Tips [2025] 🔥",
            "Is This the SECRET Jazz? Relaxing for Studying [5 Tips 2025] 🔥",
        ]
    );
    let kinds: Vec<TemplateKind> = candidates.iter().map(|c| c.template).collect();
    assert_eq!(kinds, TemplateKind::ALL.to_vec());
}

#[test]
fn test_three_draws_per_call() {
    let reference = ReferenceData::builtin();
    let generator = SuggestionGenerator::new(&reference, YEAR);
    let mut rng = SequenceRandom::zeros();
    generator.suggest("Jazz", "jazz", &[], &mut rng);
    assert_eq!(rng.draws(), 3);
    generator.suggest("Jazz", "jazz", &jazz_competitors(), &mut rng);
    assert_eq!(rng.draws(), 6);
}

#[test]
fn test_emoji_draw_is_independent_of_competitors() {
    let reference = ReferenceData::builtin();
    let generator = SuggestionGenerator::new(&reference, YEAR);
    let plain = generator.select_signals(&[], &mut SequenceRandom::new(&[4, 7, 1]));
    let steered =
        generator.select_signals(&jazz_competitors(), &mut SequenceRandom::new(&[4, 7, 1]));
    assert_eq!(plain.emoji, steered.emoji);
    assert_eq!(plain.emoji, "⚡");
}

#[test]
fn test_competitor_number_pool_includes_fifteen() {
    let reference = ReferenceData::builtin();
    let generator = SuggestionGenerator::new(&reference, YEAR);
    // Top competitor has no digits, so the drawn number survives
    let competitors = vec![VideoRecord::titled("Smooth Jazz Evening")];
    let signals = generator.select_signals(&competitors, &mut SequenceRandom::new(&[0, 0, 3]));
    assert_eq!(signals.number, "15");
    // and no power word either, so the draw is kept
    assert_eq!(signals.power_word, "SECRET");
}

#[test]
fn test_long_theme_is_truncated_on_word_boundary() {
    let reference = ReferenceData::builtin();
    let generator = SuggestionGenerator::new(&reference, YEAR);
    let title = format!("jazz {}", "wonderfully soothing evening melodies ".repeat(5));
    let candidates = generator.suggest(&title, "jazz", &[], &mut SequenceRandom::zeros());
    for candidate in &candidates {
        assert!(candidate.title.chars().count() <= TITLE_BUDGET, "{}", candidate.title);
        assert!(candidate.title.contains("..."), "{}", candidate.title);
    }
}

#[test]
fn test_theme_from_title_tokens_when_remainder_is_short() {
    let reference = ReferenceData::builtin();
    assert_eq!(extract_theme("Jazz", "jazz", &reference), "Complete Guide");
    assert_eq!(extract_theme("lo-fi jazz", "lo-fi jazz", &reference), "Complete Guide");
    assert_eq!(extract_theme("Piano Jazz", "Piano Jazz", &reference), "Complete Guide");
}

#[test]
fn test_theme_strips_separators() {
    let reference = ReferenceData::builtin();
    assert_eq!(extract_theme("Jazz | Rainy Night Vibes", "jazz", &reference), "Rainy Night Vibes");
}

#[test]
fn test_theme_from_surviving_title_tokens() {
    let reference = ReferenceData::builtin();
    assert_eq!(extract_theme("Jazz ab", "jazz", &reference), "Ab");
    // "jazz" is cut out of "Jazzy" too, leaving only "y"
    assert_eq!(extract_theme("Jazz Jazzy", "jazz", &reference), "Jazzy");
}

#[test]
fn test_token_theme_skips_stop_words_and_keyword_and_is_capped() {
    let reference = ReferenceData::builtin();
    let title = "Lala a la Lalala Lalalala Lalalalala Lalalalalala Lalalalalalala";
    assert_eq!(
        extract_theme(title, "la", &reference),
        "Lala Lalala Lalalala Lalalalala Lalalalalala"
    );
}

#[test]
fn test_punctuation_remainder_is_not_a_theme() {
    let reference = ReferenceData::builtin();
    let generator = SuggestionGenerator::new(&reference, YEAR);
    let candidates =
        generator.suggest("Lullaby ???", "lullaby", &[], &mut SequenceRandom::zeros());
    for candidate in &candidates {
        assert!(!candidate.title.contains("???"), "{}", candidate.title);
    }
    assert!(titles(&candidates).iter().any(|t| t.contains("Complete Guide")));
}
