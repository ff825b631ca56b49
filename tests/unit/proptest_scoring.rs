//! Property-based tests for scoring and generation
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use tubeseo::core::models::{ReferenceData, TemplateKind};
use tubeseo::core::services::{MAX_TAGS, SuggestionGenerator, TITLE_BUDGET, TitleScorer};
use tubeseo::core::services::{generate_tags, truncate};

use crate::common::fixtures::YEAR;
use crate::common::mocks::SequenceRandom;

proptest! {
    /// Scores never leave 0..=100
    #[test]
    fn score_is_bounded(title in "\\PC{0,150}", keyword in "\\PC{0,20}") {
        let reference = ReferenceData::builtin();
        let report = TitleScorer::new(&reference, YEAR).score(&title, &keyword);
        prop_assert!(report.score <= 100);
    }

    /// Same input, same report
    #[test]
    fn scoring_is_deterministic(title in "\\PC{0,120}", keyword in "[a-z ]{0,15}") {
        let reference = ReferenceData::builtin();
        let scorer = TitleScorer::new(&reference, YEAR);
        prop_assert_eq!(scorer.score(&title, &keyword), scorer.score(&title, &keyword));
    }

    /// Whitespace-only titles always score zero
    #[test]
    fn blank_title_scores_zero(title in "[ \\t\\n]{0,10}", keyword in "[a-z]{0,10}") {
        let reference = ReferenceData::builtin();
        prop_assert_eq!(TitleScorer::new(&reference, YEAR).score(&title, &keyword).score, 0);
    }

    /// Truncation respects the budget
    #[test]
    fn truncate_fits(text in "\\PC{0,200}", max in 0usize..120) {
        prop_assert!(truncate(&text, max).chars().count() <= max);
    }

    /// One candidate per template, each within the title budget
    #[test]
    fn candidates_fit_budget(
        title in "[A-Za-z0-9 |:-]{0,300}",
        keyword in "[a-z]{1,12}",
        picks in proptest::collection::vec(0usize..100, 3),
    ) {
        let reference = ReferenceData::builtin();
        let generator = SuggestionGenerator::new(&reference, YEAR);
        let candidates = generator.suggest(&title, &keyword, &[], &mut SequenceRandom::new(&picks));
        prop_assert_eq!(candidates.len(), TemplateKind::ALL.len());
        for candidate in &candidates {
            prop_assert!(candidate.title.chars().count() <= TITLE_BUDGET);
            prop_assert!(!candidate.title.contains("  "));
        }
    }

    /// Tags are capped and unique
    #[test]
    fn tags_are_unique_and_capped(title in "[a-z ]{0,400}", keyword in "[a-z]{0,10}") {
        let reference = ReferenceData::builtin();
        let trending: Vec<String> = vec!["alpha".into(), "beta".into(), keyword.clone()];
        let tags = generate_tags(&title, &keyword, &trending, &reference, YEAR);
        prop_assert!(tags.len() <= MAX_TAGS);
        let mut deduped = tags.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), tags.len());
    }
}
