//! Title scorer tests

use tubeseo::core::models::{Aspect, Grade, ReferenceData, Severity};
use tubeseo::core::services::TitleScorer;

use crate::common::fixtures::YEAR;

#[test]
fn test_well_built_title() {
    let reference = ReferenceData::builtin();
    let report = TitleScorer::new(&reference, YEAR).score("7 SECRET Jazz Tips? (2025) 🔥", "jazz");

    // 28 chars: too short
    assert_eq!(report.breakdown.length, 10);
    assert_eq!(report.breakdown.keyword, 15);
    assert_eq!(report.breakdown.power_words, 15);
    assert_eq!(report.breakdown.numbers, 15);
    assert_eq!(report.breakdown.emoji, 10);
    assert_eq!(report.breakdown.structure, 15);
    assert_eq!(report.breakdown.penalty, 0);
    assert_eq!(report.score, 80);
    assert_eq!(report.grade(), Grade::A);
}

#[test]
fn test_plain_how_to_title() {
    let reference = ReferenceData::builtin();
    let title = "How to Bake Sourdough Bread at Home for Beginners";
    let report = TitleScorer::new(&reference, YEAR).score(title, "sourdough");

    assert_eq!(report.breakdown.length, 25);
    assert_eq!(report.breakdown.keyword, 15);
    assert_eq!(report.breakdown.power_words, 15);
    assert_eq!(report.score, 55);
    assert_eq!(report.grade(), Grade::C);

    let power = report.findings.iter().find(|f| f.aspect == Aspect::PowerWords).unwrap();
    assert!(power.message.contains("how to"));
}

#[test]
fn test_no_keyword_gets_keyword_points_without_finding() {
    let reference = ReferenceData::builtin();
    let report = TitleScorer::new(&reference, YEAR).score("Sleep Music", "");
    assert_eq!(report.score, 30);
    assert!(report.findings.iter().all(|f| f.aspect != Aspect::Keyword));
}

#[test]
fn test_missing_keyword_is_an_error() {
    let reference = ReferenceData::builtin();
    let report = TitleScorer::new(&reference, YEAR).score("Sleep Music", "lullaby");
    let finding = report.findings.iter().find(|f| f.aspect == Aspect::Keyword).unwrap();
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(report.score, 10);
}

#[test]
fn test_keyword_is_case_insensitive() {
    let reference = ReferenceData::builtin();
    let scorer = TitleScorer::new(&reference, YEAR);
    assert_eq!(
        scorer.score("LOFI beats to relax", "lofi").breakdown.keyword,
        scorer.score("lofi beats to relax", "LoFi").breakdown.keyword
    );
}

#[test]
fn test_all_caps_title_is_penalized() {
    let reference = ReferenceData::builtin();
    let scorer = TitleScorer::new(&reference, YEAR);
    let shouting = scorer.score("BEST JAZZ MUSIC FOR STUDYING AND WORK", "jazz");
    let normal = scorer.score("Best Jazz Music for Studying and Work", "jazz");
    assert_eq!(shouting.breakdown.penalty, 10);
    assert_eq!(shouting.score + 10, normal.score);
    assert_eq!(shouting.findings.last().unwrap().aspect, Aspect::Caps);
}

#[test]
fn test_digits_only_title_is_not_all_caps() {
    let reference = ReferenceData::builtin();
    let report = TitleScorer::new(&reference, YEAR).score("2025 123", "");
    assert_eq!(report.breakdown.penalty, 0);
}

#[test]
fn test_other_year_earns_no_bonus() {
    let reference = ReferenceData::builtin();
    let report = TitleScorer::new(&reference, YEAR).score("Jazz Mix 2019", "jazz");
    assert_eq!(report.breakdown.structure, 0);
    assert_eq!(report.breakdown.numbers, 15);
}

#[test]
fn test_online_power_words_are_used() {
    let reference = ReferenceData::with_power_words(vec!["Cozy".to_string()]);
    let scorer = TitleScorer::new(&reference, YEAR);
    assert_eq!(scorer.score("Cozy jazz evening", "jazz").breakdown.power_words, 15);
    assert_eq!(scorer.score("Secret jazz evening", "jazz").breakdown.power_words, 0);
}
