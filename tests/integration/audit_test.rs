//! Channel audit tests

use tubeseo::core::models::{Grade, ReferenceData, Recommendation};
use tubeseo::core::ports::PlatformError;
use tubeseo::core::services::audit::{AUDIT_UPLOADS, audit_titles};
use tubeseo::core::services::{SuggestionGenerator, TitleScorer, audit_channel};

use crate::common::fixtures::{YEAR, channel, upload};
use crate::common::mocks::{MockPlatform, SequenceRandom};

#[test]
fn test_audit_scores_each_upload() {
    let reference = ReferenceData::builtin();
    let scorer = TitleScorer::new(&reference, YEAR);
    let generator = SuggestionGenerator::new(&reference, YEAR);
    let uploads = vec![
        upload("7 SECRET Jazz Tips? (2025) 🔥"),
        upload("jazz"),
    ];
    let platform = MockPlatform::new().with_channel(channel(), uploads);

    let audit = audit_channel(
        &platform,
        "UC1234567890",
        &scorer,
        &generator,
        &mut SequenceRandom::zeros(),
    )
    .unwrap();

    assert_eq!(audit.channel.title, "Jazz Corner");
    assert_eq!(audit.videos.len(), 2);

    // keyword is the first token: "7"
    let strong = &audit.videos[0];
    assert_eq!(strong.keyword, "7");
    assert_eq!(strong.score, 85);
    assert_eq!(strong.grade, Grade::A);
    assert!(strong.suggestions.is_empty());

    let weak = &audit.videos[1];
    assert_eq!(weak.keyword, "jazz");
    assert_eq!(weak.score, 30);
    assert_eq!(weak.grade, Grade::C);
    assert_eq!(weak.suggestions.len(), 2);

    assert!((audit.average_score - 57.5).abs() < f64::EPSILON);
    assert!((audit.improvement_potential - 42.5).abs() < f64::EPSILON);
    assert_eq!(audit.well_optimized, 1);
    assert_eq!(audit.recommendation, Recommendation::NeedsWork);
}

#[test]
fn test_audit_rejects_non_channel_ids() {
    let reference = ReferenceData::builtin();
    let platform = MockPlatform::new().with_channel(channel(), Vec::new());

    let result = audit_channel(
        &platform,
        "@jazzcorner",
        &TitleScorer::new(&reference, YEAR),
        &SuggestionGenerator::new(&reference, YEAR),
        &mut SequenceRandom::zeros(),
    );

    assert!(matches!(result, Err(PlatformError::InvalidChannel(_))));
}

#[test]
fn test_audit_unknown_channel() {
    let reference = ReferenceData::builtin();
    let platform = MockPlatform::new();

    let result = audit_channel(
        &platform,
        "UCmissing",
        &TitleScorer::new(&reference, YEAR),
        &SuggestionGenerator::new(&reference, YEAR),
        &mut SequenceRandom::zeros(),
    );

    assert!(matches!(result, Err(PlatformError::ChannelNotFound(_))));
}

#[test]
fn test_audit_fetches_at_most_ten_uploads() {
    let reference = ReferenceData::builtin();
    let uploads = (0..15).map(|i| upload(&format!("Upload {i}"))).collect();
    let platform = MockPlatform::new().with_channel(channel(), uploads);

    let audit = audit_channel(
        &platform,
        "UC1234567890",
        &TitleScorer::new(&reference, YEAR),
        &SuggestionGenerator::new(&reference, YEAR),
        &mut SequenceRandom::zeros(),
    )
    .unwrap();

    assert_eq!(audit.videos.len(), AUDIT_UPLOADS as usize);
}

#[test]
fn test_empty_audit() {
    let reference = ReferenceData::builtin();
    let audit = audit_titles(
        &TitleScorer::new(&reference, YEAR),
        &SuggestionGenerator::new(&reference, YEAR),
        channel(),
        Vec::new(),
        &mut SequenceRandom::zeros(),
    );
    assert!(audit.videos.is_empty());
    assert!(audit.average_score.abs() < f64::EPSILON);
    assert_eq!(audit.recommendation, Recommendation::NeedsWork);
}
