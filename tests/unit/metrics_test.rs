//! Competitor metrics tests

use tubeseo::core::models::{Difficulty, UploadWindow};
use tubeseo::core::services::metrics::{engagement_rate, trending_tags};
use tubeseo::core::services::{opportunity_score, summarize};

use crate::common::fixtures::{jazz_competitors, tagged};

#[test]
fn test_keyword_report_from_competitors() {
    let report = summarize("jazz", jazz_competitors());

    assert_eq!(report.total_videos, 4);
    assert!((report.median_views - 250_000.0).abs() < f64::EPSILON);
    assert!((report.average_views - 510_000.0).abs() < 1e-6);
    assert!((report.average_engagement - 6.0).abs() < 1e-9);
    assert_eq!(report.difficulty, Difficulty::Medium);
    assert_eq!(report.opportunity_score, 63);
    assert_eq!(report.trending_tags, vec!["jazz", "piano", "lesson", "relaxing jazz"]);
    assert_eq!(report.best_upload_window, Some(UploadWindow { hour: 15 }));
    assert!(report.tip().starts_with("Moderate"));
}

#[test]
fn test_competitors_keep_platform_order() {
    let report = summarize("jazz", jazz_competitors());
    assert_eq!(report.competitors[0].title, "12 Proven Jazz Tricks for Beginners");
    assert_eq!(report.competitors[3].views, 0);
}

#[test]
fn test_empty_sample_is_neutral() {
    let report = summarize("jazz", Vec::new());
    assert_eq!(report.total_videos, 0);
    assert_eq!(report.opportunity_score, 50);
    assert_eq!(report.difficulty, Difficulty::Low);
    assert_eq!(report.best_upload_window, None);
}

#[test]
fn test_opportunity_score_extremes() {
    // Huge volume, no competition
    assert_eq!(opportunity_score(5_000_000.0, 0.0), 100);
    // No volume, saturated competition
    assert_eq!(opportunity_score(0.0, 5_000_000.0), 0);
}

#[test]
fn test_engagement_rounds_to_two_decimals() {
    assert!((engagement_rate(3, 1, 0) - 33.33).abs() < 1e-9);
    assert!((engagement_rate(0, 10, 10)).abs() < f64::EPSILON);
}

#[test]
fn test_trending_tags_limit() {
    let records = vec![tagged("a", 1, &["x", "y", "z"]), tagged("b", 1, &["y"])];
    assert_eq!(trending_tags(&records, 2), vec!["y", "x"]);
}
