use motus_core::models::{ChangeDirection, InstrumentKey, OutcomeAssessment};
use motus_outcomes::{McidThresholds, summarize};
use uuid::Uuid;

fn ts(s: &str) -> jiff::Timestamp {
    s.parse().expect("test timestamp")
}

fn row(instrument: InstrumentKey, score: f64, created_at: &str) -> OutcomeAssessment {
    OutcomeAssessment {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        condition: "knee".to_string(),
        instrument,
        score,
        created_at: ts(created_at),
    }
}

fn thresholds() -> McidThresholds {
    McidThresholds {
        odi: 10.0,
        koos: 8.0,
        quickdash: 8.0,
        pain_scale: 2.0,
    }
}

#[test]
fn empty_series_yields_no_summary() {
    assert!(summarize(&[], &thresholds()).is_none());
}

/// ODI is lower-is-better: 40 → 28 is a −12 change and an improvement.
#[test]
fn odi_decrease_is_an_improvement() {
    let rows = vec![
        row(InstrumentKey::Odi, 40.0, "2026-06-01T09:00:00Z"),
        row(InstrumentKey::Odi, 28.0, "2026-07-15T09:00:00Z"),
    ];
    let summary = summarize(&rows, &thresholds()).expect("summary");
    let change = summary.change.expect("change block");
    assert_eq!(change.function_change, Some(-12.0));
    assert_eq!(change.function_direction, Some(ChangeDirection::Improved));
    // |−12| crosses the ODI threshold of 10.
    assert!(change.is_meaningful);
}

/// KOOS inverts the polarity: a higher follow-up is the improvement.
#[test]
fn koos_increase_is_an_improvement() {
    let rows = vec![
        row(InstrumentKey::Koos, 55.0, "2026-06-01T09:00:00Z"),
        row(InstrumentKey::Koos, 70.0, "2026-07-15T09:00:00Z"),
    ];
    let summary = summarize(&rows, &thresholds()).expect("summary");
    let change = summary.change.expect("change block");
    assert_eq!(change.function_change, Some(15.0));
    assert_eq!(change.function_direction, Some(ChangeDirection::Improved));
    assert!(change.is_meaningful);
}

#[test]
fn odi_and_quickdash_increases_are_worsenings() {
    for instrument in [InstrumentKey::Odi, InstrumentKey::QuickDash] {
        let rows = vec![
            row(instrument, 20.0, "2026-06-01T09:00:00Z"),
            row(instrument, 35.0, "2026-07-15T09:00:00Z"),
        ];
        let summary = summarize(&rows, &thresholds()).expect("summary");
        let change = summary.change.expect("change block");
        assert_eq!(change.function_direction, Some(ChangeDirection::Worsened));
        // A worsening is never flagged as meaningful improvement.
        assert!(!change.is_meaningful);
    }
}

#[test]
fn koos_decrease_is_a_worsening() {
    let rows = vec![
        row(InstrumentKey::Koos, 70.0, "2026-06-01T09:00:00Z"),
        row(InstrumentKey::Koos, 50.0, "2026-07-15T09:00:00Z"),
    ];
    let summary = summarize(&rows, &thresholds()).expect("summary");
    let change = summary.change.expect("change block");
    assert_eq!(change.function_direction, Some(ChangeDirection::Worsened));
}

#[test]
fn sub_threshold_improvement_is_not_meaningful() {
    let rows = vec![
        row(InstrumentKey::Odi, 40.0, "2026-06-01T09:00:00Z"),
        row(InstrumentKey::Odi, 34.0, "2026-07-15T09:00:00Z"),
    ];
    let summary = summarize(&rows, &thresholds()).expect("summary");
    let change = summary.change.expect("change block");
    assert_eq!(change.function_direction, Some(ChangeDirection::Improved));
    assert!(!change.is_meaningful);
}

/// A lone assessment is a baseline, not an improvement.
#[test]
fn single_assessment_has_no_change_block() {
    let rows = vec![row(InstrumentKey::Odi, 40.0, "2026-06-01T09:00:00Z")];
    let summary = summarize(&rows, &thresholds()).expect("summary");
    assert_eq!(summary.baseline.function, summary.latest.function);
    assert!(summary.change.is_none());
    assert!(summary.final_groc.is_none());
}

/// Function and pain sides are independent: a pain-only series
/// computes the pain change and leaves function untouched.
#[test]
fn pain_only_series_computes_only_the_pain_side() {
    let rows = vec![
        row(InstrumentKey::PainScale, 7.0, "2026-06-01T09:00:00Z"),
        row(InstrumentKey::PainScale, 3.0, "2026-07-15T09:00:00Z"),
    ];
    let summary = summarize(&rows, &thresholds()).expect("summary");
    assert!(summary.baseline.function.is_none());
    assert!(summary.latest.function.is_none());
    let change = summary.change.expect("change block");
    assert!(change.function_change.is_none());
    assert_eq!(change.pain_change, Some(-4.0));
    assert_eq!(change.pain_direction, Some(ChangeDirection::Improved));
    assert!(change.is_meaningful);
}

#[test]
fn mixed_series_uses_earliest_and_latest_per_role() {
    let rows = vec![
        row(InstrumentKey::PainScale, 8.0, "2026-06-01T09:00:00Z"),
        row(InstrumentKey::Odi, 44.0, "2026-06-01T10:00:00Z"),
        row(InstrumentKey::Odi, 36.0, "2026-06-20T09:00:00Z"),
        row(InstrumentKey::PainScale, 5.0, "2026-07-01T09:00:00Z"),
        row(InstrumentKey::Odi, 30.0, "2026-07-15T09:00:00Z"),
    ];
    let summary = summarize(&rows, &thresholds()).expect("summary");
    assert_eq!(summary.baseline.function.as_ref().map(|p| p.score), Some(44.0));
    assert_eq!(summary.latest.function.as_ref().map(|p| p.score), Some(30.0));
    let change = summary.change.expect("change block");
    assert_eq!(change.function_change, Some(-14.0));
    assert_eq!(change.pain_change, Some(-3.0));
}

/// Row order must not matter; the series is time-ordered internally.
#[test]
fn summary_is_order_independent() {
    let mut rows = vec![
        row(InstrumentKey::Odi, 28.0, "2026-07-15T09:00:00Z"),
        row(InstrumentKey::Odi, 40.0, "2026-06-01T09:00:00Z"),
    ];
    let shuffled = summarize(&rows, &thresholds()).expect("summary");
    rows.reverse();
    let ordered = summarize(&rows, &thresholds()).expect("summary");
    assert_eq!(
        shuffled.change.as_ref().map(|c| c.function_change),
        ordered.change.as_ref().map(|c| c.function_change)
    );
    assert_eq!(shuffled.change.map(|c| c.function_change), Some(Some(-12.0)));
}

#[test]
fn groc_row_populates_final_rating() {
    let rows = vec![
        row(InstrumentKey::Odi, 40.0, "2026-06-01T09:00:00Z"),
        row(InstrumentKey::Odi, 25.0, "2026-07-15T09:00:00Z"),
        row(InstrumentKey::Groc, 5.0, "2026-08-01T09:00:00Z"),
    ];
    let summary = summarize(&rows, &thresholds()).expect("summary");
    let final_groc = summary.final_groc.expect("terminal rating");
    assert_eq!(final_groc.score, 5.0);
    assert_eq!(final_groc.instrument, InstrumentKey::Groc);
}
