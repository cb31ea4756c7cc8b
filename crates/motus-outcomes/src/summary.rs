//! Progress summary over one user/condition assessment series.
//! Pure: the rows are already materialized, nothing is persisted, and
//! absence at any point shrinks the result instead of failing.

use motus_core::models::{
    ChangeBlock, ChangeDirection, InstrumentKey, OutcomeAssessment, OutcomeSummary, ScorePoint,
    Snapshot,
};

use crate::config::McidThresholds;
use crate::instruments::{InstrumentRole, direction_of_change, spec_for};

/// Summarize a condition's series. Returns `None` when the series is
/// empty. Row order does not matter; the series is ordered by
/// creation time internally.
pub fn summarize(
    rows: &[OutcomeAssessment],
    thresholds: &McidThresholds,
) -> Option<OutcomeSummary> {
    if rows.is_empty() {
        return None;
    }
    let condition = rows[0].condition.clone();

    let mut ordered: Vec<&OutcomeAssessment> = rows.iter().collect();
    ordered.sort_by_key(|r| r.created_at);

    let function: Vec<&OutcomeAssessment> = by_role(&ordered, InstrumentRole::Function);
    let pain: Vec<&OutcomeAssessment> = by_role(&ordered, InstrumentRole::Pain);
    let groc: Vec<&OutcomeAssessment> = by_role(&ordered, InstrumentRole::GlobalRating);

    let baseline = Snapshot {
        function: function.first().map(|r| point(r)),
        pain: pain.first().map(|r| point(r)),
    };
    let latest = Snapshot {
        function: function.last().map(|r| point(r)),
        pain: pain.last().map(|r| point(r)),
    };

    // A side only renders a change once it has a follow-up distinct
    // from its baseline row; a lone assessment is not an improvement.
    let function_side = side_change(&function, thresholds);
    let pain_side = side_change(&pain, thresholds);

    let change = if function_side.is_some() || pain_side.is_some() {
        let (function_change, function_direction, function_meaningful) =
            unpack(function_side);
        let (pain_change, pain_direction, pain_meaningful) = unpack(pain_side);
        Some(ChangeBlock {
            function_change,
            pain_change,
            function_direction,
            pain_direction,
            is_meaningful: function_meaningful || pain_meaningful,
        })
    } else {
        None
    };

    Some(OutcomeSummary {
        condition,
        baseline,
        latest,
        final_groc: groc.last().map(|r| point(r)),
        change,
    })
}

fn by_role<'a>(
    ordered: &[&'a OutcomeAssessment],
    role: InstrumentRole,
) -> Vec<&'a OutcomeAssessment> {
    ordered
        .iter()
        .copied()
        .filter(|r| spec_for(r.instrument).role == role)
        .collect()
}

fn point(row: &OutcomeAssessment) -> ScorePoint {
    ScorePoint {
        instrument: row.instrument,
        score: row.score,
        recorded_at: row.created_at,
    }
}

/// Change, direction, and meaningfulness for one role's series, or
/// `None` when the series has no follow-up yet.
fn side_change(
    series: &[&OutcomeAssessment],
    thresholds: &McidThresholds,
) -> Option<(f64, ChangeDirection, bool)> {
    if series.len() < 2 {
        return None;
    }
    let baseline = series[0];
    let latest = series[series.len() - 1];

    let delta = latest.score - baseline.score;
    let spec = spec_for(latest.instrument);
    let direction = direction_of_change(spec.polarity, delta);
    let meaningful = direction == ChangeDirection::Improved
        && matches!(
            meaningful_threshold(latest.instrument, thresholds),
            Some(mcid) if delta.abs() >= mcid
        );
    Some((delta, direction, meaningful))
}

fn meaningful_threshold(key: InstrumentKey, thresholds: &McidThresholds) -> Option<f64> {
    thresholds.threshold_for(key)
}

fn unpack(
    side: Option<(f64, ChangeDirection, bool)>,
) -> (Option<f64>, Option<ChangeDirection>, bool) {
    match side {
        Some((delta, direction, meaningful)) => (Some(delta), Some(direction), meaningful),
        None => (None, None, false),
    }
}
