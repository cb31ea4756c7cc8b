//! Follow-up scheduling signal: a condition is due for a follow-up
//! questionnaire when its series has gone quiet for the window length
//! and no terminal GROC has been recorded.

use motus_core::models::{InstrumentKey, OutcomeAssessment};

/// Default window between assessments before a follow-up is due.
pub const FOLLOW_UP_WINDOW_DAYS: i64 = 14;

const SECONDS_PER_DAY: i64 = 86_400;

/// Follow-up-due with the default 14-day window.
pub fn follow_up_due(rows: &[OutcomeAssessment], now: jiff::Timestamp) -> bool {
    follow_up_due_within(rows, now, FOLLOW_UP_WINDOW_DAYS)
}

/// True when the most recent assessment in the series is older than
/// `window_days` and no GROC row exists. An empty series is never
/// due — there is nothing to follow up on.
pub fn follow_up_due_within(
    rows: &[OutcomeAssessment],
    now: jiff::Timestamp,
    window_days: i64,
) -> bool {
    let Some(most_recent) = rows.iter().map(|r| r.created_at).max() else {
        return false;
    };
    if rows.iter().any(|r| r.instrument == InstrumentKey::Groc) {
        return false;
    }
    now.as_second() - most_recent.as_second() > window_days * SECONDS_PER_DAY
}
