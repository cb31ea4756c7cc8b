//! Weighted additive scoring of the catalog against a symptom query.
//!
//! The scorer is pure and total: malformed query fields contribute
//! zero rather than failing, nothing is ever dropped from the ranked
//! list, and the hard safety gate is a separate pass for callers that
//! need it.

use motus_core::models::{Difficulty, Exercise, MatchResult, SymptomQuery};

use crate::aliases::canonical_body_part;

/// Component weights. Maxima: 40 + 20 + 20 + 20 + 10; the returned
/// score is clamped to 100.
pub mod weights {
    pub const BODY_PART: u32 = 40;
    pub const PAIN_TYPE: u32 = 20;
    pub const DIFFICULTY_HIGH_PAIN: u32 = 20;
    pub const DIFFICULTY_STANDARD: u32 = 15;
    pub const PAIN_SAFETY: u32 = 20;
    pub const PER_SYMPTOM: u32 = 5;
    pub const SYMPTOM_CAP: u32 = 10;
}

/// Pain at or above this level steers matching toward beginner work.
pub const HIGH_PAIN_THRESHOLD: u8 = 7;

/// Case-insensitive bidirectional containment on already-lowercased,
/// non-empty strings.
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Score one catalog entry against a query. Deterministic; every
/// awarded component appends a human-readable reason.
pub fn score_exercise(exercise: &Exercise, query: &SymptomQuery) -> MatchResult {
    let mut score: u32 = 0;
    let mut reasons = Vec::new();

    // Body part: +40 on bidirectional containment, after alias
    // resolution ("lumbar" matches "lower back").
    let query_part = canonical_body_part(&query.body_part);
    if !query_part.is_empty()
        && exercise
            .body_parts
            .iter()
            .any(|tag| overlaps(&tag.to_lowercase(), &query_part))
    {
        score += weights::BODY_PART;
        reasons.push(format!("targets the {query_part}"));
    }

    // Pain type: the free-text field may carry several descriptors.
    let pain_tokens: Vec<String> = query
        .pain_type
        .split([',', '/'])
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    if pain_tokens
        .iter()
        .any(|tok| exercise.pain_types.iter().any(|t| overlaps(&t.to_lowercase(), tok)))
    {
        score += weights::PAIN_TYPE;
        reasons.push("suited to the reported pain quality".to_string());
    }

    // Difficulty appropriateness. Chronic duration (any mention of
    // "month") is detected here but deliberately does not influence
    // the score; product has not confirmed how chronicity should
    // weigh in, so the signal stays a no-op.
    let high_pain = query.pain_level >= HIGH_PAIN_THRESHOLD;
    let _is_chronic = query.duration.to_lowercase().contains("month");
    if high_pain && exercise.difficulty == Difficulty::Beginner {
        score += weights::DIFFICULTY_HIGH_PAIN;
        reasons.push("gentle enough for high pain levels".to_string());
    } else if !high_pain && exercise.difficulty != Difficulty::Advanced {
        score += weights::DIFFICULTY_STANDARD;
        reasons.push("appropriate difficulty".to_string());
    }

    // Pain-level safety bonus. Inclusive: a query at exactly the
    // exercise's maximum still earns it. This is a ranking signal
    // only; the hard gate is `safety_filter`.
    if exercise.max_pain_level >= query.pain_level {
        score += weights::PAIN_SAFETY;
        reasons.push("within the exercise's pain tolerance".to_string());
    }

    // Symptom keyword bonus, +5 per distinct matched symptom, capped.
    let mut seen: Vec<String> = Vec::new();
    for symptom in &query.symptoms {
        let symptom = symptom.trim().to_lowercase();
        if symptom.is_empty() || seen.contains(&symptom) {
            continue;
        }
        if exercise
            .conditions
            .iter()
            .any(|c| overlaps(&c.to_lowercase(), &symptom))
        {
            seen.push(symptom);
        }
    }
    let symptom_bonus = (seen.len() as u32 * weights::PER_SYMPTOM).min(weights::SYMPTOM_CAP);
    if symptom_bonus > 0 {
        score += symptom_bonus;
        reasons.push(format!(
            "addresses {} reported symptom{}",
            seen.len(),
            if seen.len() == 1 { "" } else { "s" },
        ));
    }

    MatchResult {
        exercise_id: exercise.id.clone(),
        score: score.min(100) as u8,
        reasons,
    }
}

/// Score and rank the whole catalog. The sort is stable and
/// descending, so ties keep catalog order, and no exercise is ever
/// dropped here — truncation and hard exclusion are the caller's.
pub fn rank_catalog(catalog: &[Exercise], query: &SymptomQuery) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = catalog
        .iter()
        .map(|exercise| score_exercise(exercise, query))
        .collect();
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Hard safety gate: drop every result whose exercise cannot be
/// recommended at the reported pain level. Results whose exercise ID
/// no longer resolves are dropped too.
pub fn safety_filter(
    results: Vec<MatchResult>,
    catalog: &[Exercise],
    pain_level: u8,
) -> Vec<MatchResult> {
    results
        .into_iter()
        .filter(|r| {
            catalog
                .iter()
                .find(|e| e.id == r.exercise_id)
                .is_some_and(|e| e.max_pain_level >= pain_level)
        })
        .collect()
}
