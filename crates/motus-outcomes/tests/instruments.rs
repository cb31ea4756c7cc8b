use motus_core::models::{ChangeDirection, InstrumentKey};
use motus_outcomes::{
    InstrumentRole, Polarity, direction_of_change, groc_interpretation, spec_for, validate_score,
};

#[test]
fn keys_round_trip_through_their_string_form() {
    for key in [
        InstrumentKey::Odi,
        InstrumentKey::Koos,
        InstrumentKey::QuickDash,
        InstrumentKey::PainScale,
        InstrumentKey::Groc,
    ] {
        assert_eq!(InstrumentKey::parse(key.as_str()).unwrap(), key);
    }
    assert!(InstrumentKey::parse("promis").is_err());
}

#[test]
fn polarity_table_matches_the_instrument_families() {
    assert_eq!(spec_for(InstrumentKey::Odi).polarity, Polarity::LowerIsBetter);
    assert_eq!(spec_for(InstrumentKey::QuickDash).polarity, Polarity::LowerIsBetter);
    assert_eq!(spec_for(InstrumentKey::Koos).polarity, Polarity::HigherIsBetter);
    assert_eq!(spec_for(InstrumentKey::PainScale).polarity, Polarity::LowerIsBetter);
}

#[test]
fn roles_partition_the_registry() {
    assert_eq!(spec_for(InstrumentKey::Odi).role, InstrumentRole::Function);
    assert_eq!(spec_for(InstrumentKey::Koos).role, InstrumentRole::Function);
    assert_eq!(spec_for(InstrumentKey::QuickDash).role, InstrumentRole::Function);
    assert_eq!(spec_for(InstrumentKey::PainScale).role, InstrumentRole::Pain);
    assert_eq!(spec_for(InstrumentKey::Groc).role, InstrumentRole::GlobalRating);
}

#[test]
fn direction_respects_polarity() {
    assert_eq!(
        direction_of_change(Polarity::LowerIsBetter, -5.0),
        ChangeDirection::Improved
    );
    assert_eq!(
        direction_of_change(Polarity::LowerIsBetter, 5.0),
        ChangeDirection::Worsened
    );
    assert_eq!(
        direction_of_change(Polarity::HigherIsBetter, 5.0),
        ChangeDirection::Improved
    );
    assert_eq!(
        direction_of_change(Polarity::HigherIsBetter, -5.0),
        ChangeDirection::Worsened
    );
    assert_eq!(
        direction_of_change(Polarity::LowerIsBetter, 0.0),
        ChangeDirection::Unchanged
    );
}

#[test]
fn groc_buckets_cover_the_scale() {
    assert_eq!(groc_interpretation(7.0), "very much improved");
    assert_eq!(groc_interpretation(5.0), "very much improved");
    assert_eq!(groc_interpretation(3.0), "much improved");
    assert_eq!(groc_interpretation(1.0), "somewhat improved");
    assert_eq!(groc_interpretation(0.0), "no change");
    assert_eq!(groc_interpretation(-2.0), "somewhat worse");
    assert_eq!(groc_interpretation(-4.0), "much worse");
    assert_eq!(groc_interpretation(-7.0), "very much worse");
}

#[test]
fn score_validation_uses_the_registry_ranges() {
    assert!(validate_score(InstrumentKey::Odi, 0.0).is_ok());
    assert!(validate_score(InstrumentKey::Odi, 100.0).is_ok());
    assert!(validate_score(InstrumentKey::Odi, 101.0).is_err());
    assert!(validate_score(InstrumentKey::PainScale, 11.0).is_err());
    assert!(validate_score(InstrumentKey::Groc, -7.0).is_ok());
    assert!(validate_score(InstrumentKey::Groc, 8.0).is_err());

    let err = validate_score(InstrumentKey::PainScale, 11.0).unwrap_err();
    assert!(err.to_string().contains("outside range"));
}
