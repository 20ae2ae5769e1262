mod common;

use cardia_core::models::factors::Race;
use cardia_core::models::patient::PatientRecord;
use cardia_scoring::lifetime::{LifetimeTier, classify, compute_lifetime_risk};
use common::{factors, record, with_labs};

fn patient(gender: &str, sbp: f64, smoker: bool, hypertensive: bool, diabetic: bool) -> PatientRecord {
    let mut patient = with_labs(record(gender, 40), 150.0, 40.0, sbp);
    patient.related_factors = factors(smoker, hypertensive, diabetic, Race::Aa);
    patient
}

#[test]
fn male_tiers() {
    assert_eq!(compute_lifetime_risk(&patient("male", 140.0, false, false, false), true), Some(5));
    assert_eq!(compute_lifetime_risk(&patient("male", 140.0, true, true, true), false), Some(69));
    assert_eq!(compute_lifetime_risk(&patient("male", 140.0, false, true, false), false), Some(50));
    assert_eq!(compute_lifetime_risk(&patient("male", 140.0, false, false, false), false), Some(46));
    assert_eq!(compute_lifetime_risk(&patient("male", 120.0, false, false, false), false), Some(36));
    assert_eq!(compute_lifetime_risk(&patient("male", 110.0, false, false, false), false), Some(5));
}

#[test]
fn female_tiers() {
    assert_eq!(compute_lifetime_risk(&patient("female", 140.0, true, true, true), true), Some(8));
    assert_eq!(compute_lifetime_risk(&patient("female", 140.0, true, true, true), false), Some(50));
    assert_eq!(compute_lifetime_risk(&patient("female", 140.0, false, true, false), false), Some(39));
    assert_eq!(compute_lifetime_risk(&patient("female", 140.0, false, false, false), false), Some(39));
    assert_eq!(compute_lifetime_risk(&patient("female", 120.0, false, false, false), false), Some(27));
    assert_eq!(compute_lifetime_risk(&patient("female", 110.0, false, false, false), false), Some(8));
}

#[test]
fn outside_age_range_is_none() {
    for age in [18, 19, 60, 61] {
        let mut young_or_old = patient("male", 140.0, true, true, true);
        young_or_old.age = age;
        assert_eq!(compute_lifetime_risk(&young_or_old, false), None);
        assert_eq!(compute_lifetime_risk(&young_or_old, true), None);
    }
}

#[test]
fn unknown_factor_is_none() {
    let mut unknown = patient("male", 140.0, false, false, false);
    unknown.related_factors.smoker = None;
    assert_eq!(compute_lifetime_risk(&unknown, false), None);
}

#[test]
fn classification_boundaries() {
    assert_eq!(classify(240.0, 110.0, false, false, false), LifetimeTier::MajorOne);
    assert_eq!(classify(240.0, 160.0, false, false, false), LifetimeTier::MajorTwoOrMore);
    assert_eq!(classify(150.0, 160.0, true, false, false), LifetimeTier::MajorTwoOrMore);
    assert_eq!(classify(200.0, 110.0, false, false, false), LifetimeTier::Elevated);
    assert_eq!(classify(180.0, 110.0, false, false, false), LifetimeTier::NotOptimal);
    assert_eq!(classify(179.0, 119.0, false, false, false), LifetimeTier::AllOptimal);
}
