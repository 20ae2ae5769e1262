mod common;

use cardia_core::models::factors::Race;
use cardia_core::models::patient::PatientRecord;
use cardia_scoring::config::{ModelConfig, SbpReduction};
use cardia_scoring::scenario::{
    all_optimal, lower_sbp, optimal_reference, quit_smoking, with_optimal_levels,
};
use common::{factors, record, with_labs};

fn ascvd_patient(sbp: f64, smoker: bool) -> PatientRecord {
    let mut patient = with_labs(record("male", 59), 150.0, 40.0, sbp);
    patient.related_factors = factors(smoker, false, true, Race::White);
    patient
}

fn reynolds_patient(gender: &str, sbp: f64) -> PatientRecord {
    let mut patient = with_labs(record(gender, 60), 220.0, 40.0, sbp);
    patient.hs_c_reactive_protein = Some(2.0);
    patient.related_factors.smoker = Some(true);
    patient.related_factors.family_heart_attack_history = Some(true);
    patient
}

#[test]
fn ascvd_lower_sbp_subtracts_ten() {
    let result = lower_sbp(&ascvd_patient(130.0, false), &ModelConfig::ascvd()).unwrap();
    assert_eq!(result.record.systolic_blood_pressure, Some(120.0));
    assert_eq!(result.risk_percent, 12.0);
}

#[test]
fn ascvd_lower_sbp_clamps_middle_band() {
    let result = lower_sbp(&ascvd_patient(115.0, false), &ModelConfig::ascvd()).unwrap();
    assert_eq!(result.record.systolic_blood_pressure, Some(110.0));
    assert_eq!(result.risk_percent, 10.0);
}

#[test]
fn ascvd_lower_sbp_not_applicable_below_band() {
    assert!(lower_sbp(&ascvd_patient(105.0, false), &ModelConfig::ascvd()).is_none());
    assert!(lower_sbp(&ascvd_patient(110.0, false), &ModelConfig::ascvd()).is_none());
}

#[test]
fn reynolds_lower_sbp_uses_its_thresholds() {
    let config = ModelConfig::reynolds();

    let result = lower_sbp(&reynolds_patient("male", 130.0), &config).unwrap();
    assert_eq!(result.record.systolic_blood_pressure, Some(120.0));
    assert_eq!(result.risk_percent, 19.0);

    let clamped = lower_sbp(&reynolds_patient("male", 125.0), &config).unwrap();
    assert_eq!(clamped.record.systolic_blood_pressure, Some(119.0));

    assert!(lower_sbp(&reynolds_patient("male", 107.0), &config).is_none());
}

#[test]
fn reduction_variants() {
    assert_eq!(SbpReduction::VARIANT_A.reduce(130.0), Some(120.0));
    assert_eq!(SbpReduction::VARIANT_A.reduce(129.0), Some(119.0));
    assert_eq!(SbpReduction::VARIANT_A.reduce(120.0), Some(119.0));
    assert_eq!(SbpReduction::VARIANT_A.reduce(107.0), None);
    assert_eq!(SbpReduction::VARIANT_B.reduce(120.0), Some(110.0));
    assert_eq!(SbpReduction::VARIANT_B.reduce(111.0), Some(110.0));
    assert_eq!(SbpReduction::VARIANT_B.reduce(110.0), None);
}

#[test]
fn quit_smoking_rescores() {
    let smoker = ascvd_patient(130.0, true);
    let result = quit_smoking(&smoker, &ModelConfig::ascvd());
    assert_eq!(result.record.related_factors.smoker, Some(false));
    assert_eq!(result.risk_percent, 14.0);
    assert_eq!(smoker.related_factors.smoker, Some(true));
}

#[test]
fn all_optimal_ascvd() {
    let patient = ascvd_patient(130.0, true);
    let config = ModelConfig::ascvd();
    let result = all_optimal(&patient, &config);

    assert_eq!(result.record.total_cholesterol, Some(170.0));
    assert_eq!(result.record.hdl, Some(50.0));
    assert_eq!(result.record.systolic_blood_pressure, Some(110.0));
    assert_eq!(result.record.related_factors.diabetic, Some(false));
    assert_eq!(result.record.related_factors.race, Some(Race::White));
    assert_eq!(result.risk_percent, 5.0);
    assert_eq!(optimal_reference(&patient, &config), 5.0);
}

#[test]
fn all_optimal_reynolds() {
    let config = ModelConfig::reynolds();
    assert_eq!(all_optimal(&reynolds_patient("male", 140.0), &config).risk_percent, 4.0);
    assert_eq!(all_optimal(&reynolds_patient("female", 140.0), &config).risk_percent, 0.9);

    let optimal = with_optimal_levels(&reynolds_patient("male", 140.0), &config);
    assert_eq!(optimal.hs_c_reactive_protein, Some(0.5));
    assert_eq!(optimal.related_factors.family_heart_attack_history, Some(false));
}
