#![allow(dead_code)]

use cardia_core::models::factors::{Race, RelatedFactors};
use cardia_core::models::patient::PatientRecord;
use jiff::civil::date;

pub fn record(gender: &str, age: i32) -> PatientRecord {
    let mut record = PatientRecord::new(gender, date(1970, 1, 1), date(2026, 10, 16)).unwrap();
    record.age = age;
    record
}

pub fn with_labs(mut record: PatientRecord, tc: f64, hdl: f64, sbp: f64) -> PatientRecord {
    record.total_cholesterol = Some(tc);
    record.hdl = Some(hdl);
    record.systolic_blood_pressure = Some(sbp);
    record
}

pub fn factors(smoker: bool, hypertensive: bool, diabetic: bool, race: Race) -> RelatedFactors {
    RelatedFactors {
        smoker: Some(smoker),
        hypertensive: Some(hypertensive),
        diabetic: Some(diabetic),
        race: Some(race),
        family_heart_attack_history: Some(false),
    }
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (+/- {tolerance}), got {actual}"
    );
}
