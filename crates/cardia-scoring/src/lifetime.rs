//! Lifetime ASCVD risk by risk-factor tier (Lloyd-Jones et al., 2006).

use cardia_core::models::factors::Sex;
use cardia_core::models::patient::PatientRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::AgeRange;

/// Ages the lifetime estimate applies to.
pub const LIFETIME_AGE_RANGE: AgeRange = AgeRange { min: 20, max: 59 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LifetimeTier {
    /// Two or more major risk factors.
    MajorTwoOrMore,
    /// Exactly one major risk factor.
    MajorOne,
    /// No major factor, at least one elevated level.
    Elevated,
    /// No major or elevated factor, at least one level not optimal.
    NotOptimal,
    /// Every level optimal.
    AllOptimal,
}

impl LifetimeTier {
    /// Tier risk in percent.
    pub fn risk(&self, sex: Sex) -> u8 {
        match (sex, self) {
            (Sex::Male, LifetimeTier::MajorTwoOrMore) => 69,
            (Sex::Male, LifetimeTier::MajorOne) => 50,
            (Sex::Male, LifetimeTier::Elevated) => 46,
            (Sex::Male, LifetimeTier::NotOptimal) => 36,
            (Sex::Male, LifetimeTier::AllOptimal) => 5,
            (Sex::Female, LifetimeTier::MajorTwoOrMore) => 50,
            (Sex::Female, LifetimeTier::MajorOne) => 39,
            (Sex::Female, LifetimeTier::Elevated) => 39,
            (Sex::Female, LifetimeTier::NotOptimal) => 27,
            (Sex::Female, LifetimeTier::AllOptimal) => 8,
        }
    }
}

/// Classify a record with known factors and labs into its tier.
pub fn classify(
    total_cholesterol: f64,
    systolic_blood_pressure: f64,
    hypertensive: bool,
    smoker: bool,
    diabetic: bool,
) -> LifetimeTier {
    let major = [
        total_cholesterol >= 240.0,
        systolic_blood_pressure >= 160.0,
        hypertensive,
        smoker,
        diabetic,
    ]
    .iter()
    .filter(|&&f| f)
    .count();

    match major {
        0 => {}
        1 => return LifetimeTier::MajorOne,
        _ => return LifetimeTier::MajorTwoOrMore,
    }

    // From here on the patient is not hypertensive.
    if total_cholesterol < 180.0 && systolic_blood_pressure < 120.0 {
        LifetimeTier::AllOptimal
    } else if total_cholesterol >= 200.0 || systolic_blood_pressure >= 140.0 {
        LifetimeTier::Elevated
    } else {
        LifetimeTier::NotOptimal
    }
}

/// Lifetime risk in percent, or `None` when the age is outside 20-59, the
/// sex is indeterminate, or a needed factor or lab is unknown.
///
/// `use_optimal` returns the best-case figure for the patient's sex
/// regardless of their levels.
pub fn compute_lifetime_risk(record: &PatientRecord, use_optimal: bool) -> Option<u8> {
    if !LIFETIME_AGE_RANGE.contains(record.age) {
        return None;
    }
    let sex = record.sex()?;
    if use_optimal {
        return Some(LifetimeTier::AllOptimal.risk(sex));
    }

    let factors = &record.related_factors;
    let tier = classify(
        record.total_cholesterol.filter(|v| v.is_finite())?,
        record.systolic_blood_pressure.filter(|v| v.is_finite())?,
        factors.hypertensive?,
        factors.smoker?,
        factors.diabetic?,
    );
    Some(tier.risk(sex))
}
