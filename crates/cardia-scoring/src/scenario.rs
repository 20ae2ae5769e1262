//! What-if scenarios. Each one clones a validated record, changes a few
//! fields and rescores it with the configured model.

use cardia_core::models::lab::LabKind;
use cardia_core::models::patient::PatientRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::ModelConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScenarioResult {
    /// The modified copy that was scored.
    pub record: PatientRecord,
    pub risk_fraction: f64,
    pub risk_percent: f64,
}

impl ScenarioResult {
    fn score(record: PatientRecord, config: &ModelConfig) -> Self {
        let model = config.model();
        Self {
            risk_fraction: model.risk_fraction(&record),
            risk_percent: model.risk_percent(&record),
            record,
        }
    }
}

/// Lower SBP by 10 (or clamp it into the target band). `None` when the
/// current SBP is already below the band or missing.
pub fn lower_sbp(record: &PatientRecord, config: &ModelConfig) -> Option<ScenarioResult> {
    let sbp = record.numeric_lab(LabKind::SystolicBloodPressure)?;
    let lowered = config.sbp_reduction.reduce(sbp)?;

    let mut modified = record.clone();
    modified.systolic_blood_pressure = Some(lowered);
    Some(ScenarioResult::score(modified, config))
}

pub fn quit_smoking(record: &PatientRecord, config: &ModelConfig) -> ScenarioResult {
    let mut modified = record.clone();
    modified.related_factors.smoker = Some(false);
    ScenarioResult::score(modified, config)
}

/// Copy of `record` with every modifiable level at the model's optimal
/// value and every yes/no risk factor off. Race, sex and age are kept.
pub fn with_optimal_levels(record: &PatientRecord, config: &ModelConfig) -> PatientRecord {
    let optimal = &config.optimal;
    let mut modified = record.clone();
    modified.total_cholesterol = Some(optimal.total_cholesterol);
    modified.hdl = Some(optimal.hdl);
    modified.systolic_blood_pressure = Some(optimal.systolic_blood_pressure);
    if let Some(crp) = optimal.hs_c_reactive_protein {
        modified.hs_c_reactive_protein = Some(crp);
    }

    let factors = &mut modified.related_factors;
    factors.smoker = Some(false);
    factors.hypertensive = Some(false);
    factors.diabetic = Some(false);
    factors.family_heart_attack_history = Some(false);
    modified
}

pub fn all_optimal(record: &PatientRecord, config: &ModelConfig) -> ScenarioResult {
    ScenarioResult::score(with_optimal_levels(record, config), config)
}

/// The best-case score for this patient's age, sex and race, shown next to
/// their actual score.
pub fn optimal_reference(record: &PatientRecord, config: &ModelConfig) -> f64 {
    all_optimal(record, config).risk_percent
}
