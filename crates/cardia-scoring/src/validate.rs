//! Gatekeeping before any model runs.

use cardia_core::models::factors::FactorKind;
use cardia_core::models::lab::LabKind;
use cardia_core::models::patient::PatientRecord;
use tracing::debug;

use crate::config::ModelConfig;
use crate::error::{BoundViolation, ValidationError};

/// Labs that must be on file before any score can be shown.
const DISPLAY_LABS: [LabKind; 3] = [
    LabKind::TotalCholesterol,
    LabKind::Hdl,
    LabKind::SystolicBloodPressure,
];

/// Check a record against a model's applicability rules.
///
/// Checks run in a fixed order and the first failure is returned:
/// age, gender, required labs, lab bounds.
pub fn validate(record: &PatientRecord, config: &ModelConfig) -> Result<(), ValidationError> {
    let result = check(record, config);
    if let Err(err) = &result {
        debug!(model = config.model().id(), kind = ?err.kind(), "record rejected");
    }
    result
}

fn check(record: &PatientRecord, config: &ModelConfig) -> Result<(), ValidationError> {
    let model = config.model();

    if !config.age_range.contains(record.age) {
        return Err(ValidationError::AgeOutOfRange {
            model: model.name().to_string(),
            age: record.age,
            min: config.age_range.min,
            max: config.age_range.max,
        });
    }

    if record.sex().is_none() {
        return Err(ValidationError::IndeterminateGender {
            model: model.name().to_string(),
            gender: record.gender.clone(),
        });
    }

    if let Some(&lab) = config
        .required_labs
        .iter()
        .find(|&&lab| record.numeric_lab(lab).is_none())
    {
        return Err(ValidationError::MissingLab { lab });
    }

    for bound in &config.lab_bounds {
        let Some(value) = record.numeric_lab(bound.lab) else {
            continue;
        };
        let violation = if value < bound.min {
            BoundViolation::TooLow
        } else if value > bound.max {
            BoundViolation::TooHigh
        } else {
            continue;
        };
        return Err(ValidationError::OutOfBounds {
            lab: bound.lab,
            value,
            violation,
        });
    }

    Ok(())
}

/// Like [`validate`], but reports the unsupported-unit condition first
/// when an extraction pass skipped a result for its unit and that left a
/// required lab empty.
pub fn validate_extracted(
    record: &PatientRecord,
    config: &ModelConfig,
    saw_unsupported_unit: bool,
) -> Result<(), ValidationError> {
    if saw_unsupported_unit && required_labs_not_available(record, config) {
        debug!(model = config.model().id(), "required lab lost to unsupported unit");
        return Err(ValidationError::UnsupportedUnit);
    }
    validate(record, config)
}

/// SBP is present and inside the configured bounds.
pub fn is_valid_sbp(record: &PatientRecord, config: &ModelConfig) -> bool {
    record
        .numeric_lab(LabKind::SystolicBloodPressure)
        .is_some_and(|sbp| config.sbp_bounds.contains(sbp))
}

/// Factors the model needs that the user has not answered yet, in the
/// model's order.
pub fn missing_factors(record: &PatientRecord, config: &ModelConfig) -> Vec<FactorKind> {
    config
        .required_factors()
        .iter()
        .copied()
        .filter(|&factor| !record.related_factors.is_known(factor))
        .collect()
}

/// Whether a validated record has everything the model needs to score.
pub fn can_calculate(record: &PatientRecord, config: &ModelConfig) -> bool {
    is_valid_sbp(record, config) && missing_factors(record, config).is_empty()
}

/// Any of total cholesterol, HDL or SBP is absent.
pub fn labs_not_available(record: &PatientRecord) -> bool {
    DISPLAY_LABS
        .iter()
        .any(|&lab| record.numeric_lab(lab).is_none())
}

/// Any lab the model requires is absent. SBP is never required here since
/// the user can enter it.
pub fn required_labs_not_available(record: &PatientRecord, config: &ModelConfig) -> bool {
    config
        .required_labs
        .iter()
        .any(|&lab| record.numeric_lab(lab).is_none())
}
