//! Per-lab extractors and the full extraction pass.

use cardia_core::models::lab::{LabKind, SYSTOLIC_COMPONENT_CODE};
use cardia_core::models::observation::Observation;
use cardia_core::models::patient::PatientRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::selector::{Selection, select_latest_valid};

/// mmol/L to mg/dL divisor for the cholesterol family.
pub const CHOLESTEROL_MMOL_DIVISOR: f64 = 0.026;

/// mmol/L to mg/L divisor for hs-CRP.
pub const HS_CRP_MMOL_DIVISOR: f64 = 0.10;

/// Total cholesterol, HDL and LDL: `mg/dL` as-is, `mmol/L` converted.
pub fn cholesterol_unit_rule(value: f64, unit: &str) -> Option<f64> {
    match unit {
        "mg/dL" => Some(value),
        "mmol/L" => Some(value / CHOLESTEROL_MMOL_DIVISOR),
        _ => None,
    }
}

/// hs-CRP: `mg/L` as-is, `mmol/L` converted.
pub fn hs_crp_unit_rule(value: f64, unit: &str) -> Option<f64> {
    match unit {
        "mg/L" => Some(value),
        "mmol/L" => Some(value / HS_CRP_MMOL_DIVISOR),
        _ => None,
    }
}

/// Systolic blood pressure: `mmHg` or `mm[Hg]`, no conversion.
pub fn blood_pressure_unit_rule(value: f64, unit: &str) -> Option<f64> {
    match unit {
        "mmHg" | "mm[Hg]" => Some(value),
        _ => None,
    }
}

pub fn cholesterol_value(observations: &[Observation]) -> Selection {
    select_latest_valid(observations, cholesterol_unit_rule)
}

pub fn hs_crp_value(observations: &[Observation]) -> Selection {
    select_latest_valid(observations, hs_crp_unit_rule)
}

/// Lift the systolic reading of each blood-pressure panel to the top level.
///
/// Panels without a systolic component are dropped. A standalone systolic
/// observation (coded `8480-6` itself, no components) is kept as-is.
pub fn lift_systolic_components(observations: &[Observation]) -> Vec<Observation> {
    observations
        .iter()
        .filter_map(|observation| {
            if let Some(component) = observation.component_with_code(SYSTOLIC_COMPONENT_CODE) {
                let mut lifted = observation.clone();
                lifted.value_quantity = component.value_quantity.clone();
                Some(lifted)
            } else if observation.component.is_empty()
                && observation.has_code(SYSTOLIC_COMPONENT_CODE)
            {
                Some(observation.clone())
            } else {
                None
            }
        })
        .collect()
}

pub fn systolic_blood_pressure_value(observations: &[Observation]) -> Selection {
    let lifted = lift_systolic_components(observations);
    select_latest_valid(&lifted, blood_pressure_unit_rule)
}

/// Run the extractor for one lab over observations already routed to it.
pub fn extract_lab(lab: LabKind, observations: &[Observation]) -> Selection {
    match lab {
        LabKind::TotalCholesterol | LabKind::Hdl | LabKind::Ldl => cholesterol_value(observations),
        LabKind::SystolicBloodPressure => systolic_blood_pressure_value(observations),
        LabKind::HsCReactiveProtein => hs_crp_value(observations),
    }
}

/// A flat list of fetched observations that can be routed by lab code.
#[derive(Debug, Clone, Default)]
pub struct ObservationSet {
    observations: Vec<Observation>,
}

impl ObservationSet {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations coded with any of `codes`, in their original order.
    pub fn by_codes(&self, codes: &[&str]) -> Vec<Observation> {
        self.observations
            .iter()
            .filter(|o| codes.iter().any(|code| o.has_code(code)))
            .cloned()
            .collect()
    }

    pub fn for_lab(&self, lab: LabKind) -> Vec<Observation> {
        let mut codes: Vec<&str> = lab.loinc_codes().to_vec();
        if lab == LabKind::SystolicBloodPressure {
            codes.push(SYSTOLIC_COMPONENT_CODE);
        }
        self.by_codes(&codes)
    }
}

impl From<Vec<Observation>> for ObservationSet {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}

/// Normalized lab values, each in its canonical unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LabValues {
    pub total_cholesterol: Option<f64>,
    pub hdl: Option<f64>,
    pub ldl: Option<f64>,
    pub systolic_blood_pressure: Option<f64>,
    pub hs_c_reactive_protein: Option<f64>,
}

impl LabValues {
    pub fn get(&self, lab: LabKind) -> Option<f64> {
        match lab {
            LabKind::TotalCholesterol => self.total_cholesterol,
            LabKind::Hdl => self.hdl,
            LabKind::Ldl => self.ldl,
            LabKind::SystolicBloodPressure => self.systolic_blood_pressure,
            LabKind::HsCReactiveProtein => self.hs_c_reactive_protein,
        }
    }

    fn set(&mut self, lab: LabKind, value: Option<f64>) {
        match lab {
            LabKind::TotalCholesterol => self.total_cholesterol = value,
            LabKind::Hdl => self.hdl = value,
            LabKind::Ldl => self.ldl = value,
            LabKind::SystolicBloodPressure => self.systolic_blood_pressure = value,
            LabKind::HsCReactiveProtein => self.hs_c_reactive_protein = value,
        }
    }
}

/// Result of one full extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LabExtraction {
    pub values: LabValues,
    /// True if any extractor skipped an observation for its unit during
    /// this pass. Never carried over from an earlier pass.
    pub saw_unsupported_unit: bool,
}

impl LabExtraction {
    /// Write every extracted value into the record, overwriting what was
    /// there.
    pub fn apply_to(&self, record: &mut PatientRecord) {
        for lab in LabKind::ALL {
            record.set_lab(lab, self.values.get(lab));
        }
    }
}

/// Run every extractor over `observations` in a fresh pass.
pub fn extract_labs(observations: &ObservationSet) -> LabExtraction {
    let mut extraction = LabExtraction::default();

    for lab in LabKind::ALL {
        let selection = extract_lab(lab, &observations.for_lab(lab));
        debug!(
            lab = lab.name(),
            value = ?selection.value,
            unsupported_unit = selection.saw_unsupported_unit,
            "lab extracted"
        );
        extraction.values.set(lab, selection.value);
        extraction.saw_unsupported_unit |= selection.saw_unsupported_unit;
    }

    extraction
}
