//! Per-product model configuration.
//!
//! Every number that differs between deployed products (age range, lab
//! bounds, what-if thresholds, optimal levels) lives here as data, so the
//! engine itself has a single code path.

use cardia_core::models::factors::FactorKind;
use cardia_core::models::lab::LabKind;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::RiskModel;
use crate::error::ScoringError;
use crate::models::pooled_cohort::PooledCohort;
use crate::models::reynolds::Reynolds;

/// Which published model a product scores with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ModelKind {
    /// 10-year ASCVD, Pooled Cohort Equations.
    Ascvd,
    /// Reynolds Risk Score.
    Reynolds,
}

impl ModelKind {
    pub fn parse(id: &str) -> Result<Self, ScoringError> {
        match id {
            "ascvd" => Ok(ModelKind::Ascvd),
            "reynolds" => Ok(ModelKind::Reynolds),
            other => Err(ScoringError::UnknownModel(other.to_string())),
        }
    }

    pub fn model(&self) -> &'static dyn RiskModel {
        match self {
            ModelKind::Ascvd => &PooledCohort,
            ModelKind::Reynolds => &Reynolds,
        }
    }
}

/// Inclusive age range in full years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeRange {
    pub min: i32,
    pub max: i32,
}

impl AgeRange {
    pub fn contains(&self, age: i32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

/// Physiologically plausible bounds for one lab, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabBound {
    pub lab: LabKind,
    pub min: f64,
    pub max: f64,
}

impl LabBound {
    pub const fn new(lab: LabKind, min: f64, max: f64) -> Self {
        Self { lab, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Thresholds for the "lower SBP by 10" scenario.
///
/// At or above `subtract_from` the scenario subtracts 10. From `clamp_from`
/// up to `subtract_from` it sets SBP to `clamp_to`. Below `clamp_from` the
/// scenario does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SbpReduction {
    pub subtract_from: f64,
    pub clamp_from: f64,
    pub clamp_to: f64,
}

impl SbpReduction {
    /// Variant A: >=129 subtract, 120-129 clamp to 119, 105-120 nothing.
    pub const VARIANT_A: SbpReduction = SbpReduction {
        subtract_from: 129.0,
        clamp_from: 120.0,
        clamp_to: 119.0,
    };

    /// Variant B: >=120 subtract, 111-120 clamp to 110, 90-111 nothing.
    pub const VARIANT_B: SbpReduction = SbpReduction {
        subtract_from: 120.0,
        clamp_from: 111.0,
        clamp_to: 110.0,
    };

    /// The SBP the scenario would use, or `None` when it does not apply.
    pub fn reduce(&self, sbp: f64) -> Option<f64> {
        if sbp >= self.subtract_from {
            Some(sbp - 10.0)
        } else if sbp >= self.clamp_from {
            Some(self.clamp_to)
        } else {
            None
        }
    }
}

/// The fixed "best case" levels a model is compared against. The same set
/// drives the optimal reference score and the all-optimal scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptimalLevels {
    pub total_cholesterol: f64,
    pub hdl: f64,
    pub systolic_blood_pressure: f64,
    pub hs_c_reactive_protein: Option<f64>,
}

/// Everything that distinguishes one product's scoring from another's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelConfig {
    pub kind: ModelKind,
    pub age_range: AgeRange,
    /// Labs that must be present, checked in this order.
    pub required_labs: Vec<LabKind>,
    /// Bounds checked in this order, low before high for each lab.
    pub lab_bounds: Vec<LabBound>,
    /// Range in which an SBP (measured or entered) is usable.
    pub sbp_bounds: LabBound,
    pub sbp_reduction: SbpReduction,
    pub optimal: OptimalLevels,
}

impl ModelConfig {
    /// 10-year ASCVD product.
    pub fn ascvd() -> Self {
        Self {
            kind: ModelKind::Ascvd,
            age_range: AgeRange { min: 20, max: 79 },
            required_labs: vec![LabKind::TotalCholesterol, LabKind::Hdl],
            lab_bounds: vec![
                LabBound::new(LabKind::TotalCholesterol, 130.0, 320.0),
                LabBound::new(LabKind::Hdl, 20.0, 100.0),
            ],
            sbp_bounds: LabBound::new(LabKind::SystolicBloodPressure, 90.0, 200.0),
            sbp_reduction: SbpReduction::VARIANT_B,
            optimal: OptimalLevels {
                total_cholesterol: 170.0,
                hdl: 50.0,
                systolic_blood_pressure: 110.0,
                hs_c_reactive_protein: None,
            },
        }
    }

    /// Reynolds Risk Score product.
    pub fn reynolds() -> Self {
        Self {
            kind: ModelKind::Reynolds,
            age_range: AgeRange { min: 45, max: 80 },
            required_labs: vec![
                LabKind::TotalCholesterol,
                LabKind::Hdl,
                LabKind::HsCReactiveProtein,
            ],
            lab_bounds: vec![
                LabBound::new(LabKind::TotalCholesterol, 140.0, 401.0),
                LabBound::new(LabKind::Hdl, 30.0, 150.0),
                LabBound::new(LabKind::HsCReactiveProtein, 0.03, 20.0),
            ],
            sbp_bounds: LabBound::new(LabKind::SystolicBloodPressure, 90.0, 200.0),
            sbp_reduction: SbpReduction::VARIANT_A,
            optimal: OptimalLevels {
                total_cholesterol: 160.0,
                hdl: 60.0,
                systolic_blood_pressure: 119.0,
                hs_c_reactive_protein: Some(0.5),
            },
        }
    }

    pub fn for_kind(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Ascvd => Self::ascvd(),
            ModelKind::Reynolds => Self::reynolds(),
        }
    }

    pub fn model(&self) -> &'static dyn RiskModel {
        self.kind.model()
    }

    pub fn required_factors(&self) -> &'static [FactorKind] {
        self.model().required_factors()
    }

    pub fn bound_for(&self, lab: LabKind) -> Option<&LabBound> {
        self.lab_bounds.iter().find(|b| b.lab == lab)
    }
}
