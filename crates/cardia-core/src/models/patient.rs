use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::factors::{RelatedFactors, Sex};
use super::lab::LabKind;
use crate::age::compute_age;
use crate::error::CoreError;

/// The demographic shell delivered by the data client alongside the labs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Demographics {
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    pub gender: String,
    pub birth_date: jiff::civil::Date,
}

/// The working record every scoring component reads. Lab values are in
/// their canonical units (see [`LabKind::canonical_unit`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientRecord {
    /// Raw gender string; see [`PatientRecord::sex`].
    pub gender: String,
    pub date_of_birth: jiff::civil::Date,
    /// Full years, derived from `date_of_birth`.
    pub age: i32,
    #[serde(default)]
    pub total_cholesterol: Option<f64>,
    #[serde(default)]
    pub hdl: Option<f64>,
    #[serde(default)]
    pub ldl: Option<f64>,
    #[serde(default)]
    pub systolic_blood_pressure: Option<f64>,
    #[serde(default)]
    pub hs_c_reactive_protein: Option<f64>,
    #[serde(default)]
    pub related_factors: RelatedFactors,
}

impl PatientRecord {
    /// Build a record with no labs and every factor unknown, deriving the
    /// age as of `today`.
    pub fn new(
        gender: impl Into<String>,
        date_of_birth: jiff::civil::Date,
        today: jiff::civil::Date,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            gender: gender.into(),
            date_of_birth,
            age: compute_age(date_of_birth, today)?,
            total_cholesterol: None,
            hdl: None,
            ldl: None,
            systolic_blood_pressure: None,
            hs_c_reactive_protein: None,
            related_factors: RelatedFactors::default(),
        })
    }

    pub fn from_demographics(
        demographics: &Demographics,
        today: jiff::civil::Date,
    ) -> Result<Self, CoreError> {
        Self::new(demographics.gender.clone(), demographics.birth_date, today)
    }

    pub fn sex(&self) -> Option<Sex> {
        Sex::parse(&self.gender)
    }

    pub fn is_female(&self) -> bool {
        self.sex() == Some(Sex::Female)
    }

    pub fn lab(&self, lab: LabKind) -> Option<f64> {
        match lab {
            LabKind::TotalCholesterol => self.total_cholesterol,
            LabKind::Hdl => self.hdl,
            LabKind::Ldl => self.ldl,
            LabKind::SystolicBloodPressure => self.systolic_blood_pressure,
            LabKind::HsCReactiveProtein => self.hs_c_reactive_protein,
        }
    }

    /// The lab value only if it is a usable number.
    pub fn numeric_lab(&self, lab: LabKind) -> Option<f64> {
        self.lab(lab).filter(|v| v.is_finite())
    }

    pub fn set_lab(&mut self, lab: LabKind, value: Option<f64>) {
        match lab {
            LabKind::TotalCholesterol => self.total_cholesterol = value,
            LabKind::Hdl => self.hdl = value,
            LabKind::Ldl => self.ldl = value,
            LabKind::SystolicBloodPressure => self.systolic_blood_pressure = value,
            LabKind::HsCReactiveProtein => self.hs_c_reactive_protein = value,
        }
    }
}
