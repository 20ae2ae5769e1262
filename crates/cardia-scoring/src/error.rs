use cardia_core::models::lab::LabKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown risk model: {0}")]
    UnknownModel(String),
}

/// Which side of a lab bound was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BoundViolation {
    TooLow,
    TooHigh,
}

impl BoundViolation {
    fn as_str(&self) -> &'static str {
        match self {
            BoundViolation::TooLow => "too low",
            BoundViolation::TooHigh => "too high",
        }
    }
}

impl std::fmt::Display for BoundViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad class of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ErrorKind {
    /// Age or gender outside what the model supports.
    Applicability,
    /// A required lab is absent or non-numeric.
    MissingData,
    /// A lab value is physiologically implausible for the model.
    OutOfBounds,
    /// A required lab is missing because its results used unsupported units.
    UnsupportedUnit,
}

/// The single reason a record cannot be scored. Its `Display` is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("{model} can only be estimated for patients aged {min}-{max} years old.")]
    AgeOutOfRange {
        model: String,
        age: i32,
        min: i32,
        max: i32,
    },

    #[error("{model} cannot be estimated for indeterminate gender.")]
    IndeterminateGender { model: String, gender: String },

    #[error("Cardiac Risk cannot be calculated without a valid value for {lab}.")]
    MissingLab { lab: LabKind },

    #[error("{lab} levels are {violation} to return a cardiac risk score.")]
    OutOfBounds {
        lab: LabKind,
        value: f64,
        violation: BoundViolation,
    },

    #[error(
        "One or more results has an unsupported unit of measure. Cardiac Risk cannot be calculated."
    )]
    UnsupportedUnit,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::AgeOutOfRange { .. } | ValidationError::IndeterminateGender { .. } => {
                ErrorKind::Applicability
            }
            ValidationError::MissingLab { .. } => ErrorKind::MissingData,
            ValidationError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            ValidationError::UnsupportedUnit => ErrorKind::UnsupportedUnit,
        }
    }
}
