//! Display strings and styling hints derived from scores.

use cardia_core::models::lab::LabKind;
use cardia_core::models::patient::PatientRecord;
use cardia_scoring::scenario::ScenarioResult;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk category shown next to a 10-year score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    LowModerate,
    Moderate,
    High,
}

impl RiskTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent < 5.0 {
            RiskTier::Low
        } else if percent < 10.0 {
            RiskTier::LowModerate
        } else if percent < 20.0 {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::LowModerate => "Low-Moderate",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    /// CSS class the shell colors the score with.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskTier::Low => "backgroundColorLowRisk",
            RiskTier::LowModerate => "backgroundColorLowModerateRisk",
            RiskTier::Moderate => "backgroundColorModerateRisk",
            RiskTier::High => "backgroundColorHighRisk",
        }
    }
}

/// A what-if result as the shell prints it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WhatIfLabel {
    pub value: String,
    pub value_text: Option<String>,
}

pub fn format_percent(score: f64) -> String {
    format!("{score}%")
}

pub fn lower_sbp_label(result: &ScenarioResult) -> WhatIfLabel {
    WhatIfLabel {
        value: format_percent(result.risk_percent),
        value_text: result
            .record
            .systolic_blood_pressure
            .map(|sbp| format!("{sbp} mm/Hg")),
    }
}

pub fn quit_smoking_label(score: f64) -> WhatIfLabel {
    WhatIfLabel {
        value: format_percent(score),
        value_text: None,
    }
}

/// Total cholesterol 140-199 and HDL 60-150, both inclusive.
pub fn optimal_labs(record: &PatientRecord) -> bool {
    let tc = record.numeric_lab(LabKind::TotalCholesterol);
    let hdl = record.numeric_lab(LabKind::Hdl);
    tc.is_some_and(|tc| (140.0..=199.0).contains(&tc))
        && hdl.is_some_and(|hdl| (60.0..=150.0).contains(&hdl))
}

/// Label for the all-optimal scenario, worded by smoking status and
/// whether the patient's labs are already optimal.
pub fn all_optimal_label(record: &PatientRecord, score: f64) -> WhatIfLabel {
    let smoker = record.related_factors.smoker;
    let optimal = optimal_labs(record);

    let (value, text) = match (smoker, optimal) {
        (Some(true), false) => (
            format_percent(score),
            " if you quit smoking and all levels were optimal",
        ),
        (Some(false), false) => (format_percent(score), " if all levels were optimal"),
        (Some(false), true) if score > 5.0 => (
            String::new(),
            "Your risk is the lowest it can be based on the supplied information",
        ),
        (_, true) => (String::new(), "All levels are currently optimal"),
        (None, false) => {
            return WhatIfLabel {
                value: format_percent(score),
                value_text: None,
            };
        }
    };

    WhatIfLabel {
        value,
        value_text: Some(text.to_string()),
    }
}

/// Lifestyle and follow-up advice shown under the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientActions {
    pub diet_header: String,
    pub diet: String,
    pub doctor_header: String,
    pub doctor: String,
}

pub fn patient_actions(record: &PatientRecord) -> PatientActions {
    let tc = record.total_cholesterol.unwrap_or(f64::NAN);
    let hdl = record.hdl.unwrap_or(f64::NAN);

    let (diet_header, diet, doctor) = if tc <= 160.0 && hdl >= 60.0 {
        (
            "Continue to eat a healthy diet and exercise",
            "A healthy diet and regular exercise can keep cholesterol levels optimal.",
            "Discuss the need to follow up with your primary care provider to monitor your health",
        )
    } else {
        (
            "Improve your diet and exercise more",
            "A better diet and regular exercise can drastically improve your cholesterol levels.",
            "Discuss statins or other medications with your primary care provider that can help lower cholesterol.",
        )
    };

    PatientActions {
        diet_header: diet_header.to_string(),
        diet: diet.to_string(),
        doctor_header: "Talk to your doctor".to_string(),
        doctor: doctor.to_string(),
    }
}
