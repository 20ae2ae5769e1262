use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// LOINC code of the systolic sub-component inside a blood-pressure panel.
pub const SYSTOLIC_COMPONENT_CODE: &str = "8480-6";

/// A laboratory or vital-sign value the risk models consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LabKind {
    TotalCholesterol,
    Hdl,
    Ldl,
    SystolicBloodPressure,
    HsCReactiveProtein,
}

impl LabKind {
    /// Every lab kind, in extraction order.
    pub const ALL: [LabKind; 5] = [
        LabKind::TotalCholesterol,
        LabKind::Hdl,
        LabKind::Ldl,
        LabKind::SystolicBloodPressure,
        LabKind::HsCReactiveProtein,
    ];

    /// Display name used in user-facing messages.
    pub fn name(&self) -> &'static str {
        match self {
            LabKind::TotalCholesterol => "Total Cholesterol",
            LabKind::Hdl => "HDL",
            LabKind::Ldl => "LDL",
            LabKind::SystolicBloodPressure => "Systolic Blood Pressure",
            LabKind::HsCReactiveProtein => "hs-CRP",
        }
    }

    /// LOINC codes of the observations this lab is read from.
    ///
    /// Systolic blood pressure is read from the blood-pressure panel; the
    /// systolic value itself is the [`SYSTOLIC_COMPONENT_CODE`] component.
    pub fn loinc_codes(&self) -> &'static [&'static str] {
        match self {
            LabKind::TotalCholesterol => &["14647-2", "2093-3"],
            LabKind::Hdl => &["2085-9"],
            LabKind::Ldl => &["13457-7", "2089-1"],
            LabKind::SystolicBloodPressure => &["55284-4"],
            LabKind::HsCReactiveProtein => &["30522-7"],
        }
    }

    /// The unit every value of this lab is normalized to.
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            LabKind::TotalCholesterol | LabKind::Hdl | LabKind::Ldl => "mg/dL",
            LabKind::SystolicBloodPressure => "mmHg",
            LabKind::HsCReactiveProtein => "mg/L",
        }
    }
}

impl std::fmt::Display for LabKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
