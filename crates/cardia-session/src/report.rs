//! Full recomputation of everything the shell shows for one record.

use cardia_core::models::factors::FactorKind;
use cardia_core::models::patient::PatientRecord;
use cardia_scoring::config::{ModelConfig, ModelKind};
use cardia_scoring::error::ValidationError;
use cardia_scoring::lifetime::compute_lifetime_risk;
use cardia_scoring::scenario::{all_optimal, lower_sbp, quit_smoking};
use cardia_scoring::validate::{can_calculate, is_valid_sbp, missing_factors, validate_extracted};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::presentation::{
    PatientActions, RiskTier, WhatIfLabel, all_optimal_label, lower_sbp_label, patient_actions,
    quit_smoking_label,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum RiskReport {
    /// The record can never be scored by this model as it stands.
    Error {
        model: ModelKind,
        error: ValidationError,
        message: String,
    },
    /// Waiting on the user for an SBP or a factor answer.
    Incomplete {
        model: ModelKind,
        sbp_valid: bool,
        missing_factors: Vec<FactorKind>,
    },
    Scored {
        model: ModelKind,
        score: Box<ScoreSummary>,
    },
}

impl RiskReport {
    pub fn model(&self) -> ModelKind {
        match self {
            RiskReport::Error { model, .. }
            | RiskReport::Incomplete { model, .. }
            | RiskReport::Scored { model, .. } => *model,
        }
    }

    pub fn score(&self) -> Option<&ScoreSummary> {
        match self {
            RiskReport::Scored { score, .. } => Some(score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreSummary {
    pub risk_fraction: f64,
    pub risk_percent: f64,
    pub tier: RiskTier,
    pub optimal_risk_percent: f64,
    /// Lifetime figures are only produced by the ASCVD product.
    pub lifetime_risk: Option<u8>,
    pub optimal_lifetime_risk: Option<u8>,
    pub what_if: WhatIf,
    pub patient_actions: PatientActions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WhatIf {
    pub lower_sbp: Option<WhatIfLabel>,
    /// Only for smokers.
    pub quit_smoking: Option<WhatIfLabel>,
    pub all_optimal: WhatIfLabel,
}

/// Validate and score `record` from scratch.
pub fn compute_report(
    record: &PatientRecord,
    config: &ModelConfig,
    saw_unsupported_unit: bool,
) -> RiskReport {
    let model = config.kind;

    if let Err(error) = validate_extracted(record, config, saw_unsupported_unit) {
        warn!(?model, kind = ?error.kind(), "record cannot be scored");
        return RiskReport::Error {
            model,
            message: error.to_string(),
            error,
        };
    }

    if !can_calculate(record, config) {
        let missing = missing_factors(record, config);
        debug!(?model, missing = missing.len(), "waiting on input");
        return RiskReport::Incomplete {
            model,
            sbp_valid: is_valid_sbp(record, config),
            missing_factors: missing,
        };
    }

    let scoring = config.model();
    let risk_percent = scoring.risk_percent(record);
    let optimal = all_optimal(record, config);

    let (lifetime_risk, optimal_lifetime_risk) = match model {
        ModelKind::Ascvd => (
            compute_lifetime_risk(record, false),
            compute_lifetime_risk(record, true),
        ),
        ModelKind::Reynolds => (None, None),
    };

    let what_if = WhatIf {
        lower_sbp: lower_sbp(record, config).map(|r| lower_sbp_label(&r)),
        quit_smoking: record
            .related_factors
            .is_smoker()
            .then(|| quit_smoking_label(quit_smoking(record, config).risk_percent)),
        all_optimal: all_optimal_label(record, optimal.risk_percent),
    };

    debug!(?model, risk_percent, "record scored");
    RiskReport::Scored {
        model,
        score: Box::new(ScoreSummary {
            risk_fraction: scoring.risk_fraction(record),
            risk_percent,
            tier: RiskTier::from_percent(risk_percent),
            optimal_risk_percent: optimal.risk_percent,
            lifetime_risk,
            optimal_lifetime_risk,
            what_if,
            patient_actions: patient_actions(record),
        }),
    }
}
