use cardia_core::models::factors::FactorKind;
use cardia_core::models::patient::PatientRecord;

use crate::RiskModel;
use crate::config::ModelKind;
use crate::rounding::round_to_significant;

/// Reynolds Risk Score (Ridker et al., 2007 women; 2008 men).
pub struct Reynolds;

/// How age enters the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeTerm {
    Linear,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReynoldsCoefficients {
    pub age_term: AgeTerm,
    pub age: f64,
    pub ln_sbp: f64,
    pub ln_hs_crp: f64,
    pub ln_total_cholesterol: f64,
    pub ln_hdl: f64,
    pub smoker: f64,
    pub family_history: f64,
    pub offset: f64,
    pub baseline_survival: f64,
}

impl ReynoldsCoefficients {
    pub const WOMEN: ReynoldsCoefficients = ReynoldsCoefficients {
        age_term: AgeTerm::Linear,
        age: 0.0799,
        ln_sbp: 3.137,
        ln_hs_crp: 0.180,
        ln_total_cholesterol: 1.382,
        ln_hdl: -1.172,
        smoker: 0.818,
        family_history: 0.438,
        offset: 22.325,
        baseline_survival: 0.98634,
    };

    pub const MEN: ReynoldsCoefficients = ReynoldsCoefficients {
        age_term: AgeTerm::Log,
        age: 4.385,
        ln_sbp: 2.607,
        ln_hs_crp: 0.102,
        ln_total_cholesterol: 0.963,
        ln_hdl: -0.772,
        smoker: 0.405,
        family_history: 0.541,
        offset: 33.097,
        baseline_survival: 0.8990,
    };

    pub fn for_record(record: &PatientRecord) -> &'static ReynoldsCoefficients {
        if record.is_female() {
            &Self::WOMEN
        } else {
            &Self::MEN
        }
    }
}

fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

/// Raw 10-year risk as a probability.
pub fn reynolds_risk_fraction(record: &PatientRecord) -> f64 {
    let c = ReynoldsCoefficients::for_record(record);
    let factors = &record.related_factors;
    let age = match c.age_term {
        AgeTerm::Linear => f64::from(record.age),
        AgeTerm::Log => f64::from(record.age).ln(),
    };
    let ln = |v: Option<f64>| v.unwrap_or(f64::NAN).ln();

    let predictor = c.age * age
        + c.ln_sbp * ln(record.systolic_blood_pressure)
        + c.ln_hs_crp * ln(record.hs_c_reactive_protein)
        + c.ln_total_cholesterol * ln(record.total_cholesterol)
        + c.ln_hdl * ln(record.hdl)
        + c.smoker * indicator(factors.is_smoker())
        + c.family_history * indicator(factors.has_family_history());

    1.0 - c.baseline_survival.powf((predictor - c.offset).exp())
}

/// Score in percent, one significant digit below 10 and two otherwise.
pub fn reynolds_risk_score(record: &PatientRecord) -> f64 {
    let score = reynolds_risk_fraction(record) * 100.0;
    if score <= 0.0 {
        return 0.0;
    }
    let digits = if score < 10.0 { 1 } else { 2 };
    round_to_significant(score, digits)
}

impl RiskModel for Reynolds {
    fn kind(&self) -> ModelKind {
        ModelKind::Reynolds
    }

    fn id(&self) -> &str {
        "reynolds"
    }

    fn name(&self) -> &str {
        "Reynolds Risk Score"
    }

    fn required_factors(&self) -> &'static [FactorKind] {
        &[FactorKind::Smoker, FactorKind::FamilyHeartAttackHistory]
    }

    fn risk_fraction(&self, record: &PatientRecord) -> f64 {
        reynolds_risk_fraction(record)
    }

    fn risk_percent(&self, record: &PatientRecord) -> f64 {
        reynolds_risk_score(record)
    }
}
