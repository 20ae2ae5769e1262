use cardia_core::models::factors::FactorKind;
use cardia_core::models::patient::PatientRecord;

use crate::RiskModel;
use crate::config::ModelKind;

/// 10-year ASCVD risk, Pooled Cohort Equations (Goff et al., 2013).
pub struct PooledCohort;

/// One race/sex branch of the Pooled Cohort Equations. Terms missing from
/// a branch are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortCoefficients {
    pub baseline_survival: f64,
    pub mean_predictor: f64,
    pub ln_age: f64,
    pub ln_age_squared: f64,
    pub ln_total_cholesterol: f64,
    pub ln_age_ln_total_cholesterol: f64,
    pub ln_hdl: f64,
    pub ln_age_ln_hdl: f64,
    pub ln_treated_sbp: f64,
    pub ln_age_ln_treated_sbp: f64,
    pub ln_untreated_sbp: f64,
    pub ln_age_ln_untreated_sbp: f64,
    pub smoker: f64,
    pub ln_age_smoker: f64,
    pub diabetic: f64,
}

impl CohortCoefficients {
    const ZERO: CohortCoefficients = CohortCoefficients {
        baseline_survival: 0.0,
        mean_predictor: 0.0,
        ln_age: 0.0,
        ln_age_squared: 0.0,
        ln_total_cholesterol: 0.0,
        ln_age_ln_total_cholesterol: 0.0,
        ln_hdl: 0.0,
        ln_age_ln_hdl: 0.0,
        ln_treated_sbp: 0.0,
        ln_age_ln_treated_sbp: 0.0,
        ln_untreated_sbp: 0.0,
        ln_age_ln_untreated_sbp: 0.0,
        smoker: 0.0,
        ln_age_smoker: 0.0,
        diabetic: 0.0,
    };

    pub const AFRICAN_AMERICAN_FEMALE: CohortCoefficients = CohortCoefficients {
        baseline_survival: 0.95334,
        mean_predictor: 86.6081,
        ln_age: 17.1141,
        ln_total_cholesterol: 0.9396,
        ln_hdl: -18.9196,
        ln_age_ln_hdl: 4.4748,
        ln_treated_sbp: 29.2907,
        ln_age_ln_treated_sbp: -6.4321,
        ln_untreated_sbp: 27.8197,
        ln_age_ln_untreated_sbp: -6.0873,
        smoker: 0.6908,
        diabetic: 0.8738,
        ..Self::ZERO
    };

    pub const WHITE_FEMALE: CohortCoefficients = CohortCoefficients {
        baseline_survival: 0.96652,
        mean_predictor: -29.1817,
        ln_age: -29.799,
        ln_age_squared: 4.884,
        ln_total_cholesterol: 13.54,
        ln_age_ln_total_cholesterol: -3.114,
        ln_hdl: -13.578,
        ln_age_ln_hdl: 3.149,
        ln_treated_sbp: 2.019,
        ln_untreated_sbp: 1.957,
        smoker: 7.574,
        ln_age_smoker: -1.665,
        diabetic: 0.661,
        ..Self::ZERO
    };

    pub const AFRICAN_AMERICAN_MALE: CohortCoefficients = CohortCoefficients {
        baseline_survival: 0.89536,
        mean_predictor: 19.5425,
        ln_age: 2.469,
        ln_total_cholesterol: 0.302,
        ln_hdl: -0.307,
        ln_treated_sbp: 1.916,
        ln_untreated_sbp: 1.809,
        smoker: 0.549,
        diabetic: 0.645,
        ..Self::ZERO
    };

    pub const WHITE_MALE: CohortCoefficients = CohortCoefficients {
        baseline_survival: 0.91436,
        mean_predictor: 61.1816,
        ln_age: 12.344,
        ln_total_cholesterol: 11.853,
        ln_age_ln_total_cholesterol: -2.664,
        ln_hdl: -7.99,
        ln_age_ln_hdl: 1.769,
        ln_treated_sbp: 1.797,
        ln_untreated_sbp: 1.764,
        smoker: 7.837,
        ln_age_smoker: -1.795,
        diabetic: 0.658,
        ..Self::ZERO
    };

    /// Branch for the record's race and sex. Races other than African
    /// American use the white tables; anything not female uses the male
    /// tables.
    pub fn for_record(record: &PatientRecord) -> &'static CohortCoefficients {
        match (record.related_factors.is_african_american(), record.is_female()) {
            (true, true) => &Self::AFRICAN_AMERICAN_FEMALE,
            (false, true) => &Self::WHITE_FEMALE,
            (true, false) => &Self::AFRICAN_AMERICAN_MALE,
            (false, false) => &Self::WHITE_MALE,
        }
    }
}

fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

fn linear_predictor(c: &CohortCoefficients, record: &PatientRecord) -> f64 {
    let factors = &record.related_factors;
    let ln_age = f64::from(record.age).ln();
    let ln_tc = record.total_cholesterol.unwrap_or(f64::NAN).ln();
    let ln_hdl = record.hdl.unwrap_or(f64::NAN).ln();
    let ln_sbp = record.systolic_blood_pressure.unwrap_or(f64::NAN).ln();
    let (treated, untreated) = if factors.is_hypertensive() {
        (ln_sbp, 0.0)
    } else {
        (0.0, ln_sbp)
    };
    let smoker = indicator(factors.is_smoker());
    let diabetic = indicator(factors.is_diabetic());

    [
        c.ln_age * ln_age,
        c.ln_age_squared * ln_age * ln_age,
        c.ln_total_cholesterol * ln_tc,
        c.ln_age_ln_total_cholesterol * ln_age * ln_tc,
        c.ln_hdl * ln_hdl,
        c.ln_age_ln_hdl * ln_age * ln_hdl,
        c.ln_treated_sbp * treated,
        c.ln_age_ln_treated_sbp * ln_age * treated,
        c.ln_untreated_sbp * untreated,
        c.ln_age_ln_untreated_sbp * ln_age * untreated,
        c.smoker * smoker,
        c.ln_age_smoker * ln_age * smoker,
        c.diabetic * diabetic,
    ]
    .iter()
    .sum()
}

/// Raw 10-year risk as a probability.
pub fn ten_year_risk_fraction(record: &PatientRecord) -> f64 {
    let c = CohortCoefficients::for_record(record);
    let predictor = linear_predictor(c, record);
    1.0 - c.baseline_survival.powf((predictor - c.mean_predictor).exp())
}

/// 10-year risk as a whole percentage.
pub fn ten_year_risk_percent(record: &PatientRecord) -> i32 {
    (ten_year_risk_fraction(record) * 100.0).round() as i32
}

impl RiskModel for PooledCohort {
    fn kind(&self) -> ModelKind {
        ModelKind::Ascvd
    }

    fn id(&self) -> &str {
        "ascvd"
    }

    fn name(&self) -> &str {
        "ASCVD risk"
    }

    fn required_factors(&self) -> &'static [FactorKind] {
        &[
            FactorKind::Smoker,
            FactorKind::Hypertensive,
            FactorKind::Diabetic,
            FactorKind::Race,
        ]
    }

    fn risk_fraction(&self, record: &PatientRecord) -> f64 {
        ten_year_risk_fraction(record)
    }

    fn risk_percent(&self, record: &PatientRecord) -> f64 {
        f64::from(ten_year_risk_percent(record))
    }
}
