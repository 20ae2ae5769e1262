//! cardia-scoring
//!
//! Cardiovascular risk models and everything that runs on a validated
//! patient record: the published regression models, the lifetime risk
//! table, what-if scenarios, and the validator that gates them. Pure
//! computation, no I/O.

pub mod config;
pub mod error;
pub mod lifetime;
pub mod models;
pub mod rounding;
pub mod scenario;
pub mod validate;

use cardia_core::models::factors::FactorKind;
use cardia_core::models::patient::PatientRecord;

use config::ModelKind;

/// A published cardiovascular risk model.
///
/// Implementations assume a record that has already passed
/// [`validate::validate`]; on anything else the result is meaningless.
pub trait RiskModel: Send + Sync {
    fn kind(&self) -> ModelKind;

    /// Unique identifier (e.g., "ascvd", "reynolds").
    fn id(&self) -> &str;

    /// Human-readable name used in messages (e.g., "ASCVD risk").
    fn name(&self) -> &str;

    /// Related factors that must be known before this model can score.
    fn required_factors(&self) -> &'static [FactorKind];

    /// Raw risk as a probability in `0.0..=1.0`.
    fn risk_fraction(&self, record: &PatientRecord) -> f64;

    /// Risk as the percentage shown to the user, rounded the way this
    /// model reports it.
    fn risk_percent(&self, record: &PatientRecord) -> f64;
}

/// Return all registered models.
pub fn all_models() -> Vec<&'static dyn RiskModel> {
    vec![ModelKind::Ascvd.model(), ModelKind::Reynolds.model()]
}

/// Look up a model by ID.
pub fn get_model(id: &str) -> Option<&'static dyn RiskModel> {
    all_models().into_iter().find(|m| m.id() == id)
}
