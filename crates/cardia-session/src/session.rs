use cardia_core::models::factors::{FactorKind, Race};
use cardia_core::models::patient::{Demographics, PatientRecord};
use cardia_labs::extract::{ObservationSet, extract_labs};
use cardia_scoring::config::ModelConfig;
use tracing::info;

use crate::error::SessionError;
use crate::report::{RiskReport, compute_report};

/// One patient being looked at in the shell.
///
/// Every edit invalidates the cached report; [`Session::report`] rebuilds
/// it only when the record differs from the one it was built for.
pub struct Session {
    config: ModelConfig,
    record: PatientRecord,
    saw_unsupported_unit: bool,
    cached: Option<(PatientRecord, RiskReport)>,
}

impl Session {
    pub fn new(record: PatientRecord, config: ModelConfig) -> Self {
        Self {
            config,
            record,
            saw_unsupported_unit: false,
            cached: None,
        }
    }

    /// Build a record from demographics and fetched observations.
    pub fn from_observations(
        demographics: &Demographics,
        observations: &ObservationSet,
        config: ModelConfig,
        today: jiff::civil::Date,
    ) -> Result<Self, SessionError> {
        let mut record = PatientRecord::from_demographics(demographics, today)?;
        let extraction = extract_labs(observations);
        extraction.apply_to(&mut record);

        info!(
            model = ?config.kind,
            observations = observations.len(),
            unsupported_unit = extraction.saw_unsupported_unit,
            "session created"
        );

        Ok(Self {
            config,
            record,
            saw_unsupported_unit: extraction.saw_unsupported_unit,
            cached: None,
        })
    }

    pub fn record(&self) -> &PatientRecord {
        &self.record
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn saw_unsupported_unit(&self) -> bool {
        self.saw_unsupported_unit
    }

    pub fn set_factor(&mut self, factor: FactorKind, value: Option<bool>) {
        self.record.related_factors.set(factor, value);
    }

    pub fn set_race(&mut self, race: Option<Race>) {
        self.record.related_factors.race = race;
    }

    /// User-entered SBP, replacing any measured value.
    pub fn set_systolic_blood_pressure(&mut self, sbp: Option<f64>) {
        self.record.systolic_blood_pressure = sbp;
    }

    /// Whether the next [`Session::report`] call will recompute.
    pub fn is_stale(&self) -> bool {
        !matches!(&self.cached, Some((key, _)) if *key == self.record)
    }

    pub fn report(&mut self) -> &RiskReport {
        if self.is_stale() {
            self.cached = None;
        }
        let (_, report) = self.cached.get_or_insert_with(|| {
            (
                self.record.clone(),
                compute_report(&self.record, &self.config, self.saw_unsupported_unit),
            )
        });
        report
    }
}
