//! Most-recent-valid observation selection.

use cardia_core::models::observation::{Observation, QuantityValue};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

/// Outcome of one selection. `saw_unsupported_unit` is scoped to this call
/// and is set whenever a usable observation was skipped because the unit
/// rule rejected its unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection {
    pub value: Option<f64>,
    pub saw_unsupported_unit: bool,
}

/// Order observations most recent first. The sort is stable; observations
/// without a timestamp go last.
pub fn sort_by_recency(observations: &[Observation]) -> Vec<&Observation> {
    let mut ordered: Vec<&Observation> = observations.iter().collect();
    ordered.sort_by(|a, b| b.effective.cmp(&a.effective));
    ordered
}

/// Select the value of the most recent clinically valid observation.
///
/// An observation is considered when its status is `final` or `amended`
/// and it carries both a value and a unit. The first considered
/// observation whose unit `unit_rule` accepts wins, and older ones are
/// never looked at. A winning value that is not a number comes back as
/// `NaN` so the record reads it as missing.
pub fn select_latest_valid<F>(observations: &[Observation], unit_rule: F) -> Selection
where
    F: Fn(f64, &str) -> Option<f64>,
{
    let mut selection = Selection::default();

    for observation in sort_by_recency(observations) {
        if !observation.is_usable_status() {
            continue;
        }
        let Some(quantity) = observation.value_quantity.as_ref().filter(|q| q.is_complete())
        else {
            continue;
        };
        let Some(unit) = quantity.unit() else {
            continue;
        };
        let value = quantity
            .value
            .as_ref()
            .and_then(QuantityValue::as_f64)
            .unwrap_or(f64::NAN);

        if let Some(normalized) = unit_rule(value, unit) {
            if normalized.is_nan() {
                debug!(status = %observation.status, "latest observation has a non-numeric value");
            }
            selection.value = Some(normalized);
            return selection;
        }

        debug!(unit, "skipping observation with unsupported unit");
        selection.saw_unsupported_unit = true;
    }

    selection
}
