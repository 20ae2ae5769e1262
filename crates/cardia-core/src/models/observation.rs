use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A code within a coding system (e.g. LOINC `8480-6`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coding {
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CodeableConcept {
    #[serde(default)]
    pub coding: Vec<Coding>,
    #[serde(default)]
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn has_code(&self, code: &str) -> bool {
        self.coding.iter().any(|c| c.code.as_deref() == Some(code))
    }
}

/// A measured magnitude as delivered by the data source. Some sources send
/// numbers, others numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum QuantityValue {
    Number(f64),
    Text(String),
}

impl QuantityValue {
    /// True when there is something to parse at all.
    pub fn is_present(&self) -> bool {
        match self {
            QuantityValue::Number(_) => true,
            QuantityValue::Text(s) => !s.trim().is_empty(),
        }
    }

    /// The numeric magnitude, or `None` if the value is not a finite number.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            QuantityValue::Number(n) => *n,
            QuantityValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for QuantityValue {
    fn from(value: f64) -> Self {
        QuantityValue::Number(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quantity {
    #[serde(default)]
    pub value: Option<QuantityValue>,
    #[serde(default)]
    pub unit: Option<String>,
    /// UCUM code, e.g. `mm[Hg]`. Informational only; matching is on `unit`.
    #[serde(default)]
    pub code: Option<String>,
}

impl Quantity {
    pub fn new(value: impl Into<QuantityValue>, unit: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            unit: Some(unit.into()),
            code: None,
        }
    }

    /// The non-empty unit string, if any.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.is_empty())
    }

    /// Both a value and a unit are present and non-empty.
    pub fn is_complete(&self) -> bool {
        self.value.as_ref().is_some_and(QuantityValue::is_present) && self.unit().is_some()
    }
}

/// A sub-measurement of a panel observation, such as the systolic reading
/// of a blood-pressure panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Component {
    #[serde(default)]
    pub code: CodeableConcept,
    #[serde(default)]
    pub value_quantity: Option<Quantity>,
}

/// Parse a FHIR `dateTime`. Values without an offset, and date-only
/// values, are read as UTC.
pub fn parse_effective(raw: &str) -> Option<jiff::Timestamp> {
    let raw = raw.trim();
    if let Ok(timestamp) = raw.parse::<jiff::Timestamp>() {
        return Some(timestamp);
    }
    let datetime = raw
        .parse::<jiff::civil::DateTime>()
        .or_else(|_| {
            raw.parse::<jiff::civil::Date>()
                .map(|date| date.to_datetime(jiff::civil::Time::midnight()))
        })
        .ok()?;
    datetime
        .to_zoned(jiff::tz::TimeZone::UTC)
        .ok()
        .map(|zoned| zoned.timestamp())
}

/// An unreadable timestamp leaves the observation undated instead of
/// rejecting it.
fn deserialize_effective<'de, D>(deserializer: D) -> Result<Option<jiff::Timestamp>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_effective))
}

/// One timestamped lab measurement, as supplied by the clinical data
/// source. Read-only: extraction derives values from it but never mutates
/// the caller's copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Observation {
    #[serde(default)]
    pub code: CodeableConcept,
    /// Lifecycle status, compared case-insensitively.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub value_quantity: Option<Quantity>,
    /// The point in time the observation applies to. Used for recency only.
    #[serde(
        rename = "effectiveDateTime",
        alias = "appliesDateTime",
        default,
        deserialize_with = "deserialize_effective"
    )]
    pub effective: Option<jiff::Timestamp>,
    #[serde(default)]
    pub component: Vec<Component>,
}

impl Observation {
    /// Only `final` and `amended` observations carry usable results.
    pub fn is_usable_status(&self) -> bool {
        self.status.eq_ignore_ascii_case("final") || self.status.eq_ignore_ascii_case("amended")
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code.has_code(code)
    }

    /// Find the first component coded with `code`.
    pub fn component_with_code(&self, code: &str) -> Option<&Component> {
        self.component.iter().find(|c| c.code.has_code(code))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ObservationPayload {
    List(Vec<Observation>),
    Bundle {
        #[serde(default)]
        entry: Vec<BundleEntry>,
    },
}

#[derive(Deserialize)]
struct BundleEntry {
    resource: Observation,
}

/// Parse observations delivered either as a bare JSON array or as a FHIR
/// search `Bundle` whose entries wrap them in `resource`.
pub fn parse_observations(json: &str) -> Result<Vec<Observation>, CoreError> {
    Ok(match serde_json::from_str(json)? {
        ObservationPayload::List(observations) => observations,
        ObservationPayload::Bundle { entry } => entry.into_iter().map(|e| e.resource).collect(),
    })
}
