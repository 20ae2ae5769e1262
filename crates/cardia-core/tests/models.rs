use cardia_core::models::factors::{FactorKind, Race, RelatedFactors, Sex};
use cardia_core::models::lab::LabKind;
use cardia_core::models::observation::{Observation, QuantityValue};
use cardia_core::models::patient::{Demographics, PatientRecord};
use jiff::civil::date;
use serde_json::json;

#[test]
fn sex_parse_is_case_insensitive() {
    assert_eq!(Sex::parse("male"), Some(Sex::Male));
    assert_eq!(Sex::parse("Female"), Some(Sex::Female));
    assert_eq!(Sex::parse("MALE"), Some(Sex::Male));
    assert_eq!(Sex::parse("unknown"), None);
    assert_eq!(Sex::parse(""), None);
}

#[test]
fn unknown_factor_is_not_false() {
    let mut factors = RelatedFactors::default();
    assert!(!factors.is_known(FactorKind::Smoker));
    assert!(!factors.is_smoker());

    factors.set(FactorKind::Smoker, Some(false));
    assert!(factors.is_known(FactorKind::Smoker));
    assert!(!factors.is_smoker());

    factors.set(FactorKind::Smoker, None);
    assert!(!factors.is_known(FactorKind::Smoker));
}

#[test]
fn hypertension_alias_is_accepted() {
    let factors: RelatedFactors =
        serde_json::from_value(json!({ "hypertension": true, "race": "aa" })).unwrap();
    assert_eq!(factors.hypertensive, Some(true));
    assert_eq!(factors.race, Some(Race::Aa));
    assert!(factors.smoker.is_none());
}

#[test]
fn observation_deserializes_from_fhir_shape() {
    let obs: Observation = serde_json::from_value(json!({
        "code": { "coding": [{ "system": "http://loinc.org", "code": "2093-3" }] },
        "status": "Final",
        "valueQuantity": { "value": "238", "unit": "mg/dL" },
        "appliesDateTime": "2016-03-07T18:02:00.000Z"
    }))
    .unwrap();

    assert!(obs.has_code("2093-3"));
    assert!(obs.is_usable_status());
    let quantity = obs.value_quantity.as_ref().unwrap();
    assert!(quantity.is_complete());
    assert_eq!(quantity.value.as_ref().and_then(QuantityValue::as_f64), Some(238.0));
    assert!(obs.effective.is_some());
}

#[test]
fn entered_in_error_is_not_usable() {
    let obs = Observation {
        status: "entered-in-error".to_string(),
        ..Default::default()
    };
    assert!(!obs.is_usable_status());
}

#[test]
fn non_numeric_text_value_does_not_parse() {
    assert_eq!(QuantityValue::Text("abc".to_string()).as_f64(), None);
    assert!(!QuantityValue::Text("  ".to_string()).is_present());
}

#[test]
fn record_from_demographics_derives_age() {
    let demographics = Demographics {
        given_name: Some("John".to_string()),
        family_name: Some("Doe".to_string()),
        gender: "male".to_string(),
        birth_date: date(1980, 3, 1),
    };
    let record = PatientRecord::from_demographics(&demographics, date(2026, 10, 16)).unwrap();
    assert_eq!(record.age, 46);
    assert_eq!(record.sex(), Some(Sex::Male));
    assert_eq!(record.lab(LabKind::TotalCholesterol), None);
}

#[test]
fn nan_lab_is_not_numeric() {
    let mut record = PatientRecord::new("female", date(1980, 3, 1), date(2026, 10, 16)).unwrap();
    record.set_lab(LabKind::Hdl, Some(f64::NAN));
    assert!(record.lab(LabKind::Hdl).is_some());
    assert_eq!(record.numeric_lab(LabKind::Hdl), None);
}

#[test]
fn observations_parse_from_array_or_bundle() {
    use cardia_core::models::observation::parse_observations;

    let array = r#"[{ "status": "final", "valueQuantity": { "value": 5, "unit": "mmol/L" } }]"#;
    let parsed = parse_observations(array).unwrap();
    assert_eq!(parsed.len(), 1);

    let bundle = r#"{
        "resourceType": "Bundle",
        "entry": [
            { "resource": { "status": "final" } },
            { "resource": { "status": "amended" } }
        ]
    }"#;
    let parsed = parse_observations(bundle).unwrap();
    let statuses: Vec<&str> = parsed.iter().map(|o| o.status.as_str()).collect();
    assert_eq!(statuses, ["final", "amended"]);

    assert!(parse_observations("42").is_err());
}

#[test]
fn effective_accepts_date_only_and_local_times() {
    use cardia_core::models::observation::parse_observations;

    let payload = r#"[
        { "status": "final", "effectiveDateTime": "2024-05-01" },
        { "status": "final", "effectiveDateTime": "2024-05-01T10:00:00" },
        { "status": "final", "effectiveDateTime": "2024-05-01T10:00:00+02:00" },
        { "status": "final", "effectiveDateTime": "last tuesday" }
    ]"#;
    let parsed = parse_observations(payload).unwrap();
    let effective: Vec<Option<String>> = parsed
        .iter()
        .map(|o| o.effective.map(|t| t.to_string()))
        .collect();

    assert_eq!(
        effective,
        [
            Some("2024-05-01T00:00:00Z".to_string()),
            Some("2024-05-01T10:00:00Z".to_string()),
            Some("2024-05-01T08:00:00Z".to_string()),
            None,
        ]
    );
}
