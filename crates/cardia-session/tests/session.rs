use cardia_core::models::factors::{FactorKind, Race};
use cardia_core::models::observation::Observation;
use cardia_core::models::patient::Demographics;
use cardia_labs::extract::ObservationSet;
use cardia_scoring::config::{ModelConfig, ModelKind};
use cardia_scoring::error::{ErrorKind, ValidationError};
use cardia_session::presentation::RiskTier;
use cardia_session::report::RiskReport;
use cardia_session::session::Session;
use jiff::civil::date;
use serde_json::{Value, json};

fn lab(code: &str, value: f64, unit: &str) -> Value {
    json!({
        "code": { "coding": [{ "system": "http://loinc.org", "code": code }] },
        "status": "final",
        "valueQuantity": { "value": value, "unit": unit },
        "effectiveDateTime": "2026-09-01T10:00:00Z"
    })
}

fn bp_panel(systolic: f64) -> Value {
    json!({
        "code": { "coding": [{ "system": "http://loinc.org", "code": "55284-4" }] },
        "status": "final",
        "effectiveDateTime": "2026-09-01T10:00:00Z",
        "component": [{
            "code": { "coding": [{ "system": "http://loinc.org", "code": "8480-6" }] },
            "valueQuantity": { "value": systolic, "unit": "mmHg" }
        }]
    })
}

fn observations(values: Vec<Value>) -> ObservationSet {
    let parsed: Vec<Observation> = values
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect();
    ObservationSet::from(parsed)
}

fn demographics(gender: &str, birth_year: i16) -> Demographics {
    serde_json::from_value(json!({
        "givenName": "Pat",
        "familyName": "Doe",
        "gender": gender,
        "birthDate": format!("{birth_year}-01-01"),
    }))
    .unwrap()
}

fn ascvd_session() -> Session {
    let set = observations(vec![
        lab("2093-3", 150.0, "mg/dL"),
        lab("2085-9", 40.0, "mg/dL"),
        bp_panel(130.0),
    ]);
    Session::from_observations(
        &demographics("male", 1967),
        &set,
        ModelConfig::ascvd(),
        date(2026, 10, 16),
    )
    .unwrap()
}

fn answer_all(session: &mut Session) {
    session.set_factor(FactorKind::Smoker, Some(false));
    session.set_factor(FactorKind::Hypertensive, Some(false));
    session.set_factor(FactorKind::Diabetic, Some(true));
    session.set_race(Some(Race::White));
}

#[test]
fn extraction_fills_the_record() {
    let session = ascvd_session();
    let record = session.record();
    assert_eq!(record.age, 59);
    assert_eq!(record.total_cholesterol, Some(150.0));
    assert_eq!(record.hdl, Some(40.0));
    assert_eq!(record.systolic_blood_pressure, Some(130.0));
    assert!(!session.saw_unsupported_unit());
}

#[test]
fn unanswered_factors_leave_report_incomplete() {
    let mut session = ascvd_session();
    match session.report() {
        RiskReport::Incomplete {
            sbp_valid,
            missing_factors,
            ..
        } => {
            assert!(*sbp_valid);
            assert_eq!(
                missing_factors,
                &[
                    FactorKind::Smoker,
                    FactorKind::Hypertensive,
                    FactorKind::Diabetic,
                    FactorKind::Race
                ]
            );
        }
        other => panic!("expected incomplete, got {other:?}"),
    }

    answer_all(&mut session);
    session.set_systolic_blood_pressure(Some(85.0));
    assert!(matches!(
        session.report(),
        RiskReport::Incomplete { sbp_valid: false, .. }
    ));
}

#[test]
fn full_report() {
    let mut session = ascvd_session();
    answer_all(&mut session);

    let report = session.report();
    assert_eq!(report.model(), ModelKind::Ascvd);
    let score = report.score().unwrap();
    assert_eq!(score.risk_percent, 14.0);
    assert!((score.risk_fraction - 0.1363).abs() < 0.0001);
    assert_eq!(score.tier, RiskTier::Moderate);
    assert_eq!(score.optimal_risk_percent, 5.0);
    assert_eq!(score.lifetime_risk, Some(50));
    assert_eq!(score.optimal_lifetime_risk, Some(5));

    let lower = score.what_if.lower_sbp.as_ref().unwrap();
    assert_eq!(lower.value, "12%");
    assert_eq!(lower.value_text.as_deref(), Some("120 mm/Hg"));
    assert!(score.what_if.quit_smoking.is_none());
    assert_eq!(score.what_if.all_optimal.value, "5%");
    assert_eq!(
        score.what_if.all_optimal.value_text.as_deref(),
        Some(" if all levels were optimal")
    );
    assert_eq!(score.patient_actions.diet_header, "Improve your diet and exercise more");
}

#[test]
fn edits_invalidate_the_cached_report() {
    let mut session = ascvd_session();
    answer_all(&mut session);
    assert_eq!(session.report().score().unwrap().risk_percent, 14.0);
    assert!(!session.is_stale());

    session.set_factor(FactorKind::Smoker, Some(false));
    assert!(!session.is_stale());

    session.set_factor(FactorKind::Smoker, Some(true));
    assert!(session.is_stale());
    let score = session.report().score().unwrap();
    assert_eq!(score.risk_percent, 22.0);
    assert_eq!(score.tier, RiskTier::High);
    assert_eq!(score.what_if.quit_smoking.as_ref().unwrap().value, "14%");
}

#[test]
fn unsupported_unit_is_reported() {
    let set = observations(vec![
        lab("2093-3", 150.0, "mg/dL"),
        lab("2085-9", 1.0, "g/L"),
        bp_panel(130.0),
    ]);
    let mut session = Session::from_observations(
        &demographics("female", 1967),
        &set,
        ModelConfig::ascvd(),
        date(2026, 10, 16),
    )
    .unwrap();
    assert!(session.saw_unsupported_unit());

    match session.report() {
        RiskReport::Error { error, message, .. } => {
            assert_eq!(error, &ValidationError::UnsupportedUnit);
            assert_eq!(
                message,
                "One or more results has an unsupported unit of measure. Cardiac Risk cannot be calculated."
            );
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn too_young_is_an_applicability_error() {
    let set = observations(vec![lab("2093-3", 150.0, "mg/dL"), lab("2085-9", 40.0, "mg/dL")]);
    let mut session = Session::from_observations(
        &demographics("male", 2010),
        &set,
        ModelConfig::ascvd(),
        date(2026, 10, 16),
    )
    .unwrap();

    match session.report() {
        RiskReport::Error { error, .. } => assert_eq!(error.kind(), ErrorKind::Applicability),
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn report_serializes_with_status_tag() {
    let mut session = ascvd_session();
    answer_all(&mut session);
    let json = serde_json::to_value(session.report()).unwrap();
    assert_eq!(json["status"], "scored");
    assert_eq!(json["model"], "ascvd");
    assert_eq!(json["score"]["riskPercent"], 14.0);
    assert_eq!(json["score"]["whatIf"]["lowerSbp"]["valueText"], "120 mm/Hg");
}

#[test]
fn non_numeric_latest_cholesterol_is_missing() {
    let mut garbage = lab("2093-3", 0.0, "mg/dL");
    garbage["valueQuantity"]["value"] = json!("abc");
    let mut older = lab("2093-3", 200.0, "mg/dL");
    older["effectiveDateTime"] = json!("2020-01-01");

    let set = observations(vec![garbage, older, lab("2085-9", 40.0, "mg/dL"), bp_panel(130.0)]);
    let mut session = Session::from_observations(
        &demographics("male", 1967),
        &set,
        ModelConfig::ascvd(),
        date(2026, 10, 16),
    )
    .unwrap();
    answer_all(&mut session);

    match session.report() {
        RiskReport::Error { message, .. } => assert_eq!(
            message,
            "Cardiac Risk cannot be calculated without a valid value for Total Cholesterol."
        ),
        other => panic!("expected error, got {other:?}"),
    }
}
