//! Score one patient bundle from the command line.
//!
//! ```sh
//! cargo run -p cardia-session --example score_patient -- bundle.json [reynolds]
//! ```
//!
//! The bundle is `{ "demographics": {...}, "observations": [...],
//! "relatedFactors": {...} }`. Without a product argument the deployment
//! config in the user's config directory is used, falling back to ASCVD.

use cardia_core::models::factors::{FactorKind, RelatedFactors};
use cardia_core::models::observation::Observation;
use cardia_core::models::patient::Demographics;
use cardia_labs::extract::ObservationSet;
use cardia_scoring::config::{ModelConfig, ModelKind};
use cardia_session::config::{default_config_path, has_config, load_config};
use cardia_session::session::Session;
use eyre::Result;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Bundle {
    demographics: Demographics,
    observations: Vec<Observation>,
    #[serde(default)]
    related_factors: RelatedFactors,
}

fn model_config(product: Option<String>) -> Result<ModelConfig> {
    if let Some(product) = product {
        return Ok(ModelConfig::for_kind(ModelKind::parse(&product)?));
    }
    let path = default_config_path()?;
    if has_config(&path) {
        return Ok(load_config(&path)?.model_config());
    }
    tracing::info!(path = %path.display(), "no deployment config, using ascvd");
    Ok(ModelConfig::ascvd())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let bundle_path = args
        .next()
        .ok_or_else(|| eyre::eyre!("usage: score_patient <bundle.json> [ascvd|reynolds]"))?;
    let config = model_config(args.next())?;

    let contents = std::fs::read_to_string(&bundle_path)
        .map_err(|e| eyre::eyre!("failed to read bundle at {bundle_path}: {e}"))?;
    let bundle: Bundle = serde_json::from_str(&contents)?;

    let today = jiff::Zoned::now().date();
    let mut session = Session::from_observations(
        &bundle.demographics,
        &ObservationSet::new(bundle.observations),
        config,
        today,
    )?;

    let factors = bundle.related_factors;
    session.set_race(factors.race);
    for (factor, value) in [
        (FactorKind::Smoker, factors.smoker),
        (FactorKind::Hypertensive, factors.hypertensive),
        (FactorKind::Diabetic, factors.diabetic),
        (
            FactorKind::FamilyHeartAttackHistory,
            factors.family_heart_attack_history,
        ),
    ] {
        session.set_factor(factor, value);
    }

    println!("{}", serde_json::to_string_pretty(session.report())?);
    Ok(())
}
