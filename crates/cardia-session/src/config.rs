use std::path::{Path, PathBuf};

use cardia_scoring::config::{ModelConfig, ModelKind, SbpReduction};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 2;

/// Which product this installation runs, stored as JSON next to the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeploymentConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub product: ModelKind,
    /// Replaces the product's built-in what-if SBP thresholds. Added in v2.
    #[serde(default)]
    pub sbp_reduction: Option<SbpReduction>,
    pub created_at: jiff::Timestamp,
}

impl DeploymentConfig {
    pub fn new(product: ModelKind) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            product,
            sbp_reduction: None,
            created_at: jiff::Timestamp::now(),
        }
    }

    /// The scoring configuration this deployment runs with.
    pub fn model_config(&self) -> ModelConfig {
        let mut config = ModelConfig::for_kind(self.product);
        if let Some(reduction) = self.sbp_reduction {
            config.sbp_reduction = reduction;
        }
        config
    }
}

/// Per-user location of the deployment config.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.cardia.risk").join("config.json"))
}

pub fn has_config(path: &Path) -> bool {
    path.exists()
}

pub fn load_config(path: &Path) -> eyre::Result<DeploymentConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: DeploymentConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: `variant` renamed to `product`
    if from_version < 1 {
        if let Some(variant) = obj.remove("variant") {
            obj.entry("product").or_insert(variant);
        }
        obj.insert("config_version".to_string(), serde_json::Value::Number(1.into()));
        tracing::info!("migrated config v0 → v1 (renamed variant to product)");
    }

    // v1 → v2: add sbp_reduction override (none)
    if from_version < 2 {
        obj.entry("sbp_reduction").or_insert(serde_json::Value::Null);
        obj.insert("config_version".to_string(), serde_json::Value::Number(2.into()));
        tracing::info!("migrated config v1 → v2 (added sbp_reduction)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &DeploymentConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), product = ?stamped.product, "config saved");
    Ok(())
}
