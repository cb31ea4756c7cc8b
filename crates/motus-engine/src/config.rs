//! Engine configuration. The MCID thresholds are domain data owned by
//! the clinical team, so they arrive as JSON and are validated here;
//! the raw value is migrated before deserializing so old configs keep
//! loading.

use motus_outcomes::{FOLLOW_UP_WINDOW_DAYS, McidThresholds};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Current config version. Bump this when adding fields or changing
/// shape. Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Clinically-important-difference magnitudes, per instrument.
    pub mcid: McidThresholds,
    #[serde(default = "default_follow_up_window_days")]
    pub follow_up_window_days: i64,
    #[serde(default = "default_max_plan_exercises")]
    pub max_plan_exercises: usize,
}

fn default_follow_up_window_days() -> i64 {
    FOLLOW_UP_WINDOW_DAYS
}

fn default_max_plan_exercises() -> usize {
    10
}

/// Parse and validate an engine config from raw JSON.
pub fn parse_config(raw: &str) -> Result<EngineConfig, EngineError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(raw)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: EngineConfig = serde_json::from_value(migrated)?;

    config.mcid.validate()?;
    if config.follow_up_window_days <= 0 {
        return Err(EngineError::Config(format!(
            "follow_up_window_days must be positive, got {}",
            config.follow_up_window_days,
        )));
    }
    if config.max_plan_exercises == 0 {
        return Err(EngineError::Config(
            "max_plan_exercises must be at least 1".to_string(),
        ));
    }
    Ok(config)
}

/// Run sequential migrations from `from_version` up to
/// [`CURRENT_VERSION`]. Each migration is a pure transform on the raw
/// JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, EngineError> {
    if from_version > CURRENT_VERSION {
        return Err(EngineError::Config(format!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})",
        )));
    }

    // v0 → v1: the follow-up window became configurable (fixed at 14
    // days before that).
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| EngineError::Config("config is not a JSON object".to_string()))?;
        obj.entry("follow_up_window_days")
            .or_insert(serde_json::Value::Number(FOLLOW_UP_WINDOW_DAYS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated engine config v0 → v1 (added follow_up_window_days)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}
