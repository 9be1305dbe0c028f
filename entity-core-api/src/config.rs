use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EntityError, EntityResult};

pub const ENABLED_ENV: &str = "ENTITY_AUDITING_ENABLED";
pub const CLOCK_REGRESSION_ENV: &str = "ENTITY_AUDITING_CLOCK_REGRESSION";

/// What to do when the clock reports an instant earlier than the stored
/// last modification time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockRegressionPolicy {
    /// Keep the stored time so modification time never moves backwards
    #[default]
    Clamp,
    /// Fail the stamp with `EntityError::ModificationTimeRegression`
    Reject,
}

impl FromStr for ClockRegressionPolicy {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            other => Err(EntityError::ValidationError(format!(
                "Unknown clock regression policy: {other}"
            ))),
        }
    }
}

/// Settings for the entity auditor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditingConfig {
    /// When false, audit fields are left untouched on save
    pub enabled: bool,
    pub clock_regression: ClockRegressionPolicy,
}

impl Default for AuditingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clock_regression: ClockRegressionPolicy::Clamp,
        }
    }
}

impl AuditingConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> EntityResult<Self> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(ENABLED_ENV) {
            config.enabled = parse_bool(ENABLED_ENV, &value)?;
        }
        if let Ok(value) = std::env::var(CLOCK_REGRESSION_ENV) {
            config.clock_regression = value.parse()?;
        }

        Ok(config)
    }
}

fn parse_bool(name: &str, value: &str) -> EntityResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(EntityError::ValidationError(format!(
            "Invalid boolean for {name}: {other}"
        ))),
    }
}
