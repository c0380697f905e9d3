//! Environment-driven configuration
//!
//! Values come from the process environment, after loading `.env` if present.

use std::env;

use serde::{Deserialize, Serialize};

use crate::dates::WeekStart;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const DEFAULT_DATABASE_URL: &str = "sqlite://cycle.db?mode=rwc";
const DEFAULT_CYCLE_LENGTH: i64 = 28;
const DEFAULT_PERIOD_LENGTH: i64 = 5;

pub const DATABASE_URL_VAR: &str = "CYCLE_DATABASE_URL";
pub const CYCLE_LENGTH_VAR: &str = "CYCLE_DEFAULT_LENGTH";
pub const PERIOD_LENGTH_VAR: &str = "CYCLE_DEFAULT_PERIOD_LENGTH";
pub const WEEK_START_VAR: &str = "CYCLE_WEEK_START";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ConfigError {
  #[error("Invalid value for {var}: {reason}")]
  InvalidValue { var: String, reason: String },
}

/// ---------------------------------------------------------------------------
/// Engine Config
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
  pub database_url: String,
  /// Used when no cycle settings have been saved yet
  pub default_cycle_length: i64,
  pub default_period_length: i64,
  pub week_start: WeekStart,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      database_url: DEFAULT_DATABASE_URL.to_string(),
      default_cycle_length: DEFAULT_CYCLE_LENGTH,
      default_period_length: DEFAULT_PERIOD_LENGTH,
      week_start: WeekStart::Monday,
    }
  }
}

impl EngineConfig {
  /// Load `.env` (if any) and read the environment
  pub fn from_env() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_vars()
  }

  /// Read the current environment without touching `.env`
  pub fn from_vars() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let config = Self {
      database_url: env::var(DATABASE_URL_VAR).unwrap_or(defaults.database_url),
      default_cycle_length: parse_var(CYCLE_LENGTH_VAR, defaults.default_cycle_length)?,
      default_period_length: parse_var(PERIOD_LENGTH_VAR, defaults.default_period_length)?,
      week_start: parse_var(WEEK_START_VAR, defaults.week_start)?,
    };

    if config.default_cycle_length < 1 {
      return Err(ConfigError::InvalidValue {
        var: CYCLE_LENGTH_VAR.to_string(),
        reason: "default cycle length must be at least 1 day".to_string(),
      });
    }
    if config.default_period_length < 1 {
      return Err(ConfigError::InvalidValue {
        var: PERIOD_LENGTH_VAR.to_string(),
        reason: "default period length must be at least 1 day".to_string(),
      });
    }
    if config.default_period_length > config.default_cycle_length {
      return Err(ConfigError::InvalidValue {
        var: PERIOD_LENGTH_VAR.to_string(),
        reason: format!(
          "default period length {} exceeds default cycle length {}",
          config.default_period_length, config.default_cycle_length
        ),
      });
    }

    tracing::info!(
      database_url = %config.database_url,
      cycle_length = config.default_cycle_length,
      period_length = config.default_period_length,
      week_start = %config.week_start,
      "loaded engine config"
    );

    Ok(config)
  }
}

fn parse_var<T>(var: &str, default: T) -> Result<T, ConfigError>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  match env::var(var) {
    Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
      var: var.to_string(),
      reason: e.to_string(),
    }),
    Err(_) => Ok(default),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
