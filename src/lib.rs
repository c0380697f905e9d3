pub mod calendar;
pub mod classifier;
pub mod commands;
pub mod config;
pub mod dates;
pub mod db;
pub mod models;
pub mod projector;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use classifier::classify;
pub use config::EngineConfig;
pub use db::AppState;
pub use models::{CycleError, CycleProfile, DayClassification, Phase, PredictedInterval};
pub use projector::project;

/// Load config from the environment and open the database
pub async fn initialize() -> Result<AppState, Box<dyn std::error::Error + Send + Sync>> {
  let config = EngineConfig::from_env()?;
  let state = AppState::initialize(config).await?;
  tracing::info!("cycle calendar ready");
  Ok(state)
}
