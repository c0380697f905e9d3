//! Application commands the UI calls
//!
//! Each command loads what it needs from `AppState`, runs the engine and
//! returns a serializable result or `CommandError`.

pub mod calendar;
pub mod cycle;

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarError;
use crate::models::CycleError;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "error")]
pub enum CommandError {
  #[error(transparent)]
  Store(#[from] StoreError),

  #[error(transparent)]
  Calendar(#[from] CalendarError),

  #[error(transparent)]
  Cycle(#[from] CycleError),
}
