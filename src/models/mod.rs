pub mod classification;
pub mod log;
pub mod profile;

pub use classification::{DayClassification, Phase, PredictedInterval};
pub use log::{CycleSettings, PeriodLogEntry};
pub use profile::{CycleError, CycleProfile};
