pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::runtime::RuntimeConfig;
pub use crate::core::{engine::PredictionEngine, Prediction, Variant};
pub use utils::error::{PredictError, Result};
