use crate::domain::model::{ModelOutput, Variant};
use crate::utils::error::Result;
use std::path::Path;

/// A fitted normalization applied to a raw feature row.
pub trait Scaler: Send + Sync {
    /// Number of columns the scaler was fitted on.
    fn width(&self) -> usize;
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>>;
}

/// A trained classifier.
pub trait Model: Send + Sync {
    /// Number of input columns the model was trained on.
    fn width(&self) -> usize;
    fn predict(&self, row: &[f64]) -> Result<ModelOutput>;
}

/// Resolved settings for one predictor run.
pub trait ConfigProvider {
    fn variant(&self) -> Variant;
    fn scaler_path(&self) -> &Path;
    fn model_path(&self) -> &Path;
    fn threshold(&self) -> f64;
}
