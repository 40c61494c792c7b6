use crate::adapters::artifact::{check_finite, check_len, ArtifactDefect};
use crate::domain::ports::Scaler;
use crate::utils::error::{InferenceStage, PredictError, Result};
use serde::Deserialize;

/// Standardization to zero mean and unit variance: `(x - mean) / scale`.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Rescaling into a fixed range: `x * scale + min`.
#[derive(Debug, Clone, Deserialize)]
pub struct MinMaxScaler {
    pub min: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn check(&self) -> std::result::Result<(), ArtifactDefect> {
        if self.mean.is_empty() {
            return Err(ArtifactDefect::Empty { field: "mean" });
        }
        check_len("scale", self.mean.len(), self.scale.len())?;
        check_finite("mean", &self.mean)?;
        check_finite("scale", &self.scale)?;
        if let Some(column) = self.scale.iter().position(|s| *s == 0.0) {
            return Err(ArtifactDefect::ZeroScale { column });
        }
        Ok(())
    }
}

impl MinMaxScaler {
    pub fn check(&self) -> std::result::Result<(), ArtifactDefect> {
        if self.min.is_empty() {
            return Err(ArtifactDefect::Empty { field: "min" });
        }
        check_len("scale", self.min.len(), self.scale.len())?;
        check_finite("min", &self.min)?;
        check_finite("scale", &self.scale)
    }
}

fn check_row(width: usize, row: &[f64]) -> Result<()> {
    if row.len() != width {
        return Err(PredictError::prediction(
            InferenceStage::Transform,
            format!(
                "scaler was fitted on {} features, got a row of {}",
                width,
                row.len()
            ),
        ));
    }
    Ok(())
}

fn finish(scaled: Vec<f64>) -> Result<Vec<f64>> {
    if let Some(column) = scaled.iter().position(|v| !v.is_finite()) {
        return Err(PredictError::prediction(
            InferenceStage::Transform,
            format!("scaled value in column {} is not finite", column),
        ));
    }
    Ok(scaled)
}

impl Scaler for StandardScaler {
    fn width(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        check_row(self.width(), row)?;
        let scaled = row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect();
        finish(scaled)
    }
}

impl Scaler for MinMaxScaler {
    fn width(&self) -> usize {
        self.min.len()
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        check_row(self.width(), row)?;
        let scaled = row
            .iter()
            .zip(self.min.iter().zip(&self.scale))
            .map(|(x, (min, scale))| x * scale + min)
            .collect();
        finish(scaled)
    }
}
