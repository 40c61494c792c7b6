//! JSON artifact files and their deserialization into scaler/model objects.
//!
//! Each document carries a `"type"` tag selecting the concrete
//! implementation, for example:
//!
//! ```json
//! { "type": "standard", "mean": [54.4, 0.68], "scale": [9.0, 0.47] }
//! { "type": "logistic_regression", "coef": [0.3, -0.1], "intercept": 0.2 }
//! ```

use crate::adapters::linear::LogisticRegression;
use crate::adapters::network::SequentialNetwork;
use crate::adapters::scaler::{MinMaxScaler, StandardScaler};
use crate::domain::ports::{Model, Scaler};
use crate::utils::error::{ArtifactKind, PredictError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Structural problem found in an artifact that parsed as valid JSON.
#[derive(Error, Debug)]
pub enum ArtifactDefect {
    #[error("{field} is empty")]
    Empty { field: &'static str },

    #[error("{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} contains a non-finite value")]
    NonFinite { field: &'static str },

    #[error("scale of column {column} is zero")]
    ZeroScale { column: usize },

    #[error("{0}")]
    Shape(String),
}

pub(crate) fn check_len(
    field: &'static str,
    expected: usize,
    actual: usize,
) -> std::result::Result<(), ArtifactDefect> {
    if expected != actual {
        return Err(ArtifactDefect::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn check_finite(
    field: &'static str,
    values: &[f64],
) -> std::result::Result<(), ArtifactDefect> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ArtifactDefect::NonFinite { field })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
}

impl ScalerArtifact {
    fn into_scaler(self) -> std::result::Result<Box<dyn Scaler>, ArtifactDefect> {
        match self {
            ScalerArtifact::Standard(scaler) => {
                scaler.check()?;
                Ok(Box::new(scaler))
            }
            ScalerArtifact::MinMax(scaler) => {
                scaler.check()?;
                Ok(Box::new(scaler))
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelArtifact {
    Sequential(SequentialNetwork),
    LogisticRegression(LogisticRegression),
}

impl ModelArtifact {
    fn into_model(self) -> std::result::Result<Box<dyn Model>, ArtifactDefect> {
        match self {
            ModelArtifact::Sequential(network) => {
                network.check()?;
                Ok(Box::new(network))
            }
            ModelArtifact::LogisticRegression(classifier) => {
                classifier.check()?;
                Ok(Box::new(classifier))
            }
        }
    }
}

fn load_error(
    kind: ArtifactKind,
    path: &Path,
    source: impl Into<crate::utils::error::BoxError>,
) -> PredictError {
    PredictError::ArtifactLoadError {
        kind,
        path: path.to_path_buf(),
        source: source.into(),
    }
}

/// Reads and deserializes a JSON artifact, distinguishing a missing file
/// from one that exists but cannot be decoded.
pub fn read_artifact<T: DeserializeOwned>(kind: ArtifactKind, path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(PredictError::ArtifactNotFound {
            kind,
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| load_error(kind, path, e))?;
    serde_json::from_str(&content).map_err(|e| load_error(kind, path, e))
}

pub fn load_scaler(path: &Path) -> Result<Box<dyn Scaler>> {
    let artifact: ScalerArtifact = read_artifact(ArtifactKind::Scaler, path)?;
    let scaler = artifact
        .into_scaler()
        .map_err(|e| load_error(ArtifactKind::Scaler, path, e))?;
    tracing::debug!("Loaded scaler ({} columns) from {}", scaler.width(), path.display());
    Ok(scaler)
}

pub fn load_model(path: &Path) -> Result<Box<dyn Model>> {
    let artifact: ModelArtifact = read_artifact(ArtifactKind::Model, path)?;
    let model = artifact
        .into_model()
        .map_err(|e| load_error(ArtifactKind::Model, path, e))?;
    tracing::debug!("Loaded model ({} inputs) from {}", model.width(), path.display());
    Ok(model)
}
