use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause attached to artifact load failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Expected {expected} feature arguments, got {actual}")]
    ArityError { expected: usize, actual: usize },

    #[error("Feature {position} ({field}) must be numeric, got {token:?}")]
    ParseError {
        position: usize,
        field: &'static str,
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Invalid value for {field}: must be 0 or 1, got {value}")]
    RangeError { field: &'static str, value: f64 },

    #[error("{kind} file not found at {}", .path.display())]
    ArtifactNotFound { kind: ArtifactKind, path: PathBuf },

    #[error("Failed to load {kind} from {}", .path.display())]
    ArtifactLoadError {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("{stage} failed: {message}")]
    PredictionError {
        stage: InferenceStage,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PredictError>;

/// The two artifacts a predictor is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Scaler,
    Model,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scaler => write!(f, "scaler"),
            Self::Model => write!(f, "model"),
        }
    }
}

/// Which half of inference a [`PredictError::PredictionError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceStage {
    Transform,
    Predict,
}

impl fmt::Display for InferenceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform => write!(f, "transform"),
            Self::Predict => write!(f, "predict"),
        }
    }
}

/// Pipeline stage an error is attributed to when it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validation,
    Config,
    ScalerLoad,
    ModelLoad,
    Transform,
    Predict,
}

impl Stage {
    /// Prefix printed in front of the diagnostic on stderr.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation => "Input validation error",
            Self::Config => "Configuration error",
            Self::ScalerLoad => "Error loading scaler",
            Self::ModelLoad => "Error loading model",
            Self::Transform => "Error processing features",
            Self::Predict => "Prediction error",
        }
    }
}

impl PredictError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::ArityError { .. } | Self::ParseError { .. } | Self::RangeError { .. } => {
                Stage::Validation
            }
            Self::ArtifactNotFound { kind, .. } | Self::ArtifactLoadError { kind, .. } => {
                match kind {
                    ArtifactKind::Scaler => Stage::ScalerLoad,
                    ArtifactKind::Model => Stage::ModelLoad,
                }
            }
            Self::PredictionError { stage, .. } => match stage {
                InferenceStage::Transform => Stage::Transform,
                InferenceStage::Predict => Stage::Predict,
            },
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                Stage::Config
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ArityError { .. } => {
                "Pass exactly 13 values: age sex cp trestbps chol fbs restecg thalach exang oldpeak slope ca thal"
            }
            Self::ParseError { .. } => "Every feature must be a number, e.g. 63 or 2.3",
            Self::RangeError { .. } => "sex, fbs and exang are binary fields and accept only 0 or 1",
            Self::ArtifactNotFound { .. } => {
                "Place the artifacts next to the executable or set HEART_PREDICT_ARTIFACT_DIR"
            }
            Self::ArtifactLoadError { .. } => "Re-export the artifact from the training pipeline",
            Self::PredictionError { .. } => {
                "Check that the scaler and model were exported for the same 13 features"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check heart-predict.toml and the HEART_PREDICT_* environment variables"
            }
        }
    }

    pub(crate) fn prediction(stage: InferenceStage, message: impl Into<String>) -> Self {
        Self::PredictionError {
            stage,
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}
