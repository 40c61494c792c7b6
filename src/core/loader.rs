use crate::adapters::artifact::{load_model, load_scaler};
use crate::core::{ConfigProvider, Model, Scaler};
use crate::utils::error::Result;

/// The deserialized scaler/model pair for one invocation.
pub struct Artifacts {
    pub scaler: Option<Box<dyn Scaler>>,
    pub model: Box<dyn Model>,
}

impl std::fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifacts")
            .field("scaler_width", &self.scaler.as_ref().map(|s| s.width()))
            .field("model_width", &self.model.width())
            .finish()
    }
}

/// Loads the scaler, then the model. The probability variant needs both;
/// the label variant runs unscaled when the scaler file is absent.
pub fn load_artifacts<C: ConfigProvider>(config: &C) -> Result<Artifacts> {
    let scaler_path = config.scaler_path();
    let scaler = if config.variant().scaler_required() || scaler_path.exists() {
        Some(load_scaler(scaler_path)?)
    } else {
        tracing::warn!(
            "No scaler at {}, features will be passed unscaled",
            scaler_path.display()
        );
        None
    };

    let model = load_model(config.model_path())?;

    if let Some(scaler) = &scaler {
        if scaler.width() != model.width() {
            tracing::warn!(
                "Scaler has {} columns but the model expects {} inputs",
                scaler.width(),
                model.width()
            );
        }
    }

    Ok(Artifacts { scaler, model })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::RuntimeConfig;
    use crate::core::Variant;
    use crate::utils::error::{ArtifactKind, PredictError};
    use tempfile::TempDir;

    const SCALER: &str = r#"{"type":"standard","mean":[0.0],"scale":[1.0]}"#;
    const CLASSIFIER: &str = r#"{"type":"logistic_regression","coef":[1.0],"intercept":0.0}"#;

    #[test]
    fn test_label_variant_skips_missing_scaler() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("heart_disease.json"), CLASSIFIER).unwrap();

        let config = RuntimeConfig::with_artifact_dir(Variant::Label, dir.path());
        let artifacts = load_artifacts(&config).unwrap();
        assert!(artifacts.scaler.is_none());
        assert_eq!(artifacts.model.width(), 1);
    }

    #[test]
    fn test_label_variant_uses_scaler_when_present() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("scaler.json"), SCALER).unwrap();
        std::fs::write(dir.path().join("heart_disease.json"), CLASSIFIER).unwrap();

        let config = RuntimeConfig::with_artifact_dir(Variant::Label, dir.path());
        assert!(load_artifacts(&config).unwrap().scaler.is_some());
    }

    #[test]
    fn test_label_variant_fails_on_broken_scaler() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("scaler.json"), "[]").unwrap();
        std::fs::write(dir.path().join("heart_disease.json"), CLASSIFIER).unwrap();

        let config = RuntimeConfig::with_artifact_dir(Variant::Label, dir.path());
        assert!(matches!(
            load_artifacts(&config),
            Err(PredictError::ArtifactLoadError {
                kind: ArtifactKind::Scaler,
                ..
            })
        ));
    }

    #[test]
    fn test_probability_variant_requires_scaler() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("heart_disease_model.json"), CLASSIFIER).unwrap();

        let config = RuntimeConfig::with_artifact_dir(Variant::Probability, dir.path());
        assert!(matches!(
            load_artifacts(&config),
            Err(PredictError::ArtifactNotFound {
                kind: ArtifactKind::Scaler,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_model() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("scaler.json"), SCALER).unwrap();

        let config = RuntimeConfig::with_artifact_dir(Variant::Label, dir.path());
        assert!(matches!(
            load_artifacts(&config),
            Err(PredictError::ArtifactNotFound {
                kind: ArtifactKind::Model,
                ..
            })
        ));
    }
}
