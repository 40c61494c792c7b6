use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, Variant};
use crate::utils::error::{PredictError, Result};
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

/// Overrides the directory the artifacts are read from.
pub const ARTIFACT_DIR_ENV: &str = "HEART_PREDICT_ARTIFACT_DIR";
/// Points at a config file outside the artifact directory.
pub const CONFIG_PATH_ENV: &str = "HEART_PREDICT_CONFIG";
/// Looked up in the artifact directory when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "heart-predict.toml";

/// Where the run's settings may come from, gathered before resolution.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Directory of the running executable.
    pub exe_dir: Option<PathBuf>,
    pub artifact_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

impl ConfigSources {
    pub fn from_env() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self {
            exe_dir,
            artifact_dir: env_path(ARTIFACT_DIR_ENV),
            config_file: env_path(CONFIG_PATH_ENV),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub variant: Variant,
    pub artifact_dir: PathBuf,
    pub scaler_path: PathBuf,
    pub model_path: PathBuf,
    pub threshold: f64,
}

impl RuntimeConfig {
    /// Default file names inside `dir`, no config file consulted.
    pub fn with_artifact_dir(variant: Variant, dir: impl Into<PathBuf>) -> Self {
        let artifact_dir = dir.into();
        Self {
            variant,
            scaler_path: artifact_dir.join(Variant::SCALER_FILE),
            model_path: artifact_dir.join(variant.default_model_file()),
            artifact_dir,
            threshold: Variant::DEFAULT_THRESHOLD,
        }
    }

    pub fn resolve(variant: Variant) -> Result<Self> {
        Self::from_sources(variant, ConfigSources::from_env())
    }

    /// Precedence for the artifact directory: explicit override, then the
    /// config file's `artifacts.directory`, then the executable's directory.
    pub fn from_sources(variant: Variant, sources: ConfigSources) -> Result<Self> {
        let base_dir = sources
            .artifact_dir
            .clone()
            .or_else(|| sources.exe_dir.clone())
            .ok_or_else(|| {
                PredictError::config(format!(
                    "cannot determine the executable's directory; set {}",
                    ARTIFACT_DIR_ENV
                ))
            })?;

        let config_path = match sources.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(PredictError::config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                Some(path)
            }
            None => Some(base_dir.join(CONFIG_FILE_NAME)).filter(|p| p.exists()),
        };

        let Some(config_path) = config_path else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            return Ok(Self::with_artifact_dir(variant, base_dir));
        };

        tracing::debug!("Loading configuration from {}", config_path.display());
        let file = TomlConfig::from_file(&config_path)?;
        file.validate()?;

        let artifact_dir = match (&sources.artifact_dir, &file.artifacts.directory) {
            (Some(dir), _) => dir.clone(),
            (None, Some(directory)) => {
                let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
                config_dir.join(directory)
            }
            (None, None) => base_dir,
        };

        let section = match variant {
            Variant::Probability => &file.probability,
            Variant::Label => &file.label,
        };

        let scaler_file = section.scaler.as_deref().unwrap_or(Variant::SCALER_FILE);
        let model_file = section
            .model
            .as_deref()
            .unwrap_or(variant.default_model_file());

        Ok(Self {
            variant,
            scaler_path: artifact_dir.join(scaler_file),
            model_path: artifact_dir.join(model_file),
            artifact_dir,
            threshold: section.threshold.unwrap_or(Variant::DEFAULT_THRESHOLD),
        })
    }
}

impl ConfigProvider for RuntimeConfig {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn scaler_path(&self) -> &Path {
        &self.scaler_path
    }

    fn model_path(&self) -> &Path {
        &self.model_path
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_next_to_executable() {
        let dir = TempDir::new().unwrap();
        let sources = ConfigSources {
            exe_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let config = RuntimeConfig::from_sources(Variant::Probability, sources).unwrap();
        assert_eq!(config.scaler_path, dir.path().join("scaler.json"));
        assert_eq!(config.model_path, dir.path().join("heart_disease_model.json"));
        assert_eq!(config.threshold, 0.5);
    }

    #[test]
    fn test_override_dir_wins_over_executable_dir() {
        let exe = TempDir::new().unwrap();
        let artifacts = TempDir::new().unwrap();
        let sources = ConfigSources {
            exe_dir: Some(exe.path().to_path_buf()),
            artifact_dir: Some(artifacts.path().to_path_buf()),
            config_file: None,
        };

        let config = RuntimeConfig::from_sources(Variant::Label, sources).unwrap();
        assert_eq!(config.model_path, artifacts.path().join("heart_disease.json"));
    }

    #[test]
    fn test_config_file_in_artifact_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[artifacts]\ndirectory = \"v2\"\n\n[probability]\nmodel = \"net.json\"\nthreshold = 0.3\n",
        )
        .unwrap();
        let sources = ConfigSources {
            exe_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let config = RuntimeConfig::from_sources(Variant::Probability, sources).unwrap();
        assert_eq!(config.artifact_dir, dir.path().join("v2"));
        assert_eq!(config.model_path, dir.path().join("v2").join("net.json"));
        assert_eq!(config.scaler_path, dir.path().join("v2").join("scaler.json"));
        assert_eq!(config.threshold, 0.3);
    }

    #[test]
    fn test_label_section_threshold_is_applied() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[label]\nthreshold = 0.95\n").unwrap();
        let sources = ConfigSources {
            artifact_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let label = RuntimeConfig::from_sources(Variant::Label, sources.clone()).unwrap();
        assert_eq!(label.threshold, 0.95);

        let probability = RuntimeConfig::from_sources(Variant::Probability, sources).unwrap();
        assert_eq!(probability.threshold, Variant::DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = TempDir::new().unwrap();
        let sources = ConfigSources {
            exe_dir: Some(dir.path().to_path_buf()),
            artifact_dir: None,
            config_file: Some(dir.path().join("nope.toml")),
        };
        let err = RuntimeConfig::from_sources(Variant::Label, sources).unwrap_err();
        assert!(matches!(err, PredictError::ConfigError { .. }));
    }

    #[test]
    fn test_no_directory_at_all_is_error() {
        assert!(RuntimeConfig::from_sources(Variant::Label, ConfigSources::default()).is_err());
    }

    #[test]
    fn test_invalid_config_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[probability]\nthreshold = 2.0\n")
            .unwrap();
        let sources = ConfigSources {
            artifact_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(RuntimeConfig::from_sources(Variant::Probability, sources).is_err());
    }
}
