use crate::utils::error::{PredictError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional `heart-predict.toml` placed next to the artifacts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub probability: VariantConfig,
    #[serde(default)]
    pub label: VariantConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactsConfig {
    /// Directory holding the artifact files. Relative paths are taken
    /// against the directory of the config file.
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantConfig {
    pub scaler: Option<String>,
    pub model: Option<String>,
    /// Cut-off applied to a probability output. The label variant only uses
    /// it when its model emits probabilities.
    pub threshold: Option<f64>,
}

impl TomlConfig {
    /// Reads and parses a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PredictError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| PredictError::config(format!("TOML parsing error: {}", e)))
    }

    /// Expands `${VAR}` references from the environment. Unset variables
    /// are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| PredictError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(directory) = &self.artifacts.directory {
            validate_path("artifacts.directory", directory)?;
        }

        for (section, variant) in [("probability", &self.probability), ("label", &self.label)] {
            if let Some(scaler) = &variant.scaler {
                validate_non_empty_string(&format!("{}.scaler", section), scaler)?;
                validate_path(&format!("{}.scaler", section), scaler)?;
            }
            if let Some(model) = &variant.model {
                validate_non_empty_string(&format!("{}.model", section), model)?;
                validate_path(&format!("{}.model", section), model)?;
            }
            if let Some(threshold) = variant.threshold {
                validate_range(&format!("{}.threshold", section), threshold, 0.0, 1.0)?;
            }
        }

        Ok(())
    }
}
