use crate::adapters::artifact::{check_finite, check_len, ArtifactDefect};
use crate::domain::model::ModelOutput;
use crate::domain::ports::Model;
use crate::utils::error::{InferenceStage, PredictError, Result};
use serde::Deserialize;

fn default_classes() -> Vec<f64> {
    vec![0.0, 1.0]
}

/// Binary logistic regression that predicts class labels directly.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegression {
    pub coef: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_classes")]
    pub classes: Vec<f64>,
}

impl LogisticRegression {
    pub fn check(&self) -> std::result::Result<(), ArtifactDefect> {
        if self.coef.is_empty() {
            return Err(ArtifactDefect::Empty { field: "coef" });
        }
        check_finite("coef", &self.coef)?;
        check_finite("intercept", &[self.intercept])?;
        check_len("classes", 2, self.classes.len())?;
        check_finite("classes", &self.classes)
    }

    pub fn decision_function(&self, row: &[f64]) -> f64 {
        self.coef
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl Model for LogisticRegression {
    fn width(&self) -> usize {
        self.coef.len()
    }

    fn predict(&self, row: &[f64]) -> Result<ModelOutput> {
        if row.len() != self.width() {
            return Err(PredictError::prediction(
                InferenceStage::Predict,
                format!(
                    "classifier expects {} features, got {}",
                    self.width(),
                    row.len()
                ),
            ));
        }

        let decision = self.decision_function(row);
        if !decision.is_finite() {
            return Err(PredictError::prediction(
                InferenceStage::Predict,
                "decision value is not finite",
            ));
        }

        let class = self
            .classes
            .get(usize::from(decision > 0.0))
            .copied()
            .ok_or_else(|| {
                PredictError::prediction(InferenceStage::Predict, "classifier has no class labels")
            })?;
        Ok(ModelOutput::Label(class))
    }
}
