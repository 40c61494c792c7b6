use crate::core::loader::Artifacts;
use crate::core::{FeatureVector, ModelOutput, Outcome, Prediction, Variant};
use crate::utils::error::{InferenceStage, PredictError, Result};

/// Runs scaler and model over a single feature row and interprets the
/// model output for the chosen variant.
#[derive(Debug)]
pub struct InferenceRunner {
    artifacts: Artifacts,
    variant: Variant,
    threshold: f64,
}

impl InferenceRunner {
    pub fn new(artifacts: Artifacts, variant: Variant, threshold: f64) -> Self {
        Self {
            artifacts,
            variant,
            threshold,
        }
    }

    pub fn run(&self, features: &FeatureVector) -> Result<Prediction> {
        let row = match &self.artifacts.scaler {
            Some(scaler) => scaler.transform(features.as_slice())?,
            None => features.as_slice().to_vec(),
        };
        tracing::debug!("Model input row: {:?}", row);

        let output = self.artifacts.model.predict(&row)?;
        tracing::debug!("Model output: {:?}", output);

        interpret(self.variant, output, self.threshold)
    }
}

pub fn interpret(variant: Variant, output: ModelOutput, threshold: f64) -> Result<Prediction> {
    match (variant, output) {
        (Variant::Probability, ModelOutput::Probability(probability)) => {
            Ok(Prediction::Probability {
                outcome: Outcome::from_probability(probability, threshold),
                probability,
            })
        }
        (Variant::Probability, ModelOutput::Label(label)) => Err(PredictError::prediction(
            InferenceStage::Predict,
            format!(
                "model returned class label {} where a probability was expected",
                label
            ),
        )),
        (Variant::Label, ModelOutput::Label(label)) => {
            Ok(Prediction::Label(Outcome::from_label(label)))
        }
        (Variant::Label, ModelOutput::Probability(probability)) => Ok(Prediction::Label(
            Outcome::from_probability(probability, threshold),
        )),
    }
}
