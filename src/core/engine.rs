use crate::core::inference::InferenceRunner;
use crate::core::loader::load_artifacts;
use crate::core::validator::parse_features;
use crate::core::{ConfigProvider, Prediction};
use crate::utils::error::Result;

/// One predictor invocation: validate → load → transform → predict.
pub struct PredictionEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> PredictionEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Prediction> {
        let variant = self.config.variant();
        tracing::info!("Running {:?} predictor", variant);

        let features = parse_features(tokens)?;
        tracing::debug!("Validated features: {:?}", features);

        let artifacts = load_artifacts(&self.config)?;
        tracing::info!(
            "Artifacts loaded (scaler: {})",
            if artifacts.scaler.is_some() { "yes" } else { "no" }
        );

        let runner = InferenceRunner::new(artifacts, variant, self.config.threshold());
        let prediction = runner.run(&features)?;
        tracing::info!("Prediction complete: {:?}", prediction.outcome());

        Ok(prediction)
    }
}
