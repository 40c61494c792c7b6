use crate::adapters::artifact::{check_finite, check_len, ArtifactDefect};
use crate::domain::model::ModelOutput;
use crate::domain::ports::Model;
use crate::utils::error::{InferenceStage, PredictError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Relu,
    Sigmoid,
    Tanh,
    #[default]
    Linear,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Linear => x,
        }
    }
}

/// Fully connected layer. `kernel` is laid out inputs × units.
#[derive(Debug, Clone, Deserialize)]
pub struct DenseLayer {
    pub kernel: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
    #[serde(default)]
    pub activation: Activation,
}

impl DenseLayer {
    fn inputs(&self) -> usize {
        self.kernel.len()
    }

    fn units(&self) -> usize {
        self.bias.len()
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut out = self.bias.clone();
        for (x, weights) in input.iter().zip(&self.kernel) {
            for (acc, w) in out.iter_mut().zip(weights) {
                *acc += x * w;
            }
        }
        out.into_iter().map(|v| self.activation.apply(v)).collect()
    }
}

/// Stack of dense layers ending in a single probability unit.
#[derive(Debug, Clone, Deserialize)]
pub struct SequentialNetwork {
    pub layers: Vec<DenseLayer>,
}

impl SequentialNetwork {
    pub fn check(&self) -> std::result::Result<(), ArtifactDefect> {
        let first = self
            .layers
            .first()
            .ok_or(ArtifactDefect::Empty { field: "layers" })?;
        let mut expected_inputs = first.inputs();
        if expected_inputs == 0 {
            return Err(ArtifactDefect::Empty { field: "kernel" });
        }

        for (index, layer) in self.layers.iter().enumerate() {
            if layer.inputs() != expected_inputs {
                return Err(ArtifactDefect::Shape(format!(
                    "layer {} expects {} inputs but the previous layer has {} units",
                    index,
                    layer.inputs(),
                    expected_inputs
                )));
            }
            if layer.units() == 0 {
                return Err(ArtifactDefect::Empty { field: "bias" });
            }
            for row in &layer.kernel {
                check_len("kernel row", layer.units(), row.len())?;
                check_finite("kernel", row)?;
            }
            check_finite("bias", &layer.bias)?;
            expected_inputs = layer.units();
        }

        if expected_inputs != 1 {
            return Err(ArtifactDefect::Shape(format!(
                "final layer must have a single unit, found {}",
                expected_inputs
            )));
        }
        Ok(())
    }
}

impl Model for SequentialNetwork {
    fn width(&self) -> usize {
        self.layers.first().map(DenseLayer::inputs).unwrap_or(0)
    }

    fn predict(&self, row: &[f64]) -> Result<ModelOutput> {
        if row.len() != self.width() {
            return Err(PredictError::prediction(
                InferenceStage::Predict,
                format!(
                    "network expects {} inputs, got {}",
                    self.width(),
                    row.len()
                ),
            ));
        }

        let output = self
            .layers
            .iter()
            .fold(row.to_vec(), |input, layer| layer.forward(&input));

        match output.as_slice() {
            [p] if (0.0..=1.0).contains(p) => Ok(ModelOutput::Probability(*p)),
            [p] => Err(PredictError::prediction(
                InferenceStage::Predict,
                format!("network output {} is not a probability", p),
            )),
            _ => Err(PredictError::prediction(
                InferenceStage::Predict,
                format!("network produced {} outputs, expected 1", output.len()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(kernel: Vec<Vec<f64>>, bias: Vec<f64>, activation: Activation) -> DenseLayer {
        DenseLayer {
            kernel,
            bias,
            activation,
        }
    }

    #[test]
    fn test_forward_pass() {
        let network = SequentialNetwork {
            layers: vec![
                layer(
                    vec![vec![1.0, -1.0], vec![1.0, -1.0]],
                    vec![0.0, 0.0],
                    Activation::Relu,
                ),
                layer(vec![vec![1.0], vec![1.0]], vec![0.0], Activation::Sigmoid),
            ],
        };
        network.check().unwrap();
        assert_eq!(network.width(), 2);

        // relu([2, -2]) = [2, 0]; sigmoid(2)
        match network.predict(&[1.0, 1.0]).unwrap() {
            ModelOutput::Probability(p) => assert!((p - 0.880_797_077_977_882_3).abs() < 1e-12),
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn test_shapes_must_chain() {
        let network = SequentialNetwork {
            layers: vec![
                layer(vec![vec![1.0, 1.0]], vec![0.0, 0.0], Activation::Relu),
                layer(vec![vec![1.0]], vec![0.0], Activation::Sigmoid),
            ],
        };
        assert!(matches!(network.check(), Err(ArtifactDefect::Shape(_))));
    }

    #[test]
    fn test_final_layer_must_be_single_unit() {
        let network = SequentialNetwork {
            layers: vec![layer(vec![vec![1.0, 1.0]], vec![0.0, 0.0], Activation::Sigmoid)],
        };
        assert!(network.check().is_err());
        assert!(SequentialNetwork { layers: vec![] }.check().is_err());
    }

    #[test]
    fn test_linear_head_outside_unit_interval_fails() {
        let network = SequentialNetwork {
            layers: vec![layer(vec![vec![5.0]], vec![0.0], Activation::Linear)],
        };
        let err = network.predict(&[1.0]).unwrap_err();
        assert!(err.to_string().contains("not a probability"));
    }
}
