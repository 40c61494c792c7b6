#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;

pub const SAMPLE: [&str; 13] = [
    "63", "1", "3", "145", "233", "1", "0", "150", "0", "2.3", "0", "0", "1",
];

/// Column statistics of the Cleveland heart-disease data set.
pub const STANDARD_SCALER: &str = r#"{
  "type": "standard",
  "mean":  [54.37, 0.683, 0.967, 131.62, 246.26, 0.149, 0.528, 149.65, 0.327, 1.04, 1.399, 0.729, 2.314],
  "scale": [9.07, 0.466, 1.03, 17.51, 51.75, 0.356, 0.525, 22.87, 0.469, 1.16, 0.616, 1.02, 0.611]
}"#;

/// 13 → 2 (relu) → 1 (sigmoid).
pub const NETWORK: &str = r#"{
  "type": "sequential",
  "layers": [
    {
      "activation": "relu",
      "kernel": [
        [ 0.42, -0.10], [ 0.31,  0.05], [ 0.55, -0.20], [ 0.12,  0.02], [ 0.08,  0.01],
        [ 0.03,  0.00], [ 0.10, -0.04], [-0.48,  0.30], [ 0.40, -0.15], [ 0.52, -0.22],
        [-0.25,  0.12], [ 0.61, -0.18], [ 0.37, -0.09]
      ],
      "bias": [0.05, 0.10]
    },
    {
      "activation": "sigmoid",
      "kernel": [[1.7], [-1.1]],
      "bias": [-0.3]
    }
  ]
}"#;

/// Ignores its input and always answers P = sigmoid(2) ≈ 0.88.
pub const CONSTANT_NETWORK: &str = r#"{
  "type": "sequential",
  "layers": [
    {
      "activation": "sigmoid",
      "kernel": [[0.0], [0.0], [0.0], [0.0], [0.0], [0.0], [0.0], [0.0], [0.0], [0.0], [0.0], [0.0], [0.0]],
      "bias": [2.0]
    }
  ]
}"#;

/// Predicts presence whenever age exceeds 60 (unscaled input).
pub const AGE_CLASSIFIER: &str = r#"{
  "type": "logistic_regression",
  "coef": [1.0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
  "intercept": -60.0
}"#;

pub fn write_artifacts(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        std::fs::write(dir.join(name), content).expect("write artifact");
    }
}

pub fn artifact_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write_artifacts(dir.path(), files);
    dir
}

pub fn with_value(position: usize, value: &'static str) -> Vec<&'static str> {
    let mut tokens = SAMPLE.to_vec();
    tokens[position] = value;
    tokens
}
