use crate::utils::error::Result;
use crate::utils::validation::validate_binary;
use std::fmt;

/// Number of clinical measurements the classifier expects.
pub const FEATURE_COUNT: usize = 13;

/// Positions of the clinical feature vector, in argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Age,
    Sex,
    ChestPain,
    RestingBloodPressure,
    Cholesterol,
    FastingBloodSugar,
    RestingEcg,
    MaxHeartRate,
    ExerciseAngina,
    StDepression,
    Slope,
    MajorVessels,
    Thalassemia,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Age,
        Feature::Sex,
        Feature::ChestPain,
        Feature::RestingBloodPressure,
        Feature::Cholesterol,
        Feature::FastingBloodSugar,
        Feature::RestingEcg,
        Feature::MaxHeartRate,
        Feature::ExerciseAngina,
        Feature::StDepression,
        Feature::Slope,
        Feature::MajorVessels,
        Feature::Thalassemia,
    ];

    /// Fields coded as 0/1.
    pub const BINARY: [Feature; 3] = [
        Feature::Sex,
        Feature::FastingBloodSugar,
        Feature::ExerciseAngina,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn at(index: usize) -> Option<Feature> {
        Self::ALL.get(index).copied()
    }

    /// Column name used by the training data set.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Age => "age",
            Feature::Sex => "sex",
            Feature::ChestPain => "cp",
            Feature::RestingBloodPressure => "trestbps",
            Feature::Cholesterol => "chol",
            Feature::FastingBloodSugar => "fbs",
            Feature::RestingEcg => "restecg",
            Feature::MaxHeartRate => "thalach",
            Feature::ExerciseAngina => "exang",
            Feature::StDepression => "oldpeak",
            Feature::Slope => "slope",
            Feature::MajorVessels => "ca",
            Feature::Thalassemia => "thal",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated row of the 13 clinical features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Builds a vector after checking the binary-coded fields.
    pub fn new(values: [f64; FEATURE_COUNT]) -> Result<Self> {
        for feature in Feature::BINARY {
            validate_binary(feature.name(), values[feature.index()])?;
        }
        Ok(Self(values))
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// The two predictor programs. They share the flow but differ in which
/// artifacts they need and how the model output is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Network emitting P(disease); scaler required.
    Probability,
    /// Classifier emitting a class label; scaler optional.
    Label,
}

impl Variant {
    pub const SCALER_FILE: &'static str = "scaler.json";
    pub const DEFAULT_THRESHOLD: f64 = 0.5;

    pub fn default_model_file(self) -> &'static str {
        match self {
            Variant::Probability => "heart_disease_model.json",
            Variant::Label => "heart_disease.json",
        }
    }

    pub fn scaler_required(self) -> bool {
        matches!(self, Variant::Probability)
    }

    /// Section name in `heart-predict.toml`.
    pub fn section(self) -> &'static str {
        match self {
            Variant::Probability => "probability",
            Variant::Label => "label",
        }
    }
}

/// Raw result of a model's predict operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelOutput {
    /// P(disease) from a network with a sigmoid head.
    Probability(f64),
    /// Class label emitted directly by the classifier.
    Label(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Absent,
    Present,
}

impl Outcome {
    /// Label 0 is absence; any other class value counts as presence.
    pub fn from_label(label: f64) -> Self {
        if label == 0.0 {
            Outcome::Absent
        } else {
            Outcome::Present
        }
    }

    /// Strictly greater than the threshold is a positive call.
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        if probability > threshold {
            Outcome::Present
        } else {
            Outcome::Absent
        }
    }

    pub fn as_label(self) -> u8 {
        match self {
            Outcome::Absent => 0,
            Outcome::Present => 1,
        }
    }

    pub fn sentence(self) -> &'static str {
        match self {
            Outcome::Absent => "The person is NOT suffering from Heart Disease",
            Outcome::Present => "The person IS suffering from Heart Disease",
        }
    }
}

/// Final, printable result of one invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    Probability { outcome: Outcome, probability: f64 },
    Label(Outcome),
}

impl Prediction {
    pub fn outcome(&self) -> Outcome {
        match self {
            Prediction::Probability { outcome, .. } | Prediction::Label(outcome) => *outcome,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Probability {
                outcome,
                probability,
            } => write!(
                f,
                "Prediction: {}, Probability: {:.2}",
                outcome.as_label(),
                probability
            ),
            Prediction::Label(outcome) => f.write_str(outcome.sentence()),
        }
    }
}
