pub mod engine;
pub mod inference;
pub mod loader;
pub mod validator;

pub use crate::domain::model::{
    Feature, FeatureVector, ModelOutput, Outcome, Prediction, Variant, FEATURE_COUNT,
};
pub use crate::domain::ports::{ConfigProvider, Model, Scaler};
pub use crate::utils::error::Result;
