use crate::core::{Feature, FeatureVector, FEATURE_COUNT};
use crate::utils::error::{PredictError, Result};

fn parse_token(position: usize, token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|source| PredictError::ParseError {
            position,
            field: Feature::at(position).map(Feature::name).unwrap_or("extra"),
            token: token.to_string(),
            source,
        })
}

/// Turns raw command-line tokens into a validated feature vector.
///
/// Checks run in a fixed order: every token must be numeric, then there
/// must be exactly [`FEATURE_COUNT`] of them, then the binary-coded fields
/// (sex, fbs, exang) must be 0 or 1. Other fields are not range checked.
pub fn parse_features<S: AsRef<str>>(tokens: &[S]) -> Result<FeatureVector> {
    let values = tokens
        .iter()
        .enumerate()
        .map(|(position, token)| parse_token(position, token.as_ref()))
        .collect::<Result<Vec<f64>>>()?;

    let values: [f64; FEATURE_COUNT] =
        values
            .try_into()
            .map_err(|values: Vec<f64>| PredictError::ArityError {
                expected: FEATURE_COUNT,
                actual: values.len(),
            })?;

    FeatureVector::new(values)
}
