#[cfg(feature = "cli")]
pub mod cli;
pub mod runtime;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

/// Positional arguments shared by both predictor binaries.
///
/// Tokens are kept as strings so that numeric parsing, arity and range
/// checks all go through the input validator with its own diagnostics.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(version)]
#[command(about = "Predict heart disease from 13 clinical measurements")]
#[command(after_help = "Features, in order:
    age sex cp trestbps chol fbs restecg thalach exang oldpeak slope ca thal

sex, fbs and exang must be 0 or 1.

Environment:
    HEART_PREDICT_ARTIFACT_DIR   Directory holding the artifacts [default: executable's directory]
    HEART_PREDICT_CONFIG         Path to heart-predict.toml
    HEART_PREDICT_LOG_FORMAT     Set to `json` for structured logs
    RUST_LOG                     Log filter [default: heart_predict=error]")]
pub struct CliConfig {
    /// The 13 clinical feature values
    #[arg(
        value_name = "FEATURE",
        num_args = 0..,
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    pub features: Vec<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Returns the raw feature tokens. `--help`/`--version` are handled by
    /// clap and exit; anything else clap refuses (e.g. `-x`) falls back to
    /// the raw arguments so the validator reports it like any other token.
    pub fn parse_tokens() -> Vec<String> {
        match Self::try_parse() {
            Ok(config) => config.features,
            Err(e)
                if matches!(
                    e.kind(),
                    clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
                ) =>
            {
                e.exit()
            }
            Err(e) => {
                tracing::debug!("Argument parser rejected input ({:?}), using raw tokens", e.kind());
                std::env::args_os()
                    .skip(1)
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect()
            }
        }
    }
}
