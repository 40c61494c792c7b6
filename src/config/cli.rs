use crate::config::runtime::RuntimeConfig;
use crate::config::CliConfig;
use crate::core::engine::PredictionEngine;
use crate::core::Variant;
use crate::utils::error::{PredictError, Result};
use crate::utils::logger;
use std::process::ExitCode;

fn predict(variant: Variant, tokens: &[String]) -> Result<String> {
    let config = RuntimeConfig::resolve(variant)?;
    tracing::debug!("Runtime config: {:?}", config);

    let engine = PredictionEngine::new(config);
    engine.run(tokens).map(|prediction| prediction.to_string())
}

/// Writes the stage-labelled diagnostic and its cause chain to stderr.
pub fn report_failure(err: PredictError) {
    let label = err.stage().label();
    let suggestion = err.recovery_suggestion();
    tracing::debug!("Failed at {:?} stage", err.stage());

    // anyhow's Debug output lists every source ("Caused by: ...") and
    // appends a backtrace when RUST_BACKTRACE is set.
    eprintln!("{}: {:?}", label, anyhow::Error::new(err));
    eprintln!("💡 {}", suggestion);
}

/// Entry point shared by both predictor binaries.
pub fn run(variant: Variant) -> ExitCode {
    logger::init_cli_logger();

    let tokens = CliConfig::parse_tokens();

    match predict(variant, &tokens) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(e);
            ExitCode::FAILURE
        }
    }
}
