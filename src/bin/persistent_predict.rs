//! Label-emitting predictor: runs a classifier that outputs the class
//! directly and prints one fixed sentence per class. The scaler is applied
//! when `scaler.json` is present and skipped otherwise.

use heart_predict::{config::cli, Variant};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(Variant::Label)
}
