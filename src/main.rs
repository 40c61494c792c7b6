use heart_predict::{config::cli, Variant};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(Variant::Probability)
}
