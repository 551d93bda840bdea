//! LiftSense DataGen - Main Entry Point
//!
//! Thin driver around the synthesis engine: read configuration from the
//! environment, generate, persist as CSV, log the run summary.

mod logic;
pub mod constants;

use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use logic::assembler;
use logic::dataset::DatasetWriter;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    let config = constants::generation_config();
    log::info!(
        "config: {} samples, ratios {}/{}/{}, failure patterns: {}, lookback {}d",
        config.total_samples,
        config.normal_ratio,
        config.warning_ratio,
        config.critical_ratio,
        config.include_failure_patterns,
        config.lookback_days
    );

    let mut rng = match constants::get_seed() {
        Some(seed) => {
            log::info!("seeded RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let dataset = match assembler::generate(&mut rng, &config) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("catalog validation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if dataset.summary.truncation_shortfall > 0 {
        log::warn!(
            "ratio truncation: generated {} of {} requested samples",
            dataset.summary.generated_samples,
            dataset.summary.requested_samples
        );
    }
    log::info!("run summary: {}", dataset.summary.to_log_entry());

    let writer = match constants::get_output_dir() {
        Some(dir) => DatasetWriter::from_path(dir),
        None => DatasetWriter::new(),
    };
    if let Err(e) = writer.write(&dataset) {
        log::error!("failed to write dataset: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
