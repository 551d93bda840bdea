//! Central Configuration Constants
//!
//! Single source of truth for the driver's defaults. Every knob can be
//! overridden through a `LIFTSENSE_*` environment variable.

use crate::logic::assembler::GenerationConfig;

/// Default total sample count per run
pub const DEFAULT_TOTAL_SAMPLES: usize = 50_000;

/// Default tier ratios (need not sum to 1; truncation is reported)
pub const DEFAULT_NORMAL_RATIO: f64 = 0.65;
pub const DEFAULT_WARNING_RATIO: f64 = 0.25;
pub const DEFAULT_CRITICAL_RATIO: f64 = 0.10;

/// Default generation window (days back from now)
pub const DEFAULT_LOOKBACK_DAYS: i64 = 730;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "LiftSense DataGen";

// ============================================
// Helper functions to read from env with fallback
// ============================================

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Total samples from environment or default
pub fn get_total_samples() -> usize {
    env_parse("LIFTSENSE_TOTAL_SAMPLES", DEFAULT_TOTAL_SAMPLES)
}

pub fn get_normal_ratio() -> f64 {
    env_parse("LIFTSENSE_NORMAL_RATIO", DEFAULT_NORMAL_RATIO)
}

pub fn get_warning_ratio() -> f64 {
    env_parse("LIFTSENSE_WARNING_RATIO", DEFAULT_WARNING_RATIO)
}

pub fn get_critical_ratio() -> f64 {
    env_parse("LIFTSENSE_CRITICAL_RATIO", DEFAULT_CRITICAL_RATIO)
}

pub fn get_lookback_days() -> i64 {
    env_parse("LIFTSENSE_LOOKBACK_DAYS", DEFAULT_LOOKBACK_DAYS)
}

/// Whether failure patterns are injected (default true)
pub fn get_include_failure_patterns() -> bool {
    std::env::var("LIFTSENSE_FAILURE_PATTERNS")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}

/// Fixed RNG seed for reproducible runs; unset means seed from entropy
pub fn get_seed() -> Option<u64> {
    std::env::var("LIFTSENSE_SEED").ok().and_then(|s| s.parse().ok())
}

/// Output directory override
pub fn get_output_dir() -> Option<std::path::PathBuf> {
    std::env::var("LIFTSENSE_OUTPUT_DIR")
        .ok()
        .map(std::path::PathBuf::from)
}

/// Assemble the full generation config from the environment
pub fn generation_config() -> GenerationConfig {
    GenerationConfig {
        total_samples: get_total_samples(),
        normal_ratio: get_normal_ratio(),
        warning_ratio: get_warning_ratio(),
        critical_ratio: get_critical_ratio(),
        include_failure_patterns: get_include_failure_patterns(),
        lookback_days: get_lookback_days(),
    }
}
