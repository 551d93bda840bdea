//! Output Table Schema - Versioned Column Layout
//!
//! **This file controls the published column order.**
//!
//! Downstream training jobs index columns by position, so:
//! 1. Add column → increment SCHEMA_VERSION
//! 2. Change order → increment SCHEMA_VERSION
//! 3. Remove column → increment SCHEMA_VERSION
//!
//! The crc32 layout hash lets consumers detect a mismatched table without
//! parsing the header by eye.

use crc32fast::Hasher;

use super::super::sample::Sample;

/// Current schema version
pub const SCHEMA_VERSION: u8 = 1;

/// Column names in the exact order rows are written.
/// Single source of truth for the output table layout.
pub const COLUMN_LAYOUT: &[&str] = &[
    // === Operating context ===
    "timestamp",
    "load_weight",
    "speed",
    "operating_hours",
    "ambient_temp",
    "humidity",
    "time_of_day",
    "maintenance_days_since",
    "contact_cycles",
    "season",
    "building_floors",
    "usage_intensity",
    // === Parameter identity ===
    "system_name",
    "component_name",
    "parameter_name",
    "unit",
    // === Measured outcome ===
    "parameter_value",
    "anomaly_score",
    "severity_level",
    // === Contextual features ===
    "load_level",
    "operating_level",
    "maintenance_status",
    "deviation_from_baseline",
    "deviation_percentage",
    "environmental_stress",
    "usage_intensity_score",
    "composite_risk_score",
    // === Calendar ===
    "hour",
    "day_of_week",
    "month",
    "is_weekend",
    "is_peak_hour",
    // === Lags & rolling statistics ===
    "parameter_value_lag1",
    "parameter_value_lag7",
    "anomaly_score_lag1",
    "anomaly_score_lag7",
    "anomaly_score_rolling_mean_7d",
    "anomaly_score_rolling_std_7d",
    "anomaly_score_rolling_mean_30d",
    "anomaly_score_rolling_std_30d",
];

/// Total column count. Must match COLUMN_LAYOUT.len().
pub const COLUMN_COUNT: usize = 40;

/// crc32 of version + column names, for table compatibility checks
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[SCHEMA_VERSION]);
    for name in COLUMN_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

/// Format one sample as an ordered row matching COLUMN_LAYOUT.
///
/// Lag/rolling entries are gap-filled by post-processing before any sample
/// reaches the writer; a straggling `None` writes as 0.
pub fn row(sample: &Sample) -> Vec<String> {
    let ctx = &sample.context;
    let f = &sample.features;
    let d = &sample.derived;

    vec![
        ctx.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        fmt_f64(ctx.load_weight),
        fmt_f64(ctx.speed),
        fmt_f64(ctx.operating_hours),
        fmt_f64(ctx.ambient_temp),
        fmt_f64(ctx.humidity),
        ctx.time_of_day.label().to_string(),
        ctx.maintenance_days_since.to_string(),
        ctx.contact_cycles.to_string(),
        ctx.season.label().to_string(),
        ctx.building_floors.to_string(),
        ctx.usage_intensity.label().to_string(),
        sample.system_name.to_string(),
        sample.component_name.to_string(),
        sample.parameter_name.to_string(),
        sample.unit.to_string(),
        fmt_f64(sample.parameter_value),
        fmt_f64(sample.anomaly_score),
        sample.severity_level.label().to_string(),
        f.load_level.label().to_string(),
        f.operating_level.label().to_string(),
        f.maintenance_status.label().to_string(),
        fmt_f64(f.deviation_from_baseline),
        fmt_f64(f.deviation_percentage),
        fmt_f64(f.environmental_stress),
        fmt_f64(f.usage_intensity_score),
        fmt_f64(f.composite_risk_score),
        d.hour.to_string(),
        d.day_of_week.to_string(),
        d.month.to_string(),
        d.is_weekend.to_string(),
        d.is_peak_hour.to_string(),
        fmt_opt(d.parameter_value_lag1),
        fmt_opt(d.parameter_value_lag7),
        fmt_opt(d.anomaly_score_lag1),
        fmt_opt(d.anomaly_score_lag7),
        fmt_opt(d.anomaly_score_rolling_mean_7d),
        fmt_opt(d.anomaly_score_rolling_std_7d),
        fmt_opt(d.anomaly_score_rolling_mean_30d),
        fmt_opt(d.anomaly_score_rolling_std_30d),
    ]
}

fn fmt_f64(value: f64) -> String {
    format!("{}", value)
}

fn fmt_opt(value: Option<f64>) -> String {
    fmt_f64(value.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::assembler::{generate_sample, postprocess};
    use crate::logic::specs::Tier;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_column_count_matches_layout() {
        assert_eq!(COLUMN_LAYOUT.len(), COLUMN_COUNT);
    }

    #[test]
    fn test_layout_hash_stable_and_nonzero() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_row_width_matches_layout() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        let mut samples =
            vec![generate_sample(&mut rng, now, Tier::Warning, None, None)];
        postprocess::run(&mut samples);
        assert_eq!(row(&samples[0]).len(), COLUMN_COUNT);
    }

    #[test]
    fn test_row_contains_no_delimiter_collisions() {
        let mut rng = StdRng::seed_from_u64(4);
        let now = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        let mut samples =
            vec![generate_sample(&mut rng, now, Tier::Critical, None, None)];
        postprocess::run(&mut samples);
        for field in row(&samples[0]) {
            assert!(!field.contains(','), "field {field:?} would break the table");
        }
    }
}
