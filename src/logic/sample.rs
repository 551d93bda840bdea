//! Sample - one labeled telemetry row
//!
//! A flat, serializable record: the operating context, the parameter
//! identity, the final value with its score and severity, the contextual
//! features, and the sequence-level columns the assembler fills in during
//! post-processing.
//!
//! Invariant: `anomaly_score` and `severity_level` are computed from the
//! final (post-correlation, post-injection) `parameter_value`, never from
//! the tier that was requested.

use serde::Serialize;

use super::context::OperatingContext;
use super::features::ContextualFeatures;
use super::scoring::Severity;

/// Hours counted as traffic peaks in the calendar features
pub const PEAK_HOURS: [u32; 6] = [7, 8, 9, 17, 18, 19];

/// Calendar and windowed columns added by the post-processing pass.
/// Lag and rolling entries start out `None` and are guaranteed `Some`
/// after gap filling.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DerivedColumns {
    pub hour: u32,
    pub day_of_week: u32,
    pub month: u32,
    pub is_weekend: bool,
    pub is_peak_hour: bool,
    pub parameter_value_lag1: Option<f64>,
    pub parameter_value_lag7: Option<f64>,
    pub anomaly_score_lag1: Option<f64>,
    pub anomaly_score_lag7: Option<f64>,
    pub anomaly_score_rolling_mean_7d: Option<f64>,
    pub anomaly_score_rolling_std_7d: Option<f64>,
    pub anomaly_score_rolling_mean_30d: Option<f64>,
    pub anomaly_score_rolling_std_30d: Option<f64>,
}

impl DerivedColumns {
    /// True once every lag/rolling entry has been filled
    pub fn is_complete(&self) -> bool {
        self.parameter_value_lag1.is_some()
            && self.parameter_value_lag7.is_some()
            && self.anomaly_score_lag1.is_some()
            && self.anomaly_score_lag7.is_some()
            && self.anomaly_score_rolling_mean_7d.is_some()
            && self.anomaly_score_rolling_std_7d.is_some()
            && self.anomaly_score_rolling_mean_30d.is_some()
            && self.anomaly_score_rolling_std_30d.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    #[serde(flatten)]
    pub context: OperatingContext,
    pub system_name: &'static str,
    pub component_name: &'static str,
    pub parameter_name: &'static str,
    pub unit: &'static str,
    pub parameter_value: f64,
    pub anomaly_score: f64,
    pub severity_level: Severity,
    #[serde(flatten)]
    pub features: ContextualFeatures,
    #[serde(flatten)]
    pub derived: DerivedColumns,
}

/// Round to the 3-decimal precision the table is published with
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(0.0004), 0.0);
        assert_eq!(round3(-2.71828), -2.718);
    }

    #[test]
    fn test_derived_completeness() {
        let mut derived = DerivedColumns::default();
        assert!(!derived.is_complete());
        derived.parameter_value_lag1 = Some(0.0);
        derived.parameter_value_lag7 = Some(0.0);
        derived.anomaly_score_lag1 = Some(0.0);
        derived.anomaly_score_lag7 = Some(0.0);
        derived.anomaly_score_rolling_mean_7d = Some(0.0);
        derived.anomaly_score_rolling_std_7d = Some(0.0);
        derived.anomaly_score_rolling_mean_30d = Some(0.0);
        derived.anomaly_score_rolling_std_30d = Some(0.0);
        assert!(derived.is_complete());
    }
}
