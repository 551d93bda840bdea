//! Sequence-level post-processing
//!
//! Runs after all tiers are merged: sort ascending by timestamp, add
//! calendar columns, add one-step/seven-step lags for the value and score
//! columns, add trailing rolling mean/std over windows of 7 and 30 samples
//! (minimum window 1) for the anomaly score, then fill the gaps the lags and
//! short windows leave behind: backward-fill first, zero-fill the rest.
//!
//! The rolling pass has a genuine sequential dependency along the sorted
//! order. Rolling std uses the sample estimator (n-1 denominator) and is
//! undefined for windows shorter than two samples; those entries stay empty
//! until the fill step.

use chrono::{Datelike, Timelike};

use super::super::sample::{Sample, PEAK_HOURS};

/// Rolling window sizes (samples)
const ROLLING_WINDOWS: [usize; 2] = [7, 30];

pub fn run(samples: &mut [Sample]) {
    samples.sort_by_key(|s| s.context.timestamp);

    add_calendar_columns(samples);
    add_lag_columns(samples);
    add_rolling_columns(samples);
    fill_gaps(samples);
}

fn add_calendar_columns(samples: &mut [Sample]) {
    for sample in samples.iter_mut() {
        let ts = sample.context.timestamp;
        let hour = ts.hour();
        let day_of_week = ts.weekday().num_days_from_monday();
        sample.derived.hour = hour;
        sample.derived.day_of_week = day_of_week;
        sample.derived.month = ts.month();
        sample.derived.is_weekend = day_of_week >= 5;
        sample.derived.is_peak_hour = PEAK_HOURS.contains(&hour);
    }
}

fn add_lag_columns(samples: &mut [Sample]) {
    let values: Vec<f64> = samples.iter().map(|s| s.parameter_value).collect();
    let scores: Vec<f64> = samples.iter().map(|s| s.anomaly_score).collect();

    for (i, sample) in samples.iter_mut().enumerate() {
        sample.derived.parameter_value_lag1 = i.checked_sub(1).map(|j| values[j]);
        sample.derived.parameter_value_lag7 = i.checked_sub(7).map(|j| values[j]);
        sample.derived.anomaly_score_lag1 = i.checked_sub(1).map(|j| scores[j]);
        sample.derived.anomaly_score_lag7 = i.checked_sub(7).map(|j| scores[j]);
    }
}

fn add_rolling_columns(samples: &mut [Sample]) {
    let scores: Vec<f64> = samples.iter().map(|s| s.anomaly_score).collect();

    for window in ROLLING_WINDOWS {
        for (i, sample) in samples.iter_mut().enumerate() {
            let start = (i + 1).saturating_sub(window);
            let trailing = &scores[start..=i];
            let mean = rolling_mean(trailing);
            let std = rolling_std(trailing);
            match window {
                7 => {
                    sample.derived.anomaly_score_rolling_mean_7d = Some(mean);
                    sample.derived.anomaly_score_rolling_std_7d = std;
                }
                _ => {
                    sample.derived.anomaly_score_rolling_mean_30d = Some(mean);
                    sample.derived.anomaly_score_rolling_std_30d = std;
                }
            }
        }
    }
}

fn rolling_mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// Sample standard deviation; `None` below two observations
fn rolling_std(window: &[f64]) -> Option<f64> {
    let n = window.len();
    if n < 2 {
        return None;
    }
    let mean = rolling_mean(window);
    let variance = window
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;
    Some(variance.sqrt())
}

/// Backward-fill each gapped column along the sequence, then zero-fill
/// whatever remains (trailing gaps have no later value to borrow).
fn fill_gaps(samples: &mut [Sample]) {
    fill_column(samples, |d| &mut d.parameter_value_lag1);
    fill_column(samples, |d| &mut d.parameter_value_lag7);
    fill_column(samples, |d| &mut d.anomaly_score_lag1);
    fill_column(samples, |d| &mut d.anomaly_score_lag7);
    fill_column(samples, |d| &mut d.anomaly_score_rolling_mean_7d);
    fill_column(samples, |d| &mut d.anomaly_score_rolling_std_7d);
    fill_column(samples, |d| &mut d.anomaly_score_rolling_mean_30d);
    fill_column(samples, |d| &mut d.anomaly_score_rolling_std_30d);
}

fn fill_column<F>(samples: &mut [Sample], mut column: F)
where
    F: FnMut(&mut crate::logic::sample::DerivedColumns) -> &mut Option<f64>,
{
    let mut next_value = None;
    for sample in samples.iter_mut().rev() {
        let entry = column(&mut sample.derived);
        match entry {
            Some(v) => next_value = Some(*v),
            None => *entry = Some(next_value.unwrap_or(0.0)),
        }
    }
}
