//! Dataset Assembler
//!
//! Orchestrates sample generation across the three severity tiers, then runs
//! the sequence-level post-processing pass (sorting, calendar features, lag
//! and rolling statistics).
//!
//! Tier counts come from ratio truncation: `floor(total · ratio)` per tier.
//! The counts deliberately need not sum to the requested total; the
//! shortfall is surfaced in the returned summary instead of silently
//! normalizing the ratios.

pub mod postprocess;

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

use super::context::OperatingContext;
use super::failure::{self, FailurePattern};
use super::features;
use super::physics;
use super::sample::{round3, Sample};
use super::scoring::{anomaly_score, classify};
use super::specs::{self, SpecError, Tier};

/// Probability of attaching a failure pattern per warning-tier sample
const WARNING_PATTERN_PROBABILITY: f64 = 0.3;
/// Probability of attaching a failure pattern per critical-tier sample
const CRITICAL_PATTERN_PROBABILITY: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub total_samples: usize,
    pub normal_ratio: f64,
    pub warning_ratio: f64,
    pub critical_ratio: f64,
    pub include_failure_patterns: bool,
    /// Generation window reaching back from `now` (days)
    pub lookback_days: i64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            total_samples: 50_000,
            normal_ratio: 0.65,
            warning_ratio: 0.25,
            critical_ratio: 0.10,
            include_failure_patterns: true,
            lookback_days: 730,
        }
    }
}

/// Requested/produced counts and distributions for one run. Returned with
/// the dataset instead of being printed from inside generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub requested_samples: usize,
    pub generated_samples: usize,
    /// Samples lost to ratio truncation (`requested - generated`)
    pub truncation_shortfall: usize,
    pub tier_counts: BTreeMap<&'static str, usize>,
    pub severity_counts: BTreeMap<&'static str, usize>,
    pub subsystem_counts: BTreeMap<&'static str, usize>,
    pub span_start: Option<DateTime<Utc>>,
    pub span_end: Option<DateTime<Utc>>,
}

impl GenerationSummary {
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "requested": self.requested_samples,
            "generated": self.generated_samples,
            "truncation_shortfall": self.truncation_shortfall,
            "tiers": self.tier_counts,
            "severity": self.severity_counts,
            "subsystems": self.subsystem_counts,
            "span_start": self.span_start,
            "span_end": self.span_end,
        })
    }
}

/// Ordered sequence of samples, ascending by timestamp, plus the run
/// summary. Immutable snapshot once returned.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub samples: Vec<Sample>,
    pub summary: GenerationSummary,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Generate a full labeled dataset anchored at the current instant.
///
/// Validates the catalog up front so degenerate range configuration fails
/// here rather than mid-run.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
) -> Result<Dataset, SpecError> {
    generate_at(rng, config, Utc::now())
}

/// Like [`generate`] with an explicit anchor, for reproducible runs
pub fn generate_at<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
    now: DateTime<Utc>,
) -> Result<Dataset, SpecError> {
    specs::validate(specs::catalog())?;

    let tier_plan = [
        (Tier::Normal, (config.total_samples as f64 * config.normal_ratio) as usize),
        (Tier::Warning, (config.total_samples as f64 * config.warning_ratio) as usize),
        (Tier::Critical, (config.total_samples as f64 * config.critical_ratio) as usize),
    ];

    let mut samples = Vec::with_capacity(tier_plan.iter().map(|(_, n)| n).sum());
    let mut tier_counts = BTreeMap::new();

    for (tier, count) in tier_plan {
        log::info!("generating {} {} samples", count, tier.label());
        for i in 0..count {
            if i > 0 && i % 1000 == 0 {
                log::debug!("{} tier progress: {}/{}", tier.label(), i, count);
            }
            let timestamp = random_timestamp(rng, now, config.lookback_days);
            let pattern = draw_pattern(rng, tier, config.include_failure_patterns);
            samples.push(generate_sample(rng, now, tier, Some(timestamp), pattern));
        }
        tier_counts.insert(tier.label(), count);
    }

    postprocess::run(&mut samples);

    let generated = samples.len();
    let summary = GenerationSummary {
        requested_samples: config.total_samples,
        generated_samples: generated,
        truncation_shortfall: config.total_samples.saturating_sub(generated),
        tier_counts,
        severity_counts: count_by(&samples, |s| s.severity_level.label()),
        subsystem_counts: count_by(&samples, |s| s.system_name),
        span_start: samples.first().map(|s| s.context.timestamp),
        span_end: samples.last().map(|s| s.context.timestamp),
    };

    Ok(Dataset { samples, summary })
}

/// Run the full per-sample pipeline for one tier. The tier only selects the
/// band the raw value is drawn from; score and severity are recomputed from
/// the final value.
pub fn generate_sample<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    tier: Tier,
    timestamp: Option<DateTime<Utc>>,
    pattern: Option<&FailurePattern>,
) -> Sample {
    let ctx = OperatingContext::sample(rng, now, timestamp);

    let subsystems = specs::subsystems();
    let system_name = *subsystems
        .choose(rng)
        .expect("catalog has at least one subsystem");
    let parameters = specs::parameters(system_name);
    let parameter_name = *parameters
        .choose(rng)
        .expect("subsystem has at least one parameter");
    let spec = specs::spec(system_name, parameter_name)
        .expect("catalog listed the parameter");

    let band = spec.band(tier);
    let raw = rng.gen_range(band.lo..band.hi);
    let adjusted = physics::adjust(raw, spec, &ctx, rng);
    let injected = failure::inject(adjusted, parameter_name, pattern, &ctx, rng);
    let value = round3(injected);

    let score = anomaly_score(value, spec);
    let severity = classify(value, spec);
    let features = features::derive(&ctx, value, spec);

    Sample {
        context: ctx,
        system_name,
        component_name: spec.component,
        parameter_name,
        unit: spec.unit,
        parameter_value: value,
        anomaly_score: score,
        severity_level: severity,
        features,
        derived: Default::default(),
    }
}

fn random_timestamp<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    lookback_days: i64,
) -> DateTime<Utc> {
    let span = Duration::days(lookback_days).num_seconds();
    now - Duration::seconds(rng.gen_range(0..=span))
}

fn draw_pattern<R: Rng + ?Sized>(
    rng: &mut R,
    tier: Tier,
    include: bool,
) -> Option<&'static FailurePattern> {
    if !include {
        return None;
    }
    let probability = match tier {
        Tier::Normal => return None,
        Tier::Warning => WARNING_PATTERN_PROBABILITY,
        Tier::Critical => CRITICAL_PATTERN_PROBABILITY,
    };
    if rng.gen::<f64>() < probability {
        Some(failure::random_pattern(rng))
    } else {
        None
    }
}

fn count_by<F>(samples: &[Sample], key: F) -> BTreeMap<&'static str, usize>
where
    F: Fn(&Sample) -> &'static str,
{
    let mut counts = BTreeMap::new();
    for sample in samples {
        *counts.entry(key(sample)).or_insert(0) += 1;
    }
    counts
}
