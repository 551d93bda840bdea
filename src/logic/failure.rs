//! Failure Pattern Injector
//!
//! Static catalog of fault archetypes and the progression models that
//! perturb a parameter value once a pattern is attached to a sample.
//! Injection is a no-op when no pattern is attached or the parameter is
//! outside the pattern's affected set.

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::context::OperatingContext;

/// How the affected parameters move together under the fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Correlation {
    Positive,
    Mixed,
}

/// How the fault magnitude grows with time/usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Progression {
    Gradual,
    Accelerating,
    Sudden,
}

/// Probability that a sudden-progression fault fires on a given sample
const SUDDEN_PROBABILITY: f64 = 0.05;

#[derive(Debug, Clone, Serialize)]
pub struct FailurePattern {
    pub name: &'static str,
    pub affected_params: &'static [&'static str],
    pub correlation: Correlation,
    /// Human-readable conditions under which field crews observe this fault
    pub trigger_conditions: &'static [&'static str],
    pub progression: Progression,
}

impl FailurePattern {
    pub fn affects(&self, parameter: &str) -> bool {
        self.affected_params.contains(&parameter)
    }
}

static PATTERNS: Lazy<Vec<FailurePattern>> = Lazy::new(|| {
    vec![
        FailurePattern {
            name: "thermal_overload",
            affected_params: &["motorTemperature", "bearingTemperature", "current"],
            correlation: Correlation::Positive,
            trigger_conditions: &["load_weight > 800", "ambient_temp > 28"],
            progression: Progression::Gradual,
        },
        FailurePattern {
            name: "mechanical_wear",
            affected_params: &["steelRopeWear", "brokenWires", "guideShoeWear"],
            correlation: Correlation::Positive,
            trigger_conditions: &["operating_hours > 8000", "maintenance_days_since > 60"],
            progression: Progression::Accelerating,
        },
        FailurePattern {
            name: "electrical_instability",
            affected_params: &[
                "voltageFluctuation",
                "contactVoltageDrops",
                "controlResponseTime",
            ],
            correlation: Correlation::Positive,
            trigger_conditions: &["time_of_day = peak", "humidity > 75"],
            progression: Progression::Sudden,
        },
        FailurePattern {
            name: "door_malfunction",
            affected_params: &["openCloseTime", "contactResistance", "mechanicalDepth"],
            correlation: Correlation::Mixed,
            trigger_conditions: &["contact_cycles > 50000", "humidity > 70"],
            progression: Progression::Gradual,
        },
    ]
});

/// All known fault archetypes
pub fn patterns() -> &'static [FailurePattern] {
    &PATTERNS
}

/// Look up a pattern by name; unknown names degrade to no injection
pub fn pattern(name: &str) -> Option<&'static FailurePattern> {
    PATTERNS.iter().find(|p| p.name == name)
}

/// Draw one archetype uniformly from the catalog
pub fn random_pattern<R: Rng + ?Sized>(rng: &mut R) -> &'static FailurePattern {
    &PATTERNS[rng.gen_range(0..PATTERNS.len())]
}

/// Apply the pattern's progression model to `value`
pub fn inject<R: Rng + ?Sized>(
    value: f64,
    parameter: &str,
    pattern: Option<&FailurePattern>,
    ctx: &OperatingContext,
    rng: &mut R,
) -> f64 {
    let Some(pattern) = pattern else {
        return value;
    };
    if !pattern.affects(parameter) {
        return value;
    }

    match pattern.progression {
        Progression::Gradual => value * (1.0 + ctx.operating_hours / 15000.0 * 0.5),
        Progression::Sudden => {
            if rng.gen::<f64>() < SUDDEN_PROBABILITY {
                value * rng.gen_range(1.5..3.0)
            } else {
                value
            }
        }
        Progression::Accelerating => {
            let time_factor = ctx.maintenance_days_since as f64 / 90.0;
            value * (1.0 + time_factor.powi(2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context(hours: f64, maint_days: u32) -> OperatingContext {
        let mut ctx = OperatingContext::sample(
            &mut StdRng::seed_from_u64(1),
            Utc::now(),
            Some(Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()),
        );
        ctx.operating_hours = hours;
        ctx.maintenance_days_since = maint_days;
        ctx
    }

    #[test]
    fn test_catalog_names() {
        let names: Vec<_> = patterns().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "thermal_overload",
                "mechanical_wear",
                "electrical_instability",
                "door_malfunction"
            ]
        );
        assert!(pattern("thermal_overload").is_some());
        assert!(pattern("nonexistent").is_none());
    }

    #[test]
    fn test_no_pattern_is_noop() {
        let ctx = context(15000.0, 120);
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(inject(10.0, "motorTemperature", None, &ctx, &mut rng), 10.0);
    }

    #[test]
    fn test_unaffected_parameter_is_noop() {
        let ctx = context(15000.0, 120);
        let mut rng = StdRng::seed_from_u64(2);
        let thermal = pattern("thermal_overload").unwrap();
        assert_eq!(
            inject(10.0, "railDeviation", Some(thermal), &ctx, &mut rng),
            10.0
        );
    }

    #[test]
    fn test_gradual_progression() {
        let ctx = context(7500.0, 30);
        let mut rng = StdRng::seed_from_u64(2);
        let thermal = pattern("thermal_overload").unwrap();
        let out = inject(100.0, "motorTemperature", Some(thermal), &ctx, &mut rng);
        // 100 * (1 + 7500/15000 * 0.5) = 125
        assert!((out - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_accelerating_progression() {
        let ctx = context(1000.0, 90);
        let mut rng = StdRng::seed_from_u64(2);
        let wear = pattern("mechanical_wear").unwrap();
        let out = inject(10.0, "steelRopeWear", Some(wear), &ctx, &mut rng);
        // 10 * (1 + (90/90)^2) = 20
        assert!((out - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_sudden_progression_bounds() {
        let ctx = context(1000.0, 10);
        let mut rng = StdRng::seed_from_u64(3);
        let electrical = pattern("electrical_instability").unwrap();
        let mut fired = 0;
        for _ in 0..2000 {
            let out = inject(10.0, "voltageFluctuation", Some(electrical), &ctx, &mut rng);
            if out != 10.0 {
                fired += 1;
                assert!(out >= 15.0 && out < 30.0);
            }
        }
        // ~5% firing rate
        assert!(fired > 40 && fired < 200, "fired {fired} times");
    }
}
