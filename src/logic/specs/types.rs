//! Parameter Specification Types
//!
//! Range bands are closed intervals and are NOT guaranteed to be ordered:
//! braking torque has its critical band *below* the normal band. Band
//! membership must always go through `Range::contains`, never through
//! ordering assumptions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed value interval `[lo, hi]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub lo: f64,
    pub hi: f64,
}

impl Range {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn center(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }
}

/// Semantic category of a parameter, assigned at catalog registration time.
///
/// The correlation engine dispatches on this tag instead of matching
/// substrings of the parameter name, so exactly one transfer function fires
/// per parameter and overlapping keywords ("current" in "currentLoad" vs
/// "doorCurrent") cannot be ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamCategory {
    MotorTemperature,
    BearingTemperature,
    Vibration,
    Current,
    Wear,
    BrokenWires,
    Resistance,
    Clearance,
    ResponseTiming,
    /// No physical correlation; raw value passes through unchanged
    Direct,
}

/// Static specification of one monitored parameter
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSpec {
    pub normal: Range,
    pub warning: Range,
    pub critical: Range,
    pub baseline: f64,
    pub unit: &'static str,
    pub component: &'static str,
    pub category: ParamCategory,
    /// Physical coefficients of the underlying component model. Kept on the
    /// spec so downstream consumers can reason about sensitivities; the
    /// correlation engine uses fixed published coefficients.
    pub physical_properties: &'static [(&'static str, f64)],
}

impl ParameterSpec {
    pub fn property(&self, name: &str) -> Option<f64> {
        self.physical_properties
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn band(&self, tier: super::Tier) -> Range {
        match tier {
            super::Tier::Normal => self.normal,
            super::Tier::Warning => self.warning,
            super::Tier::Critical => self.critical,
        }
    }
}

/// Catalog configuration error, reported at load time so degenerate ranges
/// never reach the scoring math.
#[derive(Debug, Clone, Error)]
pub enum SpecError {
    #[error("{subsystem}/{parameter}: zero-width {band} range")]
    DegenerateRange {
        subsystem: &'static str,
        parameter: &'static str,
        band: &'static str,
    },
    #[error("{subsystem}/{parameter}: inverted {band} range (lo > hi)")]
    InvertedRange {
        subsystem: &'static str,
        parameter: &'static str,
        band: &'static str,
    },
}
