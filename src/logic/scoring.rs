//! Anomaly Scorer & Severity Classifier
//!
//! Maps a final parameter value to a continuous [0,1] score and a discrete
//! severity band. Both operate on the *post-correlation, post-injection*
//! value; the tier requested at generation time plays no part here.
//!
//! Band membership is tested by explicit interval containment in
//! normal → warning → critical order. Bands are not assumed to be
//! monotonically ordered (braking torque degrades downward).

use serde::{Deserialize, Serialize};

use super::specs::{ParameterSpec, Range};

/// Severity computed from a final value. Distinct from `specs::Tier`, the
/// band requested for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

/// Continuous anomaly score in [0,1].
///
/// - inside normal: distance from band center, capped at 0.3
/// - inside warning: 0.3 + 0.4 · position within the band
/// - else: saturates to 1.0 at and beyond either critical extreme,
///   0.7 + 0.3 · position strictly inside the band
///
/// Catalog validation rejects zero-width bands before generation starts; the
/// guards here keep the math total regardless.
pub fn anomaly_score(value: f64, spec: &ParameterSpec) -> f64 {
    if spec.normal.contains(value) {
        let center = spec.normal.center();
        let half_width = spec.normal.hi - center;
        let distance = if half_width == 0.0 {
            1.0
        } else {
            (value - center).abs() / half_width
        };
        (distance * 0.3).min(0.3)
    } else if spec.warning.contains(value) {
        0.3 + 0.4 * band_position(value, spec.warning)
    } else if value >= spec.critical.hi || value <= spec.critical.lo {
        1.0
    } else {
        0.7 + 0.3 * band_position(value, spec.critical)
    }
}

/// Discrete severity from the final value; values in no declared band fall
/// through to critical.
pub fn classify(value: f64, spec: &ParameterSpec) -> Severity {
    if spec.normal.contains(value) {
        Severity::Normal
    } else if spec.warning.contains(value) {
        Severity::Warning
    } else {
        Severity::Critical
    }
}

/// Relative position inside a band, 1.0 when the band has zero width
fn band_position(value: f64, range: Range) -> f64 {
    let width = range.width();
    if width == 0.0 {
        1.0
    } else {
        (value - range.lo) / width
    }
}
