//! Parameter Specification Registry
//!
//! Read-only lookup over the static subsystem catalog. The catalog is built
//! once process-wide and validated before first use: a zero-width band would
//! make the anomaly-score denominators vanish, so that is a configuration
//! error reported at load time, never a mid-generation crash.

pub mod catalog;
pub mod types;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use catalog::SubsystemCatalog;
pub use types::{ParamCategory, ParameterSpec, Range, SpecError};

static CATALOG: Lazy<SubsystemCatalog> = Lazy::new(catalog::build);

/// Severity tier *requested* for a batch of samples. Distinct from the
/// computed severity: the final classification always comes from the
/// post-correlation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Normal,
    Warning,
    Critical,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Normal, Tier::Warning, Tier::Critical];

    /// Parse a tier label. Unrecognized labels fall back to `Critical`,
    /// matching the generator's historical behavior for unknown tiers.
    pub fn from_label(label: &str) -> Self {
        match label {
            "normal" => Tier::Normal,
            "warning" => Tier::Warning,
            _ => Tier::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Normal => "normal",
            Tier::Warning => "warning",
            Tier::Critical => "critical",
        }
    }
}

/// Access the process-wide catalog
pub fn catalog() -> &'static SubsystemCatalog {
    &CATALOG
}

/// Look up one parameter spec. `None` is a programming error on the caller's
/// side; the catalog is fixed at build time.
pub fn spec(subsystem: &str, parameter: &str) -> Option<&'static ParameterSpec> {
    CATALOG.get(subsystem).and_then(|params| params.get(parameter))
}

/// Parameter names of one subsystem
pub fn parameters(subsystem: &str) -> Vec<&'static str> {
    CATALOG
        .get(subsystem)
        .map(|params| params.keys().copied().collect())
        .unwrap_or_default()
}

/// All subsystem names
pub fn subsystems() -> Vec<&'static str> {
    CATALOG.keys().copied().collect()
}

/// Validate every range band of the catalog. Run once at startup.
pub fn validate(catalog: &SubsystemCatalog) -> Result<(), SpecError> {
    for (&subsystem, params) in catalog {
        for (&parameter, spec) in params {
            for (band, range) in [
                ("normal", spec.normal),
                ("warning", spec.warning),
                ("critical", spec.critical),
            ] {
                if range.lo > range.hi {
                    return Err(SpecError::InvertedRange {
                        subsystem,
                        parameter,
                        band,
                    });
                }
                if range.width() == 0.0 {
                    return Err(SpecError::DegenerateRange {
                        subsystem,
                        parameter,
                        band,
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(validate(catalog()).is_ok());
    }

    #[test]
    fn test_spec_lookup() {
        let spec = spec("traction", "motorTemperature").unwrap();
        assert_eq!(spec.baseline, 45.0);
        assert_eq!(spec.unit, "°C");
        assert!(super::spec("traction", "unknown").is_none());
        assert!(super::spec("hydraulic", "motorTemperature").is_none());
    }

    #[test]
    fn test_parameters_listing() {
        let params = parameters("guidance");
        assert_eq!(params.len(), 3);
        assert!(params.contains(&"railJointGap"));
        assert!(parameters("unknown").is_empty());
    }

    #[test]
    fn test_tier_label_fallback() {
        assert_eq!(Tier::from_label("normal"), Tier::Normal);
        assert_eq!(Tier::from_label("warning"), Tier::Warning);
        assert_eq!(Tier::from_label("critical"), Tier::Critical);
        // Unknown tiers draw from the critical band
        assert_eq!(Tier::from_label("severe"), Tier::Critical);
        assert_eq!(Tier::from_label(""), Tier::Critical);
    }

    #[test]
    fn test_validate_rejects_degenerate_band() {
        let mut catalog = catalog::build();
        let spec = catalog
            .get_mut("traction")
            .unwrap()
            .get_mut("motorTemperature")
            .unwrap();
        spec.warning = Range::new(80.0, 80.0);
        let err = validate(&catalog).unwrap_err();
        assert!(matches!(err, SpecError::DegenerateRange { band: "warning", .. }));
    }
}
