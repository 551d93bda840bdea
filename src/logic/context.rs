//! Operating Context Synthesizer
//!
//! Produces one randomized but time-coherent environmental/operational
//! snapshot per sample: traffic-shaped load and speed, seasonal temperature
//! and humidity with diurnal swing and Gaussian sensor noise, plus the
//! categorical usage descriptors derived from the clock.
//!
//! All randomness flows through the caller's RNG handle so runs are
//! reproducible under a fixed seed.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Sampling window for implicit timestamps (days)
const IMPLICIT_TIMESTAMP_DAYS: i64 = 365;

/// Seasonal base temperature per month (°C), January first
const MONTHLY_BASE_TEMP: [f64; 12] = [
    3.0, 8.0, 15.0, 20.0, 25.0, 28.0, 32.0, 30.0, 25.0, 18.0, 10.0, 5.0,
];

/// Seasonal base humidity per month (%RH), January first
const MONTHLY_BASE_HUMIDITY: [f64; 12] = [
    40.0, 45.0, 55.0, 60.0, 65.0, 75.0, 80.0, 78.0, 70.0, 60.0, 50.0, 45.0,
];

/// Installed building heights the fleet spans (floors)
const BUILDING_FLOORS: [u32; 5] = [10, 15, 20, 25, 30];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageIntensity {
    Low,
    Medium,
    High,
}

impl UsageIntensity {
    pub fn label(&self) -> &'static str {
        match self {
            UsageIntensity::Low => "low",
            UsageIntensity::Medium => "medium",
            UsageIntensity::High => "high",
        }
    }

    /// Numeric score used by the composite risk features
    pub fn score(&self) -> f64 {
        match self {
            UsageIntensity::Low => 0.3,
            UsageIntensity::Medium => 0.6,
            UsageIntensity::High => 1.0,
        }
    }
}

/// One sampled environmental/operational state. Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct OperatingContext {
    pub timestamp: DateTime<Utc>,
    pub load_weight: f64,
    pub speed: f64,
    pub operating_hours: f64,
    pub ambient_temp: f64,
    pub humidity: f64,
    pub time_of_day: TimeOfDay,
    pub maintenance_days_since: u32,
    pub contact_cycles: u32,
    pub season: Season,
    pub building_floors: u32,
    pub usage_intensity: UsageIntensity,
}

impl OperatingContext {
    /// Sample a context. A missing timestamp is drawn uniformly from the
    /// past year relative to `now`.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        now: DateTime<Utc>,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        let timestamp = timestamp.unwrap_or_else(|| {
            let span = Duration::days(IMPLICIT_TIMESTAMP_DAYS).num_seconds();
            now - Duration::seconds(rng.gen_range(0..=span))
        });

        let hour = timestamp.hour();
        let month = timestamp.month();
        let weekday = timestamp.weekday().num_days_from_monday();

        Self {
            timestamp,
            load_weight: sample_load(rng, hour, weekday),
            speed: sample_speed(rng, hour),
            operating_hours: rng.gen_range(0.0..15000.0),
            ambient_temp: sample_ambient_temp(rng, month, hour),
            humidity: sample_humidity(rng, month, hour),
            time_of_day: TimeOfDay::from_hour(hour),
            maintenance_days_since: rng.gen_range(0..=120),
            contact_cycles: rng.gen_range(0..=100_000),
            season: Season::from_month(month),
            building_floors: BUILDING_FLOORS[rng.gen_range(0..BUILDING_FLOORS.len())],
            usage_intensity: usage_intensity(hour, weekday),
        }
    }

    pub fn is_weekend(&self) -> bool {
        self.timestamp.weekday().num_days_from_monday() >= 5
    }
}

/// Cabin load (kg), piecewise-uniform over the weekly traffic schedule
fn sample_load<R: Rng + ?Sized>(rng: &mut R, hour: u32, weekday: u32) -> f64 {
    if weekday < 5 {
        match hour {
            7..=9 => rng.gen_range(600.0..1000.0),   // morning peak
            17..=19 => rng.gen_range(500.0..900.0),  // evening peak
            10..=16 => rng.gen_range(300.0..700.0),  // office hours
            22..=23 | 0..=6 => rng.gen_range(0.0..200.0),
            _ => rng.gen_range(100.0..400.0),
        }
    } else {
        match hour {
            10..=14 => rng.gen_range(400.0..600.0),  // weekend active window
            22..=23 | 0..=8 => rng.gen_range(0.0..150.0),
            _ => rng.gen_range(150.0..400.0),
        }
    }
}

/// Car speed (m/s), higher in peaks, lower overnight
fn sample_speed<R: Rng + ?Sized>(rng: &mut R, hour: u32) -> f64 {
    match hour {
        7..=9 | 17..=19 => rng.gen_range(1.2..2.0),
        22..=23 | 0..=6 => rng.gen_range(0.5..1.0),
        _ => rng.gen_range(0.8..1.6),
    }
}

/// Machine-room ambient temperature: monthly base + diurnal sinusoid
/// (amplitude 3 °C, trough at 06:00) + N(0, 1.5), floored at 0
fn sample_ambient_temp<R: Rng + ?Sized>(rng: &mut R, month: u32, hour: u32) -> f64 {
    let base = MONTHLY_BASE_TEMP[(month - 1) as usize];
    let diurnal = 3.0 * (2.0 * std::f64::consts::PI * (hour as f64 - 6.0) / 24.0).sin();
    let noise: f64 = rng.sample::<f64, _>(StandardNormal) * 1.5;
    (base + diurnal + noise).max(0.0)
}

/// Relative humidity: monthly base + diurnal cosine (amplitude 5, high in
/// the early morning) + N(0, 3), clamped to [20, 95]
fn sample_humidity<R: Rng + ?Sized>(rng: &mut R, month: u32, hour: u32) -> f64 {
    let base = MONTHLY_BASE_HUMIDITY[(month - 1) as usize];
    let diurnal = 5.0 * (2.0 * std::f64::consts::PI * (hour as f64 - 6.0) / 24.0).cos();
    let noise: f64 = rng.sample::<f64, _>(StandardNormal) * 3.0;
    (base + diurnal + noise).clamp(20.0, 95.0)
}

fn usage_intensity(hour: u32, weekday: u32) -> UsageIntensity {
    if weekday < 5 {
        match hour {
            7..=9 | 17..=19 => UsageIntensity::High,
            10..=16 => UsageIntensity::Medium,
            _ => UsageIntensity::Low,
        }
    } else {
        match hour {
            10..=16 => UsageIntensity::Medium,
            _ => UsageIntensity::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(22), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(3), TimeOfDay::Night);
    }

    #[test]
    fn test_season_from_month() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(4), Season::Spring);
        assert_eq!(Season::from_month(7), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Autumn);
    }

    #[test]
    fn test_implicit_timestamp_within_past_year() {
        let mut rng = rng();
        let now = Utc::now();
        for _ in 0..100 {
            let ctx = OperatingContext::sample(&mut rng, now, None);
            assert!(ctx.timestamp <= now);
            assert!(ctx.timestamp >= now - Duration::days(365));
        }
    }

    #[test]
    fn test_field_bounds() {
        let mut rng = rng();
        let now = Utc::now();
        for _ in 0..200 {
            let ctx = OperatingContext::sample(&mut rng, now, None);
            assert!(ctx.ambient_temp >= 0.0);
            assert!((20.0..=95.0).contains(&ctx.humidity));
            assert!((0.0..15000.0).contains(&ctx.operating_hours));
            assert!(ctx.maintenance_days_since <= 120);
            assert!(ctx.contact_cycles <= 100_000);
            assert!(BUILDING_FLOORS.contains(&ctx.building_floors));
        }
    }

    #[test]
    fn test_weekday_peak_load_and_intensity() {
        let mut rng = rng();
        // Wednesday 08:00 - morning peak
        let ts = Utc.with_ymd_and_hms(2025, 6, 4, 8, 0, 0).unwrap();
        let ctx = OperatingContext::sample(&mut rng, Utc::now(), Some(ts));
        assert!((600.0..1000.0).contains(&ctx.load_weight));
        assert!((1.2..2.0).contains(&ctx.speed));
        assert_eq!(ctx.usage_intensity, UsageIntensity::High);
        assert!(!ctx.is_weekend());
    }

    #[test]
    fn test_weekend_night_load() {
        let mut rng = rng();
        // Sunday 02:00
        let ts = Utc.with_ymd_and_hms(2025, 6, 8, 2, 0, 0).unwrap();
        let ctx = OperatingContext::sample(&mut rng, Utc::now(), Some(ts));
        assert!(ctx.load_weight < 150.0);
        assert_eq!(ctx.usage_intensity, UsageIntensity::Low);
        assert!(ctx.is_weekend());
    }

    #[test]
    fn test_reproducible_under_seed() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let a = OperatingContext::sample(&mut StdRng::seed_from_u64(42), now, None);
        let b = OperatingContext::sample(&mut StdRng::seed_from_u64(42), now, None);
        assert_eq!(a.timestamp, b.timestamp);
        assert_eq!(a.load_weight, b.load_weight);
        assert_eq!(a.humidity, b.humidity);
    }
}
