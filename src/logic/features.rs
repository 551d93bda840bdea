//! Contextual Feature Deriver
//!
//! Secondary descriptive and risk features computed from a sample's context
//! and its final parameter value. These ride along in the dataset so models
//! can condition on operating regime without re-deriving it.

use serde::{Deserialize, Serialize};

use super::context::OperatingContext;
use super::specs::ParameterSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadLevel {
    Light,
    Medium,
    Heavy,
}

impl LoadLevel {
    pub fn from_weight(load_weight: f64) -> Self {
        if load_weight <= 300.0 {
            LoadLevel::Light
        } else if load_weight <= 600.0 {
            LoadLevel::Medium
        } else {
            LoadLevel::Heavy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadLevel::Light => "light",
            LoadLevel::Medium => "medium",
            LoadLevel::Heavy => "heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingLevel {
    New,
    Medium,
    Old,
}

impl OperatingLevel {
    pub fn from_hours(operating_hours: f64) -> Self {
        if operating_hours <= 3000.0 {
            OperatingLevel::New
        } else if operating_hours <= 8000.0 {
            OperatingLevel::Medium
        } else {
            OperatingLevel::Old
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperatingLevel::New => "new",
            OperatingLevel::Medium => "medium",
            OperatingLevel::Old => "old",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Recent,
    DueSoon,
    Overdue,
}

impl MaintenanceStatus {
    pub fn from_days(days_since: u32) -> Self {
        if days_since <= 30 {
            MaintenanceStatus::Recent
        } else if days_since <= 60 {
            MaintenanceStatus::DueSoon
        } else {
            MaintenanceStatus::Overdue
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceStatus::Recent => "recent",
            MaintenanceStatus::DueSoon => "due_soon",
            MaintenanceStatus::Overdue => "overdue",
        }
    }
}

/// Derived descriptive/risk features for one sample
#[derive(Debug, Clone, Serialize)]
pub struct ContextualFeatures {
    pub load_level: LoadLevel,
    pub operating_level: OperatingLevel,
    pub maintenance_status: MaintenanceStatus,
    pub deviation_from_baseline: f64,
    pub deviation_percentage: f64,
    pub environmental_stress: f64,
    pub usage_intensity_score: f64,
    pub composite_risk_score: f64,
}

/// Derive all contextual features from the context and the final value
pub fn derive(ctx: &OperatingContext, value: f64, spec: &ParameterSpec) -> ContextualFeatures {
    let deviation = (value - spec.baseline).abs();
    let deviation_pct = if spec.baseline != 0.0 {
        deviation / spec.baseline * 100.0
    } else {
        0.0
    };

    let environmental_stress =
        (ctx.ambient_temp - 25.0) / 10.0 + (ctx.humidity - 60.0) / 40.0;

    let maintenance_risk = (ctx.maintenance_days_since as f64 / 90.0).min(1.0);
    let operating_risk = (ctx.operating_hours / 15000.0).min(1.0);
    let environmental_risk = environmental_stress.abs().min(1.0);

    ContextualFeatures {
        load_level: LoadLevel::from_weight(ctx.load_weight),
        operating_level: OperatingLevel::from_hours(ctx.operating_hours),
        maintenance_status: MaintenanceStatus::from_days(ctx.maintenance_days_since),
        deviation_from_baseline: deviation,
        deviation_percentage: deviation_pct,
        environmental_stress,
        usage_intensity_score: ctx.usage_intensity.score(),
        composite_risk_score: (maintenance_risk + operating_risk + environmental_risk) / 3.0,
    }
}
