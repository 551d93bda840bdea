//! Subsystem Catalog - Authoritative Parameter Tables
//!
//! **This file is the single source of truth for the monitored parameters.**
//!
//! Range bands and baselines mirror the elevator safety thresholds the
//! detection frontend alarms on. Note the inverted bands: braking torque and
//! door lock engagement depth degrade *downward*, so their critical bands sit
//! below normal.

use std::collections::BTreeMap;

use super::types::{ParamCategory, ParameterSpec, Range};

pub type SubsystemCatalog = BTreeMap<&'static str, BTreeMap<&'static str, ParameterSpec>>;

/// Build the full four-subsystem catalog (traction, guidance, electrical, door).
pub fn build() -> SubsystemCatalog {
    let mut catalog = SubsystemCatalog::new();
    catalog.insert("traction", traction());
    catalog.insert("guidance", guidance());
    catalog.insert("electrical", electrical());
    catalog.insert("door", door());
    catalog
}

fn traction() -> BTreeMap<&'static str, ParameterSpec> {
    let mut params = BTreeMap::new();
    params.insert(
        "motorTemperature",
        ParameterSpec {
            normal: Range::new(25.0, 80.0),
            warning: Range::new(80.0, 95.0),
            critical: Range::new(95.0, 120.0),
            baseline: 45.0,
            unit: "°C",
            component: "traction machine",
            category: ParamCategory::MotorTemperature,
            physical_properties: &[
                ("thermal_mass", 50.0),
                ("thermal_resistance", 0.1),
                ("load_sensitivity", 0.8),
                ("speed_sensitivity", 0.6),
                ("ambient_sensitivity", 0.3),
            ],
        },
    );
    params.insert(
        "bearingTemperature",
        ParameterSpec {
            normal: Range::new(30.0, 95.0),
            warning: Range::new(95.0, 105.0),
            critical: Range::new(105.0, 120.0),
            baseline: 50.0,
            unit: "°C",
            component: "traction machine",
            category: ParamCategory::BearingTemperature,
            physical_properties: &[
                ("thermal_mass", 20.0),
                ("thermal_resistance", 0.15),
                ("load_sensitivity", 0.6),
                ("speed_sensitivity", 0.4),
                ("motor_temp_coupling", 0.7),
            ],
        },
    );
    params.insert(
        "vibrationSpeed",
        ParameterSpec {
            normal: Range::new(0.5, 2.8),
            warning: Range::new(2.8, 4.5),
            critical: Range::new(4.5, 6.0),
            baseline: 1.2,
            unit: "mm/s",
            component: "traction machine",
            category: ParamCategory::Vibration,
            physical_properties: &[
                ("resonant_freq", 15.0),
                ("damping_ratio", 0.05),
                ("speed_sensitivity", 1.2),
                ("load_sensitivity", 0.4),
            ],
        },
    );
    params.insert(
        "current",
        ParameterSpec {
            // 18.5 A rated, ±10% normal, 10-15% fluctuation warning
            normal: Range::new(16.65, 20.35),
            warning: Range::new(20.35, 21.28),
            critical: Range::new(21.28, 30.0),
            baseline: 18.5,
            unit: "A",
            component: "traction machine",
            category: ParamCategory::Current,
            physical_properties: &[
                ("resistance", 0.5),
                ("inductance", 0.1),
                ("back_emf", 220.0),
                ("load_sensitivity", 1.5),
                ("voltage_sensitivity", 0.8),
            ],
        },
    );
    params.insert(
        "steelRopeWear",
        ParameterSpec {
            normal: Range::new(0.0, 10.0),
            warning: Range::new(10.0, 12.0),
            critical: Range::new(12.0, 15.0),
            baseline: 2.0,
            unit: "%",
            component: "wire rope",
            category: ParamCategory::Wear,
            physical_properties: &[
                ("wear_rate", 0.0001),
                ("load_acceleration", 1.2),
                ("speed_factor", 0.8),
            ],
        },
    );
    params.insert(
        "brokenWires",
        ParameterSpec {
            normal: Range::new(0.0, 5.0),
            warning: Range::new(5.0, 8.0),
            critical: Range::new(8.0, 10.0),
            baseline: 0.0,
            unit: "wires/strand",
            component: "wire rope",
            category: ParamCategory::BrokenWires,
            physical_properties: &[
                ("failure_rate", 0.00001),
                ("wear_dependency", 2.0),
                ("poisson_lambda", 0.001),
            ],
        },
    );
    params.insert(
        "brakeClearance",
        ParameterSpec {
            normal: Range::new(0.5, 1.0),
            warning: Range::new(1.0, 1.5),
            critical: Range::new(1.5, 2.0),
            baseline: 0.8,
            unit: "mm",
            component: "brake",
            category: ParamCategory::Clearance,
            physical_properties: &[("wear_sensitivity", 0.3)],
        },
    );
    params.insert(
        "brakingTorque",
        ParameterSpec {
            // Degrades downward: insufficient torque is the failure mode
            normal: Range::new(300.0, 350.0),
            warning: Range::new(250.0, 300.0),
            critical: Range::new(200.0, 250.0),
            baseline: 320.0,
            unit: "N·m",
            component: "brake",
            category: ParamCategory::Direct,
            physical_properties: &[
                ("wear_sensitivity", 0.4),
                ("min_safety_factor", 1.5),
            ],
        },
    );
    params
}

fn guidance() -> BTreeMap<&'static str, ParameterSpec> {
    let mut params = BTreeMap::new();
    params.insert(
        "railDeviation",
        ParameterSpec {
            normal: Range::new(0.0, 0.5),
            warning: Range::new(0.5, 1.0),
            critical: Range::new(1.0, 1.2),
            baseline: 0.2,
            unit: "mm",
            component: "guide rail",
            category: ParamCategory::Direct,
            physical_properties: &[
                ("wear_sensitivity", 0.5),
                ("installation_tolerance", 0.1),
            ],
        },
    );
    params.insert(
        "guideShoeWear",
        ParameterSpec {
            normal: Range::new(0.0, 2.0),
            warning: Range::new(2.0, 3.0),
            critical: Range::new(3.0, 4.0),
            baseline: 0.5,
            unit: "mm",
            component: "guide shoe",
            category: ParamCategory::Wear,
            physical_properties: &[
                ("wear_rate", 0.00005),
                ("speed_sensitivity", 0.8),
                ("load_factor", 0.6),
            ],
        },
    );
    params.insert(
        "railJointGap",
        ParameterSpec {
            normal: Range::new(0.0, 0.5),
            warning: Range::new(0.5, 1.0),
            critical: Range::new(1.0, 2.0),
            baseline: 0.2,
            unit: "mm",
            component: "guide rail",
            category: ParamCategory::Clearance,
            physical_properties: &[
                ("thermal_expansion", 0.012),
                ("installation_gap", 0.2),
            ],
        },
    );
    params
}

fn electrical() -> BTreeMap<&'static str, ParameterSpec> {
    let mut params = BTreeMap::new();
    params.insert(
        "voltageFluctuation",
        ParameterSpec {
            normal: Range::new(-10.0, 10.0),
            warning: Range::new(10.0, 15.0),
            critical: Range::new(15.0, 25.0),
            baseline: 0.0,
            unit: "%",
            component: "power supply",
            category: ParamCategory::Direct,
            physical_properties: &[("grid_freq", 50.0)],
        },
    );
    params.insert(
        "contactVoltageDrops",
        ParameterSpec {
            normal: Range::new(10.0, 50.0),
            warning: Range::new(50.0, 100.0),
            critical: Range::new(100.0, 150.0),
            baseline: 25.0,
            unit: "mV",
            component: "power supply",
            category: ParamCategory::Direct,
            physical_properties: &[
                ("contact_resistance", 0.1),
                ("current_sensitivity", 0.8),
                ("aging_sensitivity", 0.6),
                ("humidity_factor", 0.3),
            ],
        },
    );
    params.insert(
        "controlResponseTime",
        ParameterSpec {
            normal: Range::new(0.1, 0.5),
            warning: Range::new(0.5, 1.0),
            critical: Range::new(1.0, 2.0),
            baseline: 0.3,
            unit: "s",
            component: "controller",
            category: ParamCategory::ResponseTiming,
            physical_properties: &[
                ("processor_load", 0.3),
                ("temperature_sensitivity", 0.2),
            ],
        },
    );
    params.insert(
        "currentLoad",
        ParameterSpec {
            normal: Range::new(16.65, 20.35),
            warning: Range::new(20.35, 21.28),
            critical: Range::new(21.28, 30.0),
            baseline: 18.5,
            unit: "A",
            component: "load circuit",
            category: ParamCategory::Current,
            physical_properties: &[
                ("power_factor", 0.85),
                ("efficiency", 0.9),
                ("load_dependency", 1.0),
            ],
        },
    );
    params
}

fn door() -> BTreeMap<&'static str, ParameterSpec> {
    let mut params = BTreeMap::new();
    params.insert(
        "openCloseTime",
        ParameterSpec {
            normal: Range::new(2.0, 3.0),
            warning: Range::new(3.0, 5.0),
            critical: Range::new(5.0, 8.0),
            baseline: 2.5,
            unit: "s",
            component: "door operator",
            category: ParamCategory::ResponseTiming,
            physical_properties: &[
                ("mechanical_inertia", 2.0),
                ("friction_coeff", 0.1),
                ("wear_sensitivity", 0.4),
                ("load_factor", 0.2),
            ],
        },
    );
    params.insert(
        "contactResistance",
        ParameterSpec {
            normal: Range::new(0.05, 0.5),
            warning: Range::new(0.5, 1.0),
            critical: Range::new(1.0, 1.5),
            baseline: 0.1,
            unit: "Ω",
            component: "door lock",
            category: ParamCategory::Resistance,
            physical_properties: &[
                ("oxidation_rate", 0.00001),
                ("humidity_sensitivity", 0.3),
            ],
        },
    );
    params.insert(
        "doorCurrent",
        ParameterSpec {
            normal: Range::new(4.5, 5.5),
            warning: Range::new(5.5, 6.0),
            critical: Range::new(6.0, 8.0),
            baseline: 5.0,
            unit: "A",
            component: "door operator",
            category: ParamCategory::Current,
            physical_properties: &[
                ("rated_power_kw", 1.5),
                ("efficiency", 0.85),
                ("friction_dependency", 0.6),
            ],
        },
    );
    params.insert(
        "mechanicalDepth",
        ParameterSpec {
            // Lock engagement depth: below 7 mm is the unsafe direction
            normal: Range::new(7.0, 12.0),
            warning: Range::new(5.0, 7.0),
            critical: Range::new(0.0, 5.0),
            baseline: 9.0,
            unit: "mm",
            component: "door lock",
            category: ParamCategory::Direct,
            physical_properties: &[
                ("wear_rate", 0.001),
                ("adjustment_tolerance", 0.5),
            ],
        },
    );
    params
}
