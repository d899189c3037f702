use crate::analysis::motor::MotorAnalysis;
use crate::analysis::validate::QualifiedRecord;
use std::f64::consts::PI;

/// Standard gravity used for every gram-to-newton weight conversion.
pub const STANDARD_GRAVITY_M_S2: f64 = 9.80665;

/// Derived efficiency figures for one qualified motor.
#[derive(Debug, Clone, Copy)]
pub struct DerivedMetrics {
    pub volume_mm3: f64,
    pub thrust_to_weight_ratio: f64,
    pub thrust_to_size_ratio: f64,
    pub impulse_to_weight_ratio: f64,
    pub impulse_to_size_ratio: f64,
    pub specific_impulse_sec: f64,
    pub burn_time_est_s: f64,
}

/// Computes every derived metric for a qualified record.
///
/// Admission guarantees strictly positive denominators, so all ratios are
/// finite. The casing volume is a cylinder approximation.
pub fn derive(record: &QualifiedRecord) -> DerivedMetrics {
    let weight_n = (record.total_weight_g / 1000.0) * STANDARD_GRAVITY_M_S2;
    let prop_weight_n = (record.prop_weight_g / 1000.0) * STANDARD_GRAVITY_M_S2;
    let radius = record.diameter / 2.0;
    let volume_mm3 = PI * radius * radius * record.length;

    DerivedMetrics {
        volume_mm3,
        thrust_to_weight_ratio: record.avg_thrust_n / weight_n,
        thrust_to_size_ratio: record.avg_thrust_n / volume_mm3,
        impulse_to_weight_ratio: record.tot_impulse_ns / weight_n,
        impulse_to_size_ratio: record.tot_impulse_ns / volume_mm3,
        specific_impulse_sec: record.tot_impulse_ns / prop_weight_n,
        burn_time_est_s: record
            .burn_time_s
            .unwrap_or(record.tot_impulse_ns / record.avg_thrust_n),
    }
}

/// Ranking axes used by the report generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    ThrustToWeight,
    ThrustToSize,
    ImpulseToWeight,
    ImpulseToSize,
    SpecificImpulse,
}

impl RankMetric {
    pub fn section_title(self) -> &'static str {
        match self {
            RankMetric::ThrustToWeight => "Thrust/Weight",
            RankMetric::ThrustToSize => "Thrust/Size",
            RankMetric::ImpulseToWeight => "Impulse/Weight",
            RankMetric::ImpulseToSize => "Impulse/Size",
            RankMetric::SpecificImpulse => "Specific Impulse (Isp)",
        }
    }

    pub fn value(self, motor: &MotorAnalysis) -> f64 {
        match self {
            RankMetric::ThrustToWeight => motor.thrust_to_weight_ratio,
            RankMetric::ThrustToSize => motor.thrust_to_size_ratio,
            RankMetric::ImpulseToWeight => motor.impulse_to_weight_ratio,
            RankMetric::ImpulseToSize => motor.impulse_to_size_ratio,
            RankMetric::SpecificImpulse => motor.specific_impulse_sec,
        }
    }

    /// Weight-denominator ratios print with two decimals; volume-denominator
    /// ratios are tiny per cubic millimeter and print in scientific notation.
    pub fn format_value(self, value: f64) -> String {
        match self {
            RankMetric::ThrustToWeight
            | RankMetric::ImpulseToWeight
            | RankMetric::SpecificImpulse => format!("{:.2}", value),
            RankMetric::ThrustToSize | RankMetric::ImpulseToSize => format!("{:.4e}", value),
        }
    }

    /// The two source quantities the ratio was built from, for display.
    pub fn source_quantities(self, motor: &MotorAnalysis) -> String {
        match self {
            RankMetric::ThrustToWeight => format!(
                "thrust {:.1} N, weight {:.1} g",
                motor.avg_thrust_n, motor.total_weight_g
            ),
            RankMetric::ThrustToSize => format!(
                "thrust {:.1} N, volume {:.4e} mm^3",
                motor.avg_thrust_n, motor.volume_mm3
            ),
            RankMetric::ImpulseToWeight => format!(
                "impulse {:.1} Ns, weight {:.1} g",
                motor.tot_impulse_ns, motor.total_weight_g
            ),
            RankMetric::ImpulseToSize => format!(
                "impulse {:.1} Ns, volume {:.4e} mm^3",
                motor.tot_impulse_ns, motor.volume_mm3
            ),
            RankMetric::SpecificImpulse => format!(
                "impulse {:.1} Ns, propellant {:.1} g",
                motor.tot_impulse_ns, motor.prop_weight_g
            ),
        }
    }
}
