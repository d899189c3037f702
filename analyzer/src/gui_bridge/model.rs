use crate::workflow::runner::WorkflowResult;
use motorcore::analysis::{ImpulseClass, MotorAnalysis};
use motorcore::math::StatsHelper;
use serde::{Deserialize, Serialize};

/// Snapshot served to HTTP clients: run counters, certification-class
/// breakdown, fitted trends for the companion scatter views, and the
/// motor list itself.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisModel {
    pub total_records: usize,
    pub admitted: usize,
    pub skipped: usize,
    pub class_counts: Vec<ClassCount>,
    pub trends: Vec<TrendSummary>,
    pub motors: Vec<MotorAnalysis>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCount {
    pub label: String,
    pub count: usize,
}

/// Least-squares trend over one scatter pair of the analysis set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSummary {
    pub label: String,
    pub slope: f64,
    pub intercept: f64,
    pub sigma: f64,
}

impl AnalysisModel {
    pub fn from_result(result: &WorkflowResult) -> Self {
        Self {
            total_records: result.admitted + result.skipped,
            admitted: result.admitted,
            skipped: result.skipped,
            class_counts: class_counts(&result.motors),
            trends: trend_summaries(&result.motors),
            motors: result.motors.clone(),
        }
    }
}

fn class_counts(motors: &[MotorAnalysis]) -> Vec<ClassCount> {
    [
        ImpulseClass::LowPower,
        ImpulseClass::Level1,
        ImpulseClass::Level2,
        ImpulseClass::Level3,
    ]
    .iter()
    .map(|class| ClassCount {
        label: class.label().to_string(),
        count: motors
            .iter()
            .filter(|motor| motor.impulse_class() == *class)
            .count(),
    })
    .collect()
}

/// Scatter pairs matching the companion analysis views. Pairs without a
/// fittable trend (under two motors, or no x spread) are omitted.
fn trend_summaries(motors: &[MotorAnalysis]) -> Vec<TrendSummary> {
    let pairs: [(&str, fn(&MotorAnalysis) -> f64, fn(&MotorAnalysis) -> f64); 5] = [
        ("thrust_vs_weight", |m| m.total_weight_g, |m| m.avg_thrust_n),
        ("impulse_vs_weight", |m| m.total_weight_g, |m| m.tot_impulse_ns),
        ("isp_vs_impulse", |m| m.tot_impulse_ns, |m| m.specific_impulse_sec),
        ("thrust_vs_volume", |m| m.volume_mm3, |m| m.avg_thrust_n),
        ("impulse_vs_volume", |m| m.volume_mm3, |m| m.tot_impulse_ns),
    ];

    pairs
        .iter()
        .filter_map(|(label, x_of, y_of)| {
            let xs: Vec<f64> = motors.iter().map(|m| x_of(m)).collect();
            let ys: Vec<f64> = motors.iter().map(|m| y_of(m)).collect();
            StatsHelper::linear_fit(&xs, &ys).map(|fit| TrendSummary {
                label: (*label).to_string(),
                slope: fit.slope,
                intercept: fit.intercept,
                sigma: StatsHelper::residual_sigma(&xs, &ys, fit),
            })
        })
        .collect()
}
