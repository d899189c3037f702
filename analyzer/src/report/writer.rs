use anyhow::Context;
use motorcore::analysis::{MotorAnalysis, RankMetric};
use motorcore::telemetry::LogManager;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// Filename suffix distinguishing the sub-640 Ns report set.
pub const MICRO_REPORT_SUFFIX: &str = "_under_640ns";

const TOP_COUNT: usize = 10;

struct ReportSpec {
    base_name: &'static str,
    title: &'static str,
    sections: &'static [RankMetric],
}

const REPORTS: &[ReportSpec] = &[
    ReportSpec {
        base_name: "top_motors_thrust",
        title: "Top Motors by Thrust",
        sections: &[RankMetric::ThrustToWeight, RankMetric::ThrustToSize],
    },
    ReportSpec {
        base_name: "top_motors_impulse",
        title: "Top Motors by Impulse",
        sections: &[RankMetric::ImpulseToWeight, RankMetric::ImpulseToSize],
    },
    ReportSpec {
        base_name: "top_motors_specificimpulse",
        title: "Top Motors by Specific Impulse",
        sections: &[RankMetric::SpecificImpulse],
    },
];

/// Writes the three ranked report files for one motor set.
///
/// An empty set skips the whole invocation; no files are touched.
pub fn generate_reports(
    motors: &[MotorAnalysis],
    suffix: &str,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let logger = LogManager::new("report");
    if motors.is_empty() {
        logger.warn(&format!("no motors for report set '{}', skipping", suffix));
        return Ok(());
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating report directory {}", out_dir.display()))?;

    for spec in REPORTS {
        let path = out_dir.join(format!("{}{}.txt", spec.base_name, suffix));
        fs::write(&path, render_report(spec, motors))
            .with_context(|| format!("writing report {}", path.display()))?;
        logger.record(&format!("wrote {}", path.display()));
    }

    Ok(())
}

fn render_report(spec: &ReportSpec, motors: &[MotorAnalysis]) -> String {
    let mut out = String::new();
    out.push_str(spec.title);
    out.push('\n');
    out.push_str(&"=".repeat(spec.title.len()));
    out.push('\n');

    for metric in spec.sections {
        out.push('\n');
        out.push_str(&render_section(*metric, motors));
    }

    out
}

/// Stable descending sort on the metric, then the top ten as 1-based
/// numbered entries.
fn render_section(metric: RankMetric, motors: &[MotorAnalysis]) -> String {
    let mut ranked: Vec<&MotorAnalysis> = motors.iter().collect();
    ranked.sort_by(|a, b| {
        metric
            .value(b)
            .partial_cmp(&metric.value(a))
            .unwrap_or(Ordering::Equal)
    });

    let mut out = String::new();
    out.push_str(metric.section_title());
    out.push('\n');
    out.push_str(&"-".repeat(metric.section_title().len()));
    out.push('\n');

    for (index, motor) in ranked.iter().take(TOP_COUNT).enumerate() {
        out.push_str(&format!(
            "{:>2}. {} {} ({}) - {} [{}]\n",
            index + 1,
            motor.manufacturer,
            motor.common_name,
            motor.motor_type,
            metric.format_value(metric.value(motor)),
            metric.source_quantities(motor),
        ));
    }

    out
}
