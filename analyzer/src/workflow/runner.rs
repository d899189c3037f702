use motorcore::analysis::{MotorAnalysis, MICRO_IMPULSE_CEILING_NS};
use motorcore::catalog::RawMotorRecord;
use motorcore::telemetry::{LogManager, MetricsRecorder};

/// Outcome of one validate/transform pass over the fetched catalog.
pub struct WorkflowResult {
    pub motors: Vec<MotorAnalysis>,
    pub admitted: usize,
    pub skipped: usize,
}

impl WorkflowResult {
    /// Valid motors below the micro impulse boundary (strict `<`), used for
    /// the filtered report set and JSON export.
    pub fn micro_motors(&self) -> Vec<MotorAnalysis> {
        self.motors
            .iter()
            .filter(|motor| motor.tot_impulse_ns < MICRO_IMPULSE_CEILING_NS)
            .cloned()
            .collect()
    }
}

/// Maps raw catalog records into analysis records, counting skips.
#[derive(Clone, Default)]
pub struct Runner;

impl Runner {
    pub fn new() -> Self {
        Self
    }

    /// Source order is preserved only incidentally; report rendering
    /// re-sorts per metric.
    pub fn execute(&self, records: &[RawMotorRecord]) -> WorkflowResult {
        let logger = LogManager::new("workflow");
        let metrics = MetricsRecorder::new();
        let mut motors = Vec::with_capacity(records.len());

        for record in records {
            match MotorAnalysis::from_record(record) {
                Ok(motor) => {
                    metrics.record_admitted();
                    motors.push(motor);
                }
                Err(reason) => {
                    metrics.record_skipped();
                    logger.skip(&format!(
                        "skipping {}: {}",
                        record.common_name.as_deref().unwrap_or("<unnamed>"),
                        reason
                    ));
                }
            }
        }

        let snapshot = metrics.snapshot();
        logger.record(&format!(
            "admitted {} of {} catalog records",
            snapshot.admitted,
            snapshot.total()
        ));

        WorkflowResult {
            motors,
            admitted: snapshot.admitted,
            skipped: snapshot.skipped,
        }
    }
}
