use std::sync::Mutex;

/// Point-in-time view of the run counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub admitted: usize,
    pub skipped: usize,
}

impl MetricsSnapshot {
    pub fn total(self) -> usize {
        self.admitted + self.skipped
    }
}

/// Thread-safe admitted/skipped counters for one validate/transform pass.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_admitted(&self) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.admitted += 1;
        }
    }

    pub fn record_skipped(&self) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.skipped += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|counts| *counts)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_and_total() {
        let recorder = MetricsRecorder::new();
        recorder.record_admitted();
        recorder.record_admitted();
        recorder.record_skipped();

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.admitted, 2);
        assert_eq!(snapshot.skipped, 1);
        assert_eq!(snapshot.total(), 3);
    }
}
