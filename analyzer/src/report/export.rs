use anyhow::Context;
use motorcore::analysis::MotorAnalysis;
use motorcore::telemetry::LogManager;
use std::fs;
use std::path::Path;

/// Serializes a motor set as a pretty-printed JSON array, overwriting any
/// previous export at the path.
pub fn export_json(motors: &[MotorAnalysis], path: &Path) -> anyhow::Result<()> {
    let logger = LogManager::new("export");
    let body = serde_json::to_string_pretty(motors).context("serializing motor export")?;
    fs::write(path, body).with_context(|| format!("writing export {}", path.display()))?;
    logger.record(&format!(
        "wrote {} motors to {}",
        motors.len(),
        path.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use motorcore::catalog::RawMotorRecord;
    use tempfile::tempdir;

    fn motor(impulse: f64) -> MotorAnalysis {
        MotorAnalysis::from_record(&RawMotorRecord {
            motor_id: Some("abc123".to_string()),
            designation: Some("C6-5".to_string()),
            manufacturer: Some("Estes".to_string()),
            common_name: Some("C6".to_string()),
            avg_thrust_n: Some(4.7),
            tot_impulse_ns: Some(impulse),
            total_weight_g: Some(24.0),
            prop_weight_g: Some(10.8),
            diameter: Some(18.0),
            length: Some(70.0),
            motor_type: Some("single-use".to_string()),
            burn_time_s: None,
        })
        .unwrap()
    }

    #[test]
    fn export_round_trips_through_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("motors_under_640ns.json");
        export_json(&[motor(8.8), motor(600.0)], &path).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        let decoded: Vec<MotorAnalysis> = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].common_name, "C6");
        assert_eq!(decoded[1].tot_impulse_ns, 600.0);
    }

    #[test]
    fn export_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("motors_all.json");
        export_json(&[motor(8.8)], &path).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("[\n"));
        assert!(body.contains("\"commonName\": \"C6\""));
    }

    #[test]
    fn empty_set_exports_an_empty_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("motors_under_640ns.json");
        export_json(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
