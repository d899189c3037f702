use crate::analysis::classify::ImpulseClass;
use crate::analysis::metrics;
use crate::analysis::validate::{self, QualifiedRecord};
use crate::catalog::RawMotorRecord;
use crate::prelude::ValidationResult;
use serde::{Deserialize, Serialize};

/// Flat analysis record for one admitted motor: identity labels, the raw
/// figures the reports display, and the derived ratios they rank by.
///
/// Serialized field names match the catalog casing so exports line up with
/// the upstream schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorAnalysis {
    pub id: String,
    pub designation: String,
    pub manufacturer: String,
    pub common_name: String,
    #[serde(rename = "type")]
    pub motor_type: String,
    pub avg_thrust_n: f64,
    pub tot_impulse_ns: f64,
    pub total_weight_g: f64,
    pub prop_weight_g: f64,
    pub diameter: f64,
    pub length: f64,
    pub volume_mm3: f64,
    pub thrust_to_weight_ratio: f64,
    pub thrust_to_size_ratio: f64,
    pub impulse_to_weight_ratio: f64,
    pub impulse_to_size_ratio: f64,
    pub specific_impulse_sec: f64,
    pub burn_time_est_s: f64,
}

impl MotorAnalysis {
    /// Qualifies a raw catalog record and computes its derived metrics in
    /// one step. Rejections carry the admission rule that failed.
    pub fn from_record(record: &RawMotorRecord) -> ValidationResult<Self> {
        Ok(Self::from_qualified(validate::qualify(record)?))
    }

    pub fn from_qualified(record: QualifiedRecord) -> Self {
        let derived = metrics::derive(&record);
        Self {
            id: record.id,
            designation: record.designation,
            manufacturer: record.manufacturer,
            common_name: record.common_name,
            motor_type: record.motor_type,
            avg_thrust_n: record.avg_thrust_n,
            tot_impulse_ns: record.tot_impulse_ns,
            total_weight_g: record.total_weight_g,
            prop_weight_g: record.prop_weight_g,
            diameter: record.diameter,
            length: record.length,
            volume_mm3: derived.volume_mm3,
            thrust_to_weight_ratio: derived.thrust_to_weight_ratio,
            thrust_to_size_ratio: derived.thrust_to_size_ratio,
            impulse_to_weight_ratio: derived.impulse_to_weight_ratio,
            impulse_to_size_ratio: derived.impulse_to_size_ratio,
            specific_impulse_sec: derived.specific_impulse_sec,
            burn_time_est_s: derived.burn_time_est_s,
        }
    }

    pub fn impulse_class(&self) -> ImpulseClass {
        ImpulseClass::of(self.tot_impulse_ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::STANDARD_GRAVITY_M_S2;

    fn raw_record() -> RawMotorRecord {
        RawMotorRecord {
            motor_id: Some("abc123".to_string()),
            designation: Some("C6-5".to_string()),
            manufacturer: Some("Estes".to_string()),
            common_name: Some("C6".to_string()),
            avg_thrust_n: Some(4.7),
            tot_impulse_ns: Some(8.8),
            total_weight_g: Some(24.0),
            prop_weight_g: Some(10.8),
            diameter: Some(18.0),
            length: Some(70.0),
            motor_type: Some("single-use".to_string()),
            burn_time_s: None,
        }
    }

    #[test]
    fn from_record_carries_raw_figures_and_derived_ratios() {
        let motor = MotorAnalysis::from_record(&raw_record()).unwrap();
        assert_eq!(motor.avg_thrust_n, 4.7);
        assert_eq!(
            motor.thrust_to_weight_ratio,
            4.7 / ((24.0 / 1000.0) * STANDARD_GRAVITY_M_S2)
        );
        assert_eq!(motor.impulse_class(), ImpulseClass::LowPower);
    }

    #[test]
    fn from_record_propagates_rejection() {
        let mut record = raw_record();
        record.motor_id = None;
        assert!(MotorAnalysis::from_record(&record).is_err());
    }

    #[test]
    fn serialization_uses_catalog_casing() {
        let motor = MotorAnalysis::from_record(&raw_record()).unwrap();
        let body = serde_json::to_value(&motor).unwrap();
        assert_eq!(body["commonName"], "C6");
        assert_eq!(body["type"], "single-use");
        assert_eq!(body["avgThrustN"], 4.7);
        assert!(body["specificImpulseSec"].is_f64());
        assert!(body["volumeMm3"].is_f64());
    }
}
