use crate::catalog::RawMotorRecord;
use crate::prelude::{ValidationError, ValidationResult};

/// Hybrids mix solid fuel with a liquid oxidizer, so their propellant
/// weight is not comparable to the solid-motor listings.
const EXCLUDED_MOTOR_TYPE: &str = "hybrid";

const DEFAULT_DESIGNATION: &str = "N/A";
const DEFAULT_MANUFACTURER: &str = "Unknown";
const DEFAULT_MOTOR_TYPE: &str = "Unknown";

/// Catalog record that passed every admission rule: labels resolved and
/// all physical quantities strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedRecord {
    pub id: String,
    pub designation: String,
    pub manufacturer: String,
    pub common_name: String,
    pub motor_type: String,
    pub avg_thrust_n: f64,
    pub tot_impulse_ns: f64,
    pub total_weight_g: f64,
    pub prop_weight_g: f64,
    pub diameter: f64,
    pub length: f64,
    pub burn_time_s: Option<f64>,
}

fn positive(field: &'static str, value: Option<f64>) -> ValidationResult<f64> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NonPositive(field))
    }
}

fn required_text(field: &'static str, value: &Option<String>) -> ValidationResult<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text.clone()),
        Some(_) => Err(ValidationError::EmptyField(field)),
        None => Err(ValidationError::MissingField(field)),
    }
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.clone(),
        _ => fallback.to_string(),
    }
}

/// Applies the admission rules to one raw catalog record.
pub fn qualify(record: &RawMotorRecord) -> ValidationResult<QualifiedRecord> {
    let motor_type = text_or(&record.motor_type, DEFAULT_MOTOR_TYPE);
    if motor_type == EXCLUDED_MOTOR_TYPE {
        return Err(ValidationError::ExcludedType(motor_type));
    }

    Ok(QualifiedRecord {
        id: required_text("motorId", &record.motor_id)?,
        common_name: required_text("commonName", &record.common_name)?,
        designation: text_or(&record.designation, DEFAULT_DESIGNATION),
        manufacturer: text_or(&record.manufacturer, DEFAULT_MANUFACTURER),
        motor_type,
        avg_thrust_n: positive("avgThrustN", record.avg_thrust_n)?,
        tot_impulse_ns: positive("totImpulseNs", record.tot_impulse_ns)?,
        total_weight_g: positive("totalWeightG", record.total_weight_g)?,
        prop_weight_g: positive("propWeightG", record.prop_weight_g)?,
        diameter: positive("diameter", record.diameter)?,
        length: positive("length", record.length)?,
        burn_time_s: record.burn_time_s.filter(|&t| t > 0.0),
    })
}
