use serde::{Deserialize, Serialize};

/// One motor listing as returned by the catalog search endpoint.
///
/// Every field is optional at the wire boundary; the admission rules in
/// `analysis` decide what is usable. Upstream fields not listed here are
/// ignored on decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMotorRecord {
    pub motor_id: Option<String>,
    pub designation: Option<String>,
    pub manufacturer: Option<String>,
    pub common_name: Option<String>,
    pub avg_thrust_n: Option<f64>,
    pub tot_impulse_ns: Option<f64>,
    pub total_weight_g: Option<f64>,
    pub prop_weight_g: Option<f64>,
    /// Casing diameter in millimeters.
    pub diameter: Option<f64>,
    /// Casing length in millimeters.
    pub length: Option<f64>,
    #[serde(rename = "type")]
    pub motor_type: Option<String>,
    pub burn_time_s: Option<f64>,
}

/// Body of a catalog search response. A missing `results` key decodes as
/// an empty sequence, which the pipeline treats as a no-data exit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RawMotorRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_camel_case_fields() {
        let body = r#"{
            "motorId": "5f4294d20002310000000002",
            "designation": "H128W",
            "manufacturer": "AeroTech",
            "commonName": "H128",
            "avgThrustN": 128.0,
            "totImpulseNs": 176.0,
            "totalWeightG": 208.0,
            "propWeightG": 93.0,
            "diameter": 29.0,
            "length": 194.0,
            "type": "reload",
            "burnTimeS": 1.4,
            "certOrg": "Tripoli Rocketry Association"
        }"#;

        let record: RawMotorRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.motor_id.as_deref(), Some("5f4294d20002310000000002"));
        assert_eq!(record.common_name.as_deref(), Some("H128"));
        assert_eq!(record.motor_type.as_deref(), Some("reload"));
        assert_eq!(record.avg_thrust_n, Some(128.0));
        assert_eq!(record.burn_time_s, Some(1.4));
    }

    #[test]
    fn record_tolerates_sparse_listings() {
        let record: RawMotorRecord = serde_json::from_str(r#"{"commonName": "A8"}"#).unwrap();
        assert_eq!(record.common_name.as_deref(), Some("A8"));
        assert!(record.motor_id.is_none());
        assert!(record.avg_thrust_n.is_none());
    }

    #[test]
    fn response_defaults_missing_results_to_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}
