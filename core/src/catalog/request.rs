use serde::{Deserialize, Serialize};

const BULK_MAX_RESULTS: u32 = 9999;
const PROBE_MAX_RESULTS: u32 = 1;

/// Requests both currently-manufactured and discontinued listings.
const AVAILABILITY_ALL: &str = "all";

/// Query parameters for the catalog search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub max_results: u32,
    pub availability: String,
}

impl SearchRequest {
    /// The one bulk query the pipeline issues per run.
    pub fn bulk() -> Self {
        Self {
            max_results: BULK_MAX_RESULTS,
            availability: AVAILABILITY_ALL.to_string(),
        }
    }

    /// Single-listing query used for ad hoc schema inspection.
    pub fn single() -> Self {
        Self {
            max_results: PROBE_MAX_RESULTS,
            availability: AVAILABILITY_ALL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_request_serializes_wire_names() {
        let body = serde_json::to_value(SearchRequest::bulk()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"maxResults": 9999, "availability": "all"})
        );
    }

    #[test]
    fn single_request_asks_for_one_listing() {
        assert_eq!(SearchRequest::single().max_results, 1);
        assert_eq!(SearchRequest::single().availability, "all");
    }
}
