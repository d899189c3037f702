use anyhow::Context;
use motorcore::catalog::{RawMotorRecord, SearchRequest, SearchResponse};
use serde_json::Value;
use std::time::Duration;

const SEARCH_ENDPOINT: &str = "https://www.thrustcurve.org/api/v1/search.json";
const USER_AGENT: &str = "motor-analyzer/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the catalog search endpoint.
///
/// Both the report pipeline and the schema probe go through the same POST
/// path so the two call sites cannot drift apart.
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_endpoint(SEARCH_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    /// Posts one search and returns the undecoded response body.
    pub async fn search_value(&self, request: &SearchRequest) -> anyhow::Result<Value> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .with_context(|| format!("posting search to {}", self.endpoint))?
            .error_for_status()
            .context("catalog search returned an error status")?;

        response
            .json::<Value>()
            .await
            .context("decoding search response body")
    }

    /// Posts one search and decodes the `results` sequence.
    pub async fn search(&self, request: &SearchRequest) -> anyhow::Result<Vec<RawMotorRecord>> {
        let body = self.search_value(request).await?;
        let decoded: SearchResponse =
            serde_json::from_value(body).context("decoding search results")?;
        Ok(decoded.results)
    }
}
