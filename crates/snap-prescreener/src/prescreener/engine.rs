use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::snapshot::FormSnapshot;
use crate::config::EngineConfig;

/// Benefit year requested from the engine.
pub const CURRENT_TARGET_YEAR: &str = "currentyr";

/// Body posted to the calculation engine: every captured answer as a flat
/// JSON object, plus the jurisdiction and target year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationRequest {
    #[serde(flatten)]
    pub inputs: FormSnapshot,
    pub state_or_territory: String,
    pub target_year: String,
}

impl CalculationRequest {
    pub fn new(inputs: FormSnapshot, jurisdiction: &str) -> Self {
        Self {
            inputs,
            state_or_territory: jurisdiction.to_string(),
            target_year: CURRENT_TARGET_YEAR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    Test,
    Amount,
    Income,
}

/// One named reason, amount, or income step in the engine's explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityFactor {
    #[serde(rename = "type")]
    pub kind: FactorKind,
    pub name: String,
    pub sort_order: f64,
    /// Pass/fail outcome; only `test` factors carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
    #[serde(default)]
    pub explanation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(default)]
    pub estimated_eligibility: bool,
    #[serde(default)]
    pub estimated_monthly_benefit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_allotment_estimated_benefit: Option<f64>,
    #[serde(default)]
    pub eligibility_factors: Vec<EligibilityFactor>,
}

impl EligibilityResponse {
    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    /// Failure response carrying the given messages.
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            errors,
            estimated_eligibility: false,
            estimated_monthly_benefit: 0.0,
            emergency_allotment_estimated_benefit: None,
            eligibility_factors: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("calculation engine request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("calculation engine unavailable: {0}")]
    Unavailable(String),
}

/// External eligibility calculator.
#[async_trait]
pub trait CalculationEngine: Send + Sync {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<EligibilityResponse, EngineError>;
}

/// Engine reached over HTTP with a JSON POST.
#[derive(Debug, Clone)]
pub struct HttpCalculationEngine {
    http: Client,
    endpoint: Url,
}

impl HttpCalculationEngine {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CalculationEngine for HttpCalculationEngine {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<EligibilityResponse, EngineError> {
        debug!(endpoint = %self.endpoint, "posting calculation request");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Input problems come back as 4xx with an ERROR body worth showing.
        if status.is_client_error() {
            match response.json::<EligibilityResponse>().await {
                Ok(body) => return Ok(body),
                Err(err) => warn!(%status, error = %err, "unreadable engine error body"),
            }
        }

        Err(EngineError::Unavailable(format!("engine returned HTTP {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_flattens_answers_next_to_jurisdiction() {
        let inputs: FormSnapshot = [("household_size", "2"), ("resources", "")]
            .into_iter()
            .collect();

        let json = serde_json::to_value(CalculationRequest::new(inputs, "NC")).expect("serializes");

        assert_eq!(
            json,
            serde_json::json!({
                "household_size": "2",
                "resources": "",
                "state_or_territory": "NC",
                "target_year": "currentyr",
            })
        );
    }

    #[test]
    fn error_responses_need_only_status_and_errors() {
        let response: EligibilityResponse = serde_json::from_value(serde_json::json!({
            "status": "ERROR",
            "errors": ["Household size must be a number."],
        }))
        .expect("parses");

        assert!(!response.is_ok());
        assert_eq!(response.errors.len(), 1);
        assert!(response.eligibility_factors.is_empty());
    }

    #[test]
    fn factors_parse_with_type_tag() {
        let factor: EligibilityFactor = serde_json::from_value(serde_json::json!({
            "type": "test",
            "name": "Gross Income",
            "sort_order": 1,
            "result": true,
            "explanation": ["Below the limit."],
        }))
        .expect("parses");

        assert_eq!(factor.kind, FactorKind::Test);
        assert_eq!(factor.sort_order, 1.0);
        assert_eq!(factor.result, Some(true));
    }
}
