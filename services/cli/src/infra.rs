use async_trait::async_trait;
use serde_json::Value;
use snap_prescreener::config::PrescreenerConfig;
use snap_prescreener::error::AppError;
use snap_prescreener::prescreener::{
    CalculationEngine, CalculationRequest, EligibilityResponse, EngineError, FormSnapshot,
    JurisdictionDirectory,
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a JSON object of answers. Numbers and booleans are accepted and
/// converted to the strings a form would hold; nulls are skipped.
pub(crate) fn load_answers(path: &Path) -> Result<FormSnapshot, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let values: BTreeMap<String, Value> = serde_json::from_str(&raw)?;

    let answers = values
        .into_iter()
        .filter_map(|(field, value)| match value {
            Value::String(text) => Some((field, text)),
            Value::Number(number) => Some((field, number.to_string())),
            Value::Bool(flag) => Some((field, flag.to_string())),
            Value::Null => None,
            other => {
                warn!(%field, value = %other, "skipping non-scalar answer");
                None
            }
        })
        .collect();
    Ok(answers)
}

pub(crate) fn load_response(path: &Path) -> Result<EligibilityResponse, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Configured options table, or the built-in one.
pub(crate) fn load_directory(config: &PrescreenerConfig) -> Result<JurisdictionDirectory, AppError> {
    match &config.options_path {
        Some(path) => {
            debug!(path = %path.display(), "loading jurisdiction options");
            Ok(JurisdictionDirectory::from_path(path)?)
        }
        None => Ok(JurisdictionDirectory::standard()),
    }
}

/// Engine that answers every request with a saved response.
#[derive(Debug, Clone)]
pub(crate) struct FixedResponseEngine {
    response: EligibilityResponse,
}

impl FixedResponseEngine {
    pub(crate) fn new(response: EligibilityResponse) -> Self {
        Self { response }
    }
}

#[async_trait]
impl CalculationEngine for FixedResponseEngine {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<EligibilityResponse, EngineError> {
        debug!(fields = request.inputs.len(), "answering from saved response");
        Ok(self.response.clone())
    }
}

/// Stand-in for commands that never submit.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OfflineEngine;

#[async_trait]
impl CalculationEngine for OfflineEngine {
    async fn calculate(
        &self,
        _request: &CalculationRequest,
    ) -> Result<EligibilityResponse, EngineError> {
        Err(EngineError::Unavailable(
            "no calculation engine in offline mode".to_string(),
        ))
    }
}
