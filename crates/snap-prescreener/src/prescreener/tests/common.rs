use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::prescreener::engine::{
    CalculationEngine, CalculationRequest, EligibilityFactor, EligibilityResponse, EngineError,
    FactorKind, ResponseStatus,
};
use crate::prescreener::fields::{
    ABAWD, ALL_CITIZENS, DISQUALIFIED, ELDERLY_OR_DISABLED, FELONY, HOUSEHOLD_SIZE,
    IDENTIFY_USER, MONTHLY_JOB_INCOME, MONTHLY_NON_JOB_INCOME, RESOURCES,
};
use crate::prescreener::jurisdiction::JurisdictionDirectory;
use crate::prescreener::service::PrescreenerSession;
use crate::prescreener::snapshot::FormSnapshot;
use crate::prescreener::surface::InMemorySurface;

/// Answers to every required question for a three-person, all-citizen
/// household with no disqualifications.
pub(super) fn complete_answers() -> FormSnapshot {
    [
        (IDENTIFY_USER, "general_public"),
        (HOUSEHOLD_SIZE, "3"),
        (ALL_CITIZENS, "true"),
        (ELDERLY_OR_DISABLED, "false"),
        (FELONY, "false"),
        (ABAWD, "false"),
        (DISQUALIFIED, "false"),
        (MONTHLY_JOB_INCOME, "1200"),
        (MONTHLY_NON_JOB_INCOME, "0"),
        (RESOURCES, "500"),
    ]
    .into_iter()
    .collect()
}

pub(super) fn factor(
    kind: FactorKind,
    name: &str,
    sort_order: f64,
    result: Option<bool>,
) -> EligibilityFactor {
    EligibilityFactor {
        kind,
        name: name.to_string(),
        sort_order,
        result,
        explanation: vec![format!("{name} explanation.")],
    }
}

pub(super) fn standard_factors() -> Vec<EligibilityFactor> {
    vec![
        factor(FactorKind::Amount, "Your Estimated Monthly Benefit", 4.0, None),
        factor(FactorKind::Income, "Net Income", 6.0, None),
        factor(FactorKind::Test, "Net Income", 2.0, Some(true)),
        factor(FactorKind::Income, "Gross Income", 5.0, None),
        factor(FactorKind::Test, "Gross Income", 1.0, Some(true)),
        factor(FactorKind::Test, "Asset Test", 3.0, Some(false)),
    ]
}

pub(super) fn eligible_response(base: f64, allotment: Option<f64>) -> EligibilityResponse {
    EligibilityResponse {
        status: ResponseStatus::Ok,
        errors: Vec::new(),
        estimated_eligibility: true,
        estimated_monthly_benefit: base,
        emergency_allotment_estimated_benefit: allotment,
        eligibility_factors: standard_factors(),
    }
}

pub(super) fn ineligible_response() -> EligibilityResponse {
    EligibilityResponse {
        estimated_eligibility: false,
        estimated_monthly_benefit: 0.0,
        ..eligible_response(0.0, None)
    }
}

#[derive(Debug)]
pub(super) enum Reply {
    Respond(EligibilityResponse),
    Fail(String),
}

/// Engine double that records every request and answers from a script.
#[derive(Debug)]
pub(super) struct ScriptedEngine {
    reply: Reply,
    requests: Mutex<Vec<CalculationRequest>>,
}

impl ScriptedEngine {
    pub(super) fn responding(response: EligibilityResponse) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Respond(response),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn requests(&self) -> Vec<CalculationRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl CalculationEngine for ScriptedEngine {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<EligibilityResponse, EngineError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail(message) => Err(EngineError::Unavailable(message.clone())),
        }
    }
}

pub(super) type TestSession = PrescreenerSession<ScriptedEngine, InMemorySurface>;

pub(super) fn session(engine: Arc<ScriptedEngine>) -> TestSession {
    PrescreenerSession::new(
        engine,
        InMemorySurface::new(),
        "NC",
        &JurisdictionDirectory::standard(),
    )
    .expect("NC is configured")
}
