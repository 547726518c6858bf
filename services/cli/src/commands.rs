use crate::infra::{load_answers, load_directory, load_response, FixedResponseEngine, OfflineEngine};
use clap::{Args, ValueEnum};
use serde::Serialize;
use snap_prescreener::config::{normalize_jurisdiction, AppConfig};
use snap_prescreener::error::AppError;
use snap_prescreener::prescreener::render::{
    eligibility_explanation_to_html, income_explanation_to_html, response_errors_to_html,
    result_to_html,
};
use snap_prescreener::prescreener::{
    CalculationEngine, FormSnapshot, HttpCalculationEngine, InMemorySurface,
    JurisdictionDirectory, PrescreenerSession, Region, SessionError, SubmissionOutcome,
    SubmissionPhase, ValidationError,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// JSON object of answers keyed by field id
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct SubmitArgs {
    /// JSON object of answers keyed by field id
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Override the configured calculation engine URL
    #[arg(long, conflicts_with = "response")]
    pub(crate) engine_url: Option<String>,
    /// Answer from a saved engine response instead of calling the engine
    #[arg(long)]
    pub(crate) response: Option<PathBuf>,
    /// Override the configured jurisdiction code
    #[arg(long)]
    pub(crate) jurisdiction: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Saved engine response (JSON)
    #[arg(long)]
    pub(crate) response: PathBuf,
    /// Override the configured jurisdiction code
    #[arg(long)]
    pub(crate) jurisdiction: Option<String>,
    /// Which results section to print
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub(crate) section: Section,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
    Results,
    Eligibility,
    Income,
    All,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    valid: bool,
    errors: Vec<ValidationError>,
    answers: FormSnapshot,
    visible_tabs: Vec<&'static str>,
    unknown_fields: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SubmitReport {
    outcome: &'static str,
    phase: SubmissionPhase,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    validation_errors: Vec<ValidationError>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    server_errors: Vec<String>,
    regions: BTreeMap<&'static str, String>,
    visible_tabs: Vec<&'static str>,
    unknown_fields: Vec<String>,
}

pub(crate) fn run_check(config: &AppConfig, args: CheckArgs) -> Result<(), AppError> {
    let answers = load_answers(&args.answers)?;
    let directory = load_directory(&config.prescreener)?;
    let mut session = PrescreenerSession::new(
        Arc::new(OfflineEngine),
        InMemorySurface::new(),
        &config.prescreener.jurisdiction,
        &directory,
    )?;

    let unknown_fields = session.fill(&answers);
    let check = session.check_form();
    info!(errors = check.errors.len(), "answers checked");

    let report = CheckReport {
        valid: check.is_valid(),
        errors: check.errors,
        answers: check.snapshot,
        visible_tabs: session.visible_tabs().into_iter().map(|tab| tab.key()).collect(),
        unknown_fields,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) async fn run_submit(config: &AppConfig, args: SubmitArgs) -> Result<(), AppError> {
    let answers = load_answers(&args.answers)?;
    let directory = load_directory(&config.prescreener)?;
    let jurisdiction = match &args.jurisdiction {
        Some(raw) => normalize_jurisdiction(raw)?,
        None => config.prescreener.jurisdiction.clone(),
    };

    let report = match (&args.response, &args.engine_url) {
        (Some(path), _) => {
            let engine = FixedResponseEngine::new(load_response(path)?);
            submit_with(Arc::new(engine), &jurisdiction, &directory, &answers).await?
        }
        (None, Some(url)) => {
            let engine = HttpCalculationEngine::new(&config.engine.with_endpoint(url)?)?;
            submit_with(Arc::new(engine), &jurisdiction, &directory, &answers).await?
        }
        (None, None) => {
            let engine = HttpCalculationEngine::new(&config.engine)?;
            submit_with(Arc::new(engine), &jurisdiction, &directory, &answers).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn submit_with<E>(
    engine: Arc<E>,
    jurisdiction: &str,
    directory: &JurisdictionDirectory,
    answers: &FormSnapshot,
) -> Result<SubmitReport, SessionError>
where
    E: CalculationEngine + 'static,
{
    let mut session =
        PrescreenerSession::new(engine, InMemorySurface::new(), jurisdiction, directory)?;
    let unknown_fields = session.fill(answers);
    let outcome = session.on_submit().await;

    let (label, validation_errors, server_errors) = match outcome {
        SubmissionOutcome::Invalid { errors } => ("invalid", errors, Vec::new()),
        SubmissionOutcome::Estimated(_) => ("estimated", Vec::new(), Vec::new()),
        SubmissionOutcome::ServerError { errors } => ("server_error", Vec::new(), errors),
    };

    let surface = session.surface();
    let regions = Region::ALL
        .into_iter()
        .filter_map(|region| {
            surface
                .region_html(region)
                .filter(|html| !html.is_empty())
                .map(|html| (region.id(), html.to_string()))
        })
        .collect();

    Ok(SubmitReport {
        outcome: label,
        phase: session.phase(),
        validation_errors,
        server_errors,
        regions,
        visible_tabs: session.visible_tabs().into_iter().map(|tab| tab.key()).collect(),
        unknown_fields,
    })
}

pub(crate) fn run_render(config: &AppConfig, args: RenderArgs) -> Result<(), AppError> {
    let response = load_response(&args.response)?;
    let directory = load_directory(&config.prescreener)?;
    let jurisdiction = match &args.jurisdiction {
        Some(raw) => normalize_jurisdiction(raw)?,
        None => config.prescreener.jurisdiction.clone(),
    };
    let options = directory
        .get(&jurisdiction)
        .ok_or_else(|| SessionError::UnknownJurisdiction(jurisdiction.clone()))?;

    if !response.is_ok() {
        println!("{}", response_errors_to_html(&response.errors));
        return Ok(());
    }

    if matches!(args.section, Section::Results | Section::All) {
        println!("{}", result_to_html(&response, options));
    }
    if matches!(args.section, Section::Eligibility | Section::All) {
        println!(
            "{}",
            eligibility_explanation_to_html(&response.eligibility_factors)?
        );
    }
    if matches!(args.section, Section::Income | Section::All) {
        println!("{}", income_explanation_to_html(&response.eligibility_factors));
    }
    Ok(())
}
