use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::content::ResultTab;
use super::domain::{Element, Region};
use super::engine::{CalculationEngine, CalculationRequest, EligibilityResponse};
use super::fields::{FieldKind, FieldRegistry};
use super::form::FormState;
use super::jurisdiction::{JurisdictionDirectory, JurisdictionOptions};
use super::render::{
    eligibility_explanation_to_html, error_summary_html, field_error_html,
    income_explanation_to_html, number_alert_html, response_errors_to_html, result_to_html,
    Announcement,
};
use super::snapshot::FormSnapshot;
use super::surface::FormSurface;
use super::validation::{
    number_field_valid, ValidationEngine, ValidationError, HOUSEHOLD_SIZE_ZERO,
};
use super::visibility::{VisibilityAction, VisibilityMachine};

/// Where the session is in the submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    Idle,
    Validating,
    ShowingErrors,
    Submitting,
    ShowingResults,
    ShowingServerErrors,
}

/// Result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCheck {
    pub errors: Vec<ValidationError>,
    pub snapshot: FormSnapshot,
}

impl FormCheck {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Client-side problems; nothing was sent.
    Invalid { errors: Vec<ValidationError> },
    /// The engine answered and the results are on screen.
    Estimated(EligibilityResponse),
    /// The engine failed or reported errors.
    ServerError { errors: Vec<String> },
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no application options configured for jurisdiction {0}")]
    UnknownJurisdiction(String),
}

/// One visitor's pass through the prescreener page.
///
/// The surface is expected to start in the initial page state: the form shown
/// and every optional element hidden. `on_submit` borrows the session
/// mutably, so submissions cannot overlap.
#[derive(Debug)]
pub struct PrescreenerSession<E, S> {
    registry: FieldRegistry,
    validator: ValidationEngine,
    visibility: VisibilityMachine,
    form: FormState,
    engine: Arc<E>,
    surface: S,
    jurisdiction: String,
    options: JurisdictionOptions,
    errors_shown: bool,
    phase: SubmissionPhase,
}

impl<E, S> PrescreenerSession<E, S>
where
    E: CalculationEngine + 'static,
    S: FormSurface,
{
    pub fn new(
        engine: Arc<E>,
        surface: S,
        jurisdiction: &str,
        directory: &JurisdictionDirectory,
    ) -> Result<Self, SessionError> {
        Self::with_registry(FieldRegistry::standard(), engine, surface, jurisdiction, directory)
    }

    pub fn with_registry(
        registry: FieldRegistry,
        engine: Arc<E>,
        surface: S,
        jurisdiction: &str,
        directory: &JurisdictionDirectory,
    ) -> Result<Self, SessionError> {
        let options = directory
            .get(jurisdiction)
            .cloned()
            .ok_or_else(|| SessionError::UnknownJurisdiction(jurisdiction.to_string()))?;

        Ok(Self {
            validator: ValidationEngine::new(&registry),
            visibility: VisibilityMachine::new(&registry),
            form: FormState::new(&registry),
            registry,
            engine,
            surface,
            jurisdiction: jurisdiction.to_ascii_uppercase(),
            options,
            errors_shown: false,
            phase: SubmissionPhase::Idle,
        })
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Set by the first submission that fails validation; never reset.
    pub fn errors_shown(&self) -> bool {
        self.errors_shown
    }

    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Validates a fresh snapshot, re-rendering the error presentation only
    /// once errors have been shown.
    pub fn check_form(&mut self) -> FormCheck {
        let check = self.capture_and_validate();
        if self.errors_shown {
            self.present_errors(&check.errors);
        }
        check
    }

    /// A text or number field changed.
    pub fn on_input(&mut self, field_id: &str, value: &str) -> FormCheck {
        self.form.set_value(field_id, value);

        if self.registry.kind(field_id) == Some(FieldKind::Numeric) {
            if number_field_valid(value) {
                self.surface.set_field_error(field_id, String::new());
                self.surface.set_invalid(field_id, false);
            } else {
                self.surface.set_field_error(field_id, number_alert_html());
                self.surface.set_invalid(field_id, true);
            }
        }

        self.check_form()
    }

    /// A radio button or select option was chosen.
    pub fn on_select(&mut self, group: &str, value: &str) -> FormCheck {
        self.form.select(group, value);

        let answers = self.form.capture();
        let actions = self.visibility.apply(group, value, &answers);
        self.apply_visibility(&actions);

        self.surface.set_field_error(group, String::new());
        self.surface.set_invalid(group, false);

        self.check_form()
    }

    /// Enters a full set of answers in form order, as a visitor would.
    /// Returns the keys that name no registered field; those are skipped.
    pub fn fill(&mut self, answers: &FormSnapshot) -> Vec<String> {
        let fields: Vec<(&'static str, FieldKind)> = self
            .registry
            .fields()
            .iter()
            .map(|spec| (spec.id, spec.kind))
            .collect();

        for (field_id, kind) in fields {
            let Some(value) = answers.get(field_id) else {
                continue;
            };
            if kind.is_choice() {
                self.on_select(field_id, value);
            } else {
                self.on_input(field_id, value);
            }
        }

        let unknown: Vec<String> = answers
            .iter()
            .filter(|(key, _)| self.registry.get(key).is_none())
            .map(|(key, _)| key.to_string())
            .collect();
        if !unknown.is_empty() {
            warn!(?unknown, "ignoring answers for unknown fields");
        }
        unknown
    }

    pub async fn on_submit(&mut self) -> SubmissionOutcome {
        self.phase = SubmissionPhase::Validating;
        let FormCheck { errors, snapshot } = self.capture_and_validate();

        if !errors.is_empty() {
            self.errors_shown = true;
            self.present_errors(&errors);
            self.surface.scroll_into_view(Region::ErrorsHeader);
            if let Some(field_id) = self.first_invalid_field(&errors) {
                self.surface.focus(field_id);
            }
            self.phase = SubmissionPhase::ShowingErrors;
            info!(errors = errors.len(), "submission blocked by validation errors");
            return SubmissionOutcome::Invalid { errors };
        }

        if self.errors_shown {
            self.present_errors(&[]);
        }

        self.phase = SubmissionPhase::Submitting;
        self.set_visible(Element::PrescreenerForm, false);

        let request = CalculationRequest::new(snapshot, &self.jurisdiction);
        info!(
            jurisdiction = %self.jurisdiction,
            fields = request.inputs.len(),
            "submitting answers to calculation engine"
        );

        match self.engine.calculate(&request).await {
            Ok(response) => self.present_response(response),
            Err(err) => {
                warn!(error = %err, "calculation engine call failed");
                self.present_server_errors(vec![err.to_string()])
            }
        }
    }

    /// Result tabs whose panel is currently revealed.
    pub fn visible_tabs(&self) -> Vec<ResultTab> {
        ResultTab::ALL
            .into_iter()
            .filter(|tab| self.form.is_visible(tab.panel()))
            .collect()
    }

    fn capture_and_validate(&self) -> FormCheck {
        let snapshot = self.form.capture();
        let errors = self.validator.validate(&snapshot);
        debug!(errors = errors.len(), "form validated");
        FormCheck { errors, snapshot }
    }

    fn apply_visibility(&mut self, actions: &[VisibilityAction]) {
        self.form.apply(actions);
        for action in actions {
            match *action {
                VisibilityAction::Reveal(element) => self.surface.show(element),
                VisibilityAction::Hide(element) => self.surface.hide(element),
                VisibilityAction::Clear(field_id) => {
                    self.surface.set_field_error(field_id, String::new());
                    self.surface.set_invalid(field_id, false);
                }
            }
        }
    }

    fn set_visible(&mut self, element: Element, visible: bool) {
        if visible {
            self.form.show(element);
            self.surface.show(element);
        } else {
            self.form.hide(element);
            self.surface.hide(element);
        }
    }

    /// Inline alerts first, then the summary, so assistive technology reads
    /// the summary last.
    fn present_errors(&mut self, errors: &[ValidationError]) {
        let failing: BTreeSet<&str> = errors.iter().map(|error| error.field_name).collect();

        for spec in self.registry.fields() {
            if !failing.contains(spec.id) {
                self.surface.set_field_error(spec.id, String::new());
                self.surface.set_invalid(spec.id, false);
            }
        }
        if !failing.contains(HOUSEHOLD_SIZE_ZERO) {
            self.surface.set_field_error(HOUSEHOLD_SIZE_ZERO, String::new());
        }

        for error in errors {
            self.surface.set_field_error(
                error.field_name,
                field_error_html(error.message, Announcement::Silent),
            );
            if self.registry.get(error.field_name).is_some() {
                self.surface.set_invalid(error.field_name, true);
            }
        }

        self.surface
            .set_region_html(Region::ErrorsHeader, error_summary_html(errors));
    }

    fn first_invalid_field(&self, errors: &[ValidationError]) -> Option<&'static str> {
        errors
            .iter()
            .filter_map(|error| {
                self.registry
                    .position(error.field_name)
                    .map(|position| (position, error.field_name))
            })
            .min()
            .map(|(_, field_id)| field_id)
    }

    fn present_response(&mut self, response: EligibilityResponse) -> SubmissionOutcome {
        if !response.is_ok() {
            warn!(errors = response.errors.len(), "calculation engine reported errors");
            return self.present_server_errors(response.errors);
        }

        let eligibility = match eligibility_explanation_to_html(&response.eligibility_factors) {
            Ok(html) => html,
            Err(err) => {
                warn!(error = %err, "unusable eligibility response");
                return self.present_server_errors(vec![err.to_string()]);
            }
        };

        self.surface
            .set_region_html(Region::Results, result_to_html(&response, &self.options));
        self.surface
            .set_region_html(Region::EligibilityExplanation, eligibility);
        self.surface.set_region_html(
            Region::IncomeExplanation,
            income_explanation_to_html(&response.eligibility_factors),
        );
        self.set_visible(Element::ResultsSection, true);
        self.set_visible(Element::ServerErrorMessages, false);

        self.phase = SubmissionPhase::ShowingResults;
        info!(
            eligible = response.estimated_eligibility,
            monthly_benefit = response.estimated_monthly_benefit,
            "eligibility estimate rendered"
        );
        SubmissionOutcome::Estimated(response)
    }

    /// Shows engine failures and brings the form back for another attempt.
    fn present_server_errors(&mut self, errors: Vec<String>) -> SubmissionOutcome {
        self.set_visible(Element::ResultsSection, false);
        self.surface
            .set_region_html(Region::EligibilityExplanation, String::new());
        self.surface
            .set_region_html(Region::IncomeExplanation, String::new());
        self.surface
            .set_region_html(Region::ServerErrorMessages, response_errors_to_html(&errors));
        self.set_visible(Element::ServerErrorMessages, true);
        self.set_visible(Element::PrescreenerForm, true);

        self.phase = SubmissionPhase::ShowingServerErrors;
        SubmissionOutcome::ServerError { errors }
    }
}
