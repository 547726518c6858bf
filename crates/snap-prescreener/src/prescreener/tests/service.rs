use super::common::*;
use crate::prescreener::content::ResultTab;
use crate::prescreener::domain::{Element, Region};
use crate::prescreener::engine::EligibilityResponse;
use crate::prescreener::fields::{
    ABAWD, ALL_CITIZENS, DISQUALIFIED, FELONY, HOUSEHOLD_SIZE, IDENTIFY_USER,
    INELIGIBLE_DISQUALIFIED, INELIGIBLE_IMMIGRATION, RESOURCES, WIC,
};
use crate::prescreener::jurisdiction::JurisdictionDirectory;
use crate::prescreener::service::{
    PrescreenerSession, SessionError, SubmissionOutcome, SubmissionPhase,
};
use crate::prescreener::surface::{FormSurface, InMemorySurface, SurfaceEvent};
use crate::prescreener::validation::HOUSEHOLD_SIZE_ZERO;

#[tokio::test]
async fn valid_answers_are_sent_with_jurisdiction_and_year() {
    let engine = ScriptedEngine::responding(eligible_response(200.0, Some(250.0)));
    let mut session = session(engine.clone());
    assert!(session.fill(&complete_answers()).is_empty());

    let outcome = session.on_submit().await;

    assert!(matches!(outcome, SubmissionOutcome::Estimated(_)));
    assert_eq!(session.phase(), SubmissionPhase::ShowingResults);

    let requests = engine.requests();
    assert_eq!(requests.len(), 1);
    let body = serde_json::to_value(&requests[0]).expect("request serializes");
    assert_eq!(body["state_or_territory"], "NC");
    assert_eq!(body["target_year"], "currentyr");
    assert_eq!(body[HOUSEHOLD_SIZE], "3");
    assert_eq!(body["rent_or_mortgage"], "");
    assert!(body.get(INELIGIBLE_IMMIGRATION).is_none(), "hidden question omitted");
    assert!(body.get(WIC).is_none(), "unselected choice omitted");

    let surface = session.surface();
    assert!(!surface.is_visible(Element::PrescreenerForm));
    assert!(surface.is_visible(Element::ResultsSection));
    assert!(!surface.is_visible(Element::ServerErrorMessages));
    assert!(surface
        .region_html(Region::Results)
        .is_some_and(|html| html.contains("an additional $50 per month")));
    assert!(surface
        .region_html(Region::EligibilityExplanation)
        .is_some_and(|html| html.contains("<h2>Your Estimated Monthly Benefit</h2>")));
    assert!(surface
        .region_html(Region::IncomeExplanation)
        .is_some_and(|html| html.starts_with("<h3>Gross Income</h3>")));
}

#[tokio::test]
async fn invalid_answers_never_reach_the_engine() {
    let engine = ScriptedEngine::responding(eligible_response(200.0, None));
    let mut session = session(engine.clone());
    session.fill(&complete_answers().without(FELONY).with(RESOURCES, ""));

    let outcome = session.on_submit().await;

    let SubmissionOutcome::Invalid { errors } = outcome else {
        panic!("expected validation errors, got {outcome:?}");
    };
    assert_eq!(
        errors.iter().map(|error| error.field_name).collect::<Vec<_>>(),
        vec![FELONY, RESOURCES]
    );
    assert!(engine.requests().is_empty());
    assert!(session.errors_shown());
    assert_eq!(session.phase(), SubmissionPhase::ShowingErrors);

    let surface = session.surface();
    assert!(surface.is_visible(Element::PrescreenerForm));
    assert!(surface.field_error(FELONY).is_some());
    assert!(surface.is_invalid(RESOURCES));
    assert_eq!(surface.focused(), Some(FELONY));
    assert!(surface
        .region_html(Region::ErrorsHeader)
        .is_some_and(|html| html.contains("there were 2 errors")));
}

#[tokio::test]
async fn field_errors_are_written_before_the_summary() {
    let mut session = session(ScriptedEngine::responding(eligible_response(1.0, None)));
    session.fill(&complete_answers().with(HOUSEHOLD_SIZE, ""));
    session.surface_mut().clear_events();

    session.on_submit().await;

    let events = session.surface().events();
    let household_error = events
        .iter()
        .position(|event| {
            matches!(event, SurfaceEvent::FieldError { field, html } if field == HOUSEHOLD_SIZE && !html.is_empty())
        })
        .expect("household size error written");
    let summary = events
        .iter()
        .position(|event| matches!(event, SurfaceEvent::RegionHtml { region: Region::ErrorsHeader, .. }))
        .expect("summary written");
    let scroll = events
        .iter()
        .position(|event| matches!(event, SurfaceEvent::Scroll { region: Region::ErrorsHeader }))
        .expect("summary scrolled into view");
    assert!(household_error < summary && summary < scroll);
}

#[tokio::test]
async fn errors_rerender_on_change_once_shown() {
    let mut session = session(ScriptedEngine::responding(eligible_response(1.0, None)));
    session.fill(&complete_answers().with(RESOURCES, ""));

    let before_submit = session.on_input(RESOURCES, "");
    assert!(!before_submit.is_valid());
    assert!(session.surface().region_html(Region::ErrorsHeader).is_none());

    session.on_submit().await;
    assert!(session.surface().field_error(RESOURCES).is_some());

    let check = session.on_input(RESOURCES, "250");
    assert!(check.is_valid());
    assert!(session.errors_shown(), "flag survives a clean pass");
    assert_eq!(session.surface().field_error(RESOURCES), None);
    assert!(!session.surface().is_invalid(RESOURCES));
    assert_eq!(session.surface().region_html(Region::ErrorsHeader), Some(""));
}

#[tokio::test]
async fn engine_failure_shows_server_errors_and_restores_the_form() {
    let engine = ScriptedEngine::failing("connection refused");
    let mut session = session(engine.clone());
    session.fill(&complete_answers());

    let outcome = session.on_submit().await;

    let SubmissionOutcome::ServerError { errors } = outcome else {
        panic!("expected server error, got {outcome:?}");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("connection refused"));
    assert_eq!(session.phase(), SubmissionPhase::ShowingServerErrors);

    let surface = session.surface();
    assert!(surface.is_visible(Element::ServerErrorMessages));
    assert!(surface.is_visible(Element::PrescreenerForm));
    assert!(!surface.is_visible(Element::ResultsSection));
    assert!(surface
        .region_html(Region::ServerErrorMessages)
        .is_some_and(|html| html.starts_with("<h1>Errors:</h1>")));
    assert!(surface.region_html(Region::ErrorsHeader).is_none(), "not merged with client errors");
}

#[tokio::test]
async fn engine_failure_blanks_earlier_explanations() {
    let mut session = session(ScriptedEngine::failing("connection refused"));
    session.fill(&complete_answers());
    session
        .surface_mut()
        .set_region_html(Region::EligibilityExplanation, "<h3>Gross Income</h3>".to_string());
    session
        .surface_mut()
        .set_region_html(Region::IncomeExplanation, "<h3>Net Income</h3>".to_string());

    session.on_submit().await;

    let surface = session.surface();
    assert_eq!(surface.region_html(Region::EligibilityExplanation), Some(""));
    assert_eq!(surface.region_html(Region::IncomeExplanation), Some(""));
}

#[tokio::test]
async fn engine_error_status_lists_each_message() {
    let response = EligibilityResponse::failure(vec![
        "Unknown state_or_territory.".to_string(),
        "Invalid target_year.".to_string(),
    ]);
    let mut session = session(ScriptedEngine::responding(response));
    session.fill(&complete_answers());

    let outcome = session.on_submit().await;

    assert!(matches!(outcome, SubmissionOutcome::ServerError { ref errors } if errors.len() == 2));
    let html = session
        .surface()
        .region_html(Region::ServerErrorMessages)
        .expect("server errors rendered");
    assert!(html.contains("<li>Unknown state_or_territory.</li><li>Invalid target_year.</li>"));
}

#[tokio::test]
async fn response_without_amount_factor_is_a_server_error() {
    let mut response = eligible_response(100.0, None);
    response
        .eligibility_factors
        .retain(|factor| factor.kind != crate::prescreener::engine::FactorKind::Amount);
    let mut session = session(ScriptedEngine::responding(response));
    session.fill(&complete_answers());

    let outcome = session.on_submit().await;

    assert!(matches!(outcome, SubmissionOutcome::ServerError { .. }));
    assert!(!session.surface().is_visible(Element::ResultsSection));
}

#[test]
fn number_fields_get_a_live_alert_while_typing() {
    let mut session = session(ScriptedEngine::responding(eligible_response(1.0, None)));

    session.on_input(HOUSEHOLD_SIZE, "4a");
    let alert = session
        .surface()
        .field_error(HOUSEHOLD_SIZE)
        .expect("alert shown");
    assert!(alert.contains(r#"role="alert" aria-live="assertive""#));
    assert!(session.surface().is_invalid(HOUSEHOLD_SIZE));

    session.on_input(HOUSEHOLD_SIZE, "4");
    assert_eq!(session.surface().field_error(HOUSEHOLD_SIZE), None);
    assert!(!session.surface().is_invalid(HOUSEHOLD_SIZE));
}

#[tokio::test]
async fn selecting_a_choice_clears_its_error() {
    let mut session = session(ScriptedEngine::responding(eligible_response(1.0, None)));
    session.fill(&complete_answers().without(ABAWD));
    session.on_submit().await;
    assert!(session.surface().is_invalid(ABAWD));

    session.on_select(ABAWD, "true");

    assert_eq!(session.surface().field_error(ABAWD), None);
    assert!(!session.surface().is_invalid(ABAWD));
    assert!(session.surface().is_visible(Element::AbawdInfoBox));
}

#[test]
fn hidden_follow_ups_are_cleared_before_capture() {
    let mut session = session(ScriptedEngine::responding(eligible_response(1.0, None)));
    session.on_select(DISQUALIFIED, "true");
    session.on_input(INELIGIBLE_DISQUALIFIED, "2");
    assert_eq!(session.check_form().snapshot.get(INELIGIBLE_DISQUALIFIED), Some("2"));

    session.on_select(FELONY, "false");
    session.on_select(DISQUALIFIED, "false");

    let check = session.check_form();
    assert_eq!(check.snapshot.get(INELIGIBLE_DISQUALIFIED), None);
    assert_eq!(session.form().value(INELIGIBLE_DISQUALIFIED), Some(""));
    assert!(!session.surface().is_visible(Element::IneligibleDisqualifiedQuestion));
}

#[test]
fn no_lawful_members_is_flagged_while_disqualified_count_is_hidden() {
    let mut session = session(ScriptedEngine::responding(eligible_response(1.0, None)));
    session.fill(
        &complete_answers()
            .with(ALL_CITIZENS, "false")
            .with(INELIGIBLE_IMMIGRATION, "0"),
    );

    let check = session.check_form();
    assert_eq!(check.snapshot.get(INELIGIBLE_IMMIGRATION), Some("0"));
    assert_eq!(check.snapshot.get(INELIGIBLE_DISQUALIFIED), None);
    let names: Vec<&str> = check.errors.iter().map(|error| error.field_name).collect();
    assert_eq!(names, vec![HOUSEHOLD_SIZE_ZERO]);
}

#[test]
fn visible_tabs_track_revealed_panels() {
    let mut session = session(ScriptedEngine::responding(eligible_response(1.0, None)));
    assert!(session.visible_tabs().is_empty());

    session.on_select(IDENTIFY_USER, "advocate");
    session.on_select(ALL_CITIZENS, "false");
    session.on_select(WIC, "true");

    assert_eq!(
        session.visible_tabs(),
        vec![ResultTab::Wic, ResultTab::Immigration, ResultTab::AdvocateInfo]
    );

    session.on_select(IDENTIFY_USER, "general_public");
    assert!(session.visible_tabs().contains(&ResultTab::KnowYourRights));
    assert!(!session.visible_tabs().contains(&ResultTab::AdvocateInfo));
}

#[test]
fn fill_reports_unknown_fields() {
    let mut session = session(ScriptedEngine::responding(eligible_response(1.0, None)));

    let unknown = session.fill(&complete_answers().with("favorite_color", "green"));

    assert_eq!(unknown, vec!["favorite_color".to_string()]);
    assert!(session.check_form().is_valid());
}

#[test]
fn unknown_jurisdiction_is_rejected() {
    let result = PrescreenerSession::new(
        ScriptedEngine::responding(eligible_response(1.0, None)),
        InMemorySurface::new(),
        "VA",
        &JurisdictionDirectory::standard(),
    );

    assert!(matches!(result, Err(SessionError::UnknownJurisdiction(code)) if code == "VA"));
}
