use crate::prescreener::domain::{Element, NO, YES};
use crate::prescreener::fields::{
    ABAWD, ALL_CITIZENS, DISQUALIFIED, ELDERLY_OR_DISABLED, FELONY, IDENTIFY_USER,
    INELIGIBLE_DISQUALIFIED, INELIGIBLE_IMMIGRATION, MEDICAL_EXPENSES, WIC,
};
use crate::prescreener::form::FormState;
use crate::prescreener::snapshot::FormSnapshot;
use crate::prescreener::visibility::{
    disqualified_count_visible, VisibilityAction, VisibilityMachine,
};

fn answered(pairs: &[(&str, &str)]) -> FormSnapshot {
    pairs.iter().copied().collect()
}

/// Applies a trigger to a form the way the session does.
fn trigger(form: &mut FormState, field: &str, value: &str) -> Vec<VisibilityAction> {
    form.select(field, value);
    let actions = VisibilityMachine::default().apply(field, value, &form.capture());
    form.apply(&actions);
    actions
}

#[test]
fn citizenship_no_reveals_immigration_follow_ups() {
    let mut form = FormState::default();
    form.show(Element::IneligibleImmigrationQuestion);
    form.set_value(INELIGIBLE_IMMIGRATION, "2");
    form.hide(Element::IneligibleImmigrationQuestion);

    let actions = trigger(&mut form, ALL_CITIZENS, NO);

    assert!(actions.contains(&VisibilityAction::Clear(INELIGIBLE_IMMIGRATION)));
    for element in [
        Element::CitizenshipInfoBox,
        Element::ImmigrationResults,
        Element::IneligibleImmigrationQuestion,
    ] {
        assert!(form.is_visible(element), "{element:?} revealed");
    }
    assert_eq!(form.capture().get(INELIGIBLE_IMMIGRATION), Some(""));

    trigger(&mut form, ALL_CITIZENS, YES);
    assert!(!form.is_visible(Element::CitizenshipInfoBox));
    assert!(!form.is_visible(Element::ImmigrationResults));
    assert!(!form.is_visible(Element::IneligibleImmigrationQuestion));
    assert_eq!(form.capture().get(INELIGIBLE_IMMIGRATION), None);
}

#[test]
fn elderly_toggle_clears_medical_expenses_both_ways() {
    let mut form = FormState::default();
    trigger(&mut form, ELDERLY_OR_DISABLED, YES);
    assert!(form.is_visible(Element::MedicalExpensesQuestion));

    form.set_value(MEDICAL_EXPENSES, "300");
    let actions = trigger(&mut form, ELDERLY_OR_DISABLED, YES);
    assert!(actions.contains(&VisibilityAction::Clear(MEDICAL_EXPENSES)));
    assert_eq!(form.value(MEDICAL_EXPENSES), Some(""));

    form.set_value(MEDICAL_EXPENSES, "300");
    trigger(&mut form, ELDERLY_OR_DISABLED, NO);
    assert!(!form.is_visible(Element::MedicalExpensesQuestion));
    assert_eq!(form.value(MEDICAL_EXPENSES), Some(""));
}

#[test]
fn abawd_and_wic_toggle_their_panels_without_clearing() {
    let machine = VisibilityMachine::default();

    let abawd = machine.apply(ABAWD, YES, &FormSnapshot::default());
    assert_eq!(
        abawd,
        vec![
            VisibilityAction::Reveal(Element::AbawdInfoBox),
            VisibilityAction::Reveal(Element::AbawdResults),
        ]
    );

    let wic = machine.apply(WIC, NO, &FormSnapshot::default());
    assert_eq!(
        wic,
        vec![
            VisibilityAction::Hide(Element::WicInfoBox),
            VisibilityAction::Hide(Element::WicResults),
        ]
    );
}

#[test]
fn disqualification_panel_combinations() {
    let cases = [
        (NO, NO, false),
        (YES, NO, true),
        (NO, YES, true),
        (YES, YES, true),
    ];

    for (felony, disqualified, visible) in cases {
        let answers = answered(&[(FELONY, felony), (DISQUALIFIED, disqualified)]);
        assert_eq!(
            disqualified_count_visible(&answers),
            visible,
            "felony={felony} disqualified={disqualified}"
        );

        let mut form = FormState::default();
        trigger(&mut form, FELONY, felony);
        trigger(&mut form, DISQUALIFIED, disqualified);
        assert_eq!(form.is_visible(Element::IneligibleDisqualifiedQuestion), visible);
    }
}

#[test]
fn hiding_the_disqualification_panel_clears_the_count() {
    let mut form = FormState::default();
    trigger(&mut form, FELONY, YES);
    form.set_value(INELIGIBLE_DISQUALIFIED, "1");

    trigger(&mut form, FELONY, NO);
    assert!(form.is_visible(Element::IneligibleDisqualifiedQuestion));
    assert_eq!(form.value(INELIGIBLE_DISQUALIFIED), Some("1"));

    let actions = trigger(&mut form, DISQUALIFIED, NO);
    assert!(actions.contains(&VisibilityAction::Hide(Element::IneligibleDisqualifiedQuestion)));
    assert_eq!(form.value(INELIGIBLE_DISQUALIFIED), Some(""));
    assert_eq!(form.capture().get(INELIGIBLE_DISQUALIFIED), None);
}

#[test]
fn a_yes_answer_starts_the_count_fresh() {
    let machine = VisibilityMachine::default();
    let answers = answered(&[(DISQUALIFIED, YES)]);

    let actions = machine.apply(FELONY, YES, &answers);

    assert_eq!(
        actions,
        vec![
            VisibilityAction::Reveal(Element::IneligibleDisqualifiedQuestion),
            VisibilityAction::Clear(INELIGIBLE_DISQUALIFIED),
        ]
    );
}

#[test]
fn identity_selects_advocate_or_rights_panel() {
    let mut form = FormState::default();

    for identity in ["advocate", "legal_aid_partner"] {
        trigger(&mut form, IDENTIFY_USER, identity);
        assert!(form.is_visible(Element::AdvocateResults));
        assert!(!form.is_visible(Element::KnowYourRightsResults));
    }

    trigger(&mut form, IDENTIFY_USER, "general_public");
    assert!(!form.is_visible(Element::AdvocateResults));
    assert!(form.is_visible(Element::KnowYourRightsResults));

    let unknown = VisibilityMachine::default().apply(IDENTIFY_USER, "robot", &FormSnapshot::default());
    assert!(unknown.is_empty());
}

#[test]
fn applying_a_trigger_twice_matches_applying_it_once() {
    let triggers = [
        (ALL_CITIZENS, NO),
        (ALL_CITIZENS, YES),
        (ELDERLY_OR_DISABLED, YES),
        (ABAWD, YES),
        (WIC, NO),
        (FELONY, NO),
        (DISQUALIFIED, YES),
        (IDENTIFY_USER, "advocate"),
    ];

    for (field, value) in triggers {
        let mut once = FormState::default();
        trigger(&mut once, field, value);

        let mut twice = FormState::default();
        trigger(&mut twice, field, value);
        trigger(&mut twice, field, value);

        for element in Element::ALL {
            assert_eq!(
                once.is_visible(element),
                twice.is_visible(element),
                "{field}={value} changed {element:?} on repeat"
            );
        }
        assert_eq!(once.capture(), twice.capture(), "{field}={value}");
    }
}
