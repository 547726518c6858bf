//! Conditional follow-up questions and optional result panels.
//!
//! The machine holds no answers of its own. Each call receives the trigger and
//! the current answers and returns the effects; the caller owns the resulting
//! visibility map. Re-applying a trigger produces the same effects, so
//! repeated events are harmless.

use serde::Serialize;
use tracing::debug;

use super::domain::{Element, Identity, NO, YES};
use super::fields::{
    FieldRegistry, ABAWD, ALL_CITIZENS, DISQUALIFIED, ELDERLY_OR_DISABLED, FELONY,
    IDENTIFY_USER, INELIGIBLE_DISQUALIFIED, WIC,
};
use super::snapshot::FormSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Reveal,
    Hide,
}

/// Single declarative trigger → target rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityRule {
    pub trigger_field: &'static str,
    pub trigger_value: &'static str,
    pub effect: Effect,
    pub target: Element,
    /// Blank the fields inside `target` whenever the rule fires.
    pub clear_target_value: bool,
}

impl VisibilityRule {
    const fn new(
        trigger_field: &'static str,
        trigger_value: &'static str,
        effect: Effect,
        target: Element,
        clear_target_value: bool,
    ) -> Self {
        Self {
            trigger_field,
            trigger_value,
            effect,
            target,
            clear_target_value,
        }
    }

    fn matches(&self, trigger_field: &str, trigger_value: &str) -> bool {
        self.trigger_field == trigger_field && self.trigger_value == trigger_value
    }
}

/// Effect to carry out on the form in response to an answer change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum VisibilityAction {
    Reveal(Element),
    Hide(Element),
    Clear(&'static str),
}

const STANDARD_RULES: [VisibilityRule; 16] = {
    use Effect::{Hide, Reveal};
    use Element::*;
    [
        VisibilityRule::new(ALL_CITIZENS, NO, Reveal, CitizenshipInfoBox, false),
        VisibilityRule::new(ALL_CITIZENS, NO, Reveal, ImmigrationResults, false),
        VisibilityRule::new(ALL_CITIZENS, NO, Reveal, IneligibleImmigrationQuestion, true),
        VisibilityRule::new(ALL_CITIZENS, YES, Hide, CitizenshipInfoBox, false),
        VisibilityRule::new(ALL_CITIZENS, YES, Hide, ImmigrationResults, false),
        VisibilityRule::new(ALL_CITIZENS, YES, Hide, IneligibleImmigrationQuestion, true),
        VisibilityRule::new(ABAWD, YES, Reveal, AbawdInfoBox, false),
        VisibilityRule::new(ABAWD, YES, Reveal, AbawdResults, false),
        VisibilityRule::new(ABAWD, NO, Hide, AbawdInfoBox, false),
        VisibilityRule::new(ABAWD, NO, Hide, AbawdResults, false),
        VisibilityRule::new(ELDERLY_OR_DISABLED, YES, Reveal, MedicalExpensesQuestion, true),
        VisibilityRule::new(ELDERLY_OR_DISABLED, NO, Hide, MedicalExpensesQuestion, true),
        VisibilityRule::new(WIC, YES, Reveal, WicInfoBox, false),
        VisibilityRule::new(WIC, YES, Reveal, WicResults, false),
        VisibilityRule::new(WIC, NO, Hide, WicInfoBox, false),
        VisibilityRule::new(WIC, NO, Hide, WicResults, false),
    ]
};

/// The disqualified-member count is asked unless both the drug-felony and the
/// program-disqualification questions are answered "no".
pub fn disqualified_count_visible(answers: &FormSnapshot) -> bool {
    !(answers.get(FELONY) == Some(NO) && answers.get(DISQUALIFIED) == Some(NO))
}

/// Advocate panel visibility for the selected identity; `None` leaves it alone.
/// The know-your-rights panel is always the complement.
pub fn advocate_results_visible(answers: &FormSnapshot) -> Option<bool> {
    answers
        .get(IDENTIFY_USER)
        .and_then(Identity::from_value)
        .map(Identity::sees_advocate_results)
}

#[derive(Debug, Clone)]
pub struct VisibilityMachine {
    rules: Vec<VisibilityRule>,
    registry: FieldRegistry,
}

impl VisibilityMachine {
    pub fn new(registry: &FieldRegistry) -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
            registry: registry.clone(),
        }
    }

    pub fn rules(&self) -> &[VisibilityRule] {
        &self.rules
    }

    /// Effects of `trigger_field` changing to `trigger_value`, given the other
    /// current answers. `answers` may or may not already hold the new value.
    pub fn apply(
        &self,
        trigger_field: &str,
        trigger_value: &str,
        answers: &FormSnapshot,
    ) -> Vec<VisibilityAction> {
        let answers = answers.with(trigger_field, trigger_value);
        let mut actions = Vec::new();

        for rule in self
            .rules
            .iter()
            .filter(|rule| rule.matches(trigger_field, trigger_value))
        {
            actions.push(match rule.effect {
                Effect::Reveal => VisibilityAction::Reveal(rule.target),
                Effect::Hide => VisibilityAction::Hide(rule.target),
            });
            if rule.clear_target_value {
                actions.extend(self.fields_inside(rule.target).map(VisibilityAction::Clear));
            }
        }

        match trigger_field {
            FELONY | DISQUALIFIED => {
                let target = Element::IneligibleDisqualifiedQuestion;
                if disqualified_count_visible(&answers) {
                    actions.push(VisibilityAction::Reveal(target));
                    if trigger_value == YES {
                        actions.push(VisibilityAction::Clear(INELIGIBLE_DISQUALIFIED));
                    }
                } else {
                    actions.push(VisibilityAction::Hide(target));
                    actions.push(VisibilityAction::Clear(INELIGIBLE_DISQUALIFIED));
                }
            }
            IDENTIFY_USER => {
                if let Some(advocate) = advocate_results_visible(&answers) {
                    let (shown, hidden) = if advocate {
                        (Element::AdvocateResults, Element::KnowYourRightsResults)
                    } else {
                        (Element::KnowYourRightsResults, Element::AdvocateResults)
                    };
                    actions.push(VisibilityAction::Reveal(shown));
                    actions.push(VisibilityAction::Hide(hidden));
                }
            }
            _ => {}
        }

        debug!(
            field = trigger_field,
            value = trigger_value,
            effects = actions.len(),
            "visibility rules applied"
        );
        actions
    }

    fn fields_inside(&self, element: Element) -> impl Iterator<Item = &'static str> + '_ {
        self.registry
            .fields()
            .iter()
            .filter(move |spec| spec.container == Some(element))
            .map(|spec| spec.id)
    }
}

impl Default for VisibilityMachine {
    fn default() -> Self {
        Self::new(&FieldRegistry::standard())
    }
}
