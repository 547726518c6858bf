use std::collections::{BTreeMap, BTreeSet};

use super::domain::Element;
use super::fields::FieldRegistry;
use super::snapshot::FormSnapshot;
use super::visibility::VisibilityAction;

/// Current answers and element visibility for one prescreener page.
#[derive(Debug, Clone)]
pub struct FormState {
    registry: FieldRegistry,
    values: BTreeMap<String, String>,
    hidden: BTreeSet<Element>,
}

impl FormState {
    pub fn new(registry: &FieldRegistry) -> Self {
        Self {
            registry: registry.clone(),
            values: BTreeMap::new(),
            hidden: Element::ALL
                .into_iter()
                .filter(|element| element.hidden_initially())
                .collect(),
        }
    }

    pub fn set_value(&mut self, field_id: &str, value: &str) {
        self.values.insert(field_id.to_string(), value.to_string());
    }

    /// Selects `value` within a choice group, replacing any earlier selection.
    pub fn select(&mut self, group: &str, value: &str) {
        self.set_value(group, value);
    }

    /// Blanks a text input or deselects a choice.
    pub fn clear(&mut self, field_id: &str) {
        match self.registry.kind(field_id) {
            Some(kind) if kind.is_choice() => {
                self.values.remove(field_id);
            }
            _ => {
                self.values.insert(field_id.to_string(), String::new());
            }
        }
    }

    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.values.get(field_id).map(String::as_str)
    }

    pub fn is_visible(&self, element: Element) -> bool {
        !self.hidden.contains(&element)
    }

    pub fn show(&mut self, element: Element) {
        self.hidden.remove(&element);
    }

    pub fn hide(&mut self, element: Element) {
        self.hidden.insert(element);
    }

    pub fn apply(&mut self, actions: &[VisibilityAction]) {
        for action in actions {
            match *action {
                VisibilityAction::Reveal(element) => self.show(element),
                VisibilityAction::Hide(element) => self.hide(element),
                VisibilityAction::Clear(field_id) => self.clear(field_id),
            }
        }
    }

    /// Values of every registered field as the form reports them.
    ///
    /// Text inputs always report (blank when untouched); choices report only
    /// once selected. Fields inside a hidden question are left out.
    pub fn capture(&self) -> FormSnapshot {
        self.registry
            .fields()
            .iter()
            .filter(|spec| spec.container.map_or(true, |element| self.is_visible(element)))
            .filter_map(|spec| match self.value(spec.id) {
                Some(value) => Some((spec.id, value.to_string())),
                None if spec.kind.is_choice() => None,
                None => Some((spec.id, String::new())),
            })
            .collect()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&FieldRegistry::standard())
    }
}
