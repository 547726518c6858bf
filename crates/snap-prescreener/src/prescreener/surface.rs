use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use serde::Serialize;

use super::domain::{Element, Region};

/// Page the prescreener draws on. Implementations own every DOM write; the
/// session only decides what to write.
pub trait FormSurface: Debug {
    fn show(&mut self, element: Element);
    fn hide(&mut self, element: Element);
    /// Replaces the inner HTML of a region.
    fn set_region_html(&mut self, region: Region, html: String);
    /// Replaces the inline error slot next to a field (`{field}_error_elem`).
    fn set_field_error(&mut self, field_name: &str, html: String);
    /// Toggles `aria-invalid` on a field or choice group.
    fn set_invalid(&mut self, field_name: &str, invalid: bool);
    fn focus(&mut self, field_name: &str);
    fn scroll_into_view(&mut self, region: Region);
}

/// One recorded surface write, in call order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "write", rename_all = "snake_case")]
pub enum SurfaceEvent {
    Show { element: Element },
    Hide { element: Element },
    RegionHtml { region: Region, html: String },
    FieldError { field: String, html: String },
    Invalid { field: String, invalid: bool },
    Focus { field: String },
    Scroll { region: Region },
}

/// Surface that keeps the page state in memory. Used by the CLI and tests.
#[derive(Debug, Clone)]
pub struct InMemorySurface {
    hidden: BTreeSet<Element>,
    regions: BTreeMap<Region, String>,
    field_errors: BTreeMap<String, String>,
    invalid: BTreeSet<String>,
    focused: Option<String>,
    events: Vec<SurfaceEvent>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self {
            hidden: Element::ALL
                .into_iter()
                .filter(|element| element.hidden_initially())
                .collect(),
            regions: BTreeMap::new(),
            field_errors: BTreeMap::new(),
            invalid: BTreeSet::new(),
            focused: None,
            events: Vec::new(),
        }
    }

    pub fn is_visible(&self, element: Element) -> bool {
        !self.hidden.contains(&element)
    }

    pub fn region_html(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Inline error HTML for a field; empty slots read as `None`.
    pub fn field_error(&self, field_name: &str) -> Option<&str> {
        self.field_errors
            .get(field_name)
            .map(String::as_str)
            .filter(|html| !html.is_empty())
    }

    pub fn is_invalid(&self, field_name: &str) -> bool {
        self.invalid.contains(field_name)
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Default for InMemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSurface for InMemorySurface {
    fn show(&mut self, element: Element) {
        self.hidden.remove(&element);
        self.events.push(SurfaceEvent::Show { element });
    }

    fn hide(&mut self, element: Element) {
        self.hidden.insert(element);
        self.events.push(SurfaceEvent::Hide { element });
    }

    fn set_region_html(&mut self, region: Region, html: String) {
        self.regions.insert(region, html.clone());
        self.events.push(SurfaceEvent::RegionHtml { region, html });
    }

    fn set_field_error(&mut self, field_name: &str, html: String) {
        self.field_errors.insert(field_name.to_string(), html.clone());
        self.events.push(SurfaceEvent::FieldError {
            field: field_name.to_string(),
            html,
        });
    }

    fn set_invalid(&mut self, field_name: &str, invalid: bool) {
        if invalid {
            self.invalid.insert(field_name.to_string());
        } else {
            self.invalid.remove(field_name);
        }
        self.events.push(SurfaceEvent::Invalid {
            field: field_name.to_string(),
            invalid,
        });
    }

    fn focus(&mut self, field_name: &str) {
        self.focused = Some(field_name.to_string());
        self.events.push(SurfaceEvent::Focus {
            field: field_name.to_string(),
        });
    }

    fn scroll_into_view(&mut self, region: Region) {
        self.events.push(SurfaceEvent::Scroll { region });
    }
}
