//! SNAP eligibility prescreener: field registry, validation, conditional
//! questions, submission to the calculation engine, and results rendering.

pub mod content;
pub mod domain;
pub mod engine;
pub mod fields;
pub mod form;
pub mod jurisdiction;
pub mod render;
pub mod service;
pub mod snapshot;
pub mod surface;
pub mod validation;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use content::ResultTab;
pub use domain::{Element, Identity, Region, NO, YES};
pub use engine::{
    CalculationEngine, CalculationRequest, EligibilityFactor, EligibilityResponse, EngineError,
    FactorKind, HttpCalculationEngine, ResponseStatus, CURRENT_TARGET_YEAR,
};
pub use fields::{FieldKind, FieldRegistry, FieldSpec};
pub use form::FormState;
pub use jurisdiction::{JurisdictionDirectory, JurisdictionError, JurisdictionOptions, ResourceLink};
pub use render::RenderError;
pub use service::{
    FormCheck, PrescreenerSession, SessionError, SubmissionOutcome, SubmissionPhase,
};
pub use snapshot::FormSnapshot;
pub use surface::{FormSurface, InMemorySurface, SurfaceEvent};
pub use validation::{ValidationEngine, ValidationError};
pub use visibility::{Effect, VisibilityAction, VisibilityMachine, VisibilityRule};
