mod rules;

pub use rules::{
    adjusted_household_size, coerce_number, number_field_valid, HOUSEHOLD_SIZE_ZERO,
    HOUSEHOLD_SIZE_ZERO_MESSAGE, NUMBER_FORMAT_MESSAGE,
};

use super::fields::FieldRegistry;
use super::snapshot::FormSnapshot;
use rules::Check;
use serde::Serialize;

/// A single client-side problem with the submitted answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Field id, choice-group name, or `household_size_zero`.
    pub field_name: &'static str,
    pub message: &'static str,
}

/// Stateless validator over form snapshots.
///
/// Every check runs on every pass; errors come back in presentation order.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    checks: Vec<Check>,
}

impl ValidationEngine {
    pub fn new(registry: &FieldRegistry) -> Self {
        Self {
            checks: rules::plan(registry),
        }
    }

    pub fn validate(&self, snapshot: &FormSnapshot) -> Vec<ValidationError> {
        self.checks
            .iter()
            .filter_map(|check| rules::run(*check, snapshot))
            .collect()
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(&FieldRegistry::standard())
    }
}
