use serde::Serialize;

use super::domain::Element;

pub const IDENTIFY_USER: &str = "identify__user";
pub const HOUSEHOLD_SIZE: &str = "household_size";
pub const ALL_CITIZENS: &str = "all_citizens_question";
pub const INELIGIBLE_IMMIGRATION: &str = "ineligible_immigration";
pub const ELDERLY_OR_DISABLED: &str = "household_includes_elderly_or_disabled";
pub const FELONY: &str = "felony_question";
pub const ABAWD: &str = "household_includes_abawd";
pub const DISQUALIFIED: &str = "disqualified_question";
pub const INELIGIBLE_DISQUALIFIED: &str = "ineligible_disqualified";
pub const WIC: &str = "WIC_question";
pub const MONTHLY_JOB_INCOME: &str = "monthly_job_income";
pub const MONTHLY_NON_JOB_INCOME: &str = "monthly_non_job_income";
pub const RESOURCES: &str = "resources";
pub const DEPENDENT_CARE_COSTS: &str = "dependent_care_costs";
pub const MEDICAL_EXPENSES: &str = "medical_expenses_for_elderly_or_disabled";
pub const CHILD_SUPPORT: &str = "court_ordered_child_support_payments";
pub const RENT_OR_MORTGAGE: &str = "rent_or_mortgage";
pub const HOMEOWNERS_INSURANCE_AND_TAXES: &str = "homeowners_insurance_and_taxes";
pub const UTILITY_ALLOWANCE: &str = "utility_allowance";
pub const UTILITY_COSTS: &str = "utility_costs";

/// How a field is captured from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Text input expected to hold a number.
    Numeric,
    Text,
    /// A select element with one chosen option.
    SingleChoice,
    /// A radio group addressed by its shared name.
    ChoiceGroup,
}

impl FieldKind {
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::SingleChoice | Self::ChoiceGroup)
    }
}

/// Static description of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Message shown when a required field is left empty.
    pub prompt: Option<&'static str>,
    /// Question element that hides this field, if any.
    pub container: Option<Element>,
}

impl FieldSpec {
    fn optional(id: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            kind,
            required: false,
            prompt: None,
            container: None,
        }
    }

    fn required(id: &'static str, kind: FieldKind, prompt: &'static str) -> Self {
        Self {
            id,
            kind,
            required: true,
            prompt: Some(prompt),
            container: None,
        }
    }

    fn inside(mut self, container: Element) -> Self {
        self.container = Some(container);
        self
    }
}

/// Canonical, ordered list of prescreener fields. Order is form order.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<FieldSpec>,
}

impl FieldRegistry {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn standard() -> Self {
        use FieldKind::{ChoiceGroup, Numeric, SingleChoice};

        Self::new(vec![
            FieldSpec::required(
                IDENTIFY_USER,
                ChoiceGroup,
                "Before We Begin: Please indicate why you are using this calculator.",
            ),
            FieldSpec::required(HOUSEHOLD_SIZE, Numeric, "Step 1: Enter a household size."),
            FieldSpec::required(
                ALL_CITIZENS,
                ChoiceGroup,
                "Step 1: Select \"yes\" or \"no\" if everyone on the application is a U.S. citizen",
            ),
            FieldSpec::optional(INELIGIBLE_IMMIGRATION, Numeric)
                .inside(Element::IneligibleImmigrationQuestion),
            FieldSpec::required(
                ELDERLY_OR_DISABLED,
                ChoiceGroup,
                "Step 1: Select \"yes\" or \"no\" if your household includes someone who is 60 or older, or someone who is disabled.",
            ),
            FieldSpec::required(
                FELONY,
                ChoiceGroup,
                "Step 1: Select \"yes\" or \"no\" if anyone in the household has been convicted of a drug-related felony since August 23, 1996.",
            ),
            FieldSpec::required(
                ABAWD,
                ChoiceGroup,
                "Step 1: Select \"yes\" or \"no\" if someone in your household is between ages 18-49.",
            ),
            FieldSpec::required(
                DISQUALIFIED,
                ChoiceGroup,
                "Step 1: Select \"yes\" or \"no\" if anyone in the household is currently disqualified.",
            ),
            FieldSpec::optional(INELIGIBLE_DISQUALIFIED, Numeric)
                .inside(Element::IneligibleDisqualifiedQuestion),
            FieldSpec::optional(WIC, ChoiceGroup),
            FieldSpec::required(
                MONTHLY_JOB_INCOME,
                Numeric,
                "Step 2: Enter monthly household pre-tax income from jobs or self-employment",
            ),
            FieldSpec::required(
                MONTHLY_NON_JOB_INCOME,
                Numeric,
                "Step 2: Enter monthly household income from other sources.",
            ),
            FieldSpec::required(RESOURCES, Numeric, "Step 2: Enter total resources amount."),
            FieldSpec::optional(DEPENDENT_CARE_COSTS, Numeric),
            FieldSpec::optional(MEDICAL_EXPENSES, Numeric).inside(Element::MedicalExpensesQuestion),
            FieldSpec::optional(CHILD_SUPPORT, Numeric),
            FieldSpec::optional(RENT_OR_MORTGAGE, Numeric),
            FieldSpec::optional(HOMEOWNERS_INSURANCE_AND_TAXES, Numeric),
            FieldSpec::optional(UTILITY_ALLOWANCE, SingleChoice),
            FieldSpec::optional(UTILITY_COSTS, Numeric),
        ])
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.id == field_id)
    }

    pub fn is_required(&self, field_id: &str) -> bool {
        self.get(field_id).map(|spec| spec.required).unwrap_or(false)
    }

    pub fn kind(&self, field_id: &str) -> Option<FieldKind> {
        self.get(field_id).map(|spec| spec.kind)
    }

    pub fn prompt(&self, field_id: &str) -> Option<&'static str> {
        self.get(field_id).and_then(|spec| spec.prompt)
    }

    pub fn container(&self, field_id: &str) -> Option<Element> {
        self.get(field_id).and_then(|spec| spec.container)
    }

    /// Form-order position, used to find the first invalid control.
    pub fn position(&self, field_id: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.id == field_id)
    }

    pub fn required_in_form_order(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|spec| spec.required)
    }

    /// The fixed list of fields that must hold a number when filled in.
    pub fn numeric_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(|spec| spec.kind == FieldKind::Numeric)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
