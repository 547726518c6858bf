use serde::{Deserialize, Serialize};

/// Radio value for an affirmative answer.
pub const YES: &str = "true";
/// Radio value for a negative answer.
pub const NO: &str = "false";

/// Page elements whose visibility the prescreener controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    PrescreenerForm,
    CitizenshipInfoBox,
    IneligibleImmigrationQuestion,
    ImmigrationResults,
    IneligibleDisqualifiedQuestion,
    MedicalExpensesQuestion,
    AbawdInfoBox,
    AbawdResults,
    WicInfoBox,
    WicResults,
    AdvocateResults,
    KnowYourRightsResults,
    ResultsSection,
    ServerErrorMessages,
}

impl Element {
    pub const ALL: [Element; 14] = [
        Element::PrescreenerForm,
        Element::CitizenshipInfoBox,
        Element::IneligibleImmigrationQuestion,
        Element::ImmigrationResults,
        Element::IneligibleDisqualifiedQuestion,
        Element::MedicalExpensesQuestion,
        Element::AbawdInfoBox,
        Element::AbawdResults,
        Element::WicInfoBox,
        Element::WicResults,
        Element::AdvocateResults,
        Element::KnowYourRightsResults,
        Element::ResultsSection,
        Element::ServerErrorMessages,
    ];

    /// DOM id of the element in the prescreener page.
    pub const fn id(self) -> &'static str {
        match self {
            Self::PrescreenerForm => "prescreener-form",
            Self::CitizenshipInfoBox => "citizenship_info_box",
            Self::IneligibleImmigrationQuestion => "ineligible_immigration_question",
            Self::ImmigrationResults => "optional-immigration",
            Self::IneligibleDisqualifiedQuestion => "ineligible_disqualified_question",
            Self::MedicalExpensesQuestion => "medical_expenses_for_elderly_or_disabled_question",
            Self::AbawdInfoBox => "abawd_info_box",
            Self::AbawdResults => "optional-ABAWD",
            Self::WicInfoBox => "WIC_info_box",
            Self::WicResults => "optional-WIC",
            Self::AdvocateResults => "optional-advocate",
            Self::KnowYourRightsResults => "optional-know-your-rights",
            Self::ResultsSection => "results-section",
            Self::ServerErrorMessages => "server-error-messages",
        }
    }

    /// Everything except the form itself starts out hidden.
    pub const fn hidden_initially(self) -> bool {
        !matches!(self, Self::PrescreenerForm)
    }
}

/// Containers whose HTML content is rewritten by the prescreener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    ErrorsHeader,
    Results,
    EligibilityExplanation,
    IncomeExplanation,
    ServerErrorMessages,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::ErrorsHeader,
        Region::Results,
        Region::EligibilityExplanation,
        Region::IncomeExplanation,
        Region::ServerErrorMessages,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::ErrorsHeader => "errors-header",
            Self::Results => "results",
            Self::EligibilityExplanation => "why-did-i-get-this-result",
            Self::IncomeExplanation => "how-are-gross-and-net-income-calculated",
            Self::ServerErrorMessages => "server-error-messages",
        }
    }
}

/// Why the visitor is using the prescreener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    Advocate,
    LegalAidPartner,
    GeneralPublic,
}

impl Identity {
    pub const fn value(self) -> &'static str {
        match self {
            Self::Advocate => "advocate",
            Self::LegalAidPartner => "legal_aid_partner",
            Self::GeneralPublic => "general_public",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        match raw {
            "advocate" => Some(Self::Advocate),
            "legal_aid_partner" => Some(Self::LegalAidPartner),
            "general_public" => Some(Self::GeneralPublic),
            _ => None,
        }
    }

    /// Advocates and legal-aid partners get the advocate results panel.
    pub const fn sees_advocate_results(self) -> bool {
        matches!(self, Self::Advocate | Self::LegalAidPartner)
    }
}
