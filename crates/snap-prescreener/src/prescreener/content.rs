//! Long-form text for the optional result tabs.

use serde::Serialize;

use super::domain::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultTab {
    Wic,
    KnowYourRights,
    Immigration,
    Abawd,
    AdvocateInfo,
}

impl ResultTab {
    pub const ALL: [ResultTab; 5] = [
        ResultTab::Wic,
        ResultTab::KnowYourRights,
        ResultTab::Immigration,
        ResultTab::Abawd,
        ResultTab::AdvocateInfo,
    ];

    /// Content key as published to the results page.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wic => "WIC_results_text",
            Self::KnowYourRights => "know_your_rights_text",
            Self::Immigration => "immigration_text",
            Self::Abawd => "ABAWD_text",
            Self::AdvocateInfo => "advocate_info_text",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }

    /// Optional result panel the tab lives in.
    pub const fn panel(self) -> Element {
        match self {
            Self::Wic => Element::WicResults,
            Self::KnowYourRights => Element::KnowYourRightsResults,
            Self::Immigration => Element::ImmigrationResults,
            Self::Abawd => Element::AbawdResults,
            Self::AdvocateInfo => Element::AdvocateResults,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Wic => "WIC",
            Self::KnowYourRights => "Know Your Rights",
            Self::Immigration => "Immigration",
            Self::Abawd => "Work Requirements",
            Self::AdvocateInfo => "Info for Advocates",
        }
    }

    /// Trusted HTML body of the tab.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Wic => WIC_TEXT,
            Self::KnowYourRights => KNOW_YOUR_RIGHTS_TEXT,
            Self::Immigration => IMMIGRATION_TEXT,
            Self::Abawd => ABAWD_TEXT,
            Self::AdvocateInfo => ADVOCATE_INFO_TEXT,
        }
    }
}

const WIC_TEXT: &str = "<h3>Women, Infants, and Children (WIC)</h3>\
<p>Households with someone who is pregnant, breastfeeding, or caring for a child under five may also qualify for WIC. \
WIC provides healthy foods, nutrition education, and breastfeeding support, and you can receive it at the same time as food stamps.</p>";

const KNOW_YOUR_RIGHTS_TEXT: &str = "<h3>Right to Apply</h3>\
<p>You have the right to apply for food stamps benefits. DSS cannot discourage you from applying or refuse to let you apply. \
DSS also must make translated materials available so that you can apply if you don't speak English.</p>\
<h3>Right to a Representative</h3>\
<p>You don't have to apply for food stamps yourself. You have the right to have an authorized representative apply on your behalf.</p>\
<h3>Right to Appeal</h3>\
<p>If your application for food stamps is denied, you have the right to appeal. You should receive a notice from DSS explaining their decision, \
and it will include an appeal deadline. You have 60 days from the date on this notice to let DSS know that you are appealing.</p>\
<p>You also have the right to appeal if your amount of benefits is reduced, your benefits are terminated, or if DSS takes some negative action against you.</p>\
<p>If you appeal, you and your representative have the right to see DSS' records about your food stamps claim beforehand.</p>\
<h3>Your Right to an Attorney</h3>\
<p>You have the right to an attorney to assist you with any food stamps appeal. If you receive a denial, termination, reduction, \
or other negative action from DSS, you can contact Legal Aid of North Carolina to apply for free legal assistance with your appeal.</p>";

const IMMIGRATION_TEXT: &str = "<p>Not everyone in the household has to be a citizen or have some type of legal immigration status in order to get food stamps, \
but anyone who is receiving the benefit must. If there are members of the household who do not have legal immigration status, \
DSS will count their income, but will not count them as part of the FNS household.</p>\
<h3>Types of \"Lawfully Present\" Non-Citizens Who Can Get Food Stamps:</h3>\
<ul>\
<li>Legal permanent residents (commonly known as \"green card\" holders)</li>\
<li>Recognized refugees and conditional entrants</li>\
<li>Those granted asylum in the U.S.</li>\
<li>Those with deportation withheld</li>\
<li>Non-citizens who are victims of domestic violence, and who have filed a Violence Against Women Act (VAWA) petition</li>\
<li>Certified victims of human trafficking</li>\
<li>Qualified parolees</li>\
</ul>\
<p>In some cases, immigrants may need to be living in the United States for five years before receiving FNS benefits. \
For more information, see <a href=\"https://policies.ncdhhs.gov/divisional/social-services/food-and-nutrition-services/policy-manuals/fss227.pdf\">Section 227 of the NCDHHS FNS Manual.</a></p>";

const ABAWD_TEXT: &str = "<h3>What Are Work Requirements and ABAWD?</h3>\
<p>Food stamps has two sets of work-related requirements: \"work requirements\" and \"ABAWD\" (Able-Bodied Adult Without Dependents) requirements. \
Beneficiaries generally satisfy both with the same activities, so this section refers to them both as \"work requirements.\"</p>\
<h3>Work requirements apply to members of food stamps households who meet the following conditions:</h3>\
<ul>\
<li>Are between the ages of 18 and 49</li>\
<li>Are deemed \"fit for employment\" by DSS</li>\
<li>Are not living in a food stamps household with a minor that they are responsible for</li>\
<li>Are not pregnant</li>\
<li>Are not covered by various exemptions</li>\
</ul>\
<h3>These work requirements are met if the individual does any of the following:</h3>\
<ul>\
<li>Works at least 20 hours per week</li>\
<li>Works an average of 80 hours in a month</li>\
<li>Participates in and complies with the requirements of a work program for 20 or more hours a week</li>\
</ul>\
<p><b>If you are denied food stamps because you have not met some work requirements and believe this is in error, \
you should contact Legal Aid of North Carolina using the link at the bottom of this page.</b></p>";

const ADVOCATE_INFO_TEXT: &str = "<p>\"Food stamps,\" or FNS (as it is called in NC), is our local variant of the federal program SNAP. \
Federal statute, regulation, and guidance all apply, as do state statute, regulations, and the FNS manual.</p>\
<h3>The FNS Manual</h3>\
<p>The FNS manual guides DSS caseworkers' day-to-day decisions on FNS applicants and beneficiaries. \
It should be your starting point, but by no means your end point, in diagnosing a question of law related to FNS.</p>\
<h4>Notable portions of the FNS Manual include:</h4>\
<ul>\
<li><a href=\"https://policies.ncdhhs.gov/divisional/social-services/food-and-nutrition-services/policy-manuals/fns-300-sources-of-income.pdf\">FNS 300</a>, which details how various sources of income are counted</li>\
<li><a href=\"https://policies.ncdhhs.gov/divisional/social-services/food-and-nutrition-services/policy-manuals/fns-350-whose-income-is-counted.pdf\">FNS 350</a>, which details whose income is counted</li>\
<li><a href=\"https://policies.ncdhhs.gov/divisional/social-services/food-and-nutrition-services/policy-manuals/fss710.pdf\">FNS 710</a>, which governs administrative disqualification hearings</li>\
</ul>";
