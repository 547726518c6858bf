use super::html::{escape_html, format_amount};
use crate::prescreener::engine::EligibilityResponse;
use crate::prescreener::jurisdiction::{JurisdictionOptions, ResourceLink};

const RESULTS_HEADING: &str = r#"<h2 id="results-section-title">Results:</h2>"#;

const INELIGIBLE_TEXT: &str = "<p>You <strong>might not</strong> be eligible for SNAP benefits.</p>\
<p>This result is only an estimate based on your inputs, not an official application or decision. \
<strong>You can still apply for SNAP benefits</strong>.</p>";

const ELIGIBLE_TEXT: &str = "<p>You may be <b>eligible</b> for SNAP benefits.</p>";

const CLOSING_TEXT: &str = "<p>Click the tabs below for more information about your results and the food stamps program.</p>";

pub const APPLY_TITLE: &str = "Ways to apply:";
pub const OTHER_RESOURCES_TITLE: &str = "Other resources for food assistance:";

/// Headline result: eligibility wording, benefit amounts, and next-step links.
pub fn result_to_html(response: &EligibilityResponse, options: &JurisdictionOptions) -> String {
    let mut html = String::from(RESULTS_HEADING);

    if response.estimated_eligibility {
        html.push_str(ELIGIBLE_TEXT);
        html.push_str(&benefit_html(response));
        html.push_str(&options_html(&options.apply, APPLY_TITLE));
    } else {
        html.push_str(INELIGIBLE_TEXT);
        html.push_str(&options_html(&options.apply, APPLY_TITLE));
        html.push_str(&options_html(&options.other_resources, OTHER_RESOURCES_TITLE));
    }

    html.push_str(CLOSING_TEXT);
    html
}

fn benefit_html(response: &EligibilityResponse) -> String {
    let base = response.estimated_monthly_benefit;
    let mut html = format!(
        "<p>If you apply and are approved, your benefit may be ${} per month.</p>",
        format_amount(base)
    );

    if let Some(allotment) = response
        .emergency_allotment_estimated_benefit
        .filter(|allotment| *allotment != 0.0 && *allotment != base)
    {
        html.push_str(&format!(
            "<p>Due to the current pandemic, you could receive an additional ${} per month. \
             (This additional amount is temporary.)</p>",
            format_amount(allotment - base)
        ));
    }

    html
}

/// Titled list of links, each opening in a new tab. List order is kept.
pub fn options_html(links: &[ResourceLink], title: &str) -> String {
    let items: String = links
        .iter()
        .map(|link| {
            format!(
                r#"<li><a class="usa-link" href="{}" rel="noopener noreferrer" target="_blank">{}</a></li>"#,
                escape_html(&link.url),
                escape_html(&link.description)
            )
        })
        .collect();

    format!(
        r#"<p>{}</p><ul class="usa-list">{}</ul>"#,
        escape_html(title),
        items
    )
}

/// Engine-reported failures, one list item per message.
pub fn response_errors_to_html(errors: &[String]) -> String {
    let items: String = errors
        .iter()
        .map(|error| format!("<li>{}</li>", escape_html(error)))
        .collect();
    format!("<h1>Errors:</h1><ul>{items}</ul>")
}
