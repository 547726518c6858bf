use super::html::{escape_html, paragraphs};
use crate::prescreener::engine::{EligibilityFactor, FactorKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("eligibility response has no amount factor")]
    MissingAmountFactor,
}

/// Factors ordered by `sort_order`. Ties keep their response order.
fn sorted(factors: &[EligibilityFactor]) -> Vec<&EligibilityFactor> {
    let mut ordered: Vec<&EligibilityFactor> = factors.iter().collect();
    ordered.sort_by(|a, b| a.sort_order.total_cmp(&b.sort_order));
    ordered
}

/// "Why did I get this result?": each eligibility test with its pass/fail
/// badge, followed by the benefit amount section.
pub fn eligibility_explanation_to_html(
    factors: &[EligibilityFactor],
) -> Result<String, RenderError> {
    let ordered = sorted(factors);
    let mut html = String::new();

    for test in ordered.iter().filter(|factor| factor.kind == FactorKind::Test) {
        let passed = test.result.unwrap_or(false);
        let (class, words) = if passed {
            ("pass-green", "Pass")
        } else {
            ("fail-red", "Fail")
        };
        html.push_str(&format!(
            r#"<h3>{}: <span class="{}">{}</span></h3>"#,
            escape_html(&test.name),
            class,
            words
        ));
        html.push_str(&paragraphs(&test.explanation));
    }

    let amount = ordered
        .iter()
        .find(|factor| factor.kind == FactorKind::Amount)
        .ok_or(RenderError::MissingAmountFactor)?;
    html.push_str(&format!("<h2>{}</h2>", escape_html(&amount.name)));
    html.push_str(&paragraphs(&amount.explanation));

    Ok(html)
}

/// "How are gross and net income calculated?": income steps in order.
pub fn income_explanation_to_html(factors: &[EligibilityFactor]) -> String {
    sorted(factors)
        .into_iter()
        .filter(|factor| factor.kind == FactorKind::Income)
        .map(|factor| {
            format!(
                "<h3>{}</h3>{}",
                escape_html(&factor.name),
                paragraphs(&factor.explanation)
            )
        })
        .collect()
}
