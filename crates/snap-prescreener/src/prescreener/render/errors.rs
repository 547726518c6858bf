use crate::prescreener::validation::ValidationError;

/// Body of the live alert shown while a number field holds letters.
pub const NUMBER_ALERT_MESSAGE: &str = "<b>Please enter a number.</b>";

/// How a screen reader announces an inline alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// Written during submission; the summary carries the announcement.
    Silent,
    /// Written while typing; read out immediately.
    Assertive,
}

impl Announcement {
    const fn role(self) -> &'static str {
        match self {
            Self::Silent => "",
            Self::Assertive => "alert",
        }
    }

    const fn aria_live(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Assertive => "assertive",
        }
    }
}

/// Slim error alert placed next to a field. `message` is trusted markup.
pub fn field_error_html(message: &str, announcement: Announcement) -> String {
    format!(
        r#"<div class="usa-alert usa-alert--error usa-alert--slim"><div class="usa-alert__body" role="{}" aria-live="{}"><em class="usa-alert__text">{}</em></div></div>"#,
        announcement.role(),
        announcement.aria_live(),
        message
    )
}

/// Inline alert for a field whose value is not a number.
pub fn number_alert_html() -> String {
    field_error_html(NUMBER_ALERT_MESSAGE, Announcement::Assertive)
}

/// Summary block listing every error. An empty list yields an empty summary.
pub fn error_summary_html(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let count = errors.len();
    let (verb, noun) = if count == 1 {
        ("was", "error")
    } else {
        ("were", "errors")
    };

    let items: String = errors
        .iter()
        .map(|error| format!("<li><p>{}</p></li>", error.message))
        .collect();

    format!(
        r#"<p class="error-total"> We could not estimate your benefit amount because there {verb} {count} {noun}.</p><p>Please review your answers and correct the following:</p><ul class="usa-list">{items}</ul>"#
    )
}
