//! HTML produced for the results page and the error presentation.
//!
//! Every function here is pure. Text that originates from the engine or the
//! jurisdiction table is escaped; built-in copy and validation messages are
//! trusted markup.

mod errors;
mod explanation;
mod html;
mod results;

pub use errors::{
    error_summary_html, field_error_html, number_alert_html, Announcement, NUMBER_ALERT_MESSAGE,
};
pub use explanation::{eligibility_explanation_to_html, income_explanation_to_html, RenderError};
pub use html::{escape_html, format_amount};
pub use results::{
    options_html, response_errors_to_html, result_to_html, APPLY_TITLE, OTHER_RESOURCES_TITLE,
};
