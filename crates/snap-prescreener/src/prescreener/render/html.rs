/// Escapes text destined for element content or a quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Dollar amount as the engine reported it: no forced decimals, so `200.0`
/// prints as `200` and `12.5` as `12.5`.
pub fn format_amount(amount: f64) -> String {
    format!("{amount}")
}

/// One `<p>` per explanation paragraph.
pub(crate) fn paragraphs(explanation: &[String]) -> String {
    explanation
        .iter()
        .map(|paragraph| format!("<p>{}</p>", escape_html(paragraph)))
        .collect()
}
