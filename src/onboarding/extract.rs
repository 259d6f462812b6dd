//! Locates a JSON object inside free-form model output.

/// Extract a candidate JSON object from text that may wrap it in a fenced
/// code block or surround it with commentary.
///
/// Tries, in order: a fenced block labeled `json` (``` or ~~~ delimiters,
/// label matched case-insensitively), then the span from the first `{` to
/// the last `}`. Returns `None` when neither exists.
///
/// The candidate is deliberately not validated here. Syntax and schema
/// checks happen in the normalizer, so "nothing JSON-shaped found" and
/// "JSON found but invalid" stay distinguishable failure modes.
pub fn extract_json_object(text: &str) -> Option<String> {
    let trimmed = text.trim();

    for delimiter in ["```", "~~~"] {
        if let Some(interior) = fenced_json_interior(trimmed, delimiter) {
            return Some(interior);
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}'))
        && start < end
    {
        return Some(trimmed[start..=end].to_string());
    }

    None
}

/// Interior of the first `<delimiter>json ... <delimiter>` block, if any.
fn fenced_json_interior(text: &str, delimiter: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with the original text.
    let label = format!("{delimiter}json");
    let start = text.to_ascii_lowercase().find(&label)?;
    let interior = &text[start + label.len()..];
    let end = interior.find(delimiter)?;
    Some(interior[..end].trim().to_string())
}
