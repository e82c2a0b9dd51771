mod tests;

use crate::selectors::HIDDEN_INPUT_SELECTOR;
use scraper::Html;
use std::collections::BTreeMap;

/// Hidden-field state a web form requires to be replayed programmatically.
///
/// Built fresh per query (the portal rotates session tokens), used for a
/// single follow-up request, then discarded.
pub type FormState = BTreeMap<String, String>;

/// Collect every hidden input's name/value pair from a search-form document.
///
/// Inputs lacking a name or a value are skipped; an empty key never enters
/// the map. An absent or malformed form yields an empty map rather than an
/// error; the follow-up submission then fails naturally and the engine
/// handles it as an ordinary strategy failure.
///
/// # Examples
/// ```
/// use patrawl::tools::form::extract_form_state;
///
/// let html = r#"<form>
///     <input type="hidden" name="ViewState" value="abc123">
///     <input type="hidden" name="orphan">
///     <input type="text" name="query" value="visible">
/// </form>"#;
/// let state = extract_form_state(html);
/// assert_eq!(state.get("ViewState").map(String::as_str), Some("abc123"));
/// assert_eq!(state.len(), 1);
/// ```
pub fn extract_form_state(html: &str) -> FormState {
    let doc = Html::parse_document(html);
    let mut state = FormState::new();

    for input in doc.select(&HIDDEN_INPUT_SELECTOR) {
        let name = input.value().attr("name").unwrap_or("");
        let value = input.value().attr("value").unwrap_or("");
        if name.is_empty() || value.is_empty() {
            continue;
        }
        state.insert(name.to_string(), value.to_string());
    }

    state
}
