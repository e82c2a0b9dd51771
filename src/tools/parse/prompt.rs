/// System instruction for the completion service.
pub(crate) const SYSTEM_PROMPT: &str =
    "You are an expert HTML parser. Return only valid JSON.";

/// Build the extraction instruction for a search term.
///
/// Deterministic given the same term: field list, ordering and the
/// empty-result clause are fixed, so repeated runs produce the same prompt.
pub(crate) fn extraction_prompt(term: &str) -> String {
    format!(
        "Parse this patent search results HTML and extract structured data.\n\
         Search term: \"{term}\"\n\
         \n\
         Extract each patent with:\n\
         - patent_number (número da patente)\n\
         - title (título/nome da patente)\n\
         - holder (titular/depositante)\n\
         - filing_date (data de depósito)\n\
         - status (situação da patente)\n\
         \n\
         Return as JSON array. If no results found, return empty array."
    )
}

/// Assemble the user message: instruction, raw HTML context, and a closing
/// reminder that keeps chatty models from wrapping the JSON in prose.
pub(crate) fn user_message(prompt: &str, html: &str) -> String {
    format!("{prompt}\n\nHTML: {html}\n\nReturn only valid JSON, no additional text.")
}
