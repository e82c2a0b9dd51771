mod prompt;
mod utils;

use crate::error::{PatrawlError, Result};
use crate::tools::completion::Completion;
use crate::types::{RawDocument, SearchResult};
use chrono::Utc;

/// Turns a results-page document into a validated [`SearchResult`].
///
/// Performs the following steps in order:
/// 1. Build the fixed extraction instruction for the query term
/// 2. Submit instruction + HTML to the injected completion client
/// 3. Sanitize the reply down to its JSON span
/// 4. Validate and normalize entries (mandatory fields, sentinel fill)
/// 5. Assemble the result, preserving the model's record order
pub struct ExtractionPipeline {
    completion: Box<dyn Completion>,
    source: String,
}

impl ExtractionPipeline {
    pub fn new(completion: Box<dyn Completion>, source: impl Into<String>) -> Self {
        Self {
            completion,
            source: source.into(),
        }
    }

    pub async fn extract(&self, document: &RawDocument, term: &str) -> Result<SearchResult> {
        let instruction = prompt::extraction_prompt(term);
        let user = prompt::user_message(&instruction, &document.html);

        let reply = self.completion.complete(prompt::SYSTEM_PROMPT, &user).await?;

        let sanitized = utils::sanitize_json_response(&reply);
        let value: serde_json::Value =
            serde_json::from_str(&sanitized).map_err(|e| PatrawlError::Parse {
                detail: e.to_string(),
                sanitized_len: sanitized.len(),
            })?;

        let records = utils::normalize_records(&value, term, &self.source, Utc::now());

        Ok(SearchResult {
            success: true,
            search_term: term.to_string(),
            total_results: records.len(),
            timestamp: Utc::now(),
            results: records,
        })
    }
}
