use crate::types::{ExtractedRecord, NOT_AVAILABLE};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Lazy static regex patterns
static FENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?\s*").expect("valid regex"));

/// Cut a model reply down to the JSON it is expected to contain.
///
/// Strips code fences, then slices from the first JSON-opening character
/// (`{` or `[`) to the last JSON-closing character (`}` or `]`). Idempotent:
/// sanitizing already-sanitized text returns it unchanged.
pub(crate) fn sanitize_json_response(raw: &str) -> String {
    let mut cleaned = FENCE_REGEX.replace_all(raw, "").into_owned();

    if let Some(start) = cleaned.find(['{', '[']) {
        cleaned.drain(..start);
    }
    if let Some(end) = cleaned.rfind(['}', ']']) {
        cleaned.truncate(end + 1);
    }

    cleaned.trim().to_string()
}

/// Filter and normalize parsed model output into records.
///
/// A non-array value means the model did not produce a result list; that is
/// data-quality noise, not an error, so it yields an empty set. Entries
/// without a non-empty patent number or title are dropped. Retained entries
/// get every field trimmed, missing optionals replaced by the sentinel, and
/// provenance stamped on. Output order is the model's order.
pub(crate) fn normalize_records(
    value: &Value,
    term: &str,
    source: &str,
    extracted_at: DateTime<Utc>,
) -> Vec<ExtractedRecord> {
    let entries = match value.as_array() {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| {
            let patent_number = required_field(entry, "patent_number")?;
            let title = required_field(entry, "title")?;
            Some(ExtractedRecord {
                patent_number,
                title,
                holder: optional_field(entry, "holder"),
                filing_date: optional_field(entry, "filing_date"),
                status: optional_field(entry, "status"),
                source: source.to_string(),
                search_term: term.to_string(),
                extracted_at,
            })
        })
        .collect()
}

/// Non-empty trimmed string, or `None` (drops the entry).
fn required_field(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Non-empty trimmed string, or the fixed sentinel.
fn optional_field(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
