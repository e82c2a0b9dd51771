use crate::error::{PatrawlError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed placeholder for optional record fields that the source did not
/// provide. Never serialized as empty string or null.
pub const NOT_AVAILABLE: &str = "N/A";

/// One distinct method of acquiring the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Plain HTTP request/response: fetch form, replay state, submit query.
    Transport,
    /// Headless browser: fill the form in a rendered page and read the DOM.
    Rendering,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Rendering => "rendering",
        }
    }
}

/// A caller-issued search. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    term: String,
    strategy: Option<StrategyKind>,
}

impl SearchQuery {
    /// Build a query from a free-text term. Rejects empty/whitespace terms.
    pub fn new(term: &str) -> Result<Self> {
        let term = term.trim();
        if term.is_empty() {
            return Err(PatrawlError::InvalidQuery);
        }
        Ok(Self {
            term: term.to_string(),
            strategy: None,
        })
    }

    /// Restrict the run to a single strategy instead of the full fallback list.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn strategy(&self) -> Option<StrategyKind> {
        self.strategy
    }
}

/// An acquired results page plus provenance.
#[derive(Debug, Clone, Serialize)]
pub struct RawDocument {
    pub html: String,
    pub produced_by: StrategyKind,
    pub fetched_at: DateTime<Utc>,
}

impl RawDocument {
    pub fn new(html: String, produced_by: StrategyKind) -> Self {
        Self {
            html,
            produced_by,
            fetched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Success,
    Failure,
}

/// One strategy execution record, retained for diagnostics and logging.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyAttempt {
    pub strategy: &'static str,
    pub outcome: AttemptOutcome,
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl StrategyAttempt {
    pub fn success(kind: StrategyKind, elapsed_ms: u64) -> Self {
        Self {
            strategy: kind.name(),
            outcome: AttemptOutcome::Success,
            error: None,
            elapsed_ms,
        }
    }

    pub fn failure(kind: StrategyKind, error: &PatrawlError, elapsed_ms: u64) -> Self {
        Self {
            strategy: kind.name(),
            outcome: AttemptOutcome::Failure,
            error: Some(error.to_string()),
            elapsed_ms,
        }
    }
}

/// One structured result row.
///
/// `patent_number` and `title` are guaranteed non-empty after validation;
/// every other field is a trimmed non-empty string or [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub patent_number: String,
    pub title: String,
    pub holder: String,
    pub filing_date: String,
    pub status: String,
    pub source: String,
    pub search_term: String,
    pub extracted_at: DateTime<Utc>,
}

/// The unit returned to the caller. Immutable once constructed; record order
/// is first-seen order from the source, never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub success: bool,
    pub search_term: String,
    pub total_results: usize,
    pub timestamp: DateTime<Utc>,
    pub results: Vec<ExtractedRecord>,
}

/// Total-failure envelope, serialized verbatim by the HTTP layer on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFailure {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl SearchFailure {
    pub fn from_error(err: &PatrawlError) -> Self {
        Self {
            success: false,
            error: err.kind().to_string(),
            message: err.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
