use crate::types::StrategyAttempt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatrawlError>;

/// Crate-wide error type.
///
/// Only `AllStrategiesFailed`, `Parse` and `Completion` cross the crate
/// boundary as query failures; `Transport` and `Automation` are caught by the
/// engine and converted into fallback decisions.
#[derive(Debug, Error)]
pub enum PatrawlError {
    #[error("invalid query: search term must be a non-empty string")]
    InvalidQuery,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("automation failure: {0}")]
    Automation(String),

    #[error("all strategies failed: {}", format_attempts(.attempts))]
    AllStrategiesFailed { attempts: Vec<StrategyAttempt> },

    #[error("model response is not valid JSON ({detail}; sanitized length {sanitized_len})")]
    Parse { detail: String, sanitized_len: usize },

    #[error("completion request failed: {0}")]
    Completion(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

impl PatrawlError {
    /// Stable machine-checkable kind, used in the `SearchFailure` envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            PatrawlError::InvalidQuery => "invalid_query",
            PatrawlError::Transport(_) => "transport_error",
            PatrawlError::Automation(_) => "automation_error",
            PatrawlError::AllStrategiesFailed { .. } => "all_strategies_failed",
            PatrawlError::Parse { .. } => "parse_error",
            PatrawlError::Completion(_) => "completion_error",
            PatrawlError::Storage(_) => "storage_error",
        }
    }
}

fn format_attempts(attempts: &[StrategyAttempt]) -> String {
    if attempts.is_empty() {
        return "no strategies attempted".to_string();
    }
    attempts
        .iter()
        .map(|a| {
            format!(
                "{}: {}",
                a.strategy,
                a.error.as_deref().unwrap_or("unknown failure")
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for PatrawlError {
    fn from(e: reqwest::Error) -> Self {
        PatrawlError::Transport(e.to_string())
    }
}
impl From<std::io::Error> for PatrawlError {
    fn from(e: std::io::Error) -> Self {
        PatrawlError::Storage(e.to_string())
    }
}
