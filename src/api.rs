use crate::config::{CompletionConfig, PortalConfig, RenderConfig};
use crate::engine::Engine;
use crate::error::Result;
use crate::tools::completion::{ChatClient, Completion};
use crate::tools::fetch::TransportStrategy;
use crate::tools::parse::ExtractionPipeline;
use crate::tools::render::RenderingStrategy;
use crate::types::*;
use std::time::Instant;

// Helper functions for logging - ignore errors to not break main operations
fn log_info(term: Option<&str>, event: &str, details: Option<&str>) {
    if let Ok(logger) = crate::services::log::ActivityLogger::new() {
        let _ = logger.info(term, event, details);
    }
}

fn log_error(term: Option<&str>, event: &str, details: Option<&str>) {
    if let Ok(logger) = crate::services::log::ActivityLogger::new() {
        let _ = logger.error(term, event, details);
    }
}

/* ------------ public facade components ------------ */

/// Everything one query execution needs: the strategy engine and the
/// extraction pipeline with its completion client.
///
/// Construct once and share across queries; each query still gets its own
/// form state, document and browser process.
pub struct Components {
    pub engine: Engine,
    pub pipeline: ExtractionPipeline,
}

impl Components {
    pub fn new(engine: Engine, pipeline: ExtractionPipeline) -> Self {
        Self { engine, pipeline }
    }

    /// Production wiring: transport-then-rendering against the configured
    /// portal, extraction through the configured completion endpoint.
    pub fn from_env() -> Result<Self> {
        let portal = PortalConfig::from_env();
        let render = RenderConfig::from_env();

        let engine = Engine::new(vec![
            Box::new(TransportStrategy::new(portal.clone())?),
            Box::new(RenderingStrategy::new(portal.clone(), render)),
        ]);

        let completion: Box<dyn Completion> =
            Box::new(ChatClient::new(CompletionConfig::from_env())?);
        let pipeline = ExtractionPipeline::new(completion, portal.source);

        Ok(Self::new(engine, pipeline))
    }
}

/* ------------ search entrypoints ------------ */

/// Search the portal for patents matching a free-text term.
///
/// Returns a well-formed [`SearchResult`] (possibly with zero records) or a
/// typed failure; strategy-level errors never surface directly.
pub async fn search(term: &str, components: &Components) -> Result<SearchResult> {
    let query = SearchQuery::new(term)?;
    search_with_query(&query, components).await
}

/// Like [`search`], with explicit control over the strategy hint.
pub async fn search_with_query(
    query: &SearchQuery,
    components: &Components,
) -> Result<SearchResult> {
    let start = Instant::now();

    let acquisition = match components.engine.acquire(query).await {
        Ok(acquisition) => acquisition,
        Err(e) => {
            let details = format!("failed in {}ms: {e}", start.elapsed().as_millis());
            log_error(Some(query.term()), "acquire", Some(&details));
            return Err(e);
        }
    };

    for attempt in &acquisition.attempts {
        match attempt.outcome {
            AttemptOutcome::Success => {
                let details = format!("succeeded in {}ms", attempt.elapsed_ms);
                log_info(Some(query.term()), attempt.strategy, Some(&details));
            }
            AttemptOutcome::Failure => {
                let details = format!(
                    "failed in {}ms: {}",
                    attempt.elapsed_ms,
                    attempt.error.as_deref().unwrap_or("unknown failure")
                );
                log_error(Some(query.term()), attempt.strategy, Some(&details));
            }
        }
    }

    let result = components
        .pipeline
        .extract(&acquisition.document, query.term())
        .await;
    let duration = start.elapsed();

    match &result {
        Ok(r) => {
            let details = format!(
                "{} results in {}ms",
                r.total_results,
                duration.as_millis()
            );
            log_info(Some(query.term()), "search", Some(&details));
        }
        Err(e) => {
            let details = format!("failed in {}ms: {e}", duration.as_millis());
            log_error(Some(query.term()), "search", Some(&details));
        }
    }

    result
}

/// Blocking wrapper over [`search`] for synchronous callers.
pub fn search_blocking(term: &str, components: &Components) -> Result<SearchResult> {
    crate::runtime::block_on(search(term, components))
}
