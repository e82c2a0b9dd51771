use crate::{error::*, types::*};
use async_trait::async_trait;
use std::time::Instant;

/// One method of acquiring the results page for a query.
///
/// Implementations own their side effects (form submission, browser
/// navigation) and fail fast; retry and fallback belong to the [`Engine`].
#[async_trait]
pub trait SearchStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;
    async fn attempt(&self, query: &SearchQuery) -> Result<RawDocument>;
}

/// A successful acquisition plus the attempt trail that led to it.
#[derive(Debug)]
pub struct Acquisition {
    pub document: RawDocument,
    pub attempts: Vec<StrategyAttempt>,
}

/// Tries strategies in priority order, isolating failures per strategy.
///
/// Exactly one pass through the list per query: the first success wins and
/// skips the rest; exhaustion surfaces every attempt's failure reason.
/// Strategies run sequentially; they submit forms and drive navigations
/// against the same remote session, which is not safe to duplicate.
pub struct Engine {
    strategies: Vec<Box<dyn SearchStrategy>>,
}

impl Engine {
    pub fn new(strategies: Vec<Box<dyn SearchStrategy>>) -> Self {
        Self { strategies }
    }

    pub async fn acquire(&self, query: &SearchQuery) -> Result<Acquisition> {
        let mut attempts: Vec<StrategyAttempt> = Vec::new();

        for strategy in &self.strategies {
            if let Some(hint) = query.strategy() {
                if strategy.kind() != hint {
                    continue;
                }
            }

            let start = Instant::now();
            match strategy.attempt(query).await {
                Ok(document) => {
                    attempts.push(StrategyAttempt::success(
                        strategy.kind(),
                        start.elapsed().as_millis() as u64,
                    ));
                    return Ok(Acquisition { document, attempts });
                }
                Err(e) => {
                    attempts.push(StrategyAttempt::failure(
                        strategy.kind(),
                        &e,
                        start.elapsed().as_millis() as u64,
                    ));
                }
            }
        }

        Err(PatrawlError::AllStrategiesFailed { attempts })
    }
}
