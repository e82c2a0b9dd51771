mod browser;
mod tests;

use crate::config::{PortalConfig, RenderConfig};
use crate::engine::SearchStrategy;
use crate::error::{PatrawlError, Result};
use crate::types::{RawDocument, SearchQuery, StrategyKind};
use async_trait::async_trait;
use browser::BrowserSession;
use chromiumoxide::error::CdpError;
use std::future::Future;
use std::time::Duration;

/// Headless-browser acquisition: fill and submit the search form in a
/// rendered page, then read the resulting DOM.
///
/// The expensive fallback for when the portal's script/cookie gating defeats
/// the transport strategy. One browser process per attempt, torn down on
/// every exit path.
pub struct RenderingStrategy {
    config: PortalConfig,
    render: RenderConfig,
}

impl RenderingStrategy {
    pub fn new(config: PortalConfig, render: RenderConfig) -> Self {
        Self { config, render }
    }

    async fn drive(&self, session: &BrowserSession, query: &SearchQuery) -> Result<String> {
        let timeout = self.render.timeout;

        let page = step(
            timeout,
            "open search form",
            session.browser.new_page(self.config.form_url.as_str()),
        )
        .await?;
        step(timeout, "form navigation", async {
            page.wait_for_navigation().await.map(|_| ())
        })
        .await?;

        let query_selector = input_selector(&self.config.query_field);
        step(timeout, "type query term", async {
            page.find_element(query_selector.as_str())
                .await?
                .click()
                .await?
                .type_str(query.term())
                .await
                .map(|_| ())
        })
        .await?;

        let select = select_option_script(
            &self.config.search_type_field,
            &self.config.search_type_value,
        );
        step(timeout, "select basic search", async {
            page.evaluate(select).await.map(|_| ())
        })
        .await?;

        let submit_selector = input_selector(&self.config.submit_field);
        step(timeout, "submit search", async {
            page.find_element(submit_selector.as_str())
                .await?
                .click()
                .await
                .map(|_| ())
        })
        .await?;
        step(timeout, "results navigation", async {
            page.wait_for_navigation().await.map(|_| ())
        })
        .await?;

        step(timeout, "read rendered document", page.content()).await
    }
}

#[async_trait]
impl SearchStrategy for RenderingStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Rendering
    }

    async fn attempt(&self, query: &SearchQuery) -> Result<RawDocument> {
        let session = BrowserSession::launch(&self.render).await?;

        // No `?` between launch and close: the session must be torn down on
        // the error path as well.
        let outcome = self.drive(&session, query).await;
        session.close().await;

        let html = outcome?;
        Ok(RawDocument::new(html, StrategyKind::Rendering))
    }
}

/// Bound one navigation/interaction step and map its failure.
async fn step<T, F>(timeout: Duration, what: &str, fut: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, CdpError>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(PatrawlError::Automation(format!("{what}: {e}"))),
        Err(_) => Err(PatrawlError::Automation(format!(
            "{what} timed out after {}ms",
            timeout.as_millis()
        ))),
    }
}

fn input_selector(field: &str) -> String {
    format!("input[name=\"{field}\"]")
}

/// Set a select's value and fire a change event, matching what a real user
/// interaction would dispatch to the portal's inline handlers.
fn select_option_script(field: &str, value: &str) -> String {
    format!(
        r#"(() => {{
  const el = document.querySelector('select[name="{field}"]');
  if (el) {{
    el.value = '{value}';
    el.dispatchEvent(new Event('change', {{ bubbles: true }}));
  }}
}})()"#
    )
}
