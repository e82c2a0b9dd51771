mod client;
mod headers;
mod tests;
mod utils;

use crate::config::PortalConfig;
use crate::engine::SearchStrategy;
use crate::error::{PatrawlError, Result};
use crate::tools::form::{extract_form_state, FormState};
use crate::types::{RawDocument, SearchQuery, StrategyKind};
use async_trait::async_trait;
use reqwest::header::REFERER;
use reqwest::Client;
use url::Url;

/// Plain HTTP acquisition: fetch the form, replay its hidden state, submit
/// the query, return the results page.
///
/// Cheap and fast, but assumes static markup and no client-side gating.
/// When that assumption fails the error propagates to the engine, which
/// falls back to [`crate::tools::render::RenderingStrategy`].
pub struct TransportStrategy {
    client: Client,
    config: PortalConfig,
}

impl TransportStrategy {
    pub fn new(config: PortalConfig) -> Result<Self> {
        // Fail fast on unusable endpoints (e.g. a bad env override).
        Url::parse(&config.form_url)
            .map_err(|e| PatrawlError::Transport(format!("invalid form url: {e}")))?;
        Url::parse(&config.submit_url)
            .map_err(|e| PatrawlError::Transport(format!("invalid submit url: {e}")))?;

        let client = client::build_portal_client(config.timeout)?;
        Ok(Self { client, config })
    }

    /// GET the search form and return its body once it passes shape checks.
    async fn fetch_form(&self) -> Result<String> {
        let resp = self
            .client
            .get(&self.config.form_url)
            .headers(headers::portal_headers())
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        utils::validate_response(status, &body)
            .map_err(|reason| PatrawlError::Transport(format!("form page: {reason}")))?;
        Ok(body)
    }

    /// POST the merged form state + query and return the results page body.
    async fn submit_query(&self, state: FormState, query: &SearchQuery) -> Result<String> {
        let mut payload = state;
        payload.insert(self.config.query_field.clone(), query.term().to_string());
        payload.insert(
            self.config.search_type_field.clone(),
            self.config.search_type_value.clone(),
        );
        payload.insert(
            self.config.submit_field.clone(),
            self.config.submit_value.clone(),
        );

        let resp = self
            .client
            .post(&self.config.submit_url)
            .headers(headers::portal_headers())
            .header(REFERER, self.config.form_url.as_str())
            .form(&payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        utils::validate_response(status, &body)
            .map_err(|reason| PatrawlError::Transport(format!("results page: {reason}")))?;
        Ok(body)
    }
}

#[async_trait]
impl SearchStrategy for TransportStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Transport
    }

    async fn attempt(&self, query: &SearchQuery) -> Result<RawDocument> {
        let form_body = self.fetch_form().await?;
        let state = extract_form_state(&form_body);
        let results = self.submit_query(state, query).await?;
        Ok(RawDocument::new(results, StrategyKind::Transport))
    }
}
